use crate::models::DetailedItem;
use crate::store::Reducer;

use super::action::DetailsAction;
use super::state::DetailsState;

pub struct DetailsReducer;

impl Reducer for DetailsReducer {
    type State = DetailsState;
    type Action = DetailsAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            DetailsAction::LoadItem(Some(summary)) => DetailsState {
                item: Some(DetailedItem::from_summary(summary)),
                ..state
            },
            // An empty seed changes nothing; the view renders blank.
            DetailsAction::LoadItem(None) => state,
            DetailsAction::LoadStarted => {
                if state.is_loading {
                    state
                } else {
                    DetailsState {
                        is_loading: true,
                        error: None,
                        ..state
                    }
                }
            }
            DetailsAction::LoadSucceeded(item) => DetailsState {
                item: Some(item),
                is_loading: false,
                ..state
            },
            DetailsAction::LoadFailed { message } => DetailsState {
                is_loading: false,
                error: Some(message),
                ..state
            },
            // Triggers for the parent and the tunnel; nothing changes here.
            DetailsAction::EditRequest(_) | DetailsAction::ChangeStatus(_) => state,
        }
    }
}
