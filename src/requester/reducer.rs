use crate::store::Reducer;

use super::action::RequesterAction;
use super::state::RequesterState;

pub struct RequesterReducer;

impl Reducer for RequesterReducer {
    type State = RequesterState;
    type Action = RequesterAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            RequesterAction::SetViewMode(mode) => {
                if state.view_mode == mode {
                    state
                } else {
                    RequesterState {
                        view_mode: mode,
                        ..state
                    }
                }
            }
            // Installation is pure replacement, last write wins. The
            // decision to create (and to retire a previous occupant)
            // lives in the trigger effects.
            RequesterAction::CreateDetails(details) => RequesterState {
                details_store: Some(details),
                ..state
            },
            RequesterAction::CreateEdit(edit) => RequesterState {
                edit_store: Some(edit),
                ..state
            },
        }
    }
}
