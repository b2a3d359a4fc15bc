use crate::store::Reducer;

use super::action::ListAction;
use super::state::ListState;

pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListState;
    type Action = ListAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            // Commands and triggers leave state alone; effects and the
            // parent store react to them.
            ListAction::LoadHistory { .. }
            | ListAction::LoadNewItems
            | ListAction::OpenRequest(_)
            | ListAction::NewRequest { .. } => state,
            ListAction::LoadHistoryStarted => {
                if state.is_loading {
                    state
                } else {
                    ListState {
                        is_loading: true,
                        error: None,
                        ..state
                    }
                }
            }
            ListAction::LoadHistorySucceeded {
                items,
                total_count,
                has_more,
            } => {
                let mut next = state;
                next.items.extend(items);
                next.total_count = total_count;
                next.has_more = has_more;
                next.is_loading = false;
                next
            }
            ListAction::LoadHistoryFailed { message } => ListState {
                is_loading: false,
                error: Some(message),
                ..state
            },
            ListAction::LoadNewItemsStarted => {
                if state.is_refreshing {
                    state
                } else {
                    ListState {
                        is_refreshing: true,
                        error: None,
                        ..state
                    }
                }
            }
            ListAction::LoadNewItemsSucceeded { mut items } => {
                let mut next = state;
                items.append(&mut next.items);
                next.items = items;
                next.is_refreshing = false;
                next
            }
            ListAction::LoadNewItemsFailed { message } => ListState {
                is_refreshing: false,
                error: Some(message),
                ..state
            },
            ListAction::SetFilter { text } => ListState {
                filter: text,
                ..state
            },
            ListAction::FilterByStatus { system_name } => ListState {
                status_filter: Some(system_name),
                ..state
            },
            ListAction::ClearFilters => {
                if state.status_filter.is_none() && state.filter.is_empty() {
                    state
                } else {
                    ListState {
                        filter: String::new(),
                        status_filter: None,
                        ..state
                    }
                }
            }
        }
    }
}
