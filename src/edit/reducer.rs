use crate::store::Reducer;

use super::action::EditAction;
use super::state::EditState;

pub struct EditReducer;

impl Reducer for EditReducer {
    type State = EditState;
    type Action = EditAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            EditAction::LoadEditItem(item) => EditState {
                item: Some(item),
                new_status: None,
                is_saving: false,
                saved: false,
                error: None,
            },
            EditAction::LoadNewStatus(status) => {
                // No item loaded, or the status is already current (on the
                // record or as the candidate): identity no-op.
                let differs = state
                    .item
                    .as_ref()
                    .is_some_and(|item| item.status != status)
                    && state.new_status.as_ref() != Some(&status);
                if !differs {
                    return state;
                }
                EditState {
                    new_status: Some(status),
                    saved: false,
                    ..state
                }
            }
            EditAction::CancelNewStatus => {
                if state.new_status.is_none() {
                    state
                } else {
                    EditState {
                        new_status: None,
                        ..state
                    }
                }
            }
            EditAction::SetSubject(text) => {
                let mut next = state;
                if let Some(item) = next.item.as_mut() {
                    item.subject = text;
                    next.saved = false;
                }
                next
            }
            EditAction::SetDescription(text) => {
                let mut next = state;
                if let Some(item) = next.item.as_mut() {
                    item.description = text;
                    next.saved = false;
                }
                next
            }
            // Command and trigger; the save effect and the outer layer react.
            EditAction::Save | EditAction::CancelEdition => state,
            EditAction::SaveStarted => {
                if state.is_saving {
                    state
                } else {
                    EditState {
                        is_saving: true,
                        saved: false,
                        error: None,
                        ..state
                    }
                }
            }
            EditAction::SaveSucceeded => EditState {
                is_saving: false,
                saved: true,
                ..state
            },
            EditAction::SaveFailed { message } => EditState {
                is_saving: false,
                error: Some(message),
                ..state
            },
        }
    }
}
