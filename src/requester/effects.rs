//! Trigger-to-creation effects and the change-status tunnel.
//!
//! Each trigger effect follows the same shape: watch a child slot's
//! update stream, filter for one trigger variant, then on a match build
//! the new child, seed it, and dispatch the creation and view-switch
//! actions into the composite. Seeding happens strictly before the
//! creation action is published, so an observer that sees the new child
//! installed can rely on its state already reflecting the trigger
//! payload.
//!
//! Replacement semantics: if a slot of the triggered kind is occupied,
//! the occupant's effect scope is closed before the replacement is
//! installed, cancelling any of its in-flight service calls.

use std::sync::Arc;

use crate::details::{create_details_store, DetailsAction, DetailsReducer};
use crate::edit::{create_edit_store, EditAction, EditReducer};
use crate::list::ListAction;
use crate::models::DetailedItem;
use crate::services::{LoadDetailsService, SaveEditionService};
use crate::store::{ChildWatcher, Effect, StoreHandle, Tunnel};

use super::action::RequesterAction;
use super::reducer::RequesterReducer;
use super::state::{RequesterState, ViewMode};

/// Open an existing request from the list: create a details child seeded
/// with the selected summary.
pub(super) fn open_request_effect(
    load_details: Arc<dyn LoadDetailsService>,
) -> Effect<RequesterReducer> {
    Box::new(move |store: StoreHandle<RequesterReducer>| {
        let mut list_updates: ChildWatcher<RequesterReducer, _> =
            ChildWatcher::new(store.watch_state(), |s: &RequesterState| {
                Some(s.list_store.clone())
            });
        Box::pin(async move {
            while let Some(update) = list_updates.next_update().await {
                let summary = match update.action {
                    ListAction::OpenRequest(summary) => summary,
                    _ => continue,
                };
                if let Some(previous) = store.state().details_store {
                    previous.close();
                }
                let details = create_details_store(load_details.clone());
                tracing::debug!(
                    "requester: opening details {:?} for item {:?}",
                    details.id(),
                    summary.as_ref().map(|s| s.id.as_str())
                );
                // An empty seed still dispatches; the details reducer
                // decides what it means.
                details.dispatch(DetailsAction::LoadItem(summary));
                store.dispatch(RequesterAction::CreateDetails(details));
                store.dispatch(RequesterAction::SetViewMode(ViewMode::Details));
            }
        })
    })
}

/// Draft a new request from the list: create an edit child seeded with a
/// blank record of the requested service type.
pub(super) fn new_request_effect(
    save_edition: Arc<dyn SaveEditionService>,
) -> Effect<RequesterReducer> {
    Box::new(move |store: StoreHandle<RequesterReducer>| {
        let mut list_updates: ChildWatcher<RequesterReducer, _> =
            ChildWatcher::new(store.watch_state(), |s: &RequesterState| {
                Some(s.list_store.clone())
            });
        Box::pin(async move {
            while let Some(update) = list_updates.next_update().await {
                let service_type = match update.action {
                    ListAction::NewRequest { service_type } => service_type,
                    _ => continue,
                };
                if let Some(previous) = store.state().edit_store {
                    previous.close();
                }
                let edit = create_edit_store(save_edition.clone());
                tracing::debug!(
                    "requester: drafting new {:?} request in edit {:?}",
                    service_type,
                    edit.id()
                );
                edit.dispatch(EditAction::LoadEditItem(DetailedItem::empty(service_type)));
                store.dispatch(RequesterAction::CreateEdit(edit));
                store.dispatch(RequesterAction::SetViewMode(ViewMode::Edit));
            }
        })
    })
}

/// Edit the request shown in the details view: create an edit child
/// seeded with the viewed record.
pub(super) fn edit_request_effect(
    save_edition: Arc<dyn SaveEditionService>,
) -> Effect<RequesterReducer> {
    Box::new(move |store: StoreHandle<RequesterReducer>| {
        let mut details_updates: ChildWatcher<RequesterReducer, _> =
            ChildWatcher::new(store.watch_state(), |s: &RequesterState| {
                s.details_store.clone()
            });
        Box::pin(async move {
            while let Some(update) = details_updates.next_update().await {
                let item = match update.action {
                    DetailsAction::EditRequest(item) => item,
                    _ => continue,
                };
                if let Some(previous) = store.state().edit_store {
                    previous.close();
                }
                let edit = create_edit_store(save_edition.clone());
                tracing::debug!(
                    "requester: editing item {:?} in edit {:?}",
                    item.id,
                    edit.id()
                );
                edit.dispatch(EditAction::LoadEditItem(item));
                store.dispatch(RequesterAction::CreateEdit(edit));
                store.dispatch(RequesterAction::SetViewMode(ViewMode::Edit));
            }
        })
    })
}

/// Forward a status picked in the details view into the open edit view.
///
/// The details store never learns the edit vocabulary; while no edit
/// child is installed the forwarded action is dropped.
pub(super) fn change_status_tunnel() -> Tunnel<RequesterReducer, DetailsReducer, EditReducer> {
    Tunnel::new(
        |s: &RequesterState| s.details_store.clone(),
        |action: &DetailsAction| match action {
            DetailsAction::ChangeStatus(status) => Some(EditAction::LoadNewStatus(status.clone())),
            _ => None,
        },
        |s: &RequesterState| s.edit_store.clone(),
    )
}
