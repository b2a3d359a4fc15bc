//! Service-calling effects for the list store.

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::services::{LoadHistoryService, LoadNewItemsService};
use crate::store::{Effect, StoreHandle};

use super::action::ListAction;
use super::reducer::ListReducer;

pub(super) fn load_history_effect(service: Arc<dyn LoadHistoryService>) -> Effect<ListReducer> {
    Box::new(move |store: StoreHandle<ListReducer>| {
        let mut updates = store.updates();
        Box::pin(async move {
            loop {
                let update = match updates.recv().await {
                    Ok(update) => update,
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(
                            "list history effect lagged, skipped {} update(s)",
                            skipped
                        );
                        continue;
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                };
                let count = match update.action {
                    ListAction::LoadHistory { count } => count,
                    _ => continue,
                };
                if update.state.is_loading {
                    // One page load at a time; a repeated command while
                    // loading is dropped, not queued.
                    continue;
                }
                let from_id = update.state.items.last().map(|item| item.id.clone());
                store.dispatch(ListAction::LoadHistoryStarted);
                match service.load_history(count, from_id.as_deref()).await {
                    Ok(page) => store.dispatch(ListAction::LoadHistorySucceeded {
                        items: page.items,
                        total_count: page.total_count,
                        has_more: page.has_more,
                    }),
                    Err(e) => store.dispatch(ListAction::LoadHistoryFailed {
                        message: e.to_string(),
                    }),
                }
            }
        })
    })
}

pub(super) fn load_new_items_effect(
    service: Arc<dyn LoadNewItemsService>,
) -> Effect<ListReducer> {
    Box::new(move |store: StoreHandle<ListReducer>| {
        let mut updates = store.updates();
        Box::pin(async move {
            loop {
                let update = match updates.recv().await {
                    Ok(update) => update,
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(
                            "list refresh effect lagged, skipped {} update(s)",
                            skipped
                        );
                        continue;
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                };
                if !matches!(update.action, ListAction::LoadNewItems) {
                    continue;
                }
                if update.state.is_refreshing {
                    continue;
                }
                // Nothing to refresh from until a first page has loaded.
                let from_id = match update.state.items.first() {
                    Some(item) => item.id.clone(),
                    None => continue,
                };
                store.dispatch(ListAction::LoadNewItemsStarted);
                match service.load_new_items(&from_id).await {
                    Ok(items) => store.dispatch(ListAction::LoadNewItemsSucceeded { items }),
                    Err(e) => store.dispatch(ListAction::LoadNewItemsFailed {
                        message: e.to_string(),
                    }),
                }
            }
        })
    })
}
