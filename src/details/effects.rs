//! Service-calling effects for the details store.

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::services::LoadDetailsService;
use crate::store::{Effect, StoreHandle};

use super::action::DetailsAction;
use super::reducer::DetailsReducer;

/// Follows a seed with a full load of the record.
pub(super) fn load_details_effect(service: Arc<dyn LoadDetailsService>) -> Effect<DetailsReducer> {
    Box::new(move |store: StoreHandle<DetailsReducer>| {
        let mut updates = store.updates();
        Box::pin(async move {
            loop {
                let update = match updates.recv().await {
                    Ok(update) => update,
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(
                            "details load effect lagged, skipped {} update(s)",
                            skipped
                        );
                        continue;
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                };
                let summary = match update.action {
                    DetailsAction::LoadItem(Some(summary)) => summary,
                    _ => continue,
                };
                if update.state.is_loading {
                    continue;
                }
                store.dispatch(DetailsAction::LoadStarted);
                match service.load_details(&summary.id).await {
                    Ok(item) => store.dispatch(DetailsAction::LoadSucceeded(item)),
                    Err(e) => store.dispatch(DetailsAction::LoadFailed {
                        message: e.to_string(),
                    }),
                }
            }
        })
    })
}
