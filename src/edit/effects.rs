//! Service-calling effects for the edit store.

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::services::SaveEditionService;
use crate::store::{Effect, StoreHandle};

use super::action::EditAction;
use super::reducer::EditReducer;

pub(super) fn save_edition_effect(service: Arc<dyn SaveEditionService>) -> Effect<EditReducer> {
    Box::new(move |store: StoreHandle<EditReducer>| {
        let mut updates = store.updates();
        Box::pin(async move {
            loop {
                let update = match updates.recv().await {
                    Ok(update) => update,
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!("save effect lagged, skipped {} update(s)", skipped);
                        continue;
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                };
                if !matches!(update.action, EditAction::Save) {
                    continue;
                }
                if update.state.is_saving {
                    continue;
                }
                // Nothing to save before a seed arrives.
                let item = match update.state.item {
                    Some(item) => item,
                    None => continue,
                };
                store.dispatch(EditAction::SaveStarted);
                match service.save_edition(&item).await {
                    Ok(()) => store.dispatch(EditAction::SaveSucceeded),
                    Err(e) => store.dispatch(EditAction::SaveFailed {
                        message: e.to_string(),
                    }),
                }
            }
        })
    })
}
