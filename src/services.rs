//! Service collaborator interfaces.
//!
//! The stores only ever see these traits; transport, endpoints, and
//! payload formats live behind them. Tests substitute stubs.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{DetailedItem, RequestItem};

/// Failure reported by a service collaborator.
///
/// Stores translate this into an error action carrying the message; it
/// never propagates past the effect that made the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ServiceError {
    pub message: String,
}

impl ServiceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// One page of request history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryPage {
    pub items: Vec<RequestItem>,
    pub total_count: usize,
    pub has_more: bool,
}

/// Loads older requests, `count` at a time, continuing after `from_id`
/// when given.
#[async_trait]
pub trait LoadHistoryService: Send + Sync {
    async fn load_history(
        &self,
        count: usize,
        from_id: Option<&str>,
    ) -> Result<HistoryPage, ServiceError>;
}

/// Loads requests newer than `from_id`.
#[async_trait]
pub trait LoadNewItemsService: Send + Sync {
    async fn load_new_items(&self, from_id: &str) -> Result<Vec<RequestItem>, ServiceError>;
}

/// Loads the full record for one request.
#[async_trait]
pub trait LoadDetailsService: Send + Sync {
    async fn load_details(&self, id: &str) -> Result<DetailedItem, ServiceError>;
}

/// Persists an edited request.
#[async_trait]
pub trait SaveEditionService: Send + Sync {
    async fn save_edition(&self, item: &DetailedItem) -> Result<(), ServiceError>;
}
