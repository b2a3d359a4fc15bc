use serde::{Deserialize, Serialize};

use crate::models::{RequestItem, ServiceType};
use crate::store::StoreAction;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ListAction {
    /// Load the next `count` items of history, continuing after the
    /// current last item.
    LoadHistory { count: usize },
    LoadHistoryStarted,
    LoadHistorySucceeded {
        items: Vec<RequestItem>,
        total_count: usize,
        has_more: bool,
    },
    LoadHistoryFailed { message: String },
    /// Fetch items newer than the current first item.
    LoadNewItems,
    LoadNewItemsStarted,
    LoadNewItemsSucceeded { items: Vec<RequestItem> },
    LoadNewItemsFailed { message: String },
    SetFilter { text: String },
    /// Show only items whose status system name matches exactly.
    FilterByStatus { system_name: String },
    /// Drop both filters. Guarded no-op when none is set.
    ClearFilters,
    /// User opened an item. The list does not react; the parent does.
    OpenRequest(Option<RequestItem>),
    /// User started drafting a new request. Parent-observed trigger.
    NewRequest { service_type: ServiceType },
}

impl StoreAction for ListAction {}
