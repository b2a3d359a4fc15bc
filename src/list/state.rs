use serde::{Deserialize, Serialize};

use crate::models::RequestItem;
use crate::store::StoreState;

/// State of the request list view.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListState {
    /// Loaded requests, newest first.
    pub items: Vec<RequestItem>,
    /// Server-side total, including pages not yet loaded.
    pub total_count: usize,
    pub has_more: bool,
    /// A history page load is in flight.
    pub is_loading: bool,
    /// A newer-items refresh is in flight.
    pub is_refreshing: bool,
    pub error: Option<String>,
    /// Free-text filter over subject and subtitle.
    pub filter: String,
    /// Exact-match filter on the status system name.
    pub status_filter: Option<String>,
}

impl StoreState for ListState {}

impl ListState {
    /// Items passing both filters: the status filter matches the status
    /// system name exactly, the text filter matches subject or subtitle
    /// case-insensitively. Unset filters show everything.
    pub fn visible_items(&self) -> Vec<&RequestItem> {
        let needle = self.filter.to_lowercase();
        self.items
            .iter()
            .filter(|item| match &self.status_filter {
                Some(system_name) => &item.status.system_name == system_name,
                None => true,
            })
            .filter(|item| {
                needle.is_empty()
                    || item.subject.to_lowercase().contains(&needle)
                    || item.subtitle.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
