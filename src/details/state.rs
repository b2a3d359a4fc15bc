use serde::{Deserialize, Serialize};

use crate::models::DetailedItem;
use crate::store::StoreState;

/// State of the request details view.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DetailsState {
    /// `None` until a seed arrives; a seeded summary is overlaid onto a
    /// blank record while the full load runs.
    pub item: Option<DetailedItem>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl StoreState for DetailsState {}
