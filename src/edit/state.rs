use serde::{Deserialize, Serialize};

use crate::models::{DetailedItem, Status};
use crate::store::StoreState;

/// State of the request edit view.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EditState {
    /// Record under edit; `None` until the parent seeds it.
    pub item: Option<DetailedItem>,
    /// Candidate status picked in the details view; held separately from
    /// the record until confirmed or cancelled.
    pub new_status: Option<Status>,
    pub is_saving: bool,
    /// Last save completed successfully and no field changed since.
    pub saved: bool,
    pub error: Option<String>,
}

impl StoreState for EditState {}
