use serde::{Deserialize, Serialize};

use crate::models::{DetailedItem, Status};
use crate::store::StoreAction;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditAction {
    /// Seed dispatched by the parent right after this store is created.
    LoadEditItem(DetailedItem),
    /// Candidate status, usually tunneled from the details store. Stored
    /// as a pending candidate; ignored until an item is loaded, and when
    /// it matches the item's current status or the candidate already set.
    LoadNewStatus(Status),
    /// Discard the pending candidate status.
    CancelNewStatus,
    /// User abandoned the edit. The edit store does not react; the parent
    /// or UI layer does.
    CancelEdition,
    SetSubject(String),
    SetDescription(String),
    Save,
    SaveStarted,
    SaveSucceeded,
    SaveFailed { message: String },
}

impl StoreAction for EditAction {}
