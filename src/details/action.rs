use serde::{Deserialize, Serialize};

use crate::models::{DetailedItem, RequestItem, Status};
use crate::store::StoreAction;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DetailsAction {
    /// Seed dispatched by the parent right after this store is created.
    /// `None` means the trigger carried no item; the view stays empty.
    LoadItem(Option<RequestItem>),
    LoadStarted,
    LoadSucceeded(DetailedItem),
    LoadFailed { message: String },
    /// User wants to edit the viewed item. Parent-observed trigger.
    EditRequest(DetailedItem),
    /// User picked a new status. Tunneled into the edit store.
    ChangeStatus(Status),
}

impl StoreAction for DetailsAction {}
