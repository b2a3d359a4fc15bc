//! Request list store: paginated history, newer-item refresh, filtering,
//! and the open/new triggers the parent store reacts to.

mod action;
mod effects;
mod reducer;
mod state;

use std::sync::Arc;

pub use action::ListAction;
pub use reducer::ListReducer;
pub use state::ListState;

use crate::services::{LoadHistoryService, LoadNewItemsService};
use crate::store::{StoreBuilder, StoreHandle};

pub type ListStore = StoreHandle<ListReducer>;

pub fn create_list_store(
    load_history: Arc<dyn LoadHistoryService>,
    load_new_items: Arc<dyn LoadNewItemsService>,
) -> ListStore {
    StoreBuilder::new(ListState::default())
        .with_effect(effects::load_history_effect(load_history))
        .with_effect(effects::load_new_items_effect(load_new_items))
        .build("list")
}
