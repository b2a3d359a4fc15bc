//! Composite requester store.
//!
//! Owns the three child stores and the active-view discriminator. The
//! list child is built before the composite itself; details and edit
//! children are created on demand by the trigger effects in response to
//! actions the children emit, without the children knowing the composite
//! exists.

mod action;
mod effects;
mod reducer;
mod state;

use std::sync::Arc;

pub use action::RequesterAction;
pub use reducer::RequesterReducer;
pub use state::{RequesterState, ViewMode};

use crate::list::create_list_store;
use crate::services::{
    LoadDetailsService, LoadHistoryService, LoadNewItemsService, SaveEditionService,
};
use crate::store::{StoreBuilder, StoreHandle};

pub type RequesterStore = StoreHandle<RequesterReducer>;

/// Service collaborators the requester wires into its stores.
#[derive(Clone)]
pub struct RequesterServices {
    pub load_history: Arc<dyn LoadHistoryService>,
    pub load_new_items: Arc<dyn LoadNewItemsService>,
    pub load_details: Arc<dyn LoadDetailsService>,
    pub save_edition: Arc<dyn SaveEditionService>,
}

/// Build the composite store.
///
/// The list child is constructed first, so the very first state the
/// composite publishes already carries a live `list_store`; details and
/// edit slots start empty.
pub fn create_requester_store(services: RequesterServices) -> RequesterStore {
    let list_store = create_list_store(services.load_history, services.load_new_items);
    StoreBuilder::new(RequesterState {
        view_mode: ViewMode::List,
        list_store,
        details_store: None,
        edit_store: None,
    })
    .with_effect(effects::open_request_effect(services.load_details))
    .with_effect(effects::new_request_effect(services.save_edition.clone()))
    .with_effect(effects::edit_request_effect(services.save_edition))
    .with_tunnel(effects::change_status_tunnel())
    .build("requester")
}
