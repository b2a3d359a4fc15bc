//! Request details store: loads the full record for one request and
//! surfaces the edit/change-status triggers.

mod action;
mod effects;
mod reducer;
mod state;

use std::sync::Arc;

pub use action::DetailsAction;
pub use reducer::DetailsReducer;
pub use state::DetailsState;

use crate::services::LoadDetailsService;
use crate::store::{StoreBuilder, StoreHandle};

pub type DetailsStore = StoreHandle<DetailsReducer>;

pub fn create_details_store(load_details: Arc<dyn LoadDetailsService>) -> DetailsStore {
    StoreBuilder::new(DetailsState::default())
        .with_effect(effects::load_details_effect(load_details))
        .build("details")
}
