//! Request edit store: field edits, candidate-status application, and the
//! save triad.

mod action;
mod effects;
mod reducer;
mod state;

use std::sync::Arc;

pub use action::EditAction;
pub use reducer::EditReducer;
pub use state::EditState;

use crate::services::SaveEditionService;
use crate::store::{StoreBuilder, StoreHandle};

pub type EditStore = StoreHandle<EditReducer>;

pub fn create_edit_store(save_edition: Arc<dyn SaveEditionService>) -> EditStore {
    StoreBuilder::new(EditState::default())
        .with_effect(effects::save_edition_effect(save_edition))
        .build("edit")
}
