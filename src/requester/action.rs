use crate::details::DetailsStore;
use crate::edit::EditStore;
use crate::store::StoreAction;

use super::state::ViewMode;

/// Composite-level actions.
///
/// The creation variants carry live store handles, so unlike leaf
/// actions they are not serializable data.
#[derive(Debug, Clone)]
pub enum RequesterAction {
    /// Idempotent: dispatching the current mode again is a guarded no-op.
    SetViewMode(ViewMode),
    /// Install a fully constructed, already seeded details child.
    CreateDetails(DetailsStore),
    /// Install a fully constructed, already seeded edit child.
    CreateEdit(EditStore),
}

impl StoreAction for RequesterAction {}
