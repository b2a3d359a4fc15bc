use crate::details::DetailsStore;
use crate::edit::EditStore;
use crate::list::ListStore;
use crate::store::StoreState;

/// Which child view is presented.
///
/// Presentation only: a backgrounded child's effect pipeline keeps
/// running regardless of the current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    List,
    Details,
    Edit,
}

/// State of the composite requester store.
///
/// The list child exists before the composite store does and is never
/// replaced. Details and edit slots stay empty until a trigger installs
/// a child; installing over an occupied slot replaces the occupant.
#[derive(Debug, Clone, PartialEq)]
pub struct RequesterState {
    pub view_mode: ViewMode,
    pub list_store: ListStore,
    pub details_store: Option<DetailsStore>,
    pub edit_store: Option<EditStore>,
}

impl StoreState for RequesterState {}
