//! Base trait for store state.

/// Marker trait for state values held by a store.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to present the view)
/// - Comparable (PartialEq lets the runtime skip redundant state
///   notifications when a reduction changes nothing)
pub trait StoreState: Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static {}
