//! Base trait for store actions.

/// Marker trait for actions dispatched into a store.
///
/// Actions represent:
/// - User input (open an item, edit a field)
/// - Service results (a load succeeded or failed)
/// - Another store's events forwarded through a tunnel
///
/// Actions are plain data and carry no behavior; reducers give them meaning.
pub trait StoreAction: Clone + std::fmt::Debug + Send + 'static {}
