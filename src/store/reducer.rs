//! Reducer trait: pure state transitions.

use super::action::StoreAction;
use super::state::StoreState;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen. It must be
/// a pure function: `(State, Action) -> State`. Side effects live in effect
/// tasks registered on the store, never here.
///
/// Implementors are unit structs used purely at the type level; the enum
/// match inside [`reduce`](Reducer::reduce) is the action-handler table.
pub trait Reducer: 'static {
    /// The state type this reducer operates on.
    type State: StoreState;

    /// The action type this reducer handles.
    type Action: StoreAction;

    /// Process an action and return the new state.
    ///
    /// Returning the input state unchanged is the supported way to ignore
    /// an action; the runtime detects the no-op and skips the state watch
    /// notification.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}
