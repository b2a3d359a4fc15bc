//! Store construction: initial state plus enhancers.

use super::effects::Effect;
use super::handle::StoreHandle;
use super::reducer::Reducer;
use super::tunnel::Tunnel;

const DEFAULT_UPDATE_CAPACITY: usize = 64;

/// Builds a store from an initial state and a set of enhancers.
///
/// Effects (and tunnels, which compile down to effects) are registered
/// here and spawned by [`build`](Self::build). Each effect closure runs
/// synchronously during `build`, before any action can be dispatched, so
/// subscriptions taken inside the closure observe every update the store
/// ever publishes.
pub struct StoreBuilder<R: Reducer> {
    initial: R::State,
    effects: Vec<Effect<R>>,
    update_capacity: usize,
}

impl<R: Reducer> StoreBuilder<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            initial,
            effects: Vec::new(),
            update_capacity: DEFAULT_UPDATE_CAPACITY,
        }
    }

    /// Register an effect to spawn when the store is built.
    pub fn with_effect(mut self, effect: Effect<R>) -> Self {
        self.effects.push(effect);
        self
    }

    /// Install a forwarding rule from one child store into another.
    pub fn with_tunnel<S, T>(self, tunnel: Tunnel<R, S, T>) -> Self
    where
        S: Reducer,
        T: Reducer,
    {
        self.with_effect(tunnel.into_effect())
    }

    /// Buffer size for the update stream. A receiver that falls further
    /// behind than this skips the missed updates (logged at warn level).
    pub fn update_capacity(mut self, capacity: usize) -> Self {
        self.update_capacity = capacity.max(1);
        self
    }

    /// Create the store and spawn its effect tasks.
    ///
    /// `name` identifies the store in logs. Must be called from within a
    /// tokio runtime.
    pub fn build(self, name: &'static str) -> StoreHandle<R> {
        let handle = StoreHandle::new(name, self.initial, self.update_capacity);
        let effect_count = self.effects.len();
        for effect in self.effects {
            let future = effect(handle.clone());
            handle.attach_effect_task(tokio::spawn(future));
        }
        tracing::debug!(
            "store {}#{:?}: built with {} effect(s)",
            name,
            handle.id(),
            effect_count
        );
        handle
    }
}
