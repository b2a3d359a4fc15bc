//! Cross-store action forwarding.

use super::effects::Effect;
use super::handle::StoreHandle;
use super::reducer::Reducer;
use super::watcher::ChildWatcher;

/// Declarative forwarding rule between two child stores of a parent.
///
/// Whenever the source child publishes an action that `map` translates,
/// the translated action is dispatched into the target child. Source and
/// target are both resolved from the parent's *current* state on every
/// delivery, so the rule follows replaced children and reaches a target
/// created long after the rule was declared. A missing target drops the
/// forwarded action silently: absence is a legitimate transient state
/// (that view is simply not open), not an error.
///
/// Declared once at parent construction via
/// [`StoreBuilder::with_tunnel`](super::StoreBuilder::with_tunnel); runs
/// inside the parent's effect scope, so closing the parent tears the rule
/// down with everything else.
pub struct Tunnel<R: Reducer, S: Reducer, T: Reducer> {
    source: Box<dyn Fn(&R::State) -> Option<StoreHandle<S>> + Send + Sync>,
    map: Box<dyn Fn(&S::Action) -> Option<T::Action> + Send + Sync>,
    target: Box<dyn Fn(&R::State) -> Option<StoreHandle<T>> + Send + Sync>,
}

impl<R: Reducer, S: Reducer, T: Reducer> Tunnel<R, S, T> {
    /// `map` doubles as the filter: returning `None` ignores the action.
    pub fn new(
        source: impl Fn(&R::State) -> Option<StoreHandle<S>> + Send + Sync + 'static,
        map: impl Fn(&S::Action) -> Option<T::Action> + Send + Sync + 'static,
        target: impl Fn(&R::State) -> Option<StoreHandle<T>> + Send + Sync + 'static,
    ) -> Self {
        Self {
            source: Box::new(source),
            map: Box::new(map),
            target: Box::new(target),
        }
    }

    pub(crate) fn into_effect(self) -> Effect<R> {
        let Self {
            source,
            map,
            target,
        } = self;
        Box::new(move |store: StoreHandle<R>| {
            let mut watcher: ChildWatcher<R, S> =
                ChildWatcher::new(store.watch_state(), source);
            Box::pin(async move {
                while let Some(update) = watcher.next_update().await {
                    if let Some(forwarded) = map(&update.action) {
                        match target(&store.state()) {
                            Some(resolved) => resolved.dispatch(forwarded),
                            // Target view not open: drop, by design unlogged.
                            None => {}
                        }
                    }
                }
            })
        })
    }
}
