//! Store handle: dispatch entry point and stream access.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::{broadcast, watch};

use super::effects::EffectScope;
use super::reducer::Reducer;

static NEXT_STORE_ID: AtomicU64 = AtomicU64::new(0);

/// Creation-ordered store identity.
///
/// Two handles to the same store compare equal; a replacement store of the
/// same kind gets a fresh id. Child-slot watchers use this to detect that a
/// slot now holds a different store and must resubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StoreId(u64);

impl StoreId {
    fn next() -> Self {
        Self(NEXT_STORE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// One dispatched action paired with the state it produced.
///
/// Effects filter on updates rather than bare actions: deciding whether to
/// react usually needs both what happened and the resulting state (e.g.
/// "start loading only if not already loading").
pub struct Update<R: Reducer> {
    pub action: R::Action,
    pub state: R::State,
}

impl<R: Reducer> Clone for Update<R> {
    fn clone(&self) -> Self {
        Self {
            action: self.action.clone(),
            state: self.state.clone(),
        }
    }
}

impl<R: Reducer> std::fmt::Debug for Update<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Update")
            .field("action", &self.action)
            .field("state", &self.state)
            .finish()
    }
}

pub(crate) struct StoreInner<R: Reducer> {
    pub(crate) id: StoreId,
    pub(crate) name: &'static str,
    /// Serializes reducer application so concurrent dispatchers see a
    /// total order of updates. Never held across an await.
    dispatch_lock: Mutex<()>,
    state_tx: watch::Sender<R::State>,
    update_tx: broadcast::Sender<Update<R>>,
    pub(crate) scope: EffectScope,
}

/// Cloneable handle to a store.
///
/// All clones refer to the same store; equality is store identity, not
/// state equality, which lets a handle live inside another store's state
/// without dragging that state's `PartialEq` through child states.
pub struct StoreHandle<R: Reducer> {
    inner: Arc<StoreInner<R>>,
}

impl<R: Reducer> StoreHandle<R> {
    pub(crate) fn new(
        name: &'static str,
        initial: R::State,
        update_capacity: usize,
    ) -> Self {
        let (state_tx, _) = watch::channel(initial);
        let (update_tx, _) = broadcast::channel(update_capacity);
        Self {
            inner: Arc::new(StoreInner {
                id: StoreId::next(),
                name,
                dispatch_lock: Mutex::new(()),
                state_tx,
                update_tx,
                scope: EffectScope::new(),
            }),
        }
    }

    /// Apply `action` through the reducer and publish the result.
    ///
    /// Runs synchronously: when this returns, the new state is visible via
    /// [`state`](Self::state) and the update has been handed to every
    /// subscribed receiver's buffer. The state watch is only notified when
    /// the reduction actually changed the state, so observers comparing by
    /// equality never wake up for no-op reductions.
    pub fn dispatch(&self, action: R::Action) {
        let _guard = self.inner.dispatch_lock.lock();
        let next = {
            let current = self.inner.state_tx.borrow().clone();
            R::reduce(current, action.clone())
        };
        tracing::trace!(
            "store {}#{:?}: dispatch {:?}",
            self.inner.name,
            self.inner.id,
            action
        );
        self.inner.state_tx.send_if_modified(|state| {
            if *state == next {
                false
            } else {
                *state = next.clone();
                true
            }
        });
        // No receivers is fine: updates are fire-and-forget.
        let _ = self.inner.update_tx.send(Update {
            action,
            state: next,
        });
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> R::State {
        self.inner.state_tx.borrow().clone()
    }

    /// Current-and-future state values, deduplicated by equality.
    pub fn watch_state(&self) -> watch::Receiver<R::State> {
        self.inner.state_tx.subscribe()
    }

    /// Updates published from this point on.
    ///
    /// Subscribe before spawning work that must not miss an update; the
    /// receiver buffers from subscription time.
    pub fn updates(&self) -> broadcast::Receiver<Update<R>> {
        self.inner.update_tx.subscribe()
    }

    pub fn id(&self) -> StoreId {
        self.inner.id
    }

    pub fn name(&self) -> &'static str {
        self.inner.name
    }

    /// Cancel this store's effect tasks.
    ///
    /// The state cell stays readable and dispatch keeps applying the
    /// reducer; only the effect pipeline dies. Idempotent.
    pub fn close(&self) {
        if self.inner.scope.close() {
            tracing::debug!("store {}#{:?}: closed", self.inner.name, self.inner.id);
        }
    }

    pub fn is_closed(&self) -> bool {
        self.inner.scope.is_closed()
    }

    pub(crate) fn attach_effect_task(&self, task: tokio::task::JoinHandle<()>) {
        self.inner.scope.attach(task);
    }
}

impl<R: Reducer> Clone for StoreHandle<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Reducer> PartialEq for StoreHandle<R> {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl<R: Reducer> Eq for StoreHandle<R> {}

impl<R: Reducer> std::fmt::Debug for StoreHandle<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreHandle")
            .field("name", &self.inner.name)
            .field("id", &self.inner.id)
            .field("closed", &self.inner.scope.is_closed())
            .finish()
    }
}
