//! Effect registration and the cancellation scope owning effect tasks.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use super::handle::StoreHandle;

/// Future driving one effect; spawned when the store is built.
pub type EffectFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// An effect: a closure that receives the store handle, sets up its stream
/// subscriptions, and returns the long-running future to spawn.
///
/// The closure runs synchronously while the store is being built. Subscribe
/// inside the closure (not inside the returned future) so the effect
/// observes every update published after construction, even before its task
/// is first polled.
pub type Effect<R> = Box<dyn FnOnce(StoreHandle<R>) -> EffectFuture + Send>;

/// Owns the tokio tasks spawned for a store's effects.
///
/// Closing is idempotent: the first call aborts every attached task and
/// marks the scope closed. A task attached after close is aborted on the
/// spot.
pub(crate) struct EffectScope {
    closed: AtomicBool,
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl EffectScope {
    pub(crate) fn new() -> Self {
        Self {
            closed: AtomicBool::new(false),
            tasks: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn attach(&self, task: JoinHandle<()>) {
        let mut tasks = self.tasks.lock();
        if self.closed.load(Ordering::SeqCst) {
            task.abort();
            return;
        }
        tasks.push(task);
    }

    /// Abort all attached tasks. Returns true on the first close.
    pub(crate) fn close(&self) -> bool {
        if self.closed.swap(true, Ordering::SeqCst) {
            return false;
        }
        let drained: Vec<JoinHandle<()>> = std::mem::take(&mut *self.tasks.lock());
        for task in drained {
            task.abort();
        }
        true
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}
