//! Following a child store slot across replacements.

use tokio::sync::{broadcast, watch};

use super::handle::{StoreHandle, StoreId, Update};
use super::reducer::Reducer;

/// Delivers updates from whichever child store currently occupies a slot
/// in a parent store's state.
///
/// The watcher resolves the slot against the parent's state stream before
/// every receive. While the slot holds the same store (by [`StoreId`]) the
/// subscription is kept, so no update is dropped or delivered twice; when
/// the slot changes to a different store the watcher resubscribes and
/// continues with the new occupant's updates. An empty slot parks the
/// watcher until the parent's state changes.
///
/// Resubscription happens when the watcher next observes the slot change,
/// not atomically with the installation: actions dispatched into a fresh
/// occupant before then are not delivered. Seed a new child *before*
/// installing it in the parent's state when the watcher must see the
/// child's post-seed updates.
pub struct ChildWatcher<R: Reducer, C: Reducer> {
    states: watch::Receiver<R::State>,
    select: Box<dyn Fn(&R::State) -> Option<StoreHandle<C>> + Send>,
    current: Option<(StoreId, broadcast::Receiver<Update<C>>)>,
}

enum Step<C: Reducer> {
    Update(Update<C>),
    Lagged(u64),
    SourceClosed,
    StateChanged,
    ParentGone,
}

impl<R: Reducer, C: Reducer> ChildWatcher<R, C> {
    /// Create a watcher over `states`, selecting the watched child with
    /// `select`.
    ///
    /// The initial occupant (if any) is subscribed immediately, so updates
    /// it publishes after this call are never missed, even before the
    /// first `next_update().await`.
    pub fn new(
        states: watch::Receiver<R::State>,
        select: impl Fn(&R::State) -> Option<StoreHandle<C>> + Send + 'static,
    ) -> Self {
        let mut watcher = Self {
            states,
            select: Box::new(select),
            current: None,
        };
        watcher.resolve();
        watcher
    }

    /// Next update from the slot's current occupant.
    ///
    /// Returns `None` once the parent store itself is gone.
    pub async fn next_update(&mut self) -> Option<Update<C>> {
        loop {
            self.resolve();
            let step = match self.current.as_mut() {
                Some((_, updates)) => {
                    tokio::select! {
                        update = updates.recv() => match update {
                            Ok(update) => Step::Update(update),
                            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                                Step::Lagged(skipped)
                            }
                            Err(broadcast::error::RecvError::Closed) => Step::SourceClosed,
                        },
                        changed = self.states.changed() => match changed {
                            Ok(()) => Step::StateChanged,
                            Err(_) => Step::ParentGone,
                        },
                    }
                }
                None => match self.states.changed().await {
                    Ok(()) => Step::StateChanged,
                    Err(_) => Step::ParentGone,
                },
            };
            match step {
                Step::Update(update) => return Some(update),
                Step::Lagged(skipped) => {
                    tracing::warn!("child watcher lagged, skipped {} update(s)", skipped);
                }
                Step::SourceClosed => {
                    // Every live handle keeps the update sender alive, so a
                    // closed source means the slot no longer holds this
                    // store; the next resolve finds its successor.
                    self.current = None;
                }
                Step::StateChanged => {}
                Step::ParentGone => return None,
            }
        }
    }

    fn resolve(&mut self) {
        match (self.select)(&self.states.borrow_and_update()) {
            Some(child) => {
                let same = matches!(&self.current, Some((id, _)) if *id == child.id());
                if !same {
                    tracing::debug!(
                        "child watcher: following {}#{:?}",
                        child.name(),
                        child.id()
                    );
                    self.current = Some((child.id(), child.updates()));
                }
            }
            None => self.current = None,
        }
    }
}
