//! Reactive store primitives.
//!
//! This module provides the building blocks for unidirectional data flow:
//! stores hold state, reducers transform it, effects observe it and feed
//! actions back in.
//!
//! # Architecture
//!
//! ```text
//! dispatch(Action) ──→ Reducer ──→ State ──→ state watch (deduplicated)
//!        ↑                           │
//!        │                           ├──→ update stream (action + state)
//!        │                           │
//!        └───────── Effects ◀────────┘
//! ```
//!
//! - **State**: immutable value replaced wholesale on every reduction
//! - **Action**: plain data describing what happened
//! - **Reducer**: pure function `(State, Action) -> State`
//! - **Effect**: a task observing the store's streams and dispatching
//!   follow-up actions; the sole side-effect boundary
//!
//! A store's state may itself hold handles to other stores. [`ChildWatcher`]
//! and [`Tunnel`] are the composition tools for that case: the first follows
//! a child slot across replacements and delivers the resident child's
//! updates, the second forwards selected child actions into another child.

mod action;
mod builder;
mod effects;
mod handle;
mod reducer;
mod state;
mod tunnel;
mod watcher;

pub use action::StoreAction;
pub use builder::StoreBuilder;
pub use effects::{Effect, EffectFuture};
pub use handle::{StoreHandle, StoreId, Update};
pub use reducer::Reducer;
pub use state::StoreState;
pub use tunnel::Tunnel;
pub use watcher::ChildWatcher;
