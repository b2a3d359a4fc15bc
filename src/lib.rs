//! Application-state orchestration for a service-request management UI.
//!
//! Three independently reducible stores (list, details, edit) are
//! composed into one hierarchical tree by the [`requester`] composite
//! store, which creates, replaces, and routes actions to its children in
//! response to the actions they emit. The [`store`] module provides the
//! reactive primitive everything is built on; [`services`] defines the
//! collaborator interfaces the effects call out to.

pub mod details;
pub mod edit;
pub mod list;
pub mod models;
pub mod requester;
pub mod services;
pub mod store;
