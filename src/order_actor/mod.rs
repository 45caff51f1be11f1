//! # Order Actor
//!
//! This module implements the Order resource actor, including the order-status
//! state machine.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Order`]
//! - [`checks`] - order-specific checks: the dish list, status transitions, deletion
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Pipelines
//!
//! | Operation | Checks, in order |
//! |-----------|------------------|
//! | create | `deliverTo`, `mobileNumber`, `dishes` present; dish list valid; status recognized |
//! | read | order exists |
//! | update | order exists; body id matches route; status valid; the three fields present; dish list valid |
//! | delete | order exists; order is pending |
//!
//! ## Status
//!
//! Any status may move to any other except out of `delivered`, which is terminal.
//! Line items are not checked against the dish store.

pub mod checks;
pub mod entity;
pub mod error;

pub use checks::*;
pub use error::*;

use crate::clients::OrderClient;
use crate::framework::{IdGenerator, ResourceActor, ResourceStore};
use crate::model::Order;

/// Creates a new Order actor over `store` and its client.
pub fn new(
    buffer_size: usize,
    ids: IdGenerator,
    store: ResourceStore<Order>,
) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::with_store(buffer_size, ids, store);
    (actor, OrderClient::new(generic_client))
}
