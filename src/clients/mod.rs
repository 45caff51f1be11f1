//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! The shared `list` and `read` operations come from
//! [`ActorClient`](crate::framework::ActorClient); each client adds the writes its
//! resource supports.

pub mod dish_client;
pub mod order_client;

pub use dish_client::*;
pub use order_client::*;
