//! Pure data structures managed by the resource actors.
//!
//! The [`ActorEntity`](crate::framework::ActorEntity) implementations live next to
//! each resource's checks, in [`dish_actor`](crate::dish_actor) and
//! [`order_actor`](crate::order_actor).

pub mod dish;
pub mod order;

pub use dish::*;
pub use order::*;
