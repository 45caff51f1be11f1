//! # Dish Actor
//!
//! This module implements the Dish resource actor: the menu.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Dish`]
//! - [`checks`] - dish-specific pipeline checks ([`PriceIsValid`])
//! - [`error`] - [`DishError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Pipelines
//!
//! | Operation | Checks, in order |
//! |-----------|------------------|
//! | create | `name`, `description`, `price`, `image_url` present; price valid |
//! | read | dish exists |
//! | update | dish exists; the four fields present; price valid; body id matches route |
//!
//! Dishes cannot be deleted.
//!
//! ## Usage
//!
//! ```rust
//! use grubdash::dish_actor;
//! use grubdash::framework::{IdGenerator, Payload, ResourceStore};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = dish_actor::new(32, IdGenerator::new(), ResourceStore::new());
//!     tokio::spawn(actor.run());
//!
//!     let dish = client
//!         .create_dish(Payload::new(json!({ "data": {
//!             "name": "Pasta", "description": "Fresh", "price": 12, "image_url": "http://x"
//!         }})))
//!         .await?;
//!     assert_eq!(dish.price, 12);
//!     Ok(())
//! }
//! ```

pub mod checks;
pub mod entity;
pub mod error;

pub use checks::*;
pub use error::*;

use crate::clients::DishClient;
use crate::framework::{IdGenerator, ResourceActor, ResourceStore};
use crate::model::Dish;

/// Creates a new Dish actor over `store` and its client.
pub fn new(
    buffer_size: usize,
    ids: IdGenerator,
    store: ResourceStore<Dish>,
) -> (ResourceActor<Dish>, DishClient) {
    let (actor, generic_client) = ResourceActor::with_store(buffer_size, ids, store);
    (actor, DishClient::new(generic_client))
}
