//! # Dish Client
//!
//! Provides a high‑level API for interacting with the `Dish` actor.
//! It wraps a `ResourceClient<Dish>` and exposes domain‑specific methods.
use crate::dish_actor::DishError;
use crate::framework::{ActorClient, Payload, ResourceClient};
use crate::model::Dish;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Dish actor.
#[derive(Clone)]
pub struct DishClient {
    inner: ResourceClient<Dish>,
}

impl DishClient {
    pub fn new(inner: ResourceClient<Dish>) -> Self {
        Self { inner }
    }

    /// Validates `payload` through the create pipeline and stores the new dish.
    #[instrument(skip(self, payload))]
    pub async fn create_dish(&self, payload: Payload) -> Result<Dish, DishError> {
        debug!(?payload, "create_dish called");
        self.inner.create(payload).await.map_err(Self::map_error)
    }

    /// Replaces every mutable field of the dish with the values in `payload`.
    #[instrument(skip(self, payload))]
    pub async fn update_dish(&self, id: String, payload: Payload) -> Result<Dish, DishError> {
        debug!(?payload, "update_dish called");
        self.inner.update(id, payload).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Dish> for DishClient {
    type Error = DishError;

    fn inner(&self) -> &ResourceClient<Dish> {
        &self.inner
    }
}
