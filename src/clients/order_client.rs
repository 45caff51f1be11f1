//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor.
use crate::framework::{ActorClient, Payload, ResourceClient};
use crate::model::Order;
use crate::order_actor::OrderError;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Every check, including status transitions and deletion eligibility, runs
/// inside the Order actor next to the store.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, payload))]
    pub async fn create_order(&self, payload: Payload) -> Result<Order, OrderError> {
        debug!(?payload, "create_order called");
        info!("Sending create_order to actor");
        self.inner.create(payload).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, payload))]
    pub async fn update_order(&self, id: String, payload: Payload) -> Result<Order, OrderError> {
        debug!(?payload, "update_order called");
        self.inner.update(id, payload).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: String) -> Result<(), OrderError> {
        debug!("Sending request");
        self.inner.delete(id).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }
}
