use crate::clients::{DishClient, OrderClient};
use crate::framework::{IdGenerator, ResourceStore};
use crate::lifecycle::config::SystemConfig;
use crate::lifecycle::seed::{seed_dishes, seed_orders};
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
#[error("Actor task failed: {0}")]
pub struct ShutdownError(#[from] tokio::task::JoinError);

/// The runtime orchestrator for the dish and order actors.
///
/// `RestaurantSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping both actors
/// - **Resource Coordination**: Sharing one ID generator so ids are unique across resources
/// - **Seeding**: Loading the built-in menu and orders when configured to
///
/// # Example
///
/// ```rust
/// use grubdash::framework::ActorClient;
/// use grubdash::lifecycle::{RestaurantSystem, SystemConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = RestaurantSystem::new(SystemConfig::default());
///
///     let dishes = system.dish_client.list().await?;
///     assert_eq!(dishes.len(), 3);
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct RestaurantSystem {
    /// Client for interacting with the Dish actor
    pub dish_client: DishClient,

    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    /// Task handles for both actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl RestaurantSystem {
    /// Spawns both actors and returns a system ready to accept requests.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: SystemConfig) -> Self {
        let ids = IdGenerator::new();

        let (dish_store, order_store) = if config.seed_data {
            (
                ResourceStore::with_seed(seed_dishes()),
                ResourceStore::with_seed(seed_orders()),
            )
        } else {
            (ResourceStore::new(), ResourceStore::new())
        };
        info!(
            dishes = dish_store.len(),
            orders = order_store.len(),
            capacity = config.channel_capacity,
            "Starting restaurant system"
        );

        let (dish_actor, dish_client) =
            crate::dish_actor::new(config.channel_capacity, ids.clone(), dish_store);
        let (order_actor, order_client) =
            crate::order_actor::new(config.channel_capacity, ids, order_store);

        let dish_handle = tokio::spawn(dish_actor.run());
        let order_handle = tokio::spawn(order_actor.run());

        Self {
            dish_client,
            order_client,
            handles: vec![dish_handle, order_handle],
        }
    }

    /// Gracefully shuts down both actors.
    ///
    /// Dropping the clients closes the channels; each actor drains its queue and
    /// exits its loop. Clones of the clients held elsewhere keep their actor alive,
    /// so drop them before calling this.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down system...");

        drop(self.dish_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
