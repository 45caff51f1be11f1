/// A customer order.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
/// Orders move through [`OrderStatus`] and can be deleted only while pending.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::Display;
use std::str::FromStr;

/// Lifecycle of an order. `Delivered` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }

    /// Only leaving `Delivered` is forbidden; every other move is allowed,
    /// including backwards ones such as `OutForDelivery -> Pending`.
    pub fn can_transition_to(&self, _next: OrderStatus) -> bool {
        !self.is_terminal()
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status string outside the four known values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown order status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// One dish reference inside an order.
///
/// Only `quantity` is interpreted; every other submitted key (the dish `id`, a
/// name, a price…) is kept exactly as it arrived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub quantity: i64,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl OrderLineItem {
    pub fn new(dish_id: impl Into<String>, quantity: i64) -> Self {
        let mut details = Map::new();
        details.insert("id".to_string(), Value::String(dish_id.into()));
        Self { quantity, details }
    }

    /// The referenced dish id, when one was submitted as a string.
    pub fn dish_id(&self) -> Option<&str> {
        self.details.get("id").and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    /// `None` when the order was created without a status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    pub dishes: Vec<OrderLineItem>,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (assigned by the actor system for created orders)
    /// * `deliver_to` - Delivery address
    /// * `mobile_number` - Contact number
    /// * `status` - Current status
    /// * `dishes` - Ordered line items
    pub fn new(
        id: impl Into<String>,
        deliver_to: impl Into<String>,
        mobile_number: impl Into<String>,
        status: OrderStatus,
        dishes: Vec<OrderLineItem>,
    ) -> Self {
        Self {
            id: id.into(),
            deliver_to: deliver_to.into(),
            mobile_number: mobile_number.into(),
            status: Some(status),
            dishes,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == Some(OrderStatus::Pending)
    }
}
