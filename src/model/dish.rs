/// A menu item.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
/// Dishes can be created, read and updated; there is no delete.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Whole-unit price, always greater than zero.
    pub price: i64,
    pub image_url: String,
}

impl Dish {
    /// Creates a new Dish instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (assigned by the actor system for created dishes)
    /// * `name` - Dish name
    /// * `description` - Menu description
    /// * `price` - Price in whole units
    /// * `image_url` - Picture of the dish
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: i64,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
            image_url: image_url.into(),
        }
    }
}
