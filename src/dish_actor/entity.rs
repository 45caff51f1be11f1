//! ActorEntity trait implementation for the Dish domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation
//! that enables [`Dish`] to be managed by the generic [`crate::framework::ResourceActor`].

use super::checks::{PriceIsValid, PRICE_MESSAGE};
use crate::framework::json::{text_field, whole_number};
use crate::framework::{ActorEntity, EntityExists, IdMatchesRoute, Pipeline, Rejection};
use crate::model::Dish;
use serde_json::{Map, Value};

/// Fields every create and update must carry, in check order.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "description", "price", "image_url"];

fn price(locals: &Map<String, Value>) -> Result<i64, Rejection> {
    locals
        .get("price")
        .and_then(whole_number)
        .ok_or_else(|| Rejection::invalid(PRICE_MESSAGE))
}

impl ActorEntity for Dish {
    const KIND: &'static str = "Dish";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_locals(id: String, locals: &Map<String, Value>) -> Result<Self, Rejection> {
        Ok(Self::new(
            id,
            text_field(locals, "name"),
            text_field(locals, "description"),
            price(locals)?,
            text_field(locals, "image_url"),
        ))
    }

    /// Replaces all four mutable fields.
    fn apply_locals(&mut self, locals: &Map<String, Value>) -> Result<(), Rejection> {
        let price = price(locals)?;
        self.name = text_field(locals, "name");
        self.description = text_field(locals, "description");
        self.price = price;
        self.image_url = text_field(locals, "image_url");
        Ok(())
    }

    fn create_pipeline() -> Pipeline<Self> {
        Pipeline::new()
            .require_fields(&REQUIRED_FIELDS)
            .then(PriceIsValid)
    }

    fn update_pipeline() -> Pipeline<Self> {
        Pipeline::new()
            .then(EntityExists)
            .require_fields(&REQUIRED_FIELDS)
            .then(PriceIsValid)
            .then(IdMatchesRoute)
    }
}
