//! ActorEntity trait implementation for the Order domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation
//! that enables [`Order`] to be managed by the generic [`crate::framework::ResourceActor`].

use super::checks::{
    DeletionAllowed, DishListIsValid, StatusIsRecognized, StatusIsValid, AT_LEAST_ONE_DISH,
    STATUS_MESSAGE,
};
use crate::framework::json::text_field;
use crate::framework::{ActorEntity, EntityExists, IdMatchesRoute, Pipeline, Rejection};
use crate::model::{Order, OrderLineItem, OrderStatus};
use serde_json::{Map, Value};

/// Fields every create and update must carry, in check order.
pub const REQUIRED_FIELDS: [&str; 3] = ["deliverTo", "mobileNumber", "dishes"];

fn line_items(locals: &Map<String, Value>) -> Result<Vec<OrderLineItem>, Rejection> {
    let dishes = locals.get("dishes").cloned().unwrap_or_default();
    serde_json::from_value(dishes).map_err(|_| Rejection::invalid(AT_LEAST_ONE_DISH))
}

fn status(locals: &Map<String, Value>) -> Option<OrderStatus> {
    locals.get("status")?.as_str()?.parse().ok()
}

impl ActorEntity for Order {
    const KIND: &'static str = "Order";

    fn id(&self) -> &str {
        &self.id
    }

    /// Builds the order; the status is whatever the payload carried, if anything.
    fn from_locals(id: String, locals: &Map<String, Value>) -> Result<Self, Rejection> {
        Ok(Self {
            id,
            deliver_to: text_field(locals, "deliverTo"),
            mobile_number: text_field(locals, "mobileNumber"),
            status: status(locals),
            dishes: line_items(locals)?,
        })
    }

    /// Replaces address, phone, status and line items together.
    fn apply_locals(&mut self, locals: &Map<String, Value>) -> Result<(), Rejection> {
        let dishes = line_items(locals)?;
        let status = status(locals).ok_or_else(|| Rejection::invalid(STATUS_MESSAGE))?;

        self.deliver_to = text_field(locals, "deliverTo");
        self.mobile_number = text_field(locals, "mobileNumber");
        self.status = Some(status);
        self.dishes = dishes;
        Ok(())
    }

    fn id_mismatch_message(body_id: &str, route_id: &str) -> String {
        format!("Order id does not match route id. Order: {body_id}, Route: {route_id}.")
    }

    fn create_pipeline() -> Pipeline<Self> {
        Pipeline::new()
            .require_fields(&REQUIRED_FIELDS)
            .then(DishListIsValid)
            .then(StatusIsRecognized)
    }

    fn update_pipeline() -> Pipeline<Self> {
        Pipeline::new()
            .then(EntityExists)
            .then(IdMatchesRoute)
            .then(StatusIsValid)
            .require_fields(&REQUIRED_FIELDS)
            .then(DishListIsValid)
    }

    fn delete_pipeline() -> Option<Pipeline<Self>> {
        Some(Pipeline::new().then(EntityExists).then(DeletionAllowed))
    }
}
