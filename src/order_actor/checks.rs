//! Checks specific to orders, including the status state machine.

use crate::framework::json::{is_truthy, whole_number};
use crate::framework::{Check, Rejection, RequestContext, ResourceStore};
use crate::model::{Order, OrderStatus};
use serde_json::Value;

pub const AT_LEAST_ONE_DISH: &str = "Order must include at least one dish";
pub const STATUS_MESSAGE: &str =
    "Order must have a status of pending, preparing, out-for-delivery, delivered";
pub const DELIVERED_IS_FINAL: &str = "A delivered order cannot be changed";
pub const DELETE_ONLY_PENDING: &str = "An order cannot be deleted unless it is pending";

fn quantity_message(index: usize) -> String {
    format!("Dish {index} must have a quantity that is an integer greater than 0")
}

/// Parses a truthy status value; `None` for anything outside the four states.
fn parse_status(value: &Value) -> Option<OrderStatus> {
    value.as_str()?.parse().ok()
}

/// Requires `dishes` to be a non-empty list whose items all carry a positive
/// integer `quantity`. The first offending item (0-based) is reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct DishListIsValid;

impl Check<Order> for DishListIsValid {
    fn name(&self) -> &'static str {
        "dish_list_is_valid"
    }

    fn check(&self, ctx: &mut RequestContext<Order>, _store: &ResourceStore<Order>) -> Result<(), Rejection> {
        let items = match ctx.data.get("dishes") {
            Some(Value::Array(items)) if !items.is_empty() => items,
            _ => return Err(Rejection::invalid(AT_LEAST_ONE_DISH)),
        };

        let mut normalized = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let quantity = item
                .get("quantity")
                .and_then(whole_number)
                .filter(|quantity| *quantity >= 1)
                .ok_or_else(|| Rejection::invalid(quantity_message(index)))?;

            let mut line = item.as_object().cloned().unwrap_or_default();
            line.insert("quantity".to_string(), Value::from(quantity));
            normalized.push(Value::Object(line));
        }

        ctx.locals
            .insert("dishes".to_string(), Value::Array(normalized));
        Ok(())
    }
}

/// The status transition check run on update.
///
/// The requested status must be one of the four states, and an order that is
/// already delivered cannot change at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusIsValid;

impl Check<Order> for StatusIsValid {
    fn name(&self) -> &'static str {
        "status_is_valid"
    }

    fn check(&self, ctx: &mut RequestContext<Order>, _store: &ResourceStore<Order>) -> Result<(), Rejection> {
        let requested = ctx
            .data
            .get("status")
            .filter(|value| is_truthy(value))
            .and_then(parse_status)
            .ok_or_else(|| Rejection::invalid(STATUS_MESSAGE))?;

        if let Some(current) = ctx.existing()?.status {
            if !current.can_transition_to(requested) {
                return Err(Rejection::invalid(DELIVERED_IS_FINAL));
            }
        }

        ctx.locals
            .insert("status".to_string(), Value::from(requested.as_str()));
        Ok(())
    }
}

/// Accepts the status given at creation when it is one of the four states.
///
/// An omitted status is allowed and stays omitted; creation does not default it.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusIsRecognized;

impl Check<Order> for StatusIsRecognized {
    fn name(&self) -> &'static str {
        "status_is_recognized"
    }

    fn check(&self, ctx: &mut RequestContext<Order>, _store: &ResourceStore<Order>) -> Result<(), Rejection> {
        let Some(value) = ctx.data.get("status").filter(|value| is_truthy(value)) else {
            return Ok(());
        };
        let status = parse_status(value).ok_or_else(|| Rejection::invalid(STATUS_MESSAGE))?;
        ctx.locals
            .insert("status".to_string(), Value::from(status.as_str()));
        Ok(())
    }
}

/// Only pending orders may be deleted.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeletionAllowed;

impl Check<Order> for DeletionAllowed {
    fn name(&self) -> &'static str {
        "deletion_allowed"
    }

    fn check(&self, ctx: &mut RequestContext<Order>, _store: &ResourceStore<Order>) -> Result<(), Rejection> {
        if ctx.existing()?.is_pending() {
            Ok(())
        } else {
            Err(Rejection::invalid(DELETE_ONLY_PENDING))
        }
    }
}
