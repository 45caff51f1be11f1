//! Checks specific to dishes.

use crate::framework::json::whole_number;
use crate::framework::{Check, Rejection, RequestContext, ResourceStore};
use crate::model::Dish;
use serde_json::Value;

pub const PRICE_MESSAGE: &str = "Dish must have a price that is an integer greater than 0";

/// Requires `price` to be an integer greater than zero and normalizes it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceIsValid;

impl Check<Dish> for PriceIsValid {
    fn name(&self) -> &'static str {
        "price_is_valid"
    }

    fn check(&self, ctx: &mut RequestContext<Dish>, _store: &ResourceStore<Dish>) -> Result<(), Rejection> {
        match ctx.data.get("price").and_then(whole_number) {
            Some(price) if price > 0 => {
                ctx.locals.insert("price".to_string(), Value::from(price));
                Ok(())
            }
            _ => Err(Rejection::invalid(PRICE_MESSAGE)),
        }
    }
}
