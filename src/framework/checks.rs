//! Checks shared by every resource type.

use crate::framework::entity::ActorEntity;
use crate::framework::error::Rejection;
use crate::framework::json::{is_truthy, text};
use crate::framework::pipeline::{Check, RequestContext};
use crate::framework::store::ResourceStore;

/// Requires the payload to carry a truthy value for one field.
///
/// On success the value is copied into `locals` under the same name.
#[derive(Debug, Clone)]
pub struct RequireField {
    field: &'static str,
}

impl RequireField {
    pub fn new(field: &'static str) -> Self {
        Self { field }
    }
}

impl<T: ActorEntity> Check<T> for RequireField {
    fn name(&self) -> &'static str {
        "require_field"
    }

    fn check(&self, ctx: &mut RequestContext<T>, _store: &ResourceStore<T>) -> Result<(), Rejection> {
        match ctx.data.get(self.field) {
            Some(value) if is_truthy(value) => {
                let value = value.clone();
                ctx.locals.insert(self.field.to_string(), value);
                Ok(())
            }
            _ => Err(Rejection::invalid(format!(
                "{} must include a {}",
                T::KIND,
                self.field
            ))),
        }
    }
}

/// Looks up the route id in the store and binds the entity into the context.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityExists;

impl<T: ActorEntity> Check<T> for EntityExists {
    fn name(&self) -> &'static str {
        "entity_exists"
    }

    fn check(&self, ctx: &mut RequestContext<T>, store: &ResourceStore<T>) -> Result<(), Rejection> {
        match store.find(ctx.route_id()) {
            Some(found) => {
                ctx.existing = Some(found.clone());
                Ok(())
            }
            None => Err(Rejection::not_found(format!(
                "{} {} not found",
                T::KIND,
                ctx.route_id()
            ))),
        }
    }
}

/// Rejects an update whose body names a different id than the route.
///
/// An absent or empty body id is always acceptable. Ids compare strictly: a
/// numeric body id never matches a string route id.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdMatchesRoute;

impl<T: ActorEntity> Check<T> for IdMatchesRoute {
    fn name(&self) -> &'static str {
        "id_matches_route"
    }

    fn check(&self, ctx: &mut RequestContext<T>, _store: &ResourceStore<T>) -> Result<(), Rejection> {
        let route_id = ctx.existing()?.id().to_string();
        match ctx.data.get("id") {
            Some(body_id) if is_truthy(body_id) && body_id.as_str() != Some(route_id.as_str()) => {
                Err(Rejection::invalid(T::id_mismatch_message(
                    &text(body_id),
                    &route_id,
                )))
            }
            _ => Ok(()),
        }
    }
}
