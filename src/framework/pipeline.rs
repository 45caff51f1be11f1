//! # Validation Pipelines
//!
//! Every write on a resource is gated by a [`Pipeline`]: an ordered list of
//! [`Check`]s run one after another against the request. The first check that
//! fails stops the pipeline and its [`Rejection`] is returned untouched; nothing
//! after it runs, and the mutation never happens.
//!
//! Checks talk to each other (and to the mutation that follows) only through the
//! [`RequestContext`] threaded through the run. A check may read the raw payload
//! (`data`), write normalized values (`locals`), or bind the entity the request
//! addresses (`existing`).
//!
//! ```rust
//! use grubdash::framework::{Pipeline, Payload, RequestContext, RequireField, ResourceStore};
//! use grubdash::model::Dish;
//! use serde_json::json;
//!
//! let pipeline = Pipeline::<Dish>::new()
//!     .then(RequireField::new("name"))
//!     .then(RequireField::new("price"));
//!
//! let payload = Payload::new(json!({ "data": { "name": "Pasta" } }));
//! let mut ctx = RequestContext::new(None, &payload);
//! let rejection = pipeline.run(&mut ctx, &ResourceStore::new()).unwrap_err();
//! assert_eq!(rejection.to_string(), "Dish must include a price");
//! ```

use crate::framework::checks::RequireField;
use crate::framework::entity::ActorEntity;
use crate::framework::error::Rejection;
use crate::framework::store::ResourceStore;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, trace};

/// Raw request body, expected to look like `{ "data": { ...fields } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(pub Value);

impl Payload {
    pub fn new(body: Value) -> Self {
        Self(body)
    }

    /// The `data` object of the body. A missing or non-object `data` reads as `{}`.
    pub fn data(&self) -> Map<String, Value> {
        match self.0.get("data") {
            Some(Value::Object(data)) => data.clone(),
            _ => Map::new(),
        }
    }
}

impl From<Value> for Payload {
    fn from(body: Value) -> Self {
        Self(body)
    }
}

/// Scratch state for one request's pipeline run.
#[derive(Debug, Clone)]
pub struct RequestContext<T: ActorEntity> {
    /// Identifier taken from the route, for item operations.
    pub route_id: Option<String>,
    /// The payload's `data` object.
    pub data: Map<String, Value>,
    /// Values validated and normalized by checks, consumed by the mutation.
    pub locals: Map<String, Value>,
    /// Entity bound by the existence check.
    pub existing: Option<T>,
}

impl<T: ActorEntity> RequestContext<T> {
    pub fn new(route_id: Option<String>, payload: &Payload) -> Self {
        Self {
            route_id,
            data: payload.data(),
            locals: Map::new(),
            existing: None,
        }
    }

    /// Context for an operation that carries no body (read, delete).
    pub fn for_route(id: impl Into<String>) -> Self {
        Self {
            route_id: Some(id.into()),
            data: Map::new(),
            locals: Map::new(),
            existing: None,
        }
    }

    pub fn route_id(&self) -> &str {
        self.route_id.as_deref().unwrap_or_default()
    }

    /// The bound entity. Checks placed after the existence check rely on this.
    pub fn existing(&self) -> Result<&T, Rejection> {
        self.existing
            .as_ref()
            .ok_or_else(|| Rejection::not_found(format!("{} {} not found", T::KIND, self.route_id())))
    }
}

/// One precondition in a pipeline.
pub trait Check<T: ActorEntity>: Send + Sync {
    /// Short name used in trace output.
    fn name(&self) -> &'static str;

    fn check(&self, ctx: &mut RequestContext<T>, store: &ResourceStore<T>) -> Result<(), Rejection>;
}

/// Ordered list of checks for one operation.
pub struct Pipeline<T: ActorEntity> {
    checks: Vec<Box<dyn Check<T>>>,
}

impl<T: ActorEntity> Pipeline<T> {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Appends `check` to the end of the pipeline.
    pub fn then(mut self, check: impl Check<T> + 'static) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Appends one [`RequireField`] check per field, in the given order.
    pub fn require_fields(self, fields: &[&'static str]) -> Self {
        fields
            .iter()
            .copied()
            .fold(self, |pipeline, field| pipeline.then(RequireField::new(field)))
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Names of the checks, in execution order.
    pub fn check_names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|check| check.name()).collect()
    }

    /// Runs every check in order, stopping at the first rejection.
    pub fn run(&self, ctx: &mut RequestContext<T>, store: &ResourceStore<T>) -> Result<(), Rejection> {
        for check in &self.checks {
            trace!(entity_type = T::KIND, check = check.name(), "Running check");
            if let Err(rejection) = check.check(ctx, store) {
                debug!(
                    entity_type = T::KIND,
                    check = check.name(),
                    status = rejection.status(),
                    %rejection,
                    "Check failed"
                );
                return Err(rejection);
            }
        }
        Ok(())
    }
}

impl<T: ActorEntity> Default for Pipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}
