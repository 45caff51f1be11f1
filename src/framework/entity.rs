//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract every resource (Dish, Order, …) implements
//! to be managed by the generic `ResourceActor`. A resource declares the pipelines that
//! guard its operations and how to build or overwrite itself from the values those
//! pipelines validated. The actor does the rest: it owns the store, runs the right
//! pipeline for each request, and applies the mutation only when every check passed.
//!
//! # Architecture Note
//! By defining a contract (`ActorEntity`) that all our resource types must satisfy,
//! we write the `ResourceActor` logic *once* and reuse it everywhere.
//!
//! # Provided Methods
//! - [`ActorEntity::id_mismatch_message`] has a default wording resources may override.
//! - [`ActorEntity::read_pipeline`] defaults to the existence check alone.
//! - [`ActorEntity::delete_pipeline`] defaults to `None`: the resource cannot be deleted.

use crate::framework::checks::EntityExists;
use crate::framework::error::Rejection;
use crate::framework::pipeline::Pipeline;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt::Debug;

/// Trait that any resource entity must implement to be managed by ResourceActor.
pub trait ActorEntity: Clone + Debug + Serialize + Send + Sync + 'static {
    /// Resource name as it appears in rejection messages, e.g. `"Dish"`.
    const KIND: &'static str;

    /// The entity's unique identifier.
    fn id(&self) -> &str;

    /// Construct the full entity from a fresh id and the validated `locals`.
    /// Called only after the create pipeline passed.
    fn from_locals(id: String, locals: &Map<String, Value>) -> Result<Self, Rejection>;

    /// Overwrite every mutable field from the validated `locals`. The id never changes.
    /// Called only after the update pipeline passed.
    fn apply_locals(&mut self, locals: &Map<String, Value>) -> Result<(), Rejection>;

    /// Message for an update whose body id differs from the route id.
    fn id_mismatch_message(body_id: &str, route_id: &str) -> String {
        format!(
            "{kind} id does not match route id. {kind}: {body_id}, Route: {route_id}",
            kind = Self::KIND,
        )
    }

    /// Checks gating `create`.
    fn create_pipeline() -> Pipeline<Self>;

    /// Checks gating `read`.
    fn read_pipeline() -> Pipeline<Self> {
        Pipeline::new().then(EntityExists)
    }

    /// Checks gating `update`.
    fn update_pipeline() -> Pipeline<Self>;

    /// Checks gating `delete`, or `None` when the resource cannot be deleted.
    fn delete_pipeline() -> Option<Pipeline<Self>> {
        None
    }
}
