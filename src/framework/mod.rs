//! Generic resource framework.
//!
//! This module provides the building blocks for managing resource entities behind
//! actors, with every operation gated by an ordered validation pipeline.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns a [`ResourceStore`] and serializes access to it
//! - [`ResourceClient`] - Type-safe handle for sending requests to an actor
//! - [`Pipeline`] / [`Check`] - Ordered validation executed before each mutation
//! - [`Rejection`] / [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod checks;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod id;
pub mod json;
pub mod message;
pub mod mock;
pub mod pipeline;
pub mod store;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use checks::{EntityExists, IdMatchesRoute, RequireField};
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::{FrameworkError, Rejection};
pub use id::IdGenerator;
pub use message::{ResourceRequest, Response};
pub use pipeline::{Check, Payload, Pipeline, RequestContext};
pub use store::ResourceStore;
