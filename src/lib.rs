//! # GrubDash
//!
//! > **Dishes, orders, and the checks that guard every write.**
//!
//! This crate is the resource core of a restaurant ordering service. Each resource
//! lives in its own Tokio actor; every create, update, and delete first runs
//! through an ordered validation pipeline, and only a request that passes every
//! check touches the store.
//!
//! ## Core Concepts
//!
//! ### Pipelines
//! A [`Pipeline`](framework::Pipeline) is an ordered list of
//! [`Check`](framework::Check)s sharing one [`RequestContext`](framework::RequestContext).
//! The first check to fail decides the response (400 or 404 with its message), and
//! the remaining checks never run.
//!
//! ### Single writer per store
//! Pipelines and mutations run inside the [`ResourceActor`](framework::ResourceActor)
//! that owns the store. Its message loop is sequential, so a request never observes
//! another request's half-applied changes.
//!
//! ### Order status
//! Orders move between `pending`, `preparing`, `out-for-delivery`, and `delivered`.
//! `delivered` is terminal, and only `pending` orders can be deleted.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic actor, client, store, pipeline, and shared checks.
//! - **Key items**: [`ActorEntity`](framework::ActorEntity), [`ResourceActor`](framework::ResourceActor), [`Pipeline`](framework::Pipeline).
//!
//! ### 2. The Resources ([`dish_actor`], [`order_actor`], [`model`])
//! `ActorEntity` implementations, their pipelines, and resource-specific checks.
//!
//! ### 3. The Interface ([`clients`], [`api`])
//! Typed clients per resource, and a router mapping `(method, path, body)` onto them.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! Starts both actors with seed data, reads configuration, sets up tracing, and
//! shuts everything down.
//! - **Key items**: [`RestaurantSystem`](lifecycle::RestaurantSystem), [`SystemConfig`](lifecycle::SystemConfig).
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod api;
pub mod clients;
pub mod dish_actor;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
