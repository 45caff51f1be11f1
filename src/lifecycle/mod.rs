//! # System Lifecycle & Orchestration
//!
//! This module manages the runtime lifecycle of the restaurant: starting both
//! resource actors, seeding their stores, and shutting them down cleanly.
//!
//! ## The RestaurantSystem Pattern
//!
//! Dishes and orders do not depend on each other (line items are never checked
//! against the menu), so the actors are started side by side. The one thing they
//! share is the [`IdGenerator`](crate::framework::IdGenerator), which keeps
//! identifiers unique across both resources.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Actors clean up** - Process remaining messages, log final state
//! 4. **Await completion** - Wait for all actor tasks to finish
//!
//! ## Configuration
//!
//! [`SystemConfig::from_env`] reads `GRUBDASH_CHANNEL_CAPACITY` and
//! `GRUBDASH_SEED_DATA`. Log levels come from `RUST_LOG` via [`setup_tracing`]:
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads and failing checks
//! ```

pub mod config;
pub mod restaurant_system;
pub mod seed;
pub mod tracing;

pub use config::*;
pub use restaurant_system::*;
pub use self::tracing::setup_tracing;
