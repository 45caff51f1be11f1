//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. Module paths are hidden (`with_target(false)`); actor events carry an
//! `entity_type` field instead.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup and shutdown with the final store size
//! - **Operations**: List, Created, Read, Updated, Deleted with the entity `id`
//! - **Rejections**: a `warn` per refused write, plus a `debug` naming the failing check
//! - **Clients**: one span per client call via `#[instrument]`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Payloads and each pipeline failure
//! RUST_LOG=debug cargo run
//!
//! # Every check as it runs
//! RUST_LOG=trace cargo run
//! ```
//!
//! With `RUST_LOG=debug`, refusing a delivered order looks like:
//!
//! ```text
//! DEBUG update_order:update_order called payload=Payload(Object {...})
//! DEBUG Check failed check="status_is_valid" status=400 rejection=A delivered order cannot be changed
//! WARN Update failed entity_type="Order" id="5a887d326e83d3c5bdcbee398ea32aff" error=A delivered order cannot be changed
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type identifies the actor instead
        .compact()
        .init();
}
