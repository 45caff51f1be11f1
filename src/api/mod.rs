//! # API Adapter
//!
//! A transport-agnostic front door: any HTTP server (or a test) hands over an
//! [`ApiRequest`] and gets back an [`ApiResponse`] to write out.
//!
//! | Path | Methods |
//! |------|---------|
//! | `/dishes` | `GET` list, `POST` create |
//! | `/dishes/{id}` | `GET` read, `PUT` update |
//! | `/orders` | `GET` list, `POST` create |
//! | `/orders/{id}` | `GET` read, `PUT` update, `DELETE` delete |
//!
//! Successful bodies are `{ "data": ... }`; failures are `{ "error": message }`.
//! A known path with another method answers 405, an unknown path 404.
//!
//! ```rust
//! use grubdash::api::{ApiRequest, ApiRouter};
//! use grubdash::lifecycle::{RestaurantSystem, SystemConfig};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() {
//!     let system = RestaurantSystem::new(SystemConfig::default().without_seed_data());
//!     let router = ApiRouter::for_system(&system);
//!
//!     let response = router
//!         .handle(ApiRequest::new("POST", "/dishes").with_body(json!({ "data": {
//!             "name": "Pasta", "description": "Fresh", "price": 0, "image_url": "http://x"
//!         }})))
//!         .await;
//!     assert_eq!(response.status, 400);
//!     assert_eq!(
//!         response.error_message(),
//!         Some("Dish must include a price")
//!     );
//! }
//! ```

pub mod router;
pub mod types;

pub use router::*;
pub use types::*;
