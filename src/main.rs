//! # GrubDash demo
//!
//! Starts the [`RestaurantSystem`] and walks a few requests through the
//! [`ApiRouter`]: a menu lookup, an order placed and pushed to delivery, and the
//! writes the pipelines refuse along the way.

use grubdash::api::{ApiRequest, ApiResponse, ApiRouter};
use grubdash::lifecycle::{setup_tracing, RestaurantSystem, SystemConfig};
use serde_json::json;
use tracing::{info, warn, Instrument};

fn report(step: &str, response: &ApiResponse) {
    match response.error_message() {
        Some(message) => warn!(step, status = response.status, error = message, "Refused"),
        None => info!(step, status = response.status, "Ok"),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = SystemConfig::from_env()?;
    info!(?config, "Starting GrubDash");

    let system = RestaurantSystem::new(config);
    let router = ApiRouter::for_system(&system);

    let span = tracing::info_span!("menu");
    async {
        let response = router.handle(ApiRequest::new("GET", "/dishes")).await;
        report("list dishes", &response);

        let response = router
            .handle(ApiRequest::new("POST", "/dishes").with_body(json!({ "data": {
                "name": "Pasta", "description": "Fresh", "price": -1, "image_url": "http://x"
            }})))
            .await;
        report("create dish with negative price", &response);
    }
    .instrument(span)
    .await;

    let span = tracing::info_span!("order_processing");
    let order_id = async {
        let response = router
            .handle(ApiRequest::new("POST", "/orders").with_body(json!({ "data": {
                "deliverTo": "1 Main St",
                "mobileNumber": "555-0100",
                "status": "pending",
                "dishes": [{ "id": "90c3d873684bf381dfab29034b5bba73", "quantity": 2 }]
            }})))
            .await;
        report("create order", &response);

        let id = response
            .body
            .as_ref()
            .and_then(|body| body["data"]["id"].as_str())
            .map(str::to_string);

        if let Some(id) = &id {
            for status in ["preparing", "out-for-delivery", "delivered", "pending"] {
                let response = router
                    .handle(
                        ApiRequest::new("PUT", format!("/orders/{id}")).with_body(json!({ "data": {
                            "deliverTo": "1 Main St",
                            "mobileNumber": "555-0100",
                            "status": status,
                            "dishes": [{ "id": "90c3d873684bf381dfab29034b5bba73", "quantity": 2 }]
                        }})),
                    )
                    .await;
                report(status, &response);
            }

            let response = router
                .handle(ApiRequest::new("DELETE", format!("/orders/{id}")))
                .await;
            report("delete delivered order", &response);
        }
        id
    }
    .instrument(span)
    .await;

    info!(order_id = ?order_id, "Demo finished");

    drop(router);
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
