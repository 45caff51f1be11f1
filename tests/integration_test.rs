use grubdash::api::{ApiRequest, ApiResponse, ApiRouter};
use grubdash::framework::ActorClient;
use grubdash::lifecycle::{seed, RestaurantSystem, SystemConfig};
use grubdash::model::OrderStatus;
use serde_json::{json, Value};
use std::collections::HashSet;

fn order_data(status: &str) -> Value {
    json!({ "data": {
        "deliverTo": "123 Main",
        "mobileNumber": "555-0100",
        "status": status,
        "dishes": [{ "id": "d1", "quantity": 2 }],
    }})
}

fn data_id(response: &ApiResponse) -> String {
    response.body.as_ref().expect("response body")["data"]["id"]
        .as_str()
        .expect("data.id")
        .to_string()
}

/// Full end-to-end run through the router with both real actors.
#[tokio::test]
async fn test_dish_and_order_scenarios() {
    let system = RestaurantSystem::new(SystemConfig::default().without_seed_data());
    let router = ApiRouter::for_system(&system);

    let response = router
        .handle(ApiRequest::new("POST", "/dishes").with_body(json!({ "data": {
            "name": "Pasta", "description": "Fresh", "price": 12, "image_url": "http://x"
        }})))
        .await;
    assert_eq!(response.status, 201);
    let dish_id = data_id(&response);
    assert!(!dish_id.is_empty());
    assert_eq!(response.body.as_ref().unwrap()["data"]["price"], json!(12));

    let response = router
        .handle(ApiRequest::new("POST", "/orders").with_body(order_data("pending")))
        .await;
    assert_eq!(response.status, 201);
    let order_id = data_id(&response);
    assert_ne!(order_id, dish_id, "ids are unique across resources");

    let response = router
        .handle(ApiRequest::new("PUT", format!("/orders/{order_id}")).with_body(order_data("delivered")))
        .await;
    assert_eq!(response.status, 200);
    assert_eq!(response.body.as_ref().unwrap()["data"]["status"], json!("delivered"));

    let response = router
        .handle(
            ApiRequest::new("PUT", format!("/orders/{order_id}"))
                .with_body(json!({ "data": { "status": "pending" } })),
        )
        .await;
    assert_eq!(response.status, 400);
    assert_eq!(response.error_message(), Some("A delivered order cannot be changed"));

    let response = router
        .handle(ApiRequest::new("DELETE", format!("/orders/{order_id}")))
        .await;
    assert_eq!(response.status, 400);
    assert_eq!(
        response.error_message(),
        Some("An order cannot be deleted unless it is pending")
    );

    drop(router);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_mismatched_body_id_leaves_order_unchanged() {
    let system = RestaurantSystem::new(SystemConfig::default().without_seed_data());
    let router = ApiRouter::for_system(&system);

    let response = router
        .handle(ApiRequest::new("POST", "/orders").with_body(order_data("pending")))
        .await;
    let order_id = data_id(&response);
    let before = system.order_client.read(order_id.clone()).await.unwrap();

    let mut body = order_data("preparing");
    body["data"]["id"] = json!("someone-else");
    let response = router
        .handle(ApiRequest::new("PUT", format!("/orders/{order_id}/")).with_body(body))
        .await;
    assert_eq!(response.status, 400);
    assert_eq!(
        response.error_message(),
        Some(format!("Order id does not match route id. Order: someone-else, Route: {order_id}.").as_str())
    );
    assert_eq!(system.order_client.read(order_id.clone()).await.unwrap(), before);

    // Deleting a pending order removes it.
    let response = router
        .handle(ApiRequest::new("DELETE", format!("/orders/{order_id}")))
        .await;
    assert_eq!(response, ApiResponse::no_content());
    let response = router
        .handle(ApiRequest::new("GET", format!("/orders/{order_id}")))
        .await;
    assert_eq!(response.status, 404);
    assert_eq!(
        response.error_message(),
        Some(format!("Order {order_id} not found").as_str())
    );

    drop(router);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_seeded_system() {
    let system = RestaurantSystem::new(SystemConfig::default());

    let dishes = system.dish_client.list().await.unwrap();
    assert_eq!(dishes, seed::seed_dishes());
    let orders = system.order_client.list().await.unwrap();
    assert_eq!(orders, seed::seed_orders());

    let delivered = orders
        .iter()
        .find(|o| o.status == Some(OrderStatus::Delivered))
        .expect("a delivered seed order");
    let err = system
        .order_client
        .delete_order(delivered.id.clone())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "An order cannot be deleted unless it is pending");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_creates_get_unique_ids() {
    let system = RestaurantSystem::new(SystemConfig::default().without_seed_data());
    let router = ApiRouter::for_system(&system);

    let mut tasks = Vec::new();
    for i in 0..20 {
        let router = router.clone();
        tasks.push(tokio::spawn(async move {
            let request = if i % 2 == 0 {
                ApiRequest::new("POST", "/dishes").with_body(json!({ "data": {
                    "name": format!("Dish {i}"), "description": "d", "price": i + 1, "image_url": "u"
                }}))
            } else {
                ApiRequest::new("POST", "/orders").with_body(order_data("preparing"))
            };
            router.handle(request).await
        }));
    }

    let mut ids = HashSet::new();
    for task in tasks {
        let response = task.await.unwrap();
        assert_eq!(response.status, 201);
        assert!(ids.insert(data_id(&response)));
    }
    assert_eq!(ids.len(), 20);

    let response = router.handle(ApiRequest::new("GET", "/dishes")).await;
    assert_eq!(response.body.unwrap()["data"].as_array().map(Vec::len), Some(10));

    drop(router);
    system.shutdown().await.unwrap();
}
