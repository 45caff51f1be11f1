use grubdash::framework::{ActorClient, IdGenerator, Payload, Rejection, ResourceStore};
use grubdash::model::{Order, OrderLineItem, OrderStatus};
use grubdash::order_actor::{self, OrderError};
use serde_json::{json, Value};

fn order_payload(status: Option<&str>, dishes: Value) -> Payload {
    let mut data = json!({
        "deliverTo": "123 Main",
        "mobileNumber": "555-0100",
        "dishes": dishes,
    });
    if let Some(status) = status {
        data["status"] = json!(status);
    }
    Payload::new(json!({ "data": data }))
}

fn stored(id: &str, status: OrderStatus) -> Order {
    Order::new(id, "9 Elm St", "555-0199", status, vec![OrderLineItem::new("d1", 1)])
}

fn rejected(message: &str) -> OrderError {
    OrderError::Rejected(Rejection::invalid(message))
}

/// Real Order actor over a prepared store; every status is represented once.
#[tokio::test]
async fn test_status_state_machine_on_real_actor() {
    let store = ResourceStore::with_seed(vec![
        stored("p", OrderStatus::Pending),
        stored("o", OrderStatus::OutForDelivery),
        stored("d", OrderStatus::Delivered),
    ]);
    let (actor, client) = order_actor::new(8, IdGenerator::new(), store);
    let handle = tokio::spawn(actor.run());

    // Any non-terminal order may move anywhere, including backwards.
    let updated = client
        .update_order("o".to_string(), order_payload(Some("pending"), json!([{ "id": "d1", "quantity": 1 }])))
        .await
        .unwrap();
    assert_eq!(updated.status, Some(OrderStatus::Pending));

    // A delivered order refuses every target, and keeps its status.
    for target in ["pending", "preparing", "out-for-delivery", "delivered"] {
        let err = client
            .update_order("d".to_string(), order_payload(Some(target), json!([{ "id": "d1", "quantity": 1 }])))
            .await
            .unwrap_err();
        assert_eq!(err, rejected("A delivered order cannot be changed"));
    }
    // Even a payload that would fail later checks reports the terminal state first.
    let err = client
        .update_order("d".to_string(), Payload::new(json!({ "data": { "status": "pending" } })))
        .await
        .unwrap_err();
    assert_eq!(err, rejected("A delivered order cannot be changed"));
    assert_eq!(
        client.read("d".to_string()).await.unwrap(),
        stored("d", OrderStatus::Delivered)
    );

    // Status is checked before the required fields.
    let err = client
        .update_order("p".to_string(), Payload::new(json!({ "data": { "status": "cooking" } })))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        rejected("Order must have a status of pending, preparing, out-for-delivery, delivered")
    );

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_deletion_guard() {
    let store = ResourceStore::with_seed(vec![
        stored("p", OrderStatus::Pending),
        stored("x", OrderStatus::Preparing),
    ]);
    let (actor, client) = order_actor::new(8, IdGenerator::new(), store);
    let handle = tokio::spawn(actor.run());

    let err = client.delete_order("x".to_string()).await.unwrap_err();
    assert_eq!(err, rejected("An order cannot be deleted unless it is pending"));
    assert_eq!(client.list().await.unwrap().len(), 2);

    client.delete_order("p".to_string()).await.unwrap();
    let err = client.read("p".to_string()).await.unwrap_err();
    assert_eq!(
        err,
        OrderError::Rejected(Rejection::not_found("Order p not found"))
    );

    let err = client.delete_order("p".to_string()).await.unwrap_err();
    assert_eq!(err.to_string(), "Order p not found");
    assert_eq!(client.list().await.unwrap(), vec![stored("x", OrderStatus::Preparing)]);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_invalid_dish_lists_leave_store_unchanged() {
    let (actor, client) = order_actor::new(8, IdGenerator::new(), ResourceStore::new());
    let handle = tokio::spawn(actor.run());

    let cases = [
        (json!([]), "Order must include at least one dish".to_string()),
        (json!("d1"), "Order must include at least one dish".to_string()),
        (
            json!([{ "id": "a", "quantity": 1 }, { "id": "b", "quantity": 0 }, { "id": "c" }]),
            "Dish 1 must have a quantity that is an integer greater than 0".to_string(),
        ),
        (
            json!([{ "id": "a", "quantity": 1.5 }]),
            "Dish 0 must have a quantity that is an integer greater than 0".to_string(),
        ),
        (
            json!([{ "id": "a", "quantity": "2" }]),
            "Dish 0 must have a quantity that is an integer greater than 0".to_string(),
        ),
    ];

    for (dishes, message) in cases {
        let err = client
            .create_order(order_payload(Some("pending"), dishes))
            .await
            .unwrap_err();
        assert_eq!(err, rejected(&message));
    }
    assert!(client.list().await.unwrap().is_empty());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_create_without_status_keeps_it_absent() {
    let (actor, client) = order_actor::new(8, IdGenerator::new(), ResourceStore::new());
    let handle = tokio::spawn(actor.run());

    let order = client
        .create_order(order_payload(None, json!([{ "id": "d1", "name": "Pasta", "quantity": 2.0 }])))
        .await
        .unwrap();
    assert_eq!(order.status, None);
    assert_eq!(order.dishes[0].quantity, 2);
    assert_eq!(order.dishes[0].details.get("name"), Some(&json!("Pasta")));

    // Not pending, so not deletable until it is updated to pending.
    let err = client.delete_order(order.id.clone()).await.unwrap_err();
    assert_eq!(err, rejected("An order cannot be deleted unless it is pending"));

    client
        .update_order(order.id.clone(), order_payload(Some("pending"), json!([{ "id": "d1", "quantity": 2 }])))
        .await
        .unwrap();
    client.delete_order(order.id).await.unwrap();

    let err = client
        .create_order(order_payload(Some("lost"), json!([{ "id": "d1", "quantity": 2 }])))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        rejected("Order must have a status of pending, preparing, out-for-delivery, delivered")
    );

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_update_replaces_every_mutable_field() {
    let store = ResourceStore::with_seed(vec![stored("p", OrderStatus::Pending)]);
    let (actor, client) = order_actor::new(8, IdGenerator::new(), store);
    let handle = tokio::spawn(actor.run());

    let payload = Payload::new(json!({ "data": {
        "id": "p",
        "deliverTo": "42 Wallaby Way",
        "mobileNumber": "555-0142",
        "status": "preparing",
        "dishes": [{ "id": "d7", "quantity": 3 }, { "id": "d8", "quantity": 1 }],
    }}));
    let updated = client.update_order("p".to_string(), payload).await.unwrap();

    let expected = Order::new(
        "p",
        "42 Wallaby Way",
        "555-0142",
        OrderStatus::Preparing,
        vec![OrderLineItem::new("d7", 3), OrderLineItem::new("d8", 1)],
    );
    assert_eq!(updated, expected);
    assert_eq!(client.read("p".to_string()).await.unwrap(), expected);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_update_with_mismatched_id_is_refused() {
    let store = ResourceStore::with_seed(vec![stored("1", OrderStatus::Pending)]);
    let (actor, client) = order_actor::new(8, IdGenerator::new(), store);
    let handle = tokio::spawn(actor.run());

    for (body_id, shown) in [(json!("2"), "2"), (json!(1), "1")] {
        let mut payload = order_payload(Some("preparing"), json!([{ "id": "d1", "quantity": 1 }]));
        payload.0["data"]["id"] = body_id;
        let err = client.update_order("1".to_string(), payload).await.unwrap_err();
        assert_eq!(
            err,
            rejected(&format!(
                "Order id does not match route id. Order: {shown}, Route: 1."
            ))
        );
    }
    assert_eq!(
        client.read("1".to_string()).await.unwrap(),
        stored("1", OrderStatus::Pending)
    );

    drop(client);
    handle.await.unwrap();
}
