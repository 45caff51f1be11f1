use crate::api::types::{ApiError, ApiRequest, ApiResponse, Method};
use crate::clients::{DishClient, OrderClient};
use crate::framework::{ActorClient, Payload};
use crate::lifecycle::RestaurantSystem;
use serde_json::Value;
use tracing::{debug, error, instrument};

/// The routable resources, with the path id when present.
enum Route<'a> {
    Dishes,
    Dish(&'a str),
    Orders,
    Order(&'a str),
}

impl<'a> Route<'a> {
    fn parse(path: &'a str) -> Option<Self> {
        let trimmed = path.strip_suffix('/').unwrap_or(path);
        let mut segments = trimmed.strip_prefix('/')?.split('/');

        let route = match (segments.next(), segments.next()) {
            (Some("dishes"), None) => Route::Dishes,
            (Some("dishes"), Some(id)) if !id.is_empty() => Route::Dish(id),
            (Some("orders"), None) => Route::Orders,
            (Some("orders"), Some(id)) if !id.is_empty() => Route::Order(id),
            _ => return None,
        };

        segments.next().is_none().then_some(route)
    }
}

/// Maps `(method, path, body)` onto the dish and order clients.
///
/// The router holds clones of the clients, so drop it before calling
/// [`RestaurantSystem::shutdown`].
#[derive(Clone)]
pub struct ApiRouter {
    dishes: DishClient,
    orders: OrderClient,
}

impl ApiRouter {
    pub fn new(dishes: DishClient, orders: OrderClient) -> Self {
        Self { dishes, orders }
    }

    pub fn for_system(system: &RestaurantSystem) -> Self {
        Self::new(system.dish_client.clone(), system.order_client.clone())
    }

    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    pub async fn handle(&self, request: ApiRequest) -> ApiResponse {
        let response = match self.dispatch(&request).await {
            Ok(response) => response,
            Err(ApiError::Internal(cause)) => {
                error!(error = %cause, "Request failed");
                ApiError::Internal(cause).into()
            }
            Err(e) => e.into(),
        };
        debug!(status = response.status, "Responding");
        response
    }

    async fn dispatch(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let ApiRequest { method, path, body } = request;
        let route = Route::parse(path).ok_or_else(|| ApiError::PathNotFound(path.clone()))?;
        let payload = || Payload::new(body.clone().unwrap_or(Value::Null));

        match (route, method) {
            (Route::Dishes, Method::Get) => Ok(ApiResponse::data(200, &self.dishes.list().await?)),
            (Route::Dishes, Method::Post) => Ok(ApiResponse::data(
                201,
                &self.dishes.create_dish(payload()).await?,
            )),
            (Route::Dish(id), Method::Get) => Ok(ApiResponse::data(
                200,
                &self.dishes.read(id.to_string()).await?,
            )),
            (Route::Dish(id), Method::Put) => Ok(ApiResponse::data(
                200,
                &self.dishes.update_dish(id.to_string(), payload()).await?,
            )),
            (Route::Orders, Method::Get) => Ok(ApiResponse::data(200, &self.orders.list().await?)),
            (Route::Orders, Method::Post) => Ok(ApiResponse::data(
                201,
                &self.orders.create_order(payload()).await?,
            )),
            (Route::Order(id), Method::Get) => Ok(ApiResponse::data(
                200,
                &self.orders.read(id.to_string()).await?,
            )),
            (Route::Order(id), Method::Put) => Ok(ApiResponse::data(
                200,
                &self.orders.update_order(id.to_string(), payload()).await?,
            )),
            (Route::Order(id), Method::Delete) => {
                self.orders.delete_order(id.to_string()).await?;
                Ok(ApiResponse::no_content())
            }
            (_, method) => Err(ApiError::MethodNotAllowed {
                method: method.clone(),
                path: path.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::INTERNAL_MESSAGE;
    use crate::framework::mock::MockClient;
    use crate::framework::{FrameworkError, Rejection};
    use crate::model::{Dish, Order, OrderLineItem, OrderStatus};
    use serde_json::json;

    struct Mocks {
        dishes: MockClient<Dish>,
        orders: MockClient<Order>,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                dishes: MockClient::new(),
                orders: MockClient::new(),
            }
        }

        fn router(&self) -> ApiRouter {
            ApiRouter::new(
                DishClient::new(self.dishes.client()),
                OrderClient::new(self.orders.client()),
            )
        }

        fn verify(&self) {
            self.dishes.verify();
            self.orders.verify();
        }
    }

    fn pasta() -> Dish {
        Dish::new("1", "Pasta", "Fresh", 12, "http://x")
    }

    #[test]
    fn test_route_parsing() {
        assert!(matches!(Route::parse("/dishes"), Some(Route::Dishes)));
        assert!(matches!(Route::parse("/dishes/"), Some(Route::Dishes)));
        assert!(matches!(Route::parse("/orders/42/"), Some(Route::Order("42"))));
        assert!(Route::parse("dishes").is_none());
        assert!(Route::parse("/dishes/1/extra").is_none());
        assert!(Route::parse("/menu").is_none());
        assert!(Route::parse("/").is_none());
    }

    #[tokio::test]
    async fn test_create_answers_201_with_data() {
        let mut mocks = Mocks::new();
        mocks.dishes.expect_create().return_ok(pasta());

        let response = mocks
            .router()
            .handle(ApiRequest::new("POST", "/dishes").with_body(json!({ "data": {} })))
            .await;

        assert_eq!(response.status, 201);
        assert_eq!(response.body.unwrap()["data"]["id"], "1");
        mocks.verify();
    }

    #[tokio::test]
    async fn test_rejection_status_and_message() {
        let mut mocks = Mocks::new();
        mocks.orders.expect_update("7").return_err(FrameworkError::Rejected(
            Rejection::invalid("A delivered order cannot be changed"),
        ));
        mocks.dishes.expect_read("9").return_err(FrameworkError::Rejected(
            Rejection::not_found("Dish 9 not found"),
        ));

        let router = mocks.router();

        let response = router
            .handle(ApiRequest::new("PUT", "/orders/7").with_body(json!({ "data": {} })))
            .await;
        assert_eq!(response.status, 400);
        assert_eq!(
            response.error_message(),
            Some("A delivered order cannot be changed")
        );

        let response = router.handle(ApiRequest::new("GET", "/dishes/9")).await;
        assert_eq!(response.status, 404);
        assert_eq!(response.error_message(), Some("Dish 9 not found"));

        mocks.verify();
    }

    #[tokio::test]
    async fn test_delete_answers_204_without_body() {
        let mut mocks = Mocks::new();
        mocks.orders.expect_delete("7").return_ok(());

        let response = mocks
            .router()
            .handle(ApiRequest::new("DELETE", "/orders/7"))
            .await;

        assert_eq!(response, ApiResponse::no_content());
        mocks.verify();
    }

    #[tokio::test]
    async fn test_unsupported_method_is_405() {
        let mocks = Mocks::new();
        let router = mocks.router();

        let response = router.handle(ApiRequest::new("DELETE", "/dishes/1")).await;
        assert_eq!(response.status, 405);
        assert_eq!(
            response.error_message(),
            Some("DELETE not allowed for /dishes/1")
        );

        let response = router.handle(ApiRequest::new("PATCH", "/orders")).await;
        assert_eq!(response.error_message(), Some("PATCH not allowed for /orders"));
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let mocks = Mocks::new();
        let response = mocks.router().handle(ApiRequest::new("GET", "/menu")).await;

        assert_eq!(response.status, 404);
        assert_eq!(response.error_message(), Some("Path not found: /menu"));
    }

    #[tokio::test]
    async fn test_actor_failure_is_500() {
        let mut mocks = Mocks::new();
        mocks.orders.expect_list().return_err(FrameworkError::ActorClosed);

        let response = mocks.router().handle(ApiRequest::new("GET", "/orders")).await;

        assert_eq!(response.status, 500);
        assert_eq!(response.error_message(), Some(INTERNAL_MESSAGE));
    }

    #[tokio::test]
    async fn test_list_wraps_array_in_data() {
        let mut mocks = Mocks::new();
        let order = Order::new(
            "7",
            "1 Main St",
            "555",
            OrderStatus::Pending,
            vec![OrderLineItem::new("1", 2)],
        );
        mocks.orders.expect_list().return_ok(vec![order]);

        let response = mocks.router().handle(ApiRequest::new("GET", "/orders/")).await;

        assert_eq!(response.status, 200);
        assert_eq!(
            response.body,
            Some(json!({ "data": [{
                "id": "7",
                "deliverTo": "1 Main St",
                "mobileNumber": "555",
                "status": "pending",
                "dishes": [{ "id": "1", "quantity": 2 }]
            }]}))
        );
    }
}
