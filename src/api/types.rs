//! Request and response types for the GrubDash API.

use crate::dish_actor::DishError;
use crate::framework::Rejection;
use crate::order_actor::OrderError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

/// Message returned for any failure that is not the caller's fault.
pub const INTERNAL_MESSAGE: &str = "Something went wrong!";

/// HTTP method of an incoming request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    /// Any other verb; never routed, but reported in 405 messages.
    Other(String),
}

impl From<&str> for Method {
    fn from(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Method::Get,
            "POST" => Method::Post,
            "PUT" => Method::Put,
            "DELETE" => Method::Delete,
            other => Method::Other(other.to_string()),
        }
    }
}

impl From<String> for Method {
    fn from(s: String) -> Self {
        Method::from(s.as_str())
    }
}

impl From<Method> for String {
    fn from(method: Method) -> Self {
        method.to_string()
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
            Method::Put => f.write_str("PUT"),
            Method::Delete => f.write_str("DELETE"),
            Method::Other(verb) => f.write_str(verb),
        }
    }
}

/// A request as handed over by the transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    /// The parsed JSON body, if any.
    #[serde(default)]
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: impl Into<Method>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Status code and optional JSON body handed back to the transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(rename = "statusCode")]
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl ApiResponse {
    /// `{ "data": value }` with the given status.
    pub fn data<S: Serialize>(status: u16, value: &S) -> Self {
        match serde_json::to_value(value) {
            Ok(data) => Self {
                status,
                body: Some(json!({ "data": data })),
            },
            Err(e) => ApiError::Internal(e.to_string()).into(),
        }
    }

    pub fn no_content() -> Self {
        Self {
            status: 204,
            body: None,
        }
    }

    /// The `error` message of a failure response.
    pub fn error_message(&self) -> Option<&str> {
        self.body.as_ref()?.get("error")?.as_str()
    }
}

/// Every way a request can fail, with the status it answers.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Rejected(Rejection),
    MethodNotAllowed { method: Method, path: String },
    PathNotFound(String),
    /// Logged, then reported as [`INTERNAL_MESSAGE`].
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Rejected(rejection) => rejection.status(),
            ApiError::MethodNotAllowed { .. } => 405,
            ApiError::PathNotFound(_) => 404,
            ApiError::Internal(_) => 500,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::Rejected(rejection) => rejection.message().to_string(),
            ApiError::MethodNotAllowed { method, path } => {
                format!("{method} not allowed for {path}")
            }
            ApiError::PathNotFound(path) => format!("Path not found: {path}"),
            ApiError::Internal(_) => INTERNAL_MESSAGE.to_string(),
        }
    }
}

impl From<ApiError> for ApiResponse {
    fn from(error: ApiError) -> Self {
        ApiResponse {
            status: error.status_code(),
            body: Some(json!({ "error": error.message() })),
        }
    }
}

impl From<DishError> for ApiError {
    fn from(e: DishError) -> Self {
        match e {
            DishError::Rejected(rejection) => ApiError::Rejected(rejection),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::Rejected(rejection) => ApiError::Rejected(rejection),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parsing() {
        assert_eq!(Method::from("get"), Method::Get);
        assert_eq!(Method::from("Delete"), Method::Delete);
        assert_eq!(Method::from("patch"), Method::Other("PATCH".to_string()));
        assert_eq!(Method::from("patch").to_string(), "PATCH");
    }

    #[test]
    fn test_error_responses() {
        let response: ApiResponse = ApiError::MethodNotAllowed {
            method: Method::Delete,
            path: "/dishes/1".to_string(),
        }
        .into();
        assert_eq!(response.status, 405);
        assert_eq!(
            response.error_message(),
            Some("DELETE not allowed for /dishes/1")
        );

        let response: ApiResponse = ApiError::Internal("channel closed".to_string()).into();
        assert_eq!(response.status, 500);
        assert_eq!(response.error_message(), Some(INTERNAL_MESSAGE));

        let response: ApiResponse =
            ApiError::Rejected(Rejection::not_found("Order 9 not found")).into();
        assert_eq!(response.status, 404);
        assert_eq!(response.error_message(), Some("Order 9 not found"));
    }

    #[test]
    fn test_response_serializes_status_code() {
        let value = serde_json::to_value(ApiResponse::no_content()).unwrap();
        assert_eq!(value, json!({ "statusCode": 204 }));
    }
}
