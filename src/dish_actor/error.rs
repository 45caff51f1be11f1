//! Error types for the Dish actor.

use crate::framework::{FrameworkError, Rejection};
use thiserror::Error;

/// Errors that can occur during dish operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DishError {
    /// A pipeline check refused the request.
    #[error(transparent)]
    Rejected(#[from] Rejection),

    /// The operation does not exist for dishes.
    #[error("Operation not supported: {0}")]
    Unsupported(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for DishError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Rejected(rejection) => DishError::Rejected(rejection),
            FrameworkError::Unsupported(op) => DishError::Unsupported(op),
            other => DishError::ActorCommunicationError(other.to_string()),
        }
    }
}
