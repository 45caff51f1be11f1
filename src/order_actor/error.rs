//! Error types for the Order actor.

use crate::framework::{FrameworkError, Rejection};
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// A pipeline check refused the request.
    #[error(transparent)]
    Rejected(#[from] Rejection),

    /// The operation does not exist for orders.
    #[error("Operation not supported: {0}")]
    Unsupported(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Rejected(rejection) => OrderError::Rejected(rejection),
            FrameworkError::Unsupported(op) => OrderError::Unsupported(op),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
