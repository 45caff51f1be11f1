//! # Framework Errors
//!
//! Two layers of failure live here. [`Rejection`] is the user-facing outcome of a
//! validation pipeline: every check that fails produces one, and it travels back to
//! the caller verbatim. [`FrameworkError`] wraps it together with the failures of the
//! actor plumbing itself (closed channels, unsupported operations).

/// A failed check, carrying the literal message surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// Malformed, missing or out-of-range field, illegal transition, mismatched id.
    #[error("{0}")]
    Invalid(String),
    /// The route-addressed resource is absent from its store.
    #[error("{0}")]
    NotFound(String),
}

impl Rejection {
    pub fn invalid(message: impl Into<String>) -> Self {
        Rejection::Invalid(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Rejection::NotFound(message.into())
    }

    /// Status code the transport layer reports for this rejection.
    pub fn status(&self) -> u16 {
        match self {
            Rejection::Invalid(_) => 400,
            Rejection::NotFound(_) => 404,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Rejection::Invalid(message) | Rejection::NotFound(message) => message,
        }
    }
}

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Operation not supported: {0}")]
    Unsupported(String),
    #[error(transparent)]
    Rejected(#[from] Rejection),
}
