//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::pipeline::Payload;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map directly to the resource operations. Writes carry the raw
/// [`Payload`]; validation happens inside the actor, next to the store, so the
/// pipeline and the mutation it guards run as one uninterrupted step.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Create {
        payload: Payload,
        respond_to: Response<T>,
    },
    Read {
        id: String,
        respond_to: Response<T>,
    },
    Update {
        id: String,
        payload: Payload,
        respond_to: Response<T>,
    },
    Delete {
        id: String,
        respond_to: Response<()>,
    },
}
