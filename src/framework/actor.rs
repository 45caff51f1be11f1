//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the core component that owns a
//! [`ResourceStore`] and serializes every operation on it. It implements the
//! "Server" side of the Actor Model: messages are processed one at a time, so a
//! pipeline and the mutation it guards can never interleave with another request
//! on the same store.
//!
//! ## Operations
//!
//! * **List**: snapshot of the store in insertion order.
//! * **Create**: runs the create pipeline, draws a new id, builds the entity from
//!   the validated locals and appends it.
//! * **Read**: runs the read pipeline and returns the entity it bound.
//! * **Update**: runs the update pipeline, then overwrites the stored entity's
//!   mutable fields in place.
//! * **Delete**: runs the delete pipeline (if the entity has one), then removes
//!   the entity from the store.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::{FrameworkError, Rejection};
use crate::framework::id::IdGenerator;
use crate::framework::message::ResourceRequest;
use crate::framework::pipeline::{Payload, Pipeline, RequestContext};
use crate::framework::store::ResourceStore;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// **Concurrency Model**:
/// Each actor processes its own messages *sequentially* in a loop. This means we
/// don't need `Mutex` or `RwLock` for the `store`! The actor gives us safety through
/// exclusive ownership of state within the task.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn the actor's run loop in a background task.
/// 3.  **Use**: Clone the client freely; dropping every clone stops the actor.
///
/// ```rust
/// use grubdash::framework::{IdGenerator, Payload, ResourceActor};
/// use grubdash::model::Dish;
/// use serde_json::json;
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Dish>::new(10, IdGenerator::new());
///     tokio::spawn(actor.run());
///
///     let payload = Payload::new(json!({ "data": {
///         "name": "Pasta", "description": "Fresh", "price": 12, "image_url": "http://x"
///     }}));
///     let dish = client.create(payload).await.unwrap();
///     assert_eq!(client.read(dish.id.clone()).await.unwrap(), dish);
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: ResourceStore<T>,
    ids: IdGenerator,
    create: Pipeline<T>,
    read: Pipeline<T>,
    update: Pipeline<T>,
    delete: Option<Pipeline<T>>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` with an empty store, and its `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `ids` - Identifier source for created entities.
    pub fn new(buffer_size: usize, ids: IdGenerator) -> (Self, ResourceClient<T>) {
        Self::with_store(buffer_size, ids, ResourceStore::new())
    }

    /// Like [`ResourceActor::new`], starting from a pre-populated store.
    pub fn with_store(
        buffer_size: usize,
        ids: IdGenerator,
        store: ResourceStore<T>,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store,
            ids,
            create: T::create_pipeline(),
            read: T::read_pipeline(),
            update: T::update_pipeline(),
            delete: T::delete_pipeline(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self) {
        let entity_type = T::KIND;
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.list().to_vec()));
                }
                ResourceRequest::Create { payload, respond_to } => {
                    debug!(entity_type, ?payload, "Create");
                    let result = self.create(&payload);
                    match &result {
                        Ok(item) => {
                            info!(entity_type, id = item.id(), size = self.store.len(), "Created")
                        }
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result.map_err(FrameworkError::from));
                }
                ResourceRequest::Read { id, respond_to } => {
                    let result = self.read(&id);
                    debug!(entity_type, %id, found = result.is_ok(), "Read");
                    let _ = respond_to.send(result.map_err(FrameworkError::from));
                }
                ResourceRequest::Update {
                    id,
                    payload,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?payload, "Update");
                    let result = self.update(&id, &payload);
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result.map_err(FrameworkError::from));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&id);
                    match &result {
                        Ok(()) => info!(entity_type, %id, size = self.store.len(), "Deleted"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn create(&mut self, payload: &Payload) -> Result<T, Rejection> {
        let mut ctx = RequestContext::new(None, payload);
        self.create.run(&mut ctx, &self.store)?;

        let item = T::from_locals(self.ids.next_id(), &ctx.locals)?;
        self.store.append(item.clone());
        Ok(item)
    }

    fn read(&self, id: &str) -> Result<T, Rejection> {
        let mut ctx = RequestContext::for_route(id);
        self.read.run(&mut ctx, &self.store)?;
        ctx.existing().cloned()
    }

    fn update(&mut self, id: &str, payload: &Payload) -> Result<T, Rejection> {
        let mut ctx = RequestContext::new(Some(id.to_string()), payload);
        self.update.run(&mut ctx, &self.store)?;

        let item = self
            .store
            .find_mut(id)
            .ok_or_else(|| Rejection::not_found(format!("{} {} not found", T::KIND, id)))?;
        item.apply_locals(&ctx.locals)?;
        Ok(item.clone())
    }

    fn delete(&mut self, id: &str) -> Result<(), FrameworkError> {
        let pipeline = self
            .delete
            .as_ref()
            .ok_or_else(|| FrameworkError::Unsupported(format!("delete {}", T::KIND)))?;

        let mut ctx = RequestContext::for_route(id);
        pipeline.run(&mut ctx, &self.store)?;

        let existing = ctx.existing()?;
        self.store.remove_by_id(existing.id());
        Ok(())
    }
}
