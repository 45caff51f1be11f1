//! # Resource Store
//!
//! An ordered, in-memory collection of entities. A store is owned by exactly one
//! [`ResourceActor`](crate::framework::ResourceActor), whose sequential message loop
//! is the only code that touches it; the store itself takes no locks.

use crate::framework::entity::ActorEntity;

#[derive(Debug, Clone)]
pub struct ResourceStore<T: ActorEntity> {
    items: Vec<T>,
}

impl<T: ActorEntity> ResourceStore<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Builds a store pre-populated with `seed`, in the given order.
    pub fn with_seed(seed: Vec<T>) -> Self {
        Self { items: seed }
    }

    /// Full snapshot in insertion order.
    pub fn list(&self) -> &[T] {
        &self.items
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Adds `item` at the end. Id uniqueness is the id generator's job.
    pub fn append(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes the entity with `id`, returning it. Absent ids leave the store as is.
    pub fn remove_by_id(&mut self, id: &str) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: ActorEntity> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
