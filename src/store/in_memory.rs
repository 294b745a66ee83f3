//! InMemoryStore - Vec-backed store for the demo service and tests.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{Resource, Store};
use crate::error::StoreError;

/// In-memory store backed by a `Vec`, preserving insertion order.
///
/// Clone-friendly via Arc; clones share the same collection.
#[derive(Clone)]
pub struct InMemoryStore<T> {
    items: Arc<RwLock<Vec<T>>>,
}

impl<T: Resource> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Resource> InMemoryStore<T> {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Create a store pre-populated with `items` (e.g. seed data).
    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<T>>, StoreError> {
        self.items
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<T>>, StoreError> {
        self.items
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))
    }
}

impl<T: Resource> Store<T> for InMemoryStore<T> {
    fn list(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.read()?.clone())
    }

    fn find(&self, id: &str) -> Result<Option<T>, StoreError> {
        Ok(self.read()?.iter().find(|item| item.id() == id).cloned())
    }

    fn position(&self, id: &str) -> Result<Option<usize>, StoreError> {
        Ok(self.read()?.iter().position(|item| item.id() == id))
    }

    fn append(&self, entity: T) -> Result<(), StoreError> {
        self.write()?.push(entity);
        Ok(())
    }

    fn replace(&self, id: &str, entity: T) -> Result<(), StoreError> {
        let mut items = self.write()?;
        let slot = items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| StoreError::Missing {
                collection: T::COLLECTION,
                id: id.to_string(),
            })?;
        *slot = entity;
        Ok(())
    }

    fn remove_at(&self, index: usize) -> Result<T, StoreError> {
        let mut items = self.write()?;
        if index >= items.len() {
            return Err(StoreError::IndexOutOfRange {
                collection: T::COLLECTION,
                index,
                len: items.len(),
            });
        }
        Ok(items.remove(index))
    }

    fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.len())
    }
}
