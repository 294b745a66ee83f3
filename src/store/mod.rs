//! Resource stores - insertion-ordered entity collections.
//!
//! Validation steps and handlers only talk to the [`Store`] trait, so the
//! in-memory backend can be swapped for real persistence without touching
//! pipeline code.
//!
//! ## Example
//!
//! ```ignore
//! use grubdash::{InMemoryStore, Store};
//!
//! let store = InMemoryStore::<Dish>::new();
//! store.append(dish)?;
//! let found = store.find("d1")?;
//! ```

mod in_memory;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::StoreError;

/// Trait for entities held in a [`Store`].
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Singular label used in user-facing messages (e.g. "Dish").
    const LABEL: &'static str;

    /// Collection name (e.g. "dishes").
    const COLLECTION: &'static str;

    /// Returns the unique identifier for this entity.
    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);
}

/// Insertion-ordered storage for one resource type.
pub trait Store<T: Resource>: Send + Sync {
    /// All entities, in insertion order.
    fn list(&self) -> Result<Vec<T>, StoreError>;

    /// First entity whose id equals `id`.
    fn find(&self, id: &str) -> Result<Option<T>, StoreError>;

    /// Index of the entity whose id equals `id`.
    fn position(&self, id: &str) -> Result<Option<usize>, StoreError>;

    /// Append an entity at the end of the collection.
    fn append(&self, entity: T) -> Result<(), StoreError>;

    /// Overwrite the entity currently stored under `id` in place.
    fn replace(&self, id: &str, entity: T) -> Result<(), StoreError>;

    /// Remove exactly one entity at `index`, returning it.
    fn remove_at(&self, index: usize) -> Result<T, StoreError>;

    fn len(&self) -> Result<usize, StoreError>;

    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

pub use in_memory::InMemoryStore;
