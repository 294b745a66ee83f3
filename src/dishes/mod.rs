//! dishes - Dish resource, its validators and its pipelines.
//!
//! Each operation module follows one convention:
//! - `OPERATION` - the operation name the pipeline is registered under
//! - `pipeline()` - the ordered validation steps plus the handler
//! - `handle` - the terminal handler
//!
//! Dishes have no delete operation.

mod validate;

pub mod create;
pub mod list;
pub mod read;
pub mod update;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::ids::IdGenerator;
use crate::pipeline::Context;
use crate::service::Service;
use crate::store::{Resource, Store};

pub use validate::price_is_valid;

/// Context type shared by every dish pipeline.
pub type DishContext = Context<Dish>;

/// A dish on the menu. `price` is in currency minor units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

impl Resource for Dish {
    const LABEL: &'static str = "Dish";
    const COLLECTION: &'static str = "dishes";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

/// The client-writable fields of a dish. Any `id` in the body is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct DishInput {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

impl DishInput {
    pub fn into_dish(self, id: String) -> Dish {
        Dish {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            image_url: self.image_url,
        }
    }

    /// Overwrite every mutable field of `dish`.
    pub fn apply(self, dish: &mut Dish) {
        dish.name = self.name;
        dish.description = self.description;
        dish.price = self.price;
        dish.image_url = self.image_url;
    }
}

/// Register every dish pipeline on `service`.
pub fn register(
    service: Service,
    store: Arc<dyn Store<Dish>>,
    ids: Arc<dyn IdGenerator>,
) -> Service {
    crate::register_pipelines!(service, store, ids, list, create, read, update)
}
