//! orders - Order resource, its status state machine, validators and pipelines.
//!
//! Same operation-module convention as [`crate::dishes`], plus a delete
//! operation gated on the order still being pending.

mod status;
mod validate;

pub mod create;
pub mod delete;
pub mod list;
pub mod read;
pub mod update;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ids::IdGenerator;
use crate::pipeline::Context;
use crate::service::Service;
use crate::store::{Resource, Store};

pub use status::{OrderStatus, UnknownStatus};
pub use validate::{
    dish_property_is_valid, is_order_pending, quantity_property_is_valid, status_is_delivered,
    status_is_valid, status_is_valid_if_present,
};

/// Context type shared by every order pipeline.
pub type OrderContext = Context<Order, OrderLocals>;

/// Order-specific context populated by validation steps.
#[derive(Debug, Default)]
pub struct OrderLocals {
    /// Raw line items attached by `dish_property_is_valid`.
    pub line_items: Option<Vec<Value>>,
}

/// A customer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    #[serde(default)]
    pub status: OrderStatus,
    pub dishes: Vec<LineItem>,
}

impl Resource for Order {
    const LABEL: &'static str = "Order";
    const COLLECTION: &'static str = "orders";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

/// A dish reference embedded in an order, with its own quantity.
///
/// The dish fields are kept as sent; the order does not own the dish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(flatten)]
    pub dish: Map<String, Value>,
    pub quantity: u64,
}

impl LineItem {
    /// Id of the referenced dish, when the line item embeds one.
    pub fn dish_id(&self) -> Option<&str> {
        self.dish.get("id").and_then(Value::as_str)
    }
}

/// The client-writable fields of an order. Any `id` in the body is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInput {
    pub deliver_to: String,
    pub mobile_number: String,
    #[serde(default)]
    pub status: Option<OrderStatus>,
    pub dishes: Vec<LineItem>,
}

impl OrderInput {
    /// Build a new order; status defaults to `pending`.
    pub fn into_order(self, id: String) -> Order {
        Order {
            id,
            deliver_to: self.deliver_to,
            mobile_number: self.mobile_number,
            status: self.status.unwrap_or_default(),
            dishes: self.dishes,
        }
    }

    /// Overwrite every mutable field of `order`.
    pub fn apply(self, order: &mut Order) {
        order.deliver_to = self.deliver_to;
        order.mobile_number = self.mobile_number;
        if let Some(status) = self.status {
            order.status = status;
        }
        order.dishes = self.dishes;
    }
}

/// Register every order pipeline on `service`.
pub fn register(
    service: Service,
    store: Arc<dyn Store<Order>>,
    ids: Arc<dyn IdGenerator>,
) -> Service {
    crate::register_pipelines!(service, store, ids, list, create, read, update, delete)
}
