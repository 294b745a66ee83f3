//! Operation: orders.delete

use tracing::debug;

use crate::error::{HandlerError, StoreError};
use crate::pipeline::{exists, Pipeline, Response};
use crate::store::Resource;

use super::{is_order_pending, Order, OrderContext};

pub const OPERATION: &str = "orders.delete";

pub fn pipeline() -> Pipeline<OrderContext> {
    Pipeline::builder(OPERATION)
        .step(exists())
        .step(is_order_pending())
        .handle(handle)
}

pub fn handle(ctx: OrderContext) -> Result<Response, HandlerError> {
    let id = ctx.route_id();
    let index = ctx
        .store()
        .position(id)?
        .ok_or_else(|| StoreError::Missing {
            collection: Order::COLLECTION,
            id: id.to_string(),
        })?;
    ctx.store().remove_at(index)?;
    debug!(id = %id, index, "order deleted");
    Response::no_content()
}
