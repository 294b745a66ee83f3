//! Operation: orders.create

use tracing::debug;

use crate::error::HandlerError;
use crate::pipeline::{body_data_has, body_data_is_text, Pipeline, Response};

use super::{
    dish_property_is_valid, quantity_property_is_valid, status_is_valid_if_present, OrderContext,
    OrderInput,
};

pub const OPERATION: &str = "orders.create";

pub fn pipeline() -> Pipeline<OrderContext> {
    Pipeline::builder(OPERATION)
        .step(body_data_has("deliverTo"))
        .step(body_data_is_text("deliverTo"))
        .step(body_data_has("mobileNumber"))
        .step(body_data_is_text("mobileNumber"))
        .step(status_is_valid_if_present())
        .step(dish_property_is_valid())
        .step(quantity_property_is_valid())
        .handle(handle)
}

pub fn handle(ctx: OrderContext) -> Result<Response, HandlerError> {
    let input: OrderInput = ctx.data_as()?;
    let order = input.into_order(ctx.next_id());
    ctx.store().append(order.clone())?;
    debug!(id = %order.id, status = %order.status, "order created");
    Response::created(&order)
}
