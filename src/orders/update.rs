//! Operation: orders.update

use tracing::debug;

use crate::error::HandlerError;
use crate::pipeline::{
    body_data_has, body_data_is_text, exists, id_matches, Pipeline, Response,
};
use crate::store::Resource;

use super::{
    dish_property_is_valid, quantity_property_is_valid, status_is_delivered, status_is_valid,
    OrderContext, OrderInput,
};

pub const OPERATION: &str = "orders.update";

pub fn pipeline() -> Pipeline<OrderContext> {
    Pipeline::builder(OPERATION)
        .step(exists())
        .step(body_data_has("deliverTo"))
        .step(body_data_is_text("deliverTo"))
        .step(body_data_has("mobileNumber"))
        .step(body_data_is_text("mobileNumber"))
        .step(id_matches())
        .step(status_is_valid())
        .step(dish_property_is_valid())
        .step(quantity_property_is_valid())
        .step(status_is_delivered())
        .handle(handle)
}

pub fn handle(mut ctx: OrderContext) -> Result<Response, HandlerError> {
    let input: OrderInput = ctx.data_as()?;
    let mut order = ctx.take_resolved()?;
    let stored_id = order.id.clone();
    let previous = order.status;

    input.apply(&mut order);
    order.set_id(ctx.route_id().to_string());

    ctx.store().replace(&stored_id, order.clone())?;
    debug!(id = %order.id, from = %previous, to = %order.status, "order updated");
    Response::ok(&order)
}
