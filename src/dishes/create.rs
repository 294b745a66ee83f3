//! Operation: dishes.create

use tracing::debug;

use crate::error::HandlerError;
use crate::pipeline::{body_data_has, body_data_is_text, Pipeline, Response};

use super::{price_is_valid, DishContext, DishInput};

pub const OPERATION: &str = "dishes.create";

pub fn pipeline() -> Pipeline<DishContext> {
    Pipeline::builder(OPERATION)
        .step(body_data_has("name"))
        .step(body_data_is_text("name"))
        .step(body_data_has("description"))
        .step(body_data_is_text("description"))
        .step(body_data_has("price"))
        .step(body_data_has("image_url"))
        .step(body_data_is_text("image_url"))
        .step(price_is_valid())
        .handle(handle)
}

pub fn handle(ctx: DishContext) -> Result<Response, HandlerError> {
    let input: DishInput = ctx.data_as()?;
    let dish = input.into_dish(ctx.next_id());
    ctx.store().append(dish.clone())?;
    debug!(id = %dish.id, "dish created");
    Response::created(&dish)
}
