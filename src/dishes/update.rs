//! Operation: dishes.update

use crate::error::HandlerError;
use crate::pipeline::{
    body_data_has, body_data_is_text, exists, id_matches, Pipeline, Response,
};
use crate::store::Resource;

use super::{price_is_valid, DishContext, DishInput};

pub const OPERATION: &str = "dishes.update";

pub fn pipeline() -> Pipeline<DishContext> {
    Pipeline::builder(OPERATION)
        .step(exists())
        .step(body_data_has("name"))
        .step(body_data_is_text("name"))
        .step(body_data_has("description"))
        .step(body_data_is_text("description"))
        .step(body_data_has("price"))
        .step(body_data_has("image_url"))
        .step(body_data_is_text("image_url"))
        .step(price_is_valid())
        .step(id_matches())
        .handle(handle)
}

pub fn handle(mut ctx: DishContext) -> Result<Response, HandlerError> {
    let input: DishInput = ctx.data_as()?;
    let mut dish = ctx.take_resolved()?;
    let stored_id = dish.id.clone();

    input.apply(&mut dish);
    dish.set_id(ctx.route_id().to_string());

    ctx.store().replace(&stored_id, dish.clone())?;
    Response::ok(&dish)
}
