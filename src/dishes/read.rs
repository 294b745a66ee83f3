//! Operation: dishes.read

use crate::error::HandlerError;
use crate::pipeline::{exists, Pipeline, Response};

use super::DishContext;

pub const OPERATION: &str = "dishes.read";

pub fn pipeline() -> Pipeline<DishContext> {
    Pipeline::builder(OPERATION)
        .step(exists())
        .handle(handle)
}

pub fn handle(ctx: DishContext) -> Result<Response, HandlerError> {
    Response::ok(ctx.resolved()?)
}
