//! Operation: dishes.list

use crate::error::HandlerError;
use crate::pipeline::{Pipeline, Response};

use super::DishContext;

pub const OPERATION: &str = "dishes.list";

pub fn pipeline() -> Pipeline<DishContext> {
    Pipeline::builder(OPERATION).handle(handle)
}

pub fn handle(ctx: DishContext) -> Result<Response, HandlerError> {
    Response::ok(&ctx.store().list()?)
}
