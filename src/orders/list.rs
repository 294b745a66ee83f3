//! Operation: orders.list

use crate::error::HandlerError;
use crate::pipeline::{Pipeline, Response};

use super::OrderContext;

pub const OPERATION: &str = "orders.list";

pub fn pipeline() -> Pipeline<OrderContext> {
    Pipeline::builder(OPERATION).handle(handle)
}

pub fn handle(ctx: OrderContext) -> Result<Response, HandlerError> {
    Response::ok(&ctx.store().list()?)
}
