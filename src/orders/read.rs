//! Operation: orders.read

use crate::error::HandlerError;
use crate::pipeline::{exists, Pipeline, Response};

use super::OrderContext;

pub const OPERATION: &str = "orders.read";

pub fn pipeline() -> Pipeline<OrderContext> {
    Pipeline::builder(OPERATION)
        .step(exists())
        .handle(handle)
}

pub fn handle(ctx: OrderContext) -> Result<Response, HandlerError> {
    Response::ok(ctx.resolved()?)
}
