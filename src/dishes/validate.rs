use crate::error::HandlerError;
use crate::pipeline::{positive_integer, IntegerFault, Step};

use super::DishContext;

/// `price` must be an integer strictly greater than zero.
pub fn price_is_valid() -> Step<DishContext> {
    Step::new("price_is_valid", |ctx: &mut DishContext| {
        match positive_integer(ctx.field("price")) {
            Ok(_) => Ok(()),
            Err(IntegerFault::NotInteger) => Err(HandlerError::Invalid(
                "Given price is not an integer".into(),
            )),
            Err(IntegerFault::NotPositive) => Err(HandlerError::Invalid(
                "Given price is equal to or less than $0.00".into(),
            )),
        }
    })
}
