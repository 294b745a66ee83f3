use serde_json::Value;

use crate::error::HandlerError;
use crate::pipeline::{positive_integer, Step};

use super::{OrderContext, OrderStatus};

/// `dishes` must be a non-empty array; attaches it as the order's line items.
pub fn dish_property_is_valid() -> Step<OrderContext> {
    Step::new("dish_property_is_valid", |ctx: &mut OrderContext| {
        let dishes = match ctx.field("dishes") {
            Some(Value::Array(items)) if !items.is_empty() => items.clone(),
            _ => {
                return Err(HandlerError::Invalid(
                    "Order must include at least one dish".into(),
                ))
            }
        };
        ctx.locals_mut().line_items = Some(dishes);
        Ok(())
    })
}

/// Every line item needs an integer `quantity` > 0. Reports only the first offender.
pub fn quantity_property_is_valid() -> Step<OrderContext> {
    Step::new("quantity_property_is_valid", |ctx: &mut OrderContext| {
        let line_items = ctx
            .locals()
            .line_items
            .as_ref()
            .ok_or(HandlerError::MissingContext("line items"))?;

        let offender = line_items
            .iter()
            .position(|item| positive_integer(item.get("quantity")).is_err());

        match offender {
            None => Ok(()),
            Some(index) => Err(HandlerError::Invalid(format!(
                "Dish {} must have a quantity that is an integer greater than 0",
                index
            ))),
        }
    })
}

fn is_known_status(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|s| s.parse::<OrderStatus>().is_ok())
}

fn invalid_status() -> HandlerError {
    HandlerError::Invalid(
        "Order must have a status of pending, preparing, out-for-delivery, delivered".into(),
    )
}

/// Body `status` must be one of the four status values.
pub fn status_is_valid() -> Step<OrderContext> {
    Step::new("status_is_valid", |ctx: &mut OrderContext| {
        match ctx.field("status") {
            Some(status) if is_known_status(status) => Ok(()),
            _ => Err(invalid_status()),
        }
    })
}

/// Like [`status_is_valid`], but an absent or `null` status passes (create defaults it).
pub fn status_is_valid_if_present() -> Step<OrderContext> {
    Step::new("status_is_valid_if_present", |ctx: &mut OrderContext| {
        match ctx.field("status") {
            None | Some(Value::Null) => Ok(()),
            Some(status) if is_known_status(status) => Ok(()),
            Some(_) => Err(invalid_status()),
        }
    })
}

/// The stored order must not already be delivered.
///
/// Checks the stored status, not the body's: moving an order to
/// `delivered` is accepted once, and every later update is rejected.
pub fn status_is_delivered() -> Step<OrderContext> {
    Step::new("status_is_delivered", |ctx: &mut OrderContext| {
        let current = ctx.resolved()?.status;
        let next = ctx
            .field("status")
            .and_then(Value::as_str)
            .and_then(|s| s.parse::<OrderStatus>().ok())
            .unwrap_or(current);
        if current.can_transition_to(next) {
            Ok(())
        } else {
            Err(HandlerError::Invalid(
                "A delivered order cannot be changed".into(),
            ))
        }
    })
}

/// Only a stored order whose status is exactly `pending` may be deleted.
pub fn is_order_pending() -> Step<OrderContext> {
    Step::new("is_order_pending", |ctx: &mut OrderContext| {
        if ctx.resolved()?.status.can_delete() {
            Ok(())
        } else {
            Err(HandlerError::Invalid(
                "An order cannot be deleted unless it is pending".into(),
            ))
        }
    })
}
