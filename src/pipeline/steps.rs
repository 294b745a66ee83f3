//! Steps shared by every resource pipeline.

use serde_json::Value;

use super::context::Context;
use super::Step;
use crate::error::HandlerError;
use crate::store::Resource;

/// Truthiness of a JSON value: `null`, `false`, `0` and `""` are falsy,
/// everything else (including empty arrays and objects) is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |v| v != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Why a value failed [`positive_integer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerFault {
    NotInteger,
    NotPositive,
}

/// Accept only JSON integers strictly greater than zero. `10.0` is not an integer.
pub fn positive_integer(value: Option<&Value>) -> Result<u64, IntegerFault> {
    let value = value.ok_or(IntegerFault::NotInteger)?;
    if let Some(n) = value.as_u64() {
        return if n > 0 {
            Ok(n)
        } else {
            Err(IntegerFault::NotPositive)
        };
    }
    if value.as_i64().is_some() {
        return Err(IntegerFault::NotPositive);
    }
    Err(IntegerFault::NotInteger)
}

/// Resolve the route id against the store and attach the entity, or 404.
pub fn exists<T: Resource, L: 'static>() -> Step<Context<T, L>> {
    Step::new("exists", |ctx: &mut Context<T, L>| {
        let id = ctx.route_id().to_string();
        match ctx.store().find(&id)? {
            Some(entity) => {
                ctx.resolve(entity);
                Ok(())
            }
            None => Err(HandlerError::NotFound(format!(
                "{} id not found {}",
                T::LABEL,
                id
            ))),
        }
    })
}

/// Require `data[field]` to be present and truthy.
pub fn body_data_has<T: Resource, L: 'static>(field: &'static str) -> Step<Context<T, L>> {
    Step::new(
        format!("body_data_has({})", field),
        move |ctx: &mut Context<T, L>| {
            if ctx.has_field(field) {
                Ok(())
            } else {
                Err(HandlerError::Invalid(format!(
                    "{} must include a {}",
                    T::LABEL,
                    field
                )))
            }
        },
    )
}

/// Require `data[field]`, when present, to be a JSON string.
pub fn body_data_is_text<T: Resource, L: 'static>(field: &'static str) -> Step<Context<T, L>> {
    Step::new(
        format!("body_data_is_text({})", field),
        move |ctx: &mut Context<T, L>| match ctx.field(field) {
            None | Some(Value::String(_)) => Ok(()),
            Some(_) => Err(HandlerError::Invalid(format!(
                "{} {} must be a string",
                T::LABEL,
                field
            ))),
        },
    )
}

/// A body `id`, when supplied, must equal the route id.
pub fn id_matches<T: Resource, L: 'static>() -> Step<Context<T, L>> {
    Step::new("id_matches", |ctx: &mut Context<T, L>| {
        let route_id = ctx.route_id();
        let body_id = match ctx.field("id") {
            Some(id) if is_truthy(id) => id,
            _ => return Ok(()),
        };
        if body_id.as_str() == Some(route_id) {
            return Ok(());
        }
        let shown = match body_id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        Err(HandlerError::Invalid(format!(
            "{label} id does not match route id. {label}: {shown}, Route: {route_id}",
            label = T::LABEL,
        )))
    })
}
