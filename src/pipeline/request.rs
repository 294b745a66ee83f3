//! Inbound request and outbound response for pipeline dispatch.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::HandlerError;

static NULL: Value = Value::Null;

/// An inbound request: the route identifier (if the path has one) and the JSON body.
#[derive(Debug, Clone, Default)]
pub struct Request {
    route_id: Option<String>,
    body: Value,
}

impl Request {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_route_id(mut self, id: impl Into<String>) -> Self {
        self.route_id = Some(id.into());
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = body;
        self
    }

    pub fn route_id(&self) -> Option<&str> {
        self.route_id.as_deref()
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    /// The body's nested `data` object, or `null` when absent.
    pub fn data(&self) -> &Value {
        self.body.get("data").unwrap_or(&NULL)
    }
}

/// Response produced by a handler, or by the boundary from an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// HTTP-style status code.
    pub status: u16,
    /// Response body; `None` for 204.
    pub body: Option<Value>,
}

impl Response {
    /// 200 with `{ "data": ... }`.
    pub fn ok<D: Serialize + ?Sized>(data: &D) -> Result<Self, HandlerError> {
        Self::with_data(200, data)
    }

    /// 201 with `{ "data": ... }`.
    pub fn created<D: Serialize + ?Sized>(data: &D) -> Result<Self, HandlerError> {
        Self::with_data(201, data)
    }

    /// 204 with no body.
    pub fn no_content() -> Result<Self, HandlerError> {
        Ok(Self {
            status: 204,
            body: None,
        })
    }

    /// Error response: `{ "error": message }` with the error's status code.
    pub fn from_error(err: &HandlerError) -> Self {
        Self {
            status: err.status_code(),
            body: Some(json!({ "error": err.to_string() })),
        }
    }

    /// The `data` payload of a success body.
    pub fn data(&self) -> Option<&Value> {
        self.body.as_ref().and_then(|body| body.get("data"))
    }

    fn with_data<D: Serialize + ?Sized>(status: u16, data: &D) -> Result<Self, HandlerError> {
        Ok(Self {
            status,
            body: Some(json!({ "data": serde_json::to_value(data)? })),
        })
    }
}

impl From<HandlerError> for Response {
    fn from(err: HandlerError) -> Self {
        Self::from_error(&err)
    }
}
