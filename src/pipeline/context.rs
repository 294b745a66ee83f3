//! Per-request context threaded through every step and the handler.
//!
//! Carries the request, the resource store, the id generator, the entity
//! resolved by an existence step, and resource-specific locals `L`.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::request::Request;
use super::steps::is_truthy;
use crate::error::HandlerError;
use crate::ids::IdGenerator;
use crate::store::{Resource, Store};

/// The context passed to every step and to the terminal handler.
///
/// Generic over `T` (the resource type) and `L` (typed scratch space a
/// resource's own steps populate, `()` when unused).
pub struct Context<T: Resource, L = ()> {
    request: Request,
    store: Arc<dyn Store<T>>,
    ids: Arc<dyn IdGenerator>,
    resolved: Option<T>,
    locals: L,
}

impl<T: Resource, L: Default> Context<T, L> {
    pub fn new(request: Request, store: Arc<dyn Store<T>>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            request,
            store,
            ids,
            resolved: None,
            locals: L::default(),
        }
    }
}

impl<T: Resource, L> Context<T, L> {
    pub fn request(&self) -> &Request {
        &self.request
    }

    /// Identifier from the request path; empty when the route has none.
    pub fn route_id(&self) -> &str {
        self.request.route_id().unwrap_or_default()
    }

    /// The body's `data` object (`null` when absent).
    pub fn data(&self) -> &Value {
        self.request.data()
    }

    /// A field of the body's `data` object.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.data().get(name)
    }

    /// True when `data[name]` is present and truthy.
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some_and(is_truthy)
    }

    /// Decode the body's `data` object into a typed struct.
    pub fn data_as<D: DeserializeOwned>(&self) -> Result<D, HandlerError> {
        serde_json::from_value(self.data().clone())
            .map_err(|e| HandlerError::DecodeFailed(e.to_string()))
    }

    pub fn store(&self) -> &dyn Store<T> {
        self.store.as_ref()
    }

    /// A fresh identifier from the injected generator.
    pub fn next_id(&self) -> String {
        self.ids.next_id()
    }

    /// Attach the entity an existence step found.
    pub fn resolve(&mut self, entity: T) {
        self.resolved = Some(entity);
    }

    pub fn resolved(&self) -> Result<&T, HandlerError> {
        self.resolved
            .as_ref()
            .ok_or(HandlerError::MissingContext(T::COLLECTION))
    }

    pub fn take_resolved(&mut self) -> Result<T, HandlerError> {
        self.resolved
            .take()
            .ok_or(HandlerError::MissingContext(T::COLLECTION))
    }

    pub fn locals(&self) -> &L {
        &self.locals
    }

    pub fn locals_mut(&mut self) -> &mut L {
        &mut self.locals
    }
}
