//! Service - named pipeline registry and dispatch.
//!
//! `Service` maps operation names (`"dishes.create"`, `"orders.delete"`, ...)
//! to pipelines bound to their stores. Every dispatch runs its whole
//! pipeline while holding the service gate, so no two pipelines interleave
//! their find/mutate sequences.
//!
//! ## Example
//!
//! ```ignore
//! use grubdash::{service, Request};
//! use serde_json::json;
//!
//! let service = service::in_memory();
//! let response = service.dispatch(
//!     "dishes.create",
//!     Request::new().with_body(json!({ "data": { "name": "Pizza", /* ... */ } })),
//! )?;
//! assert_eq!(response.status, 201);
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{error, info};

use crate::config::Seed;
use crate::dishes::{self, Dish};
use crate::error::HandlerError;
use crate::ids::{IdGenerator, UuidIds};
use crate::orders::{self, Order};
use crate::pipeline::{Context, Pipeline, Request, Response};
use crate::store::{InMemoryStore, Resource, Store};

type Operation = Box<dyn Fn(Request) -> Result<Response, HandlerError> + Send + Sync>;

/// A registry of named operations sharing one dispatch gate.
pub struct Service {
    operations: HashMap<String, Operation>,
    gate: Mutex<()>,
}

impl Default for Service {
    fn default() -> Self {
        Self::new()
    }
}

impl Service {
    /// Create a service with no operations.
    pub fn new() -> Self {
        Self {
            operations: HashMap::new(),
            gate: Mutex::new(()),
        }
    }

    /// Register an operation.
    ///
    /// Uses builder pattern - returns `self` for chaining.
    pub fn operation<F>(mut self, name: &str, operation: F) -> Self
    where
        F: Fn(Request) -> Result<Response, HandlerError> + Send + Sync + 'static,
    {
        self.operations.insert(name.to_string(), Box::new(operation));
        self
    }

    /// Register a pipeline under its own name, bound to `store` and `ids`.
    pub fn pipeline<T, L>(
        self,
        pipeline: Pipeline<Context<T, L>>,
        store: Arc<dyn Store<T>>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self
    where
        T: Resource,
        L: Default + 'static,
    {
        let name = pipeline.name().to_string();
        self.operation(&name, move |request| {
            pipeline.run(Context::new(request, store.clone(), ids.clone()))
        })
    }

    /// Run the named operation against `request`.
    pub fn dispatch(&self, name: &str, request: Request) -> Result<Response, HandlerError> {
        let operation = self
            .operations
            .get(name)
            .ok_or_else(|| HandlerError::UnknownOperation(name.to_string()))?;

        let _gate = self.gate.lock().unwrap_or_else(PoisonError::into_inner);
        operation(request)
    }

    /// Dispatch and fold any error into an `{ "error": ... }` response.
    pub fn respond(&self, name: &str, request: Request) -> Response {
        match self.dispatch(name, request) {
            Ok(response) => {
                info!(operation = name, status = response.status, "handled");
                response
            }
            Err(err) => {
                let response = Response::from_error(&err);
                if response.status >= 500 {
                    error!(operation = name, status = response.status, error = %err, "failed");
                } else {
                    info!(operation = name, status = response.status, error = %err, "rejected");
                }
                response
            }
        }
    }

    /// Registered operation names, sorted.
    pub fn operations(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.operations.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

/// Build the full dishes + orders service over the given stores.
pub fn build(
    dishes: Arc<dyn Store<Dish>>,
    orders: Arc<dyn Store<Order>>,
    ids: Arc<dyn IdGenerator>,
) -> Service {
    let service = dishes::register(Service::new(), dishes, ids.clone());
    orders::register(service, orders, ids)
}

/// Empty in-memory stores with random ids.
pub fn in_memory() -> Service {
    seeded(Seed::default())
}

/// In-memory stores pre-populated from `seed`, with random ids.
pub fn seeded(seed: Seed) -> Service {
    build(
        Arc::new(InMemoryStore::with_items(seed.dishes)),
        Arc::new(InMemoryStore::with_items(seed.orders)),
        Arc::new(UuidIds),
    )
}

/// Register operation modules with a service using the convention pattern.
///
/// Each module must export `pipeline()` returning a `Pipeline` named after
/// the operation.
///
/// # Example
/// ```ignore
/// let service = grubdash::register_pipelines!(
///     Service::new(), store, ids,
///     dishes::create,
///     dishes::read,
/// );
/// ```
#[macro_export]
macro_rules! register_pipelines {
    ($service:expr, $store:expr, $ids:expr, $( $($seg:ident)::+ ),+ $(,)?) => {
        $service
        $(
            .pipeline(
                $($seg)::+::pipeline(),
                $store.clone(),
                $ids.clone(),
            )
        )+
    };
}
