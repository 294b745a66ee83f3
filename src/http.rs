//! HTTP transport - maps REST routes to named pipeline dispatch.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET|POST /dishes`, `GET|PUT /dishes/:id`
//! - `GET|POST /orders`, `GET|PUT|DELETE /orders/:id`
//! - `GET /health` - `{ "ok": true, "operations": [...] }`
//!
//! Other methods on those paths answer 405, unknown paths 404, both with
//! an `{ "error": ... }` body.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::{get, MethodRouter};
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::info;

use crate::pipeline::{Request, Response};
use crate::service::Service;

type Shared = Arc<Service>;

/// Build an axum `Router` over the given service.
pub fn router(service: Shared) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/dishes", collection("dishes.list", "dishes.create"))
        .route("/dishes/:id", item("dishes.read", "dishes.update", None))
        .route("/orders", collection("orders.list", "orders.create"))
        .route(
            "/orders/:id",
            item("orders.read", "orders.update", Some("orders.delete")),
        )
        .fallback(path_not_found)
        .with_state(service)
}

/// Serve the service over HTTP at the given address (e.g. `"0.0.0.0:5000"`).
pub async fn serve(service: Shared, addr: &str) -> Result<(), std::io::Error> {
    let app = router(service);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, app).await
}

fn collection(list: &'static str, create: &'static str) -> MethodRouter<Shared> {
    get(move |State(service): State<Shared>| async move {
        reply(&service, list, Request::new())
    })
    .post(
        move |State(service): State<Shared>, body: Option<Json<Value>>| async move {
            reply(&service, create, Request::new().with_body(json_body(body)))
        },
    )
    .fallback(method_not_allowed)
}

fn item(
    read: &'static str,
    update: &'static str,
    delete: Option<&'static str>,
) -> MethodRouter<Shared> {
    let route = get(
        move |State(service): State<Shared>, Path(id): Path<String>| async move {
            reply(&service, read, Request::new().with_route_id(id))
        },
    )
    .put(
        move |State(service): State<Shared>,
              Path(id): Path<String>,
              body: Option<Json<Value>>| async move {
            let request = Request::new().with_route_id(id).with_body(json_body(body));
            reply(&service, update, request)
        },
    );

    let route = match delete {
        Some(delete) => route.delete(
            move |State(service): State<Shared>, Path(id): Path<String>| async move {
                reply(&service, delete, Request::new().with_route_id(id))
            },
        ),
        None => route,
    };
    route.fallback(method_not_allowed)
}

/// A missing or unparseable body is treated as empty.
fn json_body(body: Option<Json<Value>>) -> Value {
    body.map(|Json(value)| value).unwrap_or(Value::Null)
}

fn reply(service: &Service, operation: &str, request: Request) -> axum::response::Response {
    into_http(service.respond(operation, request))
}

fn into_http(response: Response) -> axum::response::Response {
    let status =
        StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    match response.body {
        Some(body) if status != StatusCode::NO_CONTENT => (status, Json(body)).into_response(),
        _ => status.into_response(),
    }
}

/// `GET /health` - returns `{ "ok": true, "operations": [...] }`.
async fn health_handler(State(service): State<Shared>) -> impl IntoResponse {
    Json(json!({ "ok": true, "operations": service.operations() }))
}

async fn method_not_allowed(method: Method, uri: Uri) -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": format!("{} not allowed for {}", method, uri.path()) })),
    )
}

async fn path_not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("Path not found: {}", uri.path()) })),
    )
}
