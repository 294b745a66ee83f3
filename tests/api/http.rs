//! HTTP transport integration tests.
//!
//! Starts an axum server and exercises it with reqwest.

use std::sync::Arc;

use grubdash::{http, service, Service};
use serde_json::{json, Value};

use crate::support::{dish_data, order_data};

/// Bind to port 0 and return the actual address.
async fn start_server(service: Arc<Service>) -> String {
    let app = http::router(service);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn start() -> (String, reqwest::Client) {
    let base = start_server(Arc::new(service::in_memory())).await;
    (base, reqwest::Client::new())
}

#[tokio::test]
async fn health_check() {
    let (base, client) = start().await;

    let resp = client.get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], true);
    let operations = body["operations"].as_array().unwrap();
    assert!(operations.iter().any(|o| o == "orders.delete"));
}

#[tokio::test]
async fn dish_lifecycle() {
    let (base, client) = start().await;

    let resp = client
        .post(format!("{base}/dishes"))
        .json(&json!({ "data": dish_data() }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let created: Value = resp.json().await.unwrap();
    let id = created["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(id.len(), 32);

    let resp = client.get(format!("{base}/dishes/{id}")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let read: Value = resp.json().await.unwrap();
    assert_eq!(read, created);

    let mut data = dish_data();
    data["price"] = json!(25);
    let resp = client
        .put(format!("{base}/dishes/{id}"))
        .json(&json!({ "data": data }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let updated: Value = resp.json().await.unwrap();
    assert_eq!(updated["data"]["price"], 25);

    let resp = client.get(format!("{base}/dishes")).send().await.unwrap();
    let list: Value = resp.json().await.unwrap();
    assert_eq!(list["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn validation_errors_use_error_envelope() {
    let (base, client) = start().await;

    let mut data = dish_data();
    data["price"] = json!(-3);
    let resp = client
        .post(format!("{base}/dishes"))
        .json(&json!({ "data": data }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Given price is equal to or less than $0.00" }));

    let resp = client.get(format!("{base}/dishes/missing")).send().await.unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Dish id not found missing" }));
}

#[tokio::test]
async fn missing_body_is_treated_as_empty() {
    let (base, client) = start().await;

    let resp = client.post(format!("{base}/orders")).send().await.unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Order must include a deliverTo");
}

#[tokio::test]
async fn order_delete_returns_204_without_body() {
    let (base, client) = start().await;

    let resp = client
        .post(format!("{base}/orders"))
        .json(&json!({ "data": order_data() }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let created: Value = resp.json().await.unwrap();
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let resp = client.delete(format!("{base}/orders/{id}")).send().await.unwrap();
    assert_eq!(resp.status(), 204);
    assert!(resp.bytes().await.unwrap().is_empty());

    let resp = client.get(format!("{base}/orders/{id}")).send().await.unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn unsupported_method_is_405() {
    let (base, client) = start().await;

    let resp = client.delete(format!("{base}/dishes/abc")).send().await.unwrap();
    assert_eq!(resp.status(), 405);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "DELETE not allowed for /dishes/abc");

    let resp = client.put(format!("{base}/orders")).send().await.unwrap();
    assert_eq!(resp.status(), 405);
}

#[tokio::test]
async fn unknown_path_is_404() {
    let (base, client) = start().await;

    let resp = client.get(format!("{base}/menu")).send().await.unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Path not found: /menu");
}
