//! Shared test harness: the app over a fresh in-memory database plus small
//! request helpers.
#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use storefront_api::{app, connect, ensure_schema, AppConfig, AppState};
use tower::ServiceExt;

/// App over a fresh in-memory database. A single connection keeps every
/// request on the same database.
pub async fn test_app() -> Router {
    let pool = connect("sqlite::memory:", 1).await.unwrap();
    ensure_schema(&pool).await.unwrap();
    app(AppState { pool }, &AppConfig::default())
}

/// Drive one request through the router and decode the JSON body, if any.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub fn get(path: &str) -> Request<Body> {
    Request::builder().uri(path).body(Body::empty()).unwrap()
}

pub fn post(path: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn put(path: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn delete(path: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

pub async fn create_store(app: &Router, name: &str) -> i64 {
    let (status, body) = send(app, post("/stores", &json!({"name": name}))).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

pub async fn create_item(app: &Router, name: &str, price: f64, store_id: i64) -> i64 {
    let (status, body) = send(
        app,
        post(
            "/items",
            &json!({"name": name, "price": price, "store_id": store_id}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}
