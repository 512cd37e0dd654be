//! End-to-end coverage of the item endpoints.

mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{create_item, create_store, delete, get, post, put, send, test_app};
use serde_json::json;

#[tokio::test]
async fn create_returns_201_with_generated_id() {
    let app = test_app().await;
    let store_id = create_store(&app, "corner shop").await;
    let (status, body) = send(
        &app,
        post(
            "/items",
            &json!({"name": "pen", "price": 1.5, "description": "blue ink", "store_id": store_id}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_i64().unwrap() >= 1);
    assert_eq!(body["name"], "pen");
    assert_eq!(body["price"], 1.5);
    assert_eq!(body["description"], "blue ink");
    assert_eq!(body["store_id"], store_id);
}

#[tokio::test]
async fn duplicate_name_is_rejected() {
    let app = test_app().await;
    let store_id = create_store(&app, "corner shop").await;
    create_item(&app, "pen", 1.5, store_id).await;
    let (status, body) = send(
        &app,
        post(
            "/items",
            &json!({"name": "pen", "price": 9.0, "store_id": store_id}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Item already exists!");
    let (_, all) = send(&app, get("/items")).await;
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn get_returns_the_stored_item() {
    let app = test_app().await;
    let store_id = create_store(&app, "corner shop").await;
    let id = create_item(&app, "pen", 1.5, store_id).await;
    let (status, body) = send(&app, get(&format!("/items/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "pen");
    assert_eq!(body["price"], 1.5);
    assert!(body["description"].is_null());
    assert_eq!(body["store_id"], store_id);
}

#[tokio::test]
async fn get_missing_id_is_404() {
    let app = test_app().await;
    let (status, body) = send(&app, get("/items/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Item not found with the given ID");
}

#[tokio::test]
async fn list_supports_exact_name_filter() {
    let app = test_app().await;
    let store_id = create_store(&app, "corner shop").await;
    create_item(&app, "pen", 1.5, store_id).await;
    create_item(&app, "notebook", 3.25, store_id).await;

    let (status, body) = send(&app, get("/items?name=pen")).await;
    assert_eq!(status, StatusCode::OK);
    let matches = body.as_array().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["name"], "pen");

    let (_, body) = send(&app, get("/items?name=missing")).await;
    assert_eq!(body.as_array().unwrap().len(), 0);

    let (_, body) = send(&app, get("/items?name=")).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, body) = send(&app, get("/items")).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn update_replaces_every_field() {
    let app = test_app().await;
    let first_store = create_store(&app, "corner shop").await;
    let second_store = create_store(&app, "megastore").await;
    let id = create_item(&app, "pen", 1.5, first_store).await;

    let (status, body) = send(
        &app,
        put(
            &format!("/items/{id}"),
            &json!({"name": "marker", "price": 2.75, "description": "thick tip", "store_id": second_store}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "marker");
    assert_eq!(body["price"], 2.75);
    assert_eq!(body["description"], "thick tip");
    assert_eq!(body["store_id"], second_store);

    let (_, body) = send(&app, get(&format!("/items/{id}"))).await;
    assert_eq!(body["name"], "marker");
    assert_eq!(body["store_id"], second_store);
}

#[tokio::test]
async fn update_missing_id_is_400() {
    let app = test_app().await;
    let store_id = create_store(&app, "corner shop").await;
    let (status, body) = send(
        &app,
        put(
            "/items/999",
            &json!({"name": "marker", "price": 2.75, "store_id": store_id}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Item not found with the given ID");
}

#[tokio::test]
async fn delete_removes_and_confirms() {
    let app = test_app().await;
    let store_id = create_store(&app, "corner shop").await;
    let id = create_item(&app, "pen", 1.5, store_id).await;

    let (status, body) = send(&app, delete(&format!("/items/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Item deleted successfully!");

    let (status, _) = send(&app, get(&format!("/items/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, all) = send(&app, get("/items")).await;
    assert_eq!(all.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn delete_missing_id_is_404() {
    let app = test_app().await;
    let (status, body) = send(&app, delete("/items/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Item not found with the given ID");
}

#[tokio::test]
async fn unknown_store_fails_with_global_envelope() {
    let app = test_app().await;
    let (status, body) = send(
        &app,
        post(
            "/items",
            &json!({"name": "pen", "price": 1.5, "store_id": 999}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("Failed to execute: POST: /items. Detail:"));
    assert!(message.contains("FOREIGN KEY constraint failed"));
}

#[tokio::test]
async fn oversized_name_fails_with_global_envelope() {
    let app = test_app().await;
    let store_id = create_store(&app, "corner shop").await;
    let (status, body) = send(
        &app,
        post(
            "/items",
            &json!({"name": "x".repeat(81), "price": 1.5, "store_id": store_id}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Failed to execute: POST: /items. Detail: name must be at most 80 characters"
    );
}

#[tokio::test]
async fn malformed_json_fails_with_global_envelope() {
    let app = test_app().await;
    let request = Request::builder()
        .method("POST")
        .uri("/items")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("Failed to execute: POST: /items. Detail:"));
}

#[tokio::test]
async fn unparsable_query_string_fails_with_global_envelope() {
    let app = test_app().await;
    let (status, body) = send(&app, get("/items?name=pen&name=ink")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("Failed to execute: GET: /items?name=pen&name=ink. Detail:"));
}

#[tokio::test]
async fn non_numeric_id_fails_with_global_envelope() {
    let app = test_app().await;
    let (status, body) = send(&app, get("/items/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("Failed to execute: GET: /items/abc. Detail:"));
}
