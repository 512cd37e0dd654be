//! CRUD routes for the two entities.

use crate::handlers::{
    create_item, create_store, delete_item, delete_store, get_item, get_store, list_items,
    list_stores, update_item,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn item_routes(state: AppState) -> Router {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/:id",
            get(get_item).put(update_item).delete(delete_item),
        )
        .with_state(state)
}

pub fn store_routes(state: AppState) -> Router {
    Router::new()
        .route("/stores", get(list_stores).post(create_store))
        .route("/stores/:id", get(get_store).delete(delete_store))
        .with_state(state)
}
