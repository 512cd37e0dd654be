//! Store endpoints: create, list, fetch, delete. Stores are returned with
//! their owned items embedded.

use crate::error::{ApiError, ErrorMessage};
use crate::extractors::{ApiJson, ApiPath, ApiQuery};
use crate::handlers::ListQuery;
use crate::models::ItemRow;
use crate::repository::{ItemRepo, StoreRepo};
use crate::schemas::{Store, StoreCreate};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::collections::HashMap;

#[utoipa::path(
    post,
    path = "/stores",
    tag = "Store",
    request_body = StoreCreate,
    responses(
        (status = 201, description = "Store created", body = Store),
        (status = 400, description = "Name already taken or payload invalid", body = ErrorMessage),
    ),
)]
pub async fn create_store(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<StoreCreate>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;
    if StoreRepo::fetch_by_name(&state.pool, &payload.name)
        .await?
        .is_some()
    {
        return Err(ApiError::AlreadyExists("Store"));
    }
    let row = StoreRepo::create(&state.pool, &payload).await?;
    Ok((StatusCode::CREATED, Json(Store::from_rows(row, Vec::new()))))
}

#[utoipa::path(
    get,
    path = "/stores",
    tag = "Store",
    params(("name" = Option<String>, Query, description = "Exact name to filter by")),
    responses(
        (status = 200, description = "All stores, or the one matching the filter", body = [Store]),
    ),
)]
pub async fn list_stores(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> Result<Json<Vec<Store>>, ApiError> {
    if let Some(name) = query.filter() {
        let stores = match StoreRepo::fetch_by_name(&state.pool, name).await? {
            Some(row) => {
                let items = ItemRepo::fetch_by_store(&state.pool, row.id).await?;
                vec![Store::from_rows(row, items)]
            }
            None => Vec::new(),
        };
        return Ok(Json(stores));
    }
    let rows = StoreRepo::fetch_all(&state.pool).await?;
    // one items query for the whole listing instead of one per store
    let mut by_store: HashMap<i64, Vec<ItemRow>> = HashMap::new();
    for item in ItemRepo::fetch_all(&state.pool).await? {
        by_store.entry(item.store_id).or_default().push(item);
    }
    let stores = rows
        .into_iter()
        .map(|row| {
            let items = by_store.remove(&row.id).unwrap_or_default();
            Store::from_rows(row, items)
        })
        .collect();
    Ok(Json(stores))
}

#[utoipa::path(
    get,
    path = "/stores/{id}",
    tag = "Store",
    params(("id" = i64, Path, description = "Store id")),
    responses(
        (status = 200, description = "The store with its items", body = Store),
        (status = 404, description = "No store with this id", body = ErrorMessage),
    ),
)]
pub async fn get_store(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Store>, ApiError> {
    let row = StoreRepo::fetch_by_id(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound("Store"))?;
    let items = ItemRepo::fetch_by_store(&state.pool, row.id).await?;
    Ok(Json(Store::from_rows(row, items)))
}

#[utoipa::path(
    delete,
    path = "/stores/{id}",
    tag = "Store",
    params(("id" = i64, Path, description = "Store id")),
    responses(
        (status = 200, description = "Confirmation message", body = String),
        (status = 404, description = "No store with this id", body = ErrorMessage),
    ),
)]
pub async fn delete_store(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<&'static str>, ApiError> {
    if StoreRepo::fetch_by_id(&state.pool, id).await?.is_none() {
        return Err(ApiError::NotFound("Store"));
    }
    StoreRepo::delete(&state.pool, id).await?;
    Ok(Json("Store deleted successfully!"))
}
