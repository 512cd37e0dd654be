//! Item endpoints: create, list, fetch, update, delete.

use crate::error::{ApiError, ErrorMessage};
use crate::extractors::{ApiJson, ApiPath, ApiQuery};
use crate::handlers::ListQuery;
use crate::repository::ItemRepo;
use crate::schemas::{Item, ItemCreate};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

#[utoipa::path(
    post,
    path = "/items",
    tag = "Item",
    request_body = ItemCreate,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, description = "Name already taken or payload invalid", body = ErrorMessage),
    ),
)]
pub async fn create_item(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ItemCreate>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;
    if ItemRepo::fetch_by_name(&state.pool, &payload.name)
        .await?
        .is_some()
    {
        return Err(ApiError::AlreadyExists("Item"));
    }
    let row = ItemRepo::create(&state.pool, &payload).await?;
    Ok((StatusCode::CREATED, Json(Item::from_row(row))))
}

#[utoipa::path(
    get,
    path = "/items",
    tag = "Item",
    params(("name" = Option<String>, Query, description = "Exact name to filter by")),
    responses(
        (status = 200, description = "All items, or the one matching the filter", body = [Item]),
    ),
)]
pub async fn list_items(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let rows = match query.filter() {
        Some(name) => ItemRepo::fetch_by_name(&state.pool, name)
            .await?
            .into_iter()
            .collect(),
        None => ItemRepo::fetch_all(&state.pool).await?,
    };
    Ok(Json(rows.into_iter().map(Item::from_row).collect()))
}

#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "Item",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "The item", body = Item),
        (status = 404, description = "No item with this id", body = ErrorMessage),
    ),
)]
pub async fn get_item(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Item>, ApiError> {
    let row = ItemRepo::fetch_by_id(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound("Item"))?;
    Ok(Json(Item::from_row(row)))
}

#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "Item",
    params(("id" = i64, Path, description = "Item id")),
    request_body = ItemCreate,
    responses(
        (status = 200, description = "The updated item", body = Item),
        (status = 400, description = "No item with this id, or payload invalid", body = ErrorMessage),
    ),
)]
pub async fn update_item(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<ItemCreate>,
) -> Result<Json<Item>, ApiError> {
    payload.validate()?;
    // a missing update target is reported as 400 here, not 404
    let mut row = match ItemRepo::fetch_by_id(&state.pool, id).await? {
        Some(row) => row,
        None => {
            return Err(ApiError::BadRequest(
                "Item not found with the given ID".to_string(),
            ))
        }
    };
    row.name = payload.name;
    row.price = payload.price;
    row.description = payload.description;
    row.store_id = payload.store_id;
    let row = ItemRepo::update(&state.pool, &row).await?;
    Ok(Json(Item::from_row(row)))
}

#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "Item",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "Confirmation message", body = String),
        (status = 404, description = "No item with this id", body = ErrorMessage),
    ),
)]
pub async fn delete_item(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<&'static str>, ApiError> {
    if ItemRepo::fetch_by_id(&state.pool, id).await?.is_none() {
        return Err(ApiError::NotFound("Item"));
    }
    ItemRepo::delete(&state.pool, id).await?;
    Ok(Json("Item deleted successfully!"))
}
