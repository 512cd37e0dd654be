//! Queries and mutations for the `items` table.

use crate::error::ApiError;
use crate::models::ItemRow;
use crate::schemas::ItemCreate;
use sqlx::SqlitePool;

pub struct ItemRepo;

impl ItemRepo {
    pub async fn fetch_by_id(pool: &SqlitePool, id: i64) -> Result<Option<ItemRow>, ApiError> {
        let row = sqlx::query_as::<_, ItemRow>(
            "SELECT id, name, price, description, store_id FROM items WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    pub async fn fetch_by_name(pool: &SqlitePool, name: &str) -> Result<Option<ItemRow>, ApiError> {
        let row = sqlx::query_as::<_, ItemRow>(
            "SELECT id, name, price, description, store_id FROM items WHERE name = ?1",
        )
        .bind(name)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    pub async fn fetch_all(pool: &SqlitePool) -> Result<Vec<ItemRow>, ApiError> {
        let rows = sqlx::query_as::<_, ItemRow>(
            "SELECT id, name, price, description, store_id FROM items ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// Items owned by one store, for embedding into store responses.
    pub async fn fetch_by_store(pool: &SqlitePool, store_id: i64) -> Result<Vec<ItemRow>, ApiError> {
        let rows = sqlx::query_as::<_, ItemRow>(
            "SELECT id, name, price, description, store_id FROM items WHERE store_id = ?1 ORDER BY id",
        )
        .bind(store_id)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// Insert and return the stored row. The unique index on `name` backs
    /// up the handler's pre-check when two creates race.
    pub async fn create(pool: &SqlitePool, item: &ItemCreate) -> Result<ItemRow, ApiError> {
        tracing::debug!(name = %item.name, store_id = item.store_id, "insert item");
        let row = sqlx::query_as::<_, ItemRow>(
            "INSERT INTO items (name, price, description, store_id) VALUES (?1, ?2, ?3, ?4) \
             RETURNING id, name, price, description, store_id",
        )
        .bind(&item.name)
        .bind(item.price)
        .bind(item.description.as_deref())
        .bind(item.store_id)
        .fetch_one(pool)
        .await?;
        Ok(row)
    }

    /// Persist every mutable field of an already-fetched row.
    pub async fn update(pool: &SqlitePool, item: &ItemRow) -> Result<ItemRow, ApiError> {
        tracing::debug!(id = item.id, "update item");
        let row = sqlx::query_as::<_, ItemRow>(
            "UPDATE items SET name = ?2, price = ?3, description = ?4, store_id = ?5 WHERE id = ?1 \
             RETURNING id, name, price, description, store_id",
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(item.price)
        .bind(item.description.as_deref())
        .bind(item.store_id)
        .fetch_one(pool)
        .await?;
        Ok(row)
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), ApiError> {
        tracing::debug!(id, "delete item");
        sqlx::query("DELETE FROM items WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
