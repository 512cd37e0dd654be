//! Queries and mutations for the `stores` table.

use crate::error::ApiError;
use crate::models::StoreRow;
use crate::schemas::StoreCreate;
use sqlx::SqlitePool;

pub struct StoreRepo;

impl StoreRepo {
    pub async fn fetch_by_id(pool: &SqlitePool, id: i64) -> Result<Option<StoreRow>, ApiError> {
        let row = sqlx::query_as::<_, StoreRow>("SELECT id, name FROM stores WHERE id = ?1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    pub async fn fetch_by_name(
        pool: &SqlitePool,
        name: &str,
    ) -> Result<Option<StoreRow>, ApiError> {
        let row = sqlx::query_as::<_, StoreRow>("SELECT id, name FROM stores WHERE name = ?1")
            .bind(name)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    pub async fn fetch_all(pool: &SqlitePool) -> Result<Vec<StoreRow>, ApiError> {
        let rows = sqlx::query_as::<_, StoreRow>("SELECT id, name FROM stores ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    pub async fn create(pool: &SqlitePool, store: &StoreCreate) -> Result<StoreRow, ApiError> {
        tracing::debug!(name = %store.name, "insert store");
        let row = sqlx::query_as::<_, StoreRow>(
            "INSERT INTO stores (name) VALUES (?1) RETURNING id, name",
        )
        .bind(&store.name)
        .fetch_one(pool)
        .await?;
        Ok(row)
    }

    /// Delete by id. The `ON DELETE CASCADE` foreign key removes the
    /// store's items in the same statement.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), ApiError> {
        tracing::debug!(id, "delete store");
        sqlx::query("DELETE FROM stores WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
