//! SQLite pool construction and startup schema creation.

use crate::error::ApiError;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
    SqlitePool,
};
use std::str::FromStr;

/// Table DDL, executed in order on startup. `IF NOT EXISTS` keeps restarts
/// idempotent; there is no migration framework behind this service.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS stores (
        id INTEGER PRIMARY KEY,
        name VARCHAR(80) NOT NULL UNIQUE
    )",
    "CREATE TABLE IF NOT EXISTS items (
        id INTEGER PRIMARY KEY,
        name VARCHAR(80) NOT NULL UNIQUE,
        price REAL NOT NULL,
        description VARCHAR(200),
        store_id INTEGER NOT NULL REFERENCES stores(id) ON DELETE CASCADE
    )",
    "CREATE INDEX IF NOT EXISTS idx_items_store_id ON items(store_id)",
];

/// Open a pool on `database_url`, creating the database file if missing.
/// `foreign_keys` must be switched on per connection for the store cascade
/// to fire; SQLite ships with it off.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, ApiError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Create the tables and indexes if they are not present. Safe to call on
/// every startup.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), ApiError> {
    for ddl in SCHEMA {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::debug!("schema ensured");
    Ok(())
}
