//! Storage records, one struct per table. Wire shapes live in `schemas`
//! and are mapped from these rows explicitly.

use sqlx::FromRow;

/// Row of the `items` table.
#[derive(Clone, Debug, FromRow)]
pub struct ItemRow {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub store_id: i64,
}

/// Row of the `stores` table. The owned items come from a separate query,
/// not a column.
#[derive(Clone, Debug, FromRow)]
pub struct StoreRow {
    pub id: i64,
    pub name: String,
}
