//! Wire records for the item and store endpoints, with the length checks
//! the API enforces on input.

use crate::error::ApiError;
use crate::models::{ItemRow, StoreRow};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Longest accepted `name` for both entities.
pub const NAME_MAX: usize = 80;
/// Longest accepted item `description`.
pub const DESCRIPTION_MAX: usize = 200;

/// Creation payload for an item. The same shape is accepted on update,
/// where all four fields replace the stored ones; unknown keys such as a
/// client-sent `id` are ignored.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct ItemCreate {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    pub store_id: i64,
}

impl ItemCreate {
    /// Length checks on top of what deserialization already guarantees.
    pub fn validate(&self) -> Result<(), ApiError> {
        check_len("name", &self.name, NAME_MAX)?;
        if let Some(description) = &self.description {
            check_len("description", description, DESCRIPTION_MAX)?;
        }
        Ok(())
    }
}

/// Item as returned to clients.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub store_id: i64,
}

impl Item {
    pub fn from_row(row: ItemRow) -> Item {
        Item {
            id: row.id,
            name: row.name,
            price: row.price,
            description: row.description,
            store_id: row.store_id,
        }
    }
}

/// Creation payload for a store.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct StoreCreate {
    pub name: String,
}

impl StoreCreate {
    pub fn validate(&self) -> Result<(), ApiError> {
        check_len("name", &self.name, NAME_MAX)
    }
}

/// Store as returned to clients, with its owned items embedded.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct Store {
    pub id: i64,
    pub name: String,
    pub items: Vec<Item>,
}

impl Store {
    pub fn from_rows(row: StoreRow, items: Vec<ItemRow>) -> Store {
        Store {
            id: row.id,
            name: row.name,
            items: items.into_iter().map(Item::from_row).collect(),
        }
    }
}

fn check_len(field: &str, value: &str, max: usize) -> Result<(), ApiError> {
    if value.len() > max {
        return Err(ApiError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}
