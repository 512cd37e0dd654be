//! HTTP handlers for the item and store endpoints.

pub mod item;
pub mod store;

pub use item::{create_item, delete_item, get_item, list_items, update_item};
pub use store::{create_store, delete_store, get_store, list_stores};

use serde::Deserialize;

/// Query string accepted by the two list endpoints: one optional
/// exact-name filter.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub name: Option<String>,
}

impl ListQuery {
    /// The filter value, with an empty `?name=` treated as absent.
    pub fn filter(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_no_filter() {
        let query = ListQuery {
            name: Some(String::new()),
        };
        assert_eq!(query.filter(), None);
        let query = ListQuery { name: None };
        assert_eq!(query.filter(), None);
        let query = ListQuery {
            name: Some("pen".to_string()),
        };
        assert_eq!(query.filter(), Some("pen"));
    }
}
