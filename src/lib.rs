//! Store and item catalog REST service over SQLite.
//!
//! Two entities, `Item` and `Store`, each with full CRUD under `/items`
//! and `/stores`. Items belong to exactly one store; deleting a store
//! deletes its items. Failures that no endpoint claims for itself come
//! back as a single global 400 shape naming the request that failed.

pub mod config;
pub mod db;
pub mod docs;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schemas;
pub mod state;

pub use config::AppConfig;
pub use db::{connect, ensure_schema};
pub use error::{ApiError, ErrorMessage};
pub use routes::app;
pub use state::AppState;
