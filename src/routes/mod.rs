//! Route builders and full application assembly.

mod common;
mod entity;

pub use common::common_routes;
pub use entity::{item_routes, store_routes};

use crate::config::AppConfig;
use crate::docs::docs_routes;
use crate::error::error_envelope;
use crate::state::AppState;
use axum::{middleware, Router};
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// The whole application: entity CRUD, operational routes and the OpenAPI
/// document, wrapped in tracing, the failure envelope and a body cap.
pub fn app(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(docs_routes())
        .merge(item_routes(state.clone()))
        .merge(store_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(error_envelope))
                .layer(RequestBodyLimitLayer::new(config.body_limit)),
        )
}
