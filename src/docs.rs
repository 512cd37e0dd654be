//! OpenAPI document for the service, served at `/openapi.json` with an
//! interactive Swagger UI under `/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront API",
        description = "Store and item catalog service with OpenAPI and SQLite",
        version = "1.0.0",
    ),
    paths(
        crate::handlers::item::create_item,
        crate::handlers::item::list_items,
        crate::handlers::item::get_item,
        crate::handlers::item::update_item,
        crate::handlers::item::delete_item,
        crate::handlers::store::create_store,
        crate::handlers::store::list_stores,
        crate::handlers::store::get_store,
        crate::handlers::store::delete_store,
    ),
    components(schemas(
        crate::schemas::Item,
        crate::schemas::ItemCreate,
        crate::schemas::Store,
        crate::schemas::StoreCreate,
        crate::error::ErrorMessage,
    )),
    tags(
        (name = "Item", description = "Item CRUD operations"),
        (name = "Store", description = "Store CRUD operations"),
    ),
)]
pub struct ApiDoc;

pub fn docs_routes() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
}
