use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Create routes for the categories feature
///
/// Both `/categories` and `/categories/` serve the collection.
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route(
            "/categories/",
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route(
            "/categories",
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route(
            "/categories/by-name/{name}",
            get(handlers::get_category_by_name),
        )
        .route(
            "/categories/by-slug/{slug}",
            get(handlers::get_category_by_slug),
        )
        .route(
            "/categories/{id}",
            get(handlers::get_category)
                .put(handlers::replace_category)
                .patch(handlers::update_category)
                .delete(handlers::delete_category),
        )
        .with_state(service)
}
