use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// All application routes
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Product
        .route(
            "/api/product",
            get(handlers::a001_product::list_all).post(handlers::a001_product::upsert),
        )
        .route(
            "/api/product/categories",
            get(handlers::a001_product::categories),
        )
        .route(
            "/api/product/testdata",
            post(handlers::a001_product::insert_test_data),
        )
        .route(
            "/api/product/:id",
            get(handlers::a001_product::get_by_id).delete(handlers::a001_product::delete),
        )
}
