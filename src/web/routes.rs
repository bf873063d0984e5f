use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

// Root liveness probe
pub fn root_routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(handlers::api::read_root))
}

// API Routes - read-only schema explorer
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new().nest(
        "/api",
        Router::new()
            .route("/schemas/{schema}/tables", get(handlers::api::list_tables))
            .route(
                "/schemas/{schema}/tables/{table}",
                get(handlers::api::get_table_description),
            )
            .route(
                "/schemas/{schema}/tables/{table}/columns",
                get(handlers::api::list_columns),
            )
            // System status
            .route("/status", get(handlers::api::system_status)),
    )
}
