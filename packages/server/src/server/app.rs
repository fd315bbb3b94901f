//! Application setup and server configuration.

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::server::routes::{health_handler, list_reports_handler, process_report_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
}

/// Build the Axum application router
pub fn build_app(pool: SqlitePool) -> Router {
    let state = AppState { db_pool: pool };

    Router::new()
        .route("/health", get(health_handler))
        .route("/process-report", post(process_report_handler))
        .route("/reports", get(list_reports_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
