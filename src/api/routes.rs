//! API Routes
//!
//! Configures the Axum router with all gallery endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    health_handler, index_handler, pages_handler, single_fetch_handler, stats_handler, AppState,
};
use crate::views::SINGLE_FETCH_PATH;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - Landing page
/// - `GET /single-fetch?page=N` - Streamed photo gallery
/// - `GET /api/pages?page=N` - Loader result as JSON
/// - `GET /stats` - Page cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route(SINGLE_FETCH_PATH, get(single_fetch_handler))
        .route("/api/pages", get(pages_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
