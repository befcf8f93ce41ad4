//! Router configuration for the HTTP API.
//!
//! This module sets up all routes and middleware (CORS, compression,
//! tracing) and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/qibla", get(handlers::qibla))
        .route("/nearest_mosque", get(handlers::nearest_mosque))
        .route("/prayer_times", get(handlers::prayer_times));

    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health_check))
        .nest("/api", api)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
