//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

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

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Global statistics
        .route("/statistics", get(handlers::get_statistics))
        .route("/color-scale", get(handlers::get_color_scale))
        .route("/legend", get(handlers::get_legend))
        // Municipalities
        .route("/municipalities", get(handlers::list_municipalities))
        .route("/municipalities/{ags}", get(handlers::get_municipality))
        // Kreis analysis
        .route("/kreise", get(handlers::list_kreise))
        .route(
            "/kreise/{name}/statistics",
            get(handlers::get_kreis_statistics),
        )
        .route(
            "/kreise/{name}/municipalities",
            get(handlers::get_kreis_municipalities),
        );

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
