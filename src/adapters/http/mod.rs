//! HTTP adapters - REST API implementation.

pub mod assessment;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::application::AssessmentService;
use crate::config::ServerConfig;

/// Builds the application router with trace, CORS, and timeout layers.
pub fn app_router(service: AssessmentService, config: &ServerConfig) -> Router {
    let cors = cors_layer(config);

    Router::new()
        .nest("/api/assessment", assessment::assessment_routes(service))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(TimeoutLayer::new(config.request_timeout()))
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// GET /health - Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}
