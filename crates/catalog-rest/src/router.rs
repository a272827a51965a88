//! Main application router.

use crate::{
    controllers::{health_controller, product_controller},
    metrics::MetricsEndpoint,
    middleware::logging_middleware,
    state::AppState,
};
use axum::{http::HeaderValue, middleware, routing::get, Router};
use catalog_config::ServerConfig;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Creates the main application router.
///
/// The metrics endpoint is mounted only when a Prometheus handle is supplied.
pub fn create_router(
    state: AppState,
    server_config: &ServerConfig,
    metrics: Option<MetricsEndpoint>,
) -> Router {
    let cors = create_cors_layer(server_config);

    let api_router = Router::new()
        .nest("/products", product_controller::router())
        .nest("/api/product", product_controller::legacy_router())
        .with_state(state);

    let mut router = Router::new()
        .merge(health_controller::router())
        .merge(api_router)
        .route("/", get(root));

    if let Some(metrics) = metrics {
        info!("Metrics endpoint mounted at {}", metrics.path());
        router = router.merge(metrics.router());
    }

    let router = router
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware));

    info!("Router created with product endpoints");
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if !server_config.cors_enabled {
        return CorsLayer::new();
    }

    if server_config.cors_origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = server_config
        .cors_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Root endpoint handler.
async fn root() -> &'static str {
    "Product Catalog API"
}
