//! Prometheus scrape endpoint.

use axum::{extract::State, response::IntoResponse, routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Prometheus handle plus the path it is served on.
#[derive(Clone)]
pub struct MetricsEndpoint {
    handle: Arc<PrometheusHandle>,
    path: String,
}

impl MetricsEndpoint {
    /// Creates a metrics endpoint.
    pub fn new(handle: PrometheusHandle, path: impl Into<String>) -> Self {
        Self {
            handle: Arc::new(handle),
            path: path.into(),
        }
    }

    /// Path the endpoint is mounted at.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Renders the current metrics in Prometheus text format.
    #[must_use]
    pub fn render(&self) -> String {
        self.handle.render()
    }

    /// Creates the metrics router.
    pub fn router(self) -> Router {
        let path = self.path.clone();
        Router::new()
            .route(&path, get(metrics_handler))
            .with_state(self)
    }
}

async fn metrics_handler(State(metrics): State<MetricsEndpoint>) -> impl IntoResponse {
    metrics.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_exporter_prometheus::PrometheusBuilder;

    #[test]
    fn test_render_without_global_recorder() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let endpoint = MetricsEndpoint::new(recorder.handle(), "/metrics");

        assert_eq!(endpoint.path(), "/metrics");
        assert!(!endpoint.render().contains("catalog_cache_hits_total"));
    }
}
