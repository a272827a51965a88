//! # Catalog REST
//!
//! REST API layer using Axum for the product catalog.
//! Provides HTTP endpoints for product reads and writes, cache maintenance,
//! health checks and the Prometheus scrape endpoint.

pub mod controllers;
pub mod metrics;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use metrics::MetricsEndpoint;
pub use router::*;
pub use state::*;
