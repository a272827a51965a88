//! # Catalog Server
//!
//! Main entry point for the product catalog service.

use catalog_config::{AppConfig, ObservabilityConfig};
use catalog_core::{CatalogError, CatalogResult};
use catalog_server::{app, startup, telemetry};
use tokio::signal;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    let config = match catalog_config::load_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.observability);

    info!("Starting {} v{}", config.app.name, config.app.version);
    info!("Environment: {}", config.app.environment);

    if let Err(e) = run(config).await {
        error!("Application error: {}", e);
        telemetry::shutdown();
        std::process::exit(1);
    }

    telemetry::shutdown();
}

async fn run(config: AppConfig) -> CatalogResult<()> {
    startup::print_banner();

    let store = app::build_document_store(&config.document_store)?;
    app::ping_document_store(store.as_ref(), &config.document_store).await;

    let metrics = app::init_metrics(&config.observability);
    let router = app::build_router(&config, store, metrics)?;

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| CatalogError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

    startup::print_startup_info(&config);
    info!("Starting REST server on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| CatalogError::Internal(format!("REST server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

fn init_logging(config: &ObservabilityConfig) {
    use tracing_subscriber::{
        layer::{Layered, SubscriberExt},
        util::SubscriberInitExt,
        EnvFilter, Registry,
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{},catalog=debug,tower_http=debug",
            config.log_level
        ))
    });

    let (otel, otel_error) =
        match telemetry::layer::<Layered<EnvFilter, Registry>>(&config.telemetry) {
            Ok(layer) => (layer, None),
            Err(e) => (None, Some(e)),
        };
    let exporting = otel.is_some();

    let registry = tracing_subscriber::registry().with(filter).with(otel);

    if config.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
    }

    if let Some(e) = otel_error {
        warn!("Telemetry disabled: {}", e);
    } else if exporting {
        let telemetry = &config.telemetry;
        info!(
            service_name = %telemetry.service_name,
            sampling_ratio = %telemetry.sampling_ratio,
            otlp_endpoint = ?telemetry.otlp_endpoint,
            "Telemetry initialized"
        );
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
