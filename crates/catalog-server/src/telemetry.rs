//! OpenTelemetry distributed tracing.
//!
//! Provides the OTLP span export layer installed alongside the log formatter.
//! Without the `telemetry` feature every entry point is a no-op.

#[cfg(feature = "telemetry")]
use catalog_core::CatalogError;
#[cfg(feature = "telemetry")]
use opentelemetry::{trace::TracerProvider as _, KeyValue};
#[cfg(feature = "telemetry")]
use opentelemetry_otlp::WithExportConfig;
#[cfg(feature = "telemetry")]
use opentelemetry_sdk::{
    runtime,
    trace::{RandomIdGenerator, Sampler, TracerProvider},
    Resource,
};
#[cfg(feature = "telemetry")]
use opentelemetry_semantic_conventions::resource::SERVICE_NAME;
#[cfg(feature = "telemetry")]
use tracing_subscriber::registry::LookupSpan;

use catalog_config::TelemetryConfig;
use catalog_core::CatalogResult;
use tracing::Subscriber;
use tracing_subscriber::Layer;

/// Builds the span export layer, or `None` when telemetry is disabled.
///
/// Installs the global tracer provider as a side effect, so call it once.
#[cfg(feature = "telemetry")]
pub fn layer<S>(config: &TelemetryConfig) -> CatalogResult<Option<impl Layer<S>>>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    if !config.enabled {
        return Ok(None);
    }

    let resource = Resource::new(vec![KeyValue::new(
        SERVICE_NAME,
        config.service_name.clone(),
    )]);

    let builder = TracerProvider::builder()
        .with_sampler(sampler(config.sampling_ratio))
        .with_id_generator(RandomIdGenerator::default())
        .with_resource(resource);

    let builder = match &config.otlp_endpoint {
        Some(endpoint) => {
            let exporter = opentelemetry_otlp::SpanExporter::builder()
                .with_tonic()
                .with_endpoint(endpoint)
                .build()
                .map_err(|e| {
                    CatalogError::Internal(format!("Failed to create OTLP exporter: {}", e))
                })?;
            builder.with_batch_exporter(exporter, runtime::Tokio)
        }
        None => builder,
    };

    let provider = builder.build();
    let tracer = provider.tracer(config.service_name.clone());
    opentelemetry::global::set_tracer_provider(provider);

    Ok(Some(tracing_opentelemetry::layer().with_tracer(tracer)))
}

/// Builds the span export layer, or `None` when telemetry is disabled.
#[cfg(not(feature = "telemetry"))]
pub fn layer<S>(_config: &TelemetryConfig) -> CatalogResult<Option<impl Layer<S>>>
where
    S: Subscriber,
{
    Ok(None::<tracing_subscriber::layer::Identity>)
}

/// Flushes pending spans.
#[cfg(feature = "telemetry")]
pub fn shutdown() {
    opentelemetry::global::shutdown_tracer_provider();
}

#[cfg(not(feature = "telemetry"))]
pub fn shutdown() {}

#[cfg(feature = "telemetry")]
fn sampler(ratio: f64) -> Sampler {
    if ratio >= 1.0 {
        Sampler::AlwaysOn
    } else if ratio <= 0.0 {
        Sampler::AlwaysOff
    } else {
        Sampler::TraceIdRatioBased(ratio)
    }
}
