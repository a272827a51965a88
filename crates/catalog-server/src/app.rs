//! Composition root.
//!
//! Every component receives its collaborators through its constructor; this
//! module is the only place that knows the concrete types.

use axum::Router;
use catalog_config::{AppConfig, DocumentStoreConfig, ObservabilityConfig, RedisConfig};
use catalog_core::{CatalogError, CatalogResult};
use catalog_repository::{
    ElasticsearchProductDao, ProductDao, ProductRepository, ProductRepositoryImpl,
};
use catalog_rest::{create_router, AppState, MetricsEndpoint};
use catalog_service::{CacheInterface, ProductService, ProductServiceImpl, RedisCacheService};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Creates the cache client. A disabled cache behaves as always empty.
pub fn build_cache(redis_config: &RedisConfig) -> CatalogResult<Arc<dyn CacheInterface>> {
    if !redis_config.enabled {
        info!("Redis cache disabled");
        return Ok(Arc::new(RedisCacheService::disabled()));
    }

    let mut redis_cfg = deadpool_redis::Config::from_url(redis_config.url());
    redis_cfg.pool = Some(deadpool_redis::PoolConfig::new(redis_config.pool_size));

    let pool = redis_cfg
        .create_pool(Some(deadpool_redis::Runtime::Tokio1))
        .map_err(|e| CatalogError::Configuration(format!("Failed to create Redis pool: {}", e)))?;

    info!("Redis cache configured at {}", redis_config.url());
    Ok(Arc::new(RedisCacheService::new(Arc::new(pool))))
}

/// Creates the Elasticsearch client shared by the repository and the
/// startup probe.
pub fn build_document_store(config: &DocumentStoreConfig) -> CatalogResult<Arc<dyn ProductDao>> {
    Ok(Arc::new(ElasticsearchProductDao::new(config)?))
}

/// Creates the product repository over the document store.
pub fn build_repository(
    dao: Arc<dyn ProductDao>,
    config: &DocumentStoreConfig,
) -> Arc<dyn ProductRepository> {
    Arc::new(ProductRepositoryImpl::with_conflict_policy(
        dao,
        config.update_conflicts,
    ))
}

/// Checks once that the document store answers.
///
/// An unreachable store is not fatal: reads degrade to placeholders and
/// writes are logged, so the server starts anyway.
pub async fn ping_document_store(dao: &dyn ProductDao, config: &DocumentStoreConfig) {
    match dao.ping().await {
        Ok(()) => info!("Document store reachable at {}", config.url),
        Err(e) => warn!("Document store not reachable yet: {}", e),
    }
}

/// Creates the cache-aside product service.
pub fn build_service(
    config: &AppConfig,
    dao: Arc<dyn ProductDao>,
) -> CatalogResult<Arc<dyn ProductService>> {
    let repository = build_repository(dao, &config.document_store);
    let cache = build_cache(&config.redis)?;
    Ok(Arc::new(ProductServiceImpl::new(repository, cache)))
}

/// Installs the global Prometheus recorder when metrics are enabled.
///
/// Can succeed at most once per process.
pub fn init_metrics(config: &ObservabilityConfig) -> Option<MetricsEndpoint> {
    if !config.metrics_enabled {
        info!("Prometheus metrics disabled");
        return None;
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            catalog_service::metrics::register_metrics();
            info!("Prometheus metrics initialized at {}", config.metrics_path);
            Some(MetricsEndpoint::new(handle, config.metrics_path.clone()))
        }
        Err(e) => {
            error!("Failed to initialize Prometheus metrics: {}", e);
            None
        }
    }
}

/// Builds the full HTTP application.
pub fn build_router(
    config: &AppConfig,
    dao: Arc<dyn ProductDao>,
    metrics: Option<MetricsEndpoint>,
) -> CatalogResult<Router> {
    let product_service = build_service(config, dao)?;
    let state = AppState::new(product_service);
    Ok(create_router(state, &config.server, metrics))
}
