//! Prometheus metrics for the cache-aside layer.

use metrics::{counter, describe_counter};

/// Metric names for the catalog service.
pub mod names {
    /// Cache-aside reads answered from the cache.
    pub const CACHE_HITS_TOTAL: &str = "catalog_cache_hits_total";
    /// Cache-aside reads that fell through to the document store.
    pub const CACHE_MISSES_TOTAL: &str = "catalog_cache_misses_total";
    /// Cache operations that failed, labelled by operation.
    pub const CACHE_ERRORS_TOTAL: &str = "catalog_cache_errors_total";
    /// Document store writes that were rejected, labelled by operation.
    pub const STORE_REJECTIONS_TOTAL: &str = "catalog_store_rejections_total";
}

/// Register all metric descriptions.
pub fn register_metrics() {
    describe_counter!(
        names::CACHE_HITS_TOTAL,
        "Total number of cache-aside reads served from the cache"
    );
    describe_counter!(
        names::CACHE_MISSES_TOTAL,
        "Total number of cache-aside reads that fell through to the store"
    );
    describe_counter!(
        names::CACHE_ERRORS_TOTAL,
        "Total number of failed cache operations"
    );
    describe_counter!(
        names::STORE_REJECTIONS_TOTAL,
        "Total number of document store writes that were rejected"
    );
}

/// Cache-aside metrics recorder.
#[derive(Debug, Clone, Copy)]
pub struct CacheMetrics;

impl CacheMetrics {
    /// Record a cache hit.
    pub fn hit() {
        counter!(names::CACHE_HITS_TOTAL).increment(1);
    }

    /// Record a cache miss.
    pub fn miss() {
        counter!(names::CACHE_MISSES_TOTAL).increment(1);
    }

    /// Record a failed cache operation (`get`, `set` or `remove`).
    pub fn error(operation: &'static str) {
        counter!(names::CACHE_ERRORS_TOTAL, "operation" => operation).increment(1);
    }

    /// Record a rejected store write.
    pub fn store_rejection(operation: &'static str) {
        counter!(names::STORE_REJECTIONS_TOTAL, "operation" => operation).increment(1);
    }
}
