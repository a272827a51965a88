//! Cache-aside product service implementation.

use crate::cache::{cache_keys, CacheExt, CacheInterface};
use crate::metrics::CacheMetrics;
use crate::product_service::ProductService;
use async_trait::async_trait;
use catalog_core::{CatalogError, CatalogResult, Product, ProductId};
use catalog_repository::ProductRepository;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Lifetime of a cached product entry (one hour).
pub const PRODUCT_CACHE_TTL: Duration = Duration::from_secs(3600);

/// Product service over a repository and a cache.
pub struct ProductServiceImpl {
    product_repository: Arc<dyn ProductRepository>,
    cache: Arc<dyn CacheInterface>,
}

impl ProductServiceImpl {
    /// Creates a new product service.
    pub fn new(
        product_repository: Arc<dyn ProductRepository>,
        cache: Arc<dyn CacheInterface>,
    ) -> Self {
        Self {
            product_repository,
            cache,
        }
    }

    /// Probes the cache. Transport failures count as a miss.
    async fn probe(&self, key: &str) -> CatalogResult<Option<Product>> {
        match self.cache.get::<Product>(key).await {
            Ok(cached) => Ok(cached),
            Err(e) if e.is_cache_miss_equivalent() => {
                warn!("Cache read for '{}' failed, treating as miss: {}", key, e);
                CacheMetrics::error("get");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Looks the product up in the store, falling back to a placeholder.
    ///
    /// The flag is `false` when the lookup itself failed; such a value must
    /// not be cached.
    async fn load(&self, id: ProductId) -> (Product, bool) {
        match self.product_repository.get_by_id(id).await {
            Ok(Some(product)) => (product, true),
            Ok(None) => {
                debug!("Product {} not in store, caching placeholder", id);
                (Product::placeholder(id), true)
            }
            Err(e) => {
                warn!(
                    "Store lookup for product {} failed, serving uncached placeholder: {}",
                    id, e
                );
                (Product::placeholder(id), false)
            }
        }
    }

    /// Removes a cache entry after a write. Failures are logged, not returned.
    async fn evict(&self, id: ProductId) {
        let key = cache_keys::product_by_id(id);
        if let Err(e) = self.cache.remove(&key).await {
            warn!("Failed to invalidate cache entry '{}': {}", key, e);
            CacheMetrics::error("remove");
        }
    }
}

#[async_trait]
impl ProductService for ProductServiceImpl {
    async fn add_product(&self, product: Product) -> Product {
        debug!("Adding product: {}", product.id);

        let submitted_empty = product.is_empty();
        let added = self.product_repository.add(product).await;

        if added.is_empty() && !submitted_empty {
            warn!("Document store rejected new product");
            CacheMetrics::store_rejection("add");
        }

        added
    }

    async fn get_all_products(&self) -> CatalogResult<Vec<Product>> {
        debug!("Listing products");
        self.product_repository.get_all().await
    }

    async fn get_product_by_id(&self, id: ProductId) -> CatalogResult<Product> {
        debug!("Getting product: {}", id);

        self.product_repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::not_found("Product", id))
    }

    async fn get_cached_product(&self, id: ProductId) -> CatalogResult<Product> {
        let key = cache_keys::product_by_id(id);
        debug!("Getting product through cache: {}", key);

        if let Some(cached) = self.probe(&key).await? {
            CacheMetrics::hit();
            return Ok(cached);
        }
        CacheMetrics::miss();

        let (product, authoritative) = self.load(id).await;
        if !authoritative {
            return Ok(product);
        }

        if let Err(e) = self.cache.set(&key, &product, PRODUCT_CACHE_TTL).await {
            warn!("Failed to populate cache entry '{}': {}", key, e);
            CacheMetrics::error("set");
        }

        Ok(product)
    }

    async fn update_product(&self, product: Option<Product>) {
        let Some(product) = product else {
            debug!("Update requested without a product");
            return;
        };

        let id = product.id;
        debug!("Updating product: {}", id);

        self.product_repository.update(Some(product)).await;
        self.evict(id).await;
    }

    async fn delete_product(&self, id: ProductId) {
        debug!("Deleting product: {}", id);

        self.product_repository.delete(id).await;
        self.evict(id).await;
    }

    async fn invalidate_cached_product(&self, id: ProductId) -> CatalogResult<()> {
        let key = cache_keys::product_by_id(id);
        self.cache.remove(&key).await?;
        info!("Cache entry '{}' invalidated", key);
        Ok(())
    }
}
