//! Product service trait definition.

use async_trait::async_trait;
use catalog_core::{CatalogResult, Product, ProductId};

/// Product service trait.
///
/// Reads can go straight to the document store or through the cache; writes
/// always go to the store and invalidate the cached copy.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Adds a product. Returns the empty product when the store rejects it.
    async fn add_product(&self, product: Product) -> Product;

    /// Lists every product in the store.
    async fn get_all_products(&self) -> CatalogResult<Vec<Product>>;

    /// Gets a product from the store, bypassing the cache.
    async fn get_product_by_id(&self, id: ProductId) -> CatalogResult<Product>;

    /// Gets a product through the cache, populating it on a miss.
    async fn get_cached_product(&self, id: ProductId) -> CatalogResult<Product>;

    /// Updates a product and invalidates its cache entry. `None` is a no-op.
    async fn update_product(&self, product: Option<Product>);

    /// Deletes a product and invalidates its cache entry.
    async fn delete_product(&self, id: ProductId);

    /// Removes the cached copy of a product without touching the store.
    async fn invalidate_cached_product(&self, id: ProductId) -> CatalogResult<()>;
}
