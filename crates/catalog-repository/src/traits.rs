//! Repository trait definitions.

use catalog_core::{CatalogResult, Product, ProductId};
use async_trait::async_trait;

/// Product repository trait.
///
/// Write operations never fail from the caller's point of view: a rejected
/// `add` yields [`Product::empty`], while `update` and `delete` only report
/// their outcome to the logs.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Indexes a new product.
    ///
    /// Returns the product unchanged when the store accepts it and the empty
    /// product when the store rejects it.
    async fn add(&self, product: Product) -> Product;

    /// Returns every product the store yields for an unfiltered search.
    ///
    /// Bounded by the store's default page size.
    async fn get_all(&self) -> CatalogResult<Vec<Product>>;

    /// Finds a product by ID.
    async fn get_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>>;

    /// Rewrites price, description and category of every document matching
    /// the product's ID. `None` is a no-op.
    ///
    /// The update is accepted for processing, not confirmed: the call returns
    /// before the store has applied it.
    async fn update(&self, product: Option<Product>);

    /// Deletes every document matching the ID.
    async fn delete(&self, id: ProductId);
}
