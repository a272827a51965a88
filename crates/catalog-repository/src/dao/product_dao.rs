//! ProductDao trait: the document store client contract.
//!
//! Implementations talk to exactly one document store. Unlike
//! [`ProductRepository`], every operation reports its failure.
//!
//! [`ProductRepository`]: crate::traits::ProductRepository

use catalog_core::{CatalogResult, ConflictPolicy, Product, ProductId};
use async_trait::async_trait;

/// Low-level product document access.
#[async_trait]
pub trait ProductDao: Send + Sync {
    /// Indexes one product document.
    ///
    /// Fails with `StoreRejected` when the store answers with an error status
    /// and with `DocumentStore` when it cannot be reached.
    async fn index(&self, product: &Product) -> CatalogResult<()>;

    /// Runs an unfiltered search.
    async fn search_all(&self) -> CatalogResult<Vec<Product>>;

    /// Runs an exact-match search on the `id` field.
    async fn search_by_id(&self, id: ProductId) -> CatalogResult<Vec<Product>>;

    /// Rewrites price, description and category of every document whose `id`
    /// matches. Returns the number of documents updated.
    async fn update_by_id(&self, product: &Product, conflicts: ConflictPolicy)
        -> CatalogResult<u64>;

    /// Deletes every document whose `id` matches. Returns the number deleted.
    async fn delete_by_id(&self, id: ProductId) -> CatalogResult<u64>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> CatalogResult<()>;
}
