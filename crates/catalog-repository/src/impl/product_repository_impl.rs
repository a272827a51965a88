//! `ProductRepositoryImpl`: repository layer implementation.
//!
//! Implements the [`ProductRepository`] domain interface on top of a
//! [`ProductDao`]. This is where the write-side error policy lives: the DAO
//! reports every failure, the repository turns them into the sentinel and
//! log-only outcomes callers see.
//!
//! [`ProductRepository`]: crate::traits::ProductRepository
//! [`ProductDao`]: crate::dao::ProductDao

use crate::{dao::ProductDao, traits::ProductRepository};
use async_trait::async_trait;
use catalog_core::{CatalogResult, ConflictPolicy, Product, ProductId};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Repository implementation that orchestrates [`ProductDao`] access.
///
/// [`ProductDao`]: crate::dao::ProductDao
pub struct ProductRepositoryImpl {
    product_dao: Arc<dyn ProductDao>,
    conflict_policy: ConflictPolicy,
}

impl ProductRepositoryImpl {
    /// Creates a new `ProductRepositoryImpl` with the default conflict policy.
    #[must_use]
    pub fn new(product_dao: Arc<dyn ProductDao>) -> Self {
        Self::with_conflict_policy(product_dao, ConflictPolicy::default())
    }

    /// Creates a new `ProductRepositoryImpl` with an explicit conflict policy
    /// for updates.
    #[must_use]
    pub fn with_conflict_policy(
        product_dao: Arc<dyn ProductDao>,
        conflict_policy: ConflictPolicy,
    ) -> Self {
        Self {
            product_dao,
            conflict_policy,
        }
    }

    /// Returns the conflict policy applied to updates.
    #[must_use]
    pub const fn conflict_policy(&self) -> ConflictPolicy {
        self.conflict_policy
    }
}

impl std::fmt::Debug for ProductRepositoryImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductRepositoryImpl")
            .field("conflict_policy", &self.conflict_policy)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryImpl {
    async fn add(&self, product: Product) -> Product {
        debug!("Repository: add {}", product.id);

        match self.product_dao.index(&product).await {
            Ok(()) => {
                info!("Product {} indexed", product.id);
                product
            }
            Err(e) => {
                error!("Failed to index product {}: {}", product.id, e);
                Product::empty()
            }
        }
    }

    async fn get_all(&self) -> CatalogResult<Vec<Product>> {
        debug!("Repository: get_all");
        self.product_dao.search_all().await
    }

    async fn get_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        debug!("Repository: get_by_id {}", id);
        let hits = self.product_dao.search_by_id(id).await?;
        Ok(hits.into_iter().next())
    }

    async fn update(&self, product: Option<Product>) {
        let Some(product) = product else {
            debug!("Repository: update called without a product, nothing to do");
            return;
        };

        debug!("Repository: update {} (accepted)", product.id);

        let dao = Arc::clone(&self.product_dao);
        let conflicts = self.conflict_policy;
        tokio::spawn(async move {
            match dao.update_by_id(&product, conflicts).await {
                Ok(0) => warn!("Update for product {} matched no documents", product.id),
                Ok(updated) => info!("Product {} updated ({} documents)", product.id, updated),
                Err(e) => error!("Failed to update product {}: {}", product.id, e),
            }
        });
    }

    async fn delete(&self, id: ProductId) {
        debug!("Repository: delete {}", id);

        match self.product_dao.delete_by_id(id).await {
            Ok(0) => warn!("Delete for product {} matched no documents", id),
            Ok(deleted) => info!("Product {} deleted ({} documents)", id, deleted),
            Err(e) => error!("Failed to delete product {}: {}", id, e),
        }
    }
}
