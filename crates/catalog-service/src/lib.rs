//! # Catalog Service
//!
//! Cache-aside orchestration for the product catalog. The service composes a
//! [`ProductRepository`](catalog_repository::ProductRepository) (authoritative
//! store) with a [`CacheInterface`] (Redis) and decides which tier to consult,
//! what to store, and what to invalidate on writes.

pub mod cache;
pub mod metrics;
pub mod product_service;
pub mod r#impl;

pub use cache::*;
pub use product_service::*;
pub use r#impl::{ProductServiceImpl, PRODUCT_CACHE_TTL};
