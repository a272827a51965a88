//! # Catalog Repository
//!
//! Three-layer data access hierarchy:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn ProductRepository>  (domain interface)
//! ProductRepositoryImpl            (sentinel / fire-and-forget semantics)
//!   ↓  Arc<dyn ProductDao>         (document store client interface)
//! ElasticsearchProductDao          (Elasticsearch REST API over reqwest)
//!   ↓
//! Elasticsearch
//! ```
//!
//! ## Structure
//!
//! ```text
//! src/
//!   traits.rs                        ← ProductRepository trait
//!   impl/
//!     product_repository_impl.rs     ← ProductRepositoryImpl
//!   dao/
//!     product_dao.rs                 ← ProductDao trait
//!     impl/
//!       elasticsearch.rs             ← ElasticsearchProductDao
//! ```

pub mod dao;
pub mod traits;
pub mod r#impl;

pub use dao::{ElasticsearchProductDao, ProductDao};
pub use traits::*;
pub use r#impl::ProductRepositoryImpl;
