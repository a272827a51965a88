//! DAO (Data Access Object) layer.
//!
//! DAOs provide low-level, single-source data access abstractions.
//! Each DAO interface maps to one data source.
//!
//! Hierarchy:
//! ```text
//! Service → Repository (interface + impl) → DAO (interface + impl) → Elasticsearch
//! ```

pub mod product_dao;
pub mod r#impl;

pub use product_dao::ProductDao;
pub use r#impl::ElasticsearchProductDao;
