//! # Catalog Core
//!
//! Core types, domain entities, and error definitions for the product catalog.
//! Every other crate in the workspace depends on this one; it has no knowledge
//! of the cache or the document store.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
