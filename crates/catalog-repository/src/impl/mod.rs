//! Repository implementations.
//!
//! Trait definitions live in `traits.rs`.

pub mod product_repository_impl;

pub use product_repository_impl::ProductRepositoryImpl;
