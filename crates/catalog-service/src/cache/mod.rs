//! Caching infrastructure for the service layer.
//!
//! A cache abstraction with a Redis implementation. Values are stored as JSON
//! strings; typed access goes through [`CacheExt`].

mod cache_interface;
pub mod cache_keys;
mod redis_cache;

pub use cache_interface::{CacheExt, CacheInterface};
pub use redis_cache::RedisCacheService;
