//! Cache clients for the accessors.
//!
//! [`CacheLayer`] carries either a [`CacheInterface`] implementation
//! (Redis or in-process) or the explicit absence of one.

mod cache_interface;
pub mod cache_keys;
mod failure;
mod layer;
mod memory_cache;
mod redis_cache;

pub use cache_interface::CacheInterface;
pub use failure::{CacheFailureSink, CacheOp, TracingFailureSink};
pub use layer::{connect_cache, CacheLayer};
pub use memory_cache::MemoryCache;
pub use redis_cache::RedisCacheService;
