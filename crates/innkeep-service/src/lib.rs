//! # Innkeep Service
//!
//! Cache-aside data access for the Innkeep hotel backend.
//!
//! ```text
//! service / handler layer
//!   ↓  Arc<dyn UserAccess> / Arc<dyn RoomAccess>
//! UserAccessor / RoomAccessor  ── CacheAside ──→ CacheLayer (Redis | memory | disabled)
//!   ↓  Arc<dyn UserStore> / Arc<dyn RoomStore>
//! PostgreSQL
//! ```
//!
//! Reads check the cache first and fall through to the store on a miss.
//! Writes go to the store and then delete the affected cache entries. Cache
//! failures are reported through a [`CacheFailureSink`] and never returned.

pub mod accessor;
pub mod bootstrap;
pub mod cache;
pub mod metrics;

#[cfg(test)]
mod test_support;

pub use accessor::*;
pub use bootstrap::Accessors;
pub use cache::*;
