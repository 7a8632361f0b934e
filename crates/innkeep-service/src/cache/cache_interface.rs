//! Cache client trait.

use async_trait::async_trait;
use innkeep_core::{InnkeepResult, Interface};
use std::time::Duration;

/// A key/value cache with per-entry TTL.
///
/// Values are JSON text. Implementations must be safe to share across
/// concurrent callers.
#[async_trait]
pub trait CacheInterface: Interface + Send + Sync {
    /// Get a raw JSON value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get_raw(&self, key: &str) -> InnkeepResult<Option<String>>;

    /// Set a raw JSON value in the cache with a TTL, replacing any entry.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> InnkeepResult<()>;

    /// Delete a value from the cache.
    ///
    /// Returns `true` if the key existed. Deleting a missing key is not an
    /// error.
    async fn delete(&self, key: &str) -> InnkeepResult<bool>;
}
