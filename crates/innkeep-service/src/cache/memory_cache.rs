//! In-process cache with lazy TTL expiry.

use super::CacheInterface;
use async_trait::async_trait;
use innkeep_core::InnkeepResult;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone)]
struct CacheEntry {
    value: String,
    expires_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Cache held in a process-local map.
///
/// Expired entries are dropped when next touched rather than by a sweeper.
/// Useful for local runs without Redis and as a test double.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl MemoryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries.lock().values().filter(|e| !e.is_expired(now)).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if `key` holds a live entry.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        let now = Instant::now();
        self.entries
            .lock()
            .get(key)
            .is_some_and(|e| !e.is_expired(now))
    }
}

#[async_trait]
impl CacheInterface for MemoryCache {
    async fn get_raw(&self, key: &str) -> InnkeepResult<Option<String>> {
        let now = Instant::now();
        let mut entries = self.entries.lock();
        let expired = match entries.get(key) {
            Some(entry) if !entry.is_expired(now) => return Ok(Some(entry.value.clone())),
            Some(_) => true,
            None => false,
        };
        if expired {
            entries.remove(key);
        }
        Ok(None)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> InnkeepResult<()> {
        let entry = CacheEntry {
            value: value.to_string(),
            expires_at: Instant::now() + ttl,
        };
        self.entries.lock().insert(key.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, key: &str) -> InnkeepResult<bool> {
        let now = Instant::now();
        Ok(self
            .entries
            .lock()
            .remove(key)
            .is_some_and(|e| !e.is_expired(now)))
    }
}
