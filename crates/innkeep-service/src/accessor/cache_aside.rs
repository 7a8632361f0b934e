//! Read-through caching and write invalidation.

use crate::cache::{CacheFailureSink, CacheLayer, CacheOp, TracingFailureSink};
use crate::metrics;
use futures::future::join_all;
use innkeep_config::CacheConfig;
use innkeep_core::{InnkeepError, InnkeepResult, Redact};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Default lifetime of a cached entry.
pub const DEFAULT_TTL: Duration = Duration::from_secs(600);

/// Default deadline for a single cache call.
pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_millis(500);

/// A value that may be stored in the cache.
///
/// Only the [`Redact`]ed form of a value is ever serialized.
pub trait Cacheable: Redact + Serialize + DeserializeOwned + Send + Sync {}

impl<T: Redact + Serialize + DeserializeOwned + Send + Sync> Cacheable for T {}

/// Cache-aside policy shared by the entity accessors.
///
/// The store is authoritative. Entries are created on a miss after a
/// successful store read and destroyed by invalidation or TTL, never updated
/// in place. Every cache failure, including a call that overruns the
/// per-operation deadline or an entry that no longer parses, is reported to
/// the [`CacheFailureSink`] and otherwise treated as a miss.
#[derive(Clone)]
pub struct CacheAside {
    cache: CacheLayer,
    ttl: Duration,
    operation_timeout: Duration,
    sink: Arc<dyn CacheFailureSink>,
}

impl CacheAside {
    /// Creates a policy with the given TTL, reporting failures via tracing.
    #[must_use]
    pub fn new(cache: CacheLayer, ttl: Duration) -> Self {
        Self {
            cache,
            ttl,
            operation_timeout: DEFAULT_OPERATION_TIMEOUT,
            sink: Arc::new(TracingFailureSink),
        }
    }

    /// Creates a policy using the TTL and deadline from `config`.
    #[must_use]
    pub fn from_config(cache: CacheLayer, config: &CacheConfig) -> Self {
        Self::new(cache, config.ttl()).with_operation_timeout(config.operation_timeout())
    }

    #[must_use]
    pub fn with_operation_timeout(mut self, timeout: Duration) -> Self {
        self.operation_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_failure_sink(mut self, sink: Arc<dyn CacheFailureSink>) -> Self {
        self.sink = sink;
        self
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.cache.is_enabled()
    }

    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the value under `key`, loading and caching it on a miss.
    ///
    /// `view` labels the hit/miss counters. `Ok(None)` from the loader is
    /// passed through and never cached. A loaded value is redacted before it
    /// is cached and returned, so hits and misses yield the same shape.
    pub async fn read_through<T, F, Fut>(
        &self,
        view: &'static str,
        key: &str,
        loader: F,
    ) -> InnkeepResult<Option<T>>
    where
        T: Cacheable,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = InnkeepResult<Option<T>>> + Send,
    {
        if let Some(hit) = self.lookup::<T>(view, key).await {
            return Ok(Some(hit));
        }

        let Some(value) = loader().await? else {
            debug!(key = %key, "Not found in store, nothing cached");
            return Ok(None);
        };

        let value = value.redacted();
        self.populate(key, &value).await;
        Ok(Some(value))
    }

    /// Deletes `key`. Failures are reported, never returned.
    pub async fn invalidate(&self, key: &str) {
        let Some(cache) = self.cache.client() else {
            return;
        };
        if let Some(existed) = self.guarded(CacheOp::Delete, key, cache.delete(key)).await {
            debug!(key = %key, existed, "Invalidated cache entry");
        }
    }

    /// Deletes every key in `keys` concurrently.
    pub async fn invalidate_all(&self, keys: &[&str]) {
        join_all(keys.iter().map(|key| self.invalidate(key))).await;
    }

    async fn lookup<T: Cacheable>(&self, view: &'static str, key: &str) -> Option<T> {
        let cache = self.cache.client()?;

        let cached = self.guarded(CacheOp::Get, key, cache.get_raw(key)).await.flatten();
        let Some(json) = cached else {
            metrics::record_miss(view);
            return None;
        };

        match serde_json::from_str::<T>(&json) {
            Ok(value) => {
                debug!(key = %key, "Cache hit");
                metrics::record_hit(view);
                Some(value)
            }
            Err(e) => {
                // Not deleted here; the populate that follows the store read replaces it.
                self.sink.report(CacheOp::Decode, key, &InnkeepError::from(e));
                metrics::record_miss(view);
                None
            }
        }
    }

    async fn populate<T: Cacheable>(&self, key: &str, value: &T) {
        let Some(cache) = self.cache.client() else {
            return;
        };
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                self.sink.report(CacheOp::Encode, key, &InnkeepError::from(e));
                return;
            }
        };
        if self
            .guarded(CacheOp::Set, key, cache.set_raw(key, &json, self.ttl))
            .await
            .is_some()
        {
            debug!(key = %key, ttl_secs = self.ttl.as_secs(), "Populated cache entry");
        }
    }

    // Runs one cache call under the per-operation deadline.
    async fn guarded<T>(
        &self,
        op: CacheOp,
        key: &str,
        call: impl Future<Output = InnkeepResult<T>>,
    ) -> Option<T> {
        match tokio::time::timeout(self.operation_timeout, call).await {
            Ok(Ok(value)) => Some(value),
            Ok(Err(e)) => {
                self.sink.report(op, key, &e);
                None
            }
            Err(_) => {
                let e = InnkeepError::Timeout(format!(
                    "cache {} exceeded {:?}",
                    op, self.operation_timeout
                ));
                self.sink.report(op, key, &e);
                None
            }
        }
    }
}

impl std::fmt::Debug for CacheAside {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheAside")
            .field("cache", &self.cache)
            .field("ttl", &self.ttl)
            .field("operation_timeout", &self.operation_timeout)
            .finish_non_exhaustive()
    }
}
