//! Redis-based cache implementation.

use super::CacheInterface;
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Config, Pool, PoolConfig, Runtime};
use innkeep_config::CacheConfig;
use innkeep_core::{InnkeepError, InnkeepResult};
use std::time::Duration;
use tracing::debug;

/// Redis-based cache service over a `deadpool-redis` pool.
#[derive(Clone)]
pub struct RedisCacheService {
    pool: Pool,
}

impl RedisCacheService {
    /// Create a new Redis cache service.
    #[must_use]
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Builds the connection pool described by `config`.
    ///
    /// No connection is opened until the first call; see [`ping`](Self::ping).
    pub fn from_config(config: &CacheConfig) -> InnkeepResult<Self> {
        let mut cfg = Config::from_url(config.url.clone());
        cfg.pool = Some(PoolConfig::new(config.pool_size.max(1)));
        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| InnkeepError::Cache(format!("Failed to create Redis pool: {}", e)))?;
        Ok(Self::new(pool))
    }

    /// Round-trips a `PING` to prove the server is reachable.
    pub async fn ping(&self) -> InnkeepResult<()> {
        let mut conn = self.get_conn().await?;
        let _: String = deadpool_redis::redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| InnkeepError::Cache(format!("PING failed: {}", e)))?;
        Ok(())
    }

    async fn get_conn(&self) -> InnkeepResult<deadpool_redis::Connection> {
        self.pool
            .get()
            .await
            .map_err(|e| InnkeepError::Cache(format!("Failed to get Redis connection: {}", e)))
    }
}

impl std::fmt::Debug for RedisCacheService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = self.pool.status();
        f.debug_struct("RedisCacheService")
            .field("size", &status.size)
            .field("available", &status.available)
            .finish()
    }
}

#[async_trait]
impl CacheInterface for RedisCacheService {
    async fn get_raw(&self, key: &str) -> InnkeepResult<Option<String>> {
        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| InnkeepError::Cache(format!("Failed to get key '{}': {}", key, e)))?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> InnkeepResult<()> {
        let mut conn = self.get_conn().await?;
        // SET EX rejects a zero expiry.
        let ttl_secs = ttl.as_secs().max(1);

        conn.set_ex::<_, _, ()>(key, value, ttl_secs)
            .await
            .map_err(|e| InnkeepError::Cache(format!("Failed to set key '{}': {}", key, e)))?;

        debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
        Ok(())
    }

    async fn delete(&self, key: &str) -> InnkeepResult<bool> {
        let mut conn = self.get_conn().await?;
        let deleted: i64 = conn
            .del(key)
            .await
            .map_err(|e| InnkeepError::Cache(format!("Failed to delete key '{}': {}", key, e)))?;

        debug!("Deleted key '{}': {}", key, deleted > 0);
        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_from_config_is_lazy() {
        let config = CacheConfig {
            url: "redis://127.0.0.1:1".to_string(),
            pool_size: 3,
            ..CacheConfig::default()
        };
        let cache = RedisCacheService::from_config(&config).unwrap();
        assert_eq!(cache.pool.status().max_size, 3);
    }

    #[test]
    fn test_rejects_malformed_url() {
        let config = CacheConfig {
            url: "not a url".to_string(),
            ..CacheConfig::default()
        };
        assert!(RedisCacheService::from_config(&config).is_err());
    }
}
