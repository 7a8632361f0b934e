//! Optional cache capability.

use super::{CacheInterface, RedisCacheService};
use innkeep_config::CacheConfig;
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

/// The cache as seen by the accessors: present, or explicitly absent.
///
/// Chosen once at startup. With `Disabled`, reads go straight to the store
/// and writes skip invalidation.
#[derive(Clone, Default)]
pub enum CacheLayer {
    Enabled(Arc<dyn CacheInterface>),
    #[default]
    Disabled,
}

impl CacheLayer {
    /// Wraps a cache client.
    pub fn enabled(cache: impl CacheInterface + 'static) -> Self {
        Self::Enabled(Arc::new(cache))
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled(_))
    }

    /// The cache client, if there is one.
    #[must_use]
    pub fn client(&self) -> Option<&Arc<dyn CacheInterface>> {
        match self {
            Self::Enabled(cache) => Some(cache),
            Self::Disabled => None,
        }
    }
}

impl fmt::Debug for CacheLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enabled(_) => f.write_str("CacheLayer::Enabled"),
            Self::Disabled => f.write_str("CacheLayer::Disabled"),
        }
    }
}

/// Connects to Redis, falling back to [`CacheLayer::Disabled`].
///
/// The server must answer a `PING` within `connect_timeout_ms`. An
/// unreachable cache is logged and tolerated; the process keeps running
/// without caching.
pub async fn connect_cache(config: &CacheConfig) -> CacheLayer {
    if !config.enabled {
        info!("Cache disabled by configuration");
        return CacheLayer::Disabled;
    }

    let service = match RedisCacheService::from_config(config) {
        Ok(service) => service,
        Err(e) => {
            warn!(error = %e, "Cache unavailable, continuing without caching");
            return CacheLayer::Disabled;
        }
    };

    match tokio::time::timeout(config.connect_timeout(), service.ping()).await {
        Ok(Ok(())) => {
            info!(url = %config.url, "Connected to cache");
            CacheLayer::enabled(service)
        }
        Ok(Err(e)) => {
            warn!(error = %e, "Cache unavailable, continuing without caching");
            CacheLayer::Disabled
        }
        Err(_) => {
            warn!(
                timeout_ms = config.connect_timeout_ms,
                "Cache ping timed out, continuing without caching"
            );
            CacheLayer::Disabled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;

    #[tokio::test]
    async fn test_disabled_by_config() {
        let config = CacheConfig {
            enabled: false,
            ..CacheConfig::default()
        };
        assert!(!connect_cache(&config).await.is_enabled());
    }

    #[tokio::test]
    async fn test_unreachable_server_degrades() {
        let config = CacheConfig {
            url: "redis://127.0.0.1:1".to_string(),
            connect_timeout_ms: 200,
            ..CacheConfig::default()
        };
        let layer = connect_cache(&config).await;
        assert!(layer.client().is_none());
    }

    #[test]
    fn test_enabled_layer_exposes_client() {
        let layer = CacheLayer::enabled(MemoryCache::new());
        assert!(layer.is_enabled());
        assert!(layer.client().is_some());
        assert_eq!(format!("{:?}", CacheLayer::default()), "CacheLayer::Disabled");
    }
}
