//! Construction of the shared accessors.

use crate::accessor::{CacheAside, RoomAccess, RoomAccessor, UserAccess, UserAccessor};
use crate::cache::{connect_cache, CacheLayer, MemoryCache};
use crate::metrics::register_metrics;
use innkeep_config::{AppConfig, CacheConfig};
use innkeep_core::InnkeepResult;
use innkeep_repository::{create_pool, InMemoryRoomStore, InMemoryUserStore, PgRoomStore, PgUserStore};
use innkeep_repository::{DatabasePool, RoomStore, UserStore};
use std::sync::Arc;
use tracing::info;

/// The accessors handed to the service layer, sharing one cache policy.
#[derive(Clone)]
pub struct Accessors {
    pub users: Arc<dyn UserAccess>,
    pub rooms: Arc<dyn RoomAccess>,
    pub cache: CacheLayer,
}

impl Accessors {
    /// Connects to PostgreSQL and, if configured and reachable, Redis.
    ///
    /// Returns the pool as well so the caller owns its shutdown.
    pub async fn connect(config: &AppConfig) -> InnkeepResult<(Self, Arc<DatabasePool>)> {
        register_metrics();

        let pool = create_pool(&config.database).await?;
        let cache = connect_cache(&config.cache).await;

        let accessors = Self::with_stores(
            Arc::new(PgUserStore::new(pool.clone())),
            Arc::new(PgRoomStore::new(pool.clone())),
            cache,
            &config.cache,
        );
        Ok((accessors, pool))
    }

    /// Builds accessors over in-process stores, for local runs without a
    /// database. Uses an in-process cache unless caching is disabled.
    #[must_use]
    pub fn in_memory(config: &CacheConfig) -> Self {
        let cache = if config.enabled {
            CacheLayer::enabled(MemoryCache::new())
        } else {
            CacheLayer::Disabled
        };
        Self::with_stores(
            Arc::new(InMemoryUserStore::new()),
            Arc::new(InMemoryRoomStore::new()),
            cache,
            config,
        )
    }

    #[must_use]
    pub fn with_stores(
        users: Arc<dyn UserStore>,
        rooms: Arc<dyn RoomStore>,
        cache: CacheLayer,
        config: &CacheConfig,
    ) -> Self {
        info!(cache = ?cache, ttl_secs = config.ttl_secs, "Building accessors");
        let policy = CacheAside::from_config(cache.clone(), config);
        Self {
            users: Arc::new(UserAccessor::new(users, policy.clone())),
            rooms: Arc::new(RoomAccessor::new(rooms, policy)),
            cache,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use innkeep_core::{NewRoom, NewUser, UserRole};
    use innkeep_repository::UserFilter;

    #[tokio::test]
    async fn test_in_memory_accessors_round_trip() {
        let accessors = Accessors::in_memory(&CacheConfig::default());
        assert!(accessors.cache.is_enabled());

        let user = accessors
            .users
            .create_user(NewUser {
                name: "Ana Souza".to_string(),
                email: "ana@hotel.io".to_string(),
                phone: "5551234567".to_string(),
                password_hash: "$argon2id$v=19$x".to_string(),
                role: UserRole::Staff,
            })
            .await
            .unwrap();
        assert_eq!(accessors.users.get_by_id(user.id).await.unwrap(), user);

        let page = accessors.users.get_filtered(&UserFilter::new(), 1, 0).await.unwrap();
        assert_eq!(page.total, 1);

        accessors
            .rooms
            .add_room(NewRoom {
                room_number: "101".to_string(),
                room_type: "double".to_string(),
                description: "Sea view".to_string(),
                price_per_night: 120.0,
                capacity: 2,
                floor: 1,
                amenities: vec!["wifi".to_string()],
            })
            .await
            .unwrap();
        assert_eq!(accessors.rooms.available_rooms().await.unwrap().len(), 1);
    }

    #[test]
    fn test_disabled_cache_config() {
        let config = CacheConfig {
            enabled: false,
            ..CacheConfig::default()
        };
        assert!(!Accessors::in_memory(&config).cache.is_enabled());
    }
}
