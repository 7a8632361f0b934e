//! Cached room access.

use super::{CacheAside, RoomAccess};
use crate::cache::cache_keys;
use async_trait::async_trait;
use innkeep_core::{InnkeepError, InnkeepResult, NewRoom, Room, RoomId, ValidateExt};
use innkeep_repository::RoomStore;
use std::sync::Arc;
use tracing::{debug, info};

/// Room accessor over any [`RoomStore`].
pub struct RoomAccessor<S: RoomStore + ?Sized> {
    store: Arc<S>,
    cache: CacheAside,
}

impl<S: RoomStore + ?Sized> RoomAccessor<S> {
    #[must_use]
    pub fn new(store: Arc<S>, cache: CacheAside) -> Self {
        Self { store, cache }
    }

    async fn require(&self, id: RoomId) -> InnkeepResult<Room> {
        self.cache
            .read_through("room", &cache_keys::room_by_id(id), || self.store.find_by_id(id))
            .await?
            .ok_or_else(|| InnkeepError::not_found("Room", id))
    }
}

#[async_trait]
impl<S: RoomStore + ?Sized + 'static> RoomAccess for RoomAccessor<S> {
    async fn get_by_id(&self, id: RoomId) -> InnkeepResult<Room> {
        debug!("Getting room: {}", id);
        self.require(id).await
    }

    async fn list_rooms(&self) -> InnkeepResult<Vec<Room>> {
        self.store.list_all().await
    }

    async fn available_rooms(&self) -> InnkeepResult<Vec<Room>> {
        let rooms = self
            .cache
            .read_through("available_rooms", cache_keys::AVAILABLE_ROOMS, || async {
                self.store.list_available().await.map(Some)
            })
            .await?;
        Ok(rooms.unwrap_or_default())
    }

    async fn add_room(&self, new_room: NewRoom) -> InnkeepResult<Room> {
        debug!("Adding room: {}", new_room.room_number);

        new_room.validate_request()?;
        let room = self.store.insert(&new_room).await?;
        self.cache.invalidate(cache_keys::AVAILABLE_ROOMS).await;

        info!("Room added: {}", room.id);
        Ok(room)
    }

    async fn set_availability(&self, id: RoomId, is_available: bool) -> InnkeepResult<Room> {
        debug!("Setting room availability: {} -> {}", id, is_available);

        self.require(id).await?;

        let room = self
            .store
            .set_availability(id, is_available)
            .await?
            .ok_or_else(|| InnkeepError::not_found("Room", id))?;

        let key = cache_keys::room_by_id(id);
        self.cache.invalidate_all(&[key.as_str(), cache_keys::AVAILABLE_ROOMS]).await;

        info!("Room availability updated: {}", id);
        Ok(room)
    }

    async fn invalidate(&self, key: &str) {
        self.cache.invalidate(key).await;
    }
}
