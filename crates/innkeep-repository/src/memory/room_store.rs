//! In-memory room store.

use crate::traits::RoomStore;
use async_trait::async_trait;
use chrono::Utc;
use innkeep_core::{InnkeepError, InnkeepResult, NewRoom, Room, RoomId};
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// Room store backed by a map.
#[derive(Debug, Default)]
pub struct InMemoryRoomStore {
    rooms: RwLock<BTreeMap<RoomId, Room>>,
}

impl InMemoryRoomStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_rooms(rooms: impl IntoIterator<Item = Room>) -> Self {
        let store = Self::new();
        store
            .rooms
            .write()
            .extend(rooms.into_iter().map(|room| (room.id, room)));
        store
    }
}

#[async_trait]
impl RoomStore for InMemoryRoomStore {
    async fn find_by_id(&self, id: RoomId) -> InnkeepResult<Option<Room>> {
        Ok(self.rooms.read().get(&id).cloned())
    }

    async fn list_all(&self) -> InnkeepResult<Vec<Room>> {
        let mut rooms: Vec<Room> = self.rooms.read().values().cloned().collect();
        rooms.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rooms)
    }

    async fn list_available(&self) -> InnkeepResult<Vec<Room>> {
        let mut rooms: Vec<Room> = self
            .rooms
            .read()
            .values()
            .filter(|room| room.is_available)
            .cloned()
            .collect();
        rooms.sort_by(|a, b| a.room_number.cmp(&b.room_number));
        Ok(rooms)
    }

    async fn insert(&self, new_room: &NewRoom) -> InnkeepResult<Room> {
        let mut rooms = self.rooms.write();
        if rooms.values().any(|r| r.room_number == new_room.room_number) {
            return Err(InnkeepError::conflict(format!(
                "room {} already exists",
                new_room.room_number
            )));
        }

        let id = rooms.keys().next_back().map_or(1, |last| last.into_inner() + 1);
        let now = Utc::now();
        let room = Room {
            id: RoomId::new(id),
            room_number: new_room.room_number.clone(),
            room_type: new_room.room_type.clone(),
            description: new_room.description.clone(),
            price_per_night: new_room.price_per_night,
            capacity: new_room.capacity,
            floor: new_room.floor,
            amenities: new_room.amenities.clone(),
            is_available: true,
            created_at: now,
            updated_at: now,
        };
        rooms.insert(room.id, room.clone());
        Ok(room)
    }

    async fn set_availability(&self, id: RoomId, is_available: bool) -> InnkeepResult<Option<Room>> {
        let mut rooms = self.rooms.write();
        Ok(rooms.get_mut(&id).map(|room| {
            room.is_available = is_available;
            room.updated_at = Utc::now();
            room.clone()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_room(number: &str) -> NewRoom {
        NewRoom {
            room_number: number.to_string(),
            room_type: "single".to_string(),
            description: "Garden view".to_string(),
            price_per_night: 80.0,
            capacity: 1,
            floor: 1,
            amenities: vec!["wifi".to_string()],
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_ids_and_starts_available() {
        let store = InMemoryRoomStore::new();
        let first = store.insert(&new_room("102")).await.unwrap();
        let second = store.insert(&new_room("101")).await.unwrap();

        assert_eq!(first.id, RoomId::new(1));
        assert_eq!(second.id, RoomId::new(2));
        assert!(second.is_available);

        let numbers: Vec<String> = store
            .list_available()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.room_number)
            .collect();
        assert_eq!(numbers, vec!["101", "102"]);
    }

    #[tokio::test]
    async fn test_unavailable_rooms_are_not_listed() {
        let store = InMemoryRoomStore::new();
        let room = store.insert(&new_room("201")).await.unwrap();
        store.set_availability(room.id, false).await.unwrap();

        assert!(store.list_available().await.unwrap().is_empty());
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_room_number() {
        let store = InMemoryRoomStore::new();
        store.insert(&new_room("301")).await.unwrap();
        assert!(store.insert(&new_room("301")).await.is_err());
    }
}
