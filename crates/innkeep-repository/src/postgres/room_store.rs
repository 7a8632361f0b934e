//! PostgreSQL room store.

use crate::{traits::RoomStore, DatabasePool};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use innkeep_core::{InnkeepResult, NewRoom, Room, RoomId};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

const ROOM_COLUMNS: &str = "id, room_number, room_type, description, price_per_night, \
                            capacity, floor, amenities, is_available, created_at, updated_at";

/// PostgreSQL room store.
#[derive(Clone)]
pub struct PgRoomStore {
    pool: Arc<DatabasePool>,
}

impl PgRoomStore {
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RoomRow {
    id: i64,
    room_number: String,
    room_type: String,
    description: String,
    price_per_night: f64,
    capacity: i32,
    floor: i32,
    amenities: Vec<String>,
    is_available: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<RoomRow> for Room {
    fn from(row: RoomRow) -> Self {
        Room {
            id: RoomId::new(row.id),
            room_number: row.room_number,
            room_type: row.room_type,
            description: row.description,
            price_per_night: row.price_per_night,
            capacity: row.capacity,
            floor: row.floor,
            amenities: row.amenities,
            is_available: row.is_available,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl RoomStore for PgRoomStore {
    async fn find_by_id(&self, id: RoomId) -> InnkeepResult<Option<Room>> {
        debug!("Finding room by id: {}", id);

        let row = sqlx::query_as::<_, RoomRow>(&format!(
            "SELECT {ROOM_COLUMNS} FROM rooms WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Room::from))
    }

    async fn list_all(&self) -> InnkeepResult<Vec<Room>> {
        let rows = sqlx::query_as::<_, RoomRow>(&format!(
            "SELECT {ROOM_COLUMNS} FROM rooms ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Room::from).collect())
    }

    async fn list_available(&self) -> InnkeepResult<Vec<Room>> {
        let rows = sqlx::query_as::<_, RoomRow>(&format!(
            "SELECT {ROOM_COLUMNS} FROM rooms WHERE is_available = TRUE ORDER BY room_number"
        ))
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Room::from).collect())
    }

    async fn insert(&self, room: &NewRoom) -> InnkeepResult<Room> {
        debug!("Inserting room: {}", room.room_number);

        let row = sqlx::query_as::<_, RoomRow>(&format!(
            "INSERT INTO rooms \
             (room_number, room_type, description, price_per_night, capacity, floor, amenities, is_available) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, TRUE) RETURNING {ROOM_COLUMNS}"
        ))
        .bind(&room.room_number)
        .bind(&room.room_type)
        .bind(&room.description)
        .bind(room.price_per_night)
        .bind(room.capacity)
        .bind(room.floor)
        .bind(&room.amenities)
        .fetch_one(self.pool.inner())
        .await?;

        Ok(Room::from(row))
    }

    async fn set_availability(&self, id: RoomId, is_available: bool) -> InnkeepResult<Option<Room>> {
        debug!("Setting room {} available = {}", id, is_available);

        let row = sqlx::query_as::<_, RoomRow>(&format!(
            "UPDATE rooms SET is_available = $1, updated_at = NOW() WHERE id = $2 RETURNING {ROOM_COLUMNS}"
        ))
        .bind(is_available)
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Room::from))
    }
}
