//! Store client trait definitions.

use crate::UserFilter;
use innkeep_core::{InnkeepResult, Interface, PageWindow, RoomId, UserId};
use innkeep_core::{NewRoom, NewUser, Room, User};
use async_trait::async_trait;

/// Relational access to user records.
///
/// `Ok(None)` means the record does not exist; `Err` is reserved for
/// storage failures.
#[async_trait]
pub trait UserStore: Interface + Send + Sync {
    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> InnkeepResult<Option<User>>;

    /// Finds a user by e-mail, case-insensitively.
    async fn find_by_email(&self, email: &str) -> InnkeepResult<Option<User>>;

    /// Counts the users matching `filter`.
    async fn count_filtered(&self, filter: &UserFilter) -> InnkeepResult<u64>;

    /// Returns one newest-first window of the users matching `filter`.
    async fn find_filtered(&self, filter: &UserFilter, window: PageWindow) -> InnkeepResult<Vec<User>>;

    /// Sets the active flag, returning the updated record.
    async fn update_status(&self, id: UserId, is_active: bool) -> InnkeepResult<Option<User>>;

    /// Inserts a new, active user.
    async fn insert(&self, user: &NewUser) -> InnkeepResult<User>;
}

/// Relational access to room records.
#[async_trait]
pub trait RoomStore: Interface + Send + Sync {
    /// Finds a room by ID.
    async fn find_by_id(&self, id: RoomId) -> InnkeepResult<Option<Room>>;

    /// Lists every room, newest first.
    async fn list_all(&self) -> InnkeepResult<Vec<Room>>;

    /// Lists the rooms that can currently be booked, by room number.
    async fn list_available(&self) -> InnkeepResult<Vec<Room>>;

    /// Inserts a new, available room.
    async fn insert(&self, room: &NewRoom) -> InnkeepResult<Room>;

    /// Sets the availability flag, returning the updated record.
    async fn set_availability(&self, id: RoomId, is_available: bool) -> InnkeepResult<Option<Room>>;
}
