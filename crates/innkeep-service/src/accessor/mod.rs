//! Entity accessors used by the service layer.
//!
//! Each accessor pairs a store client with the shared [`CacheAside`] policy.
//! Dropping an accessor future cancels its in-flight store and cache calls;
//! an abandoned cache populate leaves nothing inconsistent behind.

mod cache_aside;
mod room_accessor;
mod user_accessor;

pub use cache_aside::{CacheAside, Cacheable, DEFAULT_OPERATION_TIMEOUT, DEFAULT_TTL};
pub use room_accessor::RoomAccessor;
pub use user_accessor::UserAccessor;

use async_trait::async_trait;
use innkeep_core::{InnkeepResult, Interface, NewRoom, NewUser, Room, RoomId, User, UserId, UserPage};
use innkeep_repository::UserFilter;

/// Cached access to users.
///
/// Returned users never carry a credential hash.
#[async_trait]
pub trait UserAccess: Interface {
    /// Point lookup through the cache. A missing user is `NotFound`.
    async fn get_by_id(&self, id: UserId) -> InnkeepResult<User>;

    /// Filtered, newest-first page read straight from the store.
    ///
    /// `limit = 0` returns every match regardless of `page`.
    async fn get_filtered(&self, filter: &UserFilter, page: u32, limit: u32) -> InnkeepResult<UserPage>;

    /// Sets the active flag and invalidates the affected entries.
    async fn update_status(&self, id: UserId, is_active: bool) -> InnkeepResult<User>;

    /// Registers a user and invalidates the user listings.
    async fn create_user(&self, new_user: NewUser) -> InnkeepResult<User>;

    /// Deletes one cache entry by key.
    async fn invalidate(&self, key: &str);
}

/// Cached access to rooms.
#[async_trait]
pub trait RoomAccess: Interface {
    async fn get_by_id(&self, id: RoomId) -> InnkeepResult<Room>;

    /// Every room, newest first; not cached.
    async fn list_rooms(&self) -> InnkeepResult<Vec<Room>>;

    /// Bookable rooms, cached as one collection entry.
    async fn available_rooms(&self) -> InnkeepResult<Vec<Room>>;

    async fn add_room(&self, new_room: NewRoom) -> InnkeepResult<Room>;

    async fn set_availability(&self, id: RoomId, is_available: bool) -> InnkeepResult<Room>;

    /// Deletes one cache entry by key, e.g. after an external availability
    /// change.
    async fn invalidate(&self, key: &str);
}
