//! Cache key generators.
//!
//! These names are shared with any other process reading the same cache and
//! must not change.

use innkeep_core::{RoomId, UserId};

/// Collection view over user listings.
pub const USERS_LIST: &str = "users:list";

/// Collection view over bookable rooms.
pub const AVAILABLE_ROOMS: &str = "available_rooms";

/// Point-lookup key for a user.
#[must_use]
pub fn user_by_id(id: UserId) -> String {
    entity("user", id)
}

/// Point-lookup key for a room.
#[must_use]
pub fn room_by_id(id: RoomId) -> String {
    entity("room", id)
}

/// `<kind>:<id>`.
#[must_use]
pub fn entity(kind: &str, id: impl std::fmt::Display) -> String {
    format!("{}:{}", kind, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_keys() {
        assert_eq!(user_by_id(UserId::new(7)), "user:7");
        assert_eq!(room_by_id(RoomId::new(12)), "room:12");
    }

    #[test]
    fn test_collection_keys() {
        assert_eq!(USERS_LIST, "users:list");
        assert_eq!(AVAILABLE_ROOMS, "available_rooms");
    }
}
