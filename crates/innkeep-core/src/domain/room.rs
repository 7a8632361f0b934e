//! Room entity.

use super::Redact;
use crate::{rules, RoomId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A bookable hotel room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier for the room.
    pub id: RoomId,
    /// Door label, e.g. "101" or "Suite-A".
    pub room_number: String,
    /// Category such as single, double or suite.
    pub room_type: String,
    /// Free-form description.
    pub description: String,
    /// Nightly rate.
    pub price_per_night: f64,
    /// Maximum number of guests.
    pub capacity: i32,
    /// Floor the room is on.
    pub floor: i32,
    /// Amenities offered in the room.
    pub amenities: Vec<String>,
    /// Whether the room can currently be booked.
    pub is_available: bool,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

// Rooms carry no secrets.
impl Redact for Room {
    fn redacted(&self) -> Self {
        self.clone()
    }
}

/// Fields required to add a room. New rooms start out available.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewRoom {
    #[validate(custom(function = "rules::not_blank"))]
    pub room_number: String,
    #[validate(custom(function = "rules::not_blank"))]
    pub room_type: String,
    #[validate(custom(function = "rules::not_blank"))]
    pub description: String,
    #[validate(custom(function = "rules::positive_price"))]
    pub price_per_night: f64,
    #[validate(range(min = 1))]
    pub capacity: i32,
    #[validate(range(min = 1))]
    pub floor: i32,
    #[validate(length(min = 1))]
    pub amenities: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidateExt;

    fn deluxe() -> NewRoom {
        NewRoom {
            room_number: "101".to_string(),
            room_type: "double".to_string(),
            description: "Sea view".to_string(),
            price_per_night: 120.0,
            capacity: 2,
            floor: 1,
            amenities: vec!["wifi".to_string(), "minibar".to_string()],
        }
    }

    #[test]
    fn test_valid_room() {
        assert!(deluxe().validate_request().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_price() {
        let mut room = deluxe();
        room.price_per_night = 0.0;
        let err = room.validate_request().unwrap_err();
        assert!(err.to_string().contains("price_per_night"));
    }

    #[test]
    fn test_price_rule_runs_through_derive() {
        let mut room = deluxe();
        room.price_per_night = -15.0;
        assert!(room.validate_request().is_err());

        room.price_per_night = 0.01;
        assert!(room.validate_request().is_ok());
    }

    #[test]
    fn test_rejects_missing_amenities_and_floor() {
        let mut room = deluxe();
        room.amenities.clear();
        room.floor = 0;
        let message = room.validate_request().unwrap_err().to_string();
        assert!(message.contains("amenities"));
        assert!(message.contains("floor"));
    }
}
