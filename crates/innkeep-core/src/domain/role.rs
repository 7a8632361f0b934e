//! User role value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles a hotel account can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Hotel guest.
    #[default]
    Guest,
    /// Front desk and housekeeping staff.
    Staff,
    /// Administrator with full access.
    Admin,
}

impl UserRole {
    /// Returns the role name as stored in the `users.role` column.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Guest => "guest",
            Self::Staff => "staff",
            Self::Admin => "admin",
        }
    }

    /// Parses a stored role, treating unknown values as `Guest`.
    #[must_use]
    pub fn from_db(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "guest" => Ok(Self::Guest),
            "staff" => Ok(Self::Staff),
            "admin" => Ok(Self::Admin),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_column_text() {
        for role in [UserRole::Guest, UserRole::Staff, UserRole::Admin] {
            assert_eq!(role.as_str().parse::<UserRole>().unwrap(), role);
        }
    }

    #[test]
    fn test_role_parse_is_case_insensitive() {
        assert_eq!("STAFF".parse::<UserRole>().unwrap(), UserRole::Staff);
    }

    #[test]
    fn test_unknown_stored_role_falls_back_to_guest() {
        assert!("owner".parse::<UserRole>().is_err());
        assert_eq!(UserRole::from_db("owner"), UserRole::Guest);
    }
}
