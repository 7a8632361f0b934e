//! User entity.

use super::{Redact, UserRole};
use crate::{rules, Page, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A hotel account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user.
    pub id: UserId,

    /// Full name.
    pub name: String,

    /// E-mail address, unique across accounts.
    pub email: String,

    /// Contact phone number.
    pub phone: String,

    /// Credential hash produced by the credential verifier.
    ///
    /// Empty on any copy that went through [`Redact`]; an empty hash is
    /// left out of the serialized form and defaults back to empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub password_hash: String,

    /// Account role.
    pub role: UserRole,

    /// Whether the account may sign in.
    pub is_active: bool,

    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Returns true if the credential hash has been stripped.
    #[must_use]
    pub fn is_redacted(&self) -> bool {
        self.password_hash.is_empty()
    }
}

impl Redact for User {
    fn redacted(&self) -> Self {
        Self {
            password_hash: String::new(),
            ..self.clone()
        }
    }
}

/// Fields required to register a new account.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewUser {
    /// Full name.
    #[validate(
        length(max = 100),
        custom(function = "rules::not_blank")
    )]
    pub name: String,

    /// E-mail address.
    #[validate(email, length(max = 255))]
    pub email: String,

    /// Ten digit phone number.
    #[validate(custom(function = "rules::ten_digit_phone"))]
    pub phone: String,

    /// Credential hash; never the plain password.
    #[validate(custom(function = "rules::not_blank"))]
    pub password_hash: String,

    /// Account role.
    #[serde(default)]
    pub role: UserRole,
}

/// A filtered, paginated slice of accounts.
pub type UserPage = Page<User>;
