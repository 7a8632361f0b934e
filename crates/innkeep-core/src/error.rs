//! Unified error types for the data access layers.

use thiserror::Error;

/// Unified error type for Innkeep.
///
/// Store failures and missing records are the only conditions that reach a
/// caller of the accessors. `Cache` exists so cache backends can report what
/// went wrong; the cache-aside layer absorbs it before it escapes.
#[derive(Error, Debug)]
pub enum InnkeepError {
    // ============ Domain Errors ============
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Conflict error (e.g., duplicate entry)
    #[error("Conflict: {0}")]
    Conflict(String),

    // ============ Infrastructure Errors ============
    /// Relational store error
    #[error("Database error: {0}")]
    Database(String),

    /// Redis/Cache error
    #[error("Cache error: {0}")]
    Cache(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Timeout error
    #[error("Operation timed out: {0}")]
    Timeout(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl InnkeepError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
            Self::Conflict(_) => 409,
            Self::Timeout(_) => 503,
            Self::Database(_)
            | Self::Cache(_)
            | Self::Configuration(_)
            | Self::Internal(_)
            | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict<T: Into<String>>(message: T) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates a cache error.
    #[must_use]
    pub fn cache<T: Into<String>>(message: T) -> Self {
        Self::Cache(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true for the distinct "missing resource" condition.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for InnkeepError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) => {
                // PostgreSQL unique violation
                if db_err.code().as_deref() == Some("23505") {
                    return Self::Conflict(db_err.message().to_string());
                }
                Self::Database(err.to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for InnkeepError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(InnkeepError::not_found("User", 7).status_code(), 404);
        assert_eq!(InnkeepError::validation("bad phone").status_code(), 400);
        assert_eq!(InnkeepError::conflict("duplicate").status_code(), 409);
        assert_eq!(InnkeepError::Database("down".to_string()).status_code(), 500);
        assert_eq!(InnkeepError::Timeout("slow".to_string()).status_code(), 503);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(InnkeepError::not_found("Room", 1).error_code(), "NOT_FOUND");
        assert_eq!(InnkeepError::cache("refused").error_code(), "CACHE_ERROR");
        assert_eq!(InnkeepError::internal("oops").error_code(), "INTERNAL_ERROR");
        assert_eq!(InnkeepError::conflict("dup").error_code(), "CONFLICT");
        assert_eq!(
            InnkeepError::Configuration("bad url".to_string()).error_code(),
            "CONFIGURATION_ERROR"
        );
        assert_eq!(InnkeepError::Timeout("slow".to_string()).error_code(), "TIMEOUT");
    }

    #[test]
    fn test_not_found_is_distinct() {
        assert!(InnkeepError::not_found("User", 7).is_not_found());
        assert!(!InnkeepError::Database("connection reset".to_string()).is_not_found());
    }

    #[test]
    fn test_not_found_message() {
        let err = InnkeepError::not_found("User", 7);
        assert_eq!(err.to_string(), "Resource not found: User with id 7");
    }
}
