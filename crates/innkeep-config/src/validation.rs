//! Configuration validation.
//!
//! Collects every problem in one pass so a bad deployment fails at startup
//! with the full list rather than one error at a time.

use crate::{AppConfig, CacheConfig, DatabaseConfig, ObservabilityConfig};
use std::fmt;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// A URL is missing or has the wrong scheme.
    InvalidUrl { url_type: String, message: String },
    /// Pool size configuration is invalid (min must be <= max).
    InvalidPoolSize { min: u32, max: u32 },
    /// A duration that must be positive is zero.
    NonPositiveTimeout { name: String },
    /// Cache entries would never live.
    ZeroTtl,
    /// Log level is not recognised.
    InvalidLogLevel { value: String },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUrl { url_type, message } => {
                write!(f, "Invalid {} URL: {}", url_type, message)
            }
            Self::InvalidPoolSize { min, max } => write!(
                f,
                "Invalid pool size: min_connections ({}) > max_connections ({})",
                min, max
            ),
            Self::NonPositiveTimeout { name } => write!(f, "{} must be positive", name),
            Self::ZeroTtl => write!(f, "cache.ttl_secs must be positive when the cache is enabled"),
            Self::InvalidLogLevel { value } => write!(f, "Invalid log level: {}", value),
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    const VALID_LOG_LEVELS: &'static [&'static str] = &["trace", "debug", "info", "warn", "error"];

    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        Self::validate_database(&config.database, &mut errors);
        Self::validate_cache(&config.cache, &mut errors);
        Self::validate_observability(&config.observability, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_database(config: &DatabaseConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.url.is_empty() {
            errors.push(ConfigValidationError::InvalidUrl {
                url_type: "database".to_string(),
                message: "URL cannot be empty".to_string(),
            });
        } else if !config.url.starts_with("postgres://") && !config.url.starts_with("postgresql://") {
            errors.push(ConfigValidationError::InvalidUrl {
                url_type: "database".to_string(),
                message: "URL must start with postgres:// or postgresql://".to_string(),
            });
        }

        if config.min_connections > config.max_connections {
            errors.push(ConfigValidationError::InvalidPoolSize {
                min: config.min_connections,
                max: config.max_connections,
            });
        }

        if config.connect_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "database.connect_timeout_secs".to_string(),
            });
        }
    }

    // A disabled cache is never contacted, so its settings don't matter.
    fn validate_cache(config: &CacheConfig, errors: &mut Vec<ConfigValidationError>) {
        if !config.enabled {
            return;
        }

        if !config.url.starts_with("redis://") && !config.url.starts_with("rediss://") {
            errors.push(ConfigValidationError::InvalidUrl {
                url_type: "cache".to_string(),
                message: "URL must start with redis:// or rediss://".to_string(),
            });
        }
        if config.ttl_secs == 0 {
            errors.push(ConfigValidationError::ZeroTtl);
        }
        if config.connect_timeout_ms == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "cache.connect_timeout_ms".to_string(),
            });
        }
        if config.operation_timeout_ms == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "cache.operation_timeout_ms".to_string(),
            });
        }
    }

    fn validate_observability(config: &ObservabilityConfig, errors: &mut Vec<ConfigValidationError>) {
        let level = config.log_level.to_lowercase();
        if !Self::VALID_LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::InvalidLogLevel {
                value: config.log_level.clone(),
            });
        }
    }
}

/// Formats validation errors for display.
#[must_use]
pub fn format_validation_errors(errors: &[ConfigValidationError]) -> String {
    let mut output = String::from("Configuration validation failed:\n");
    for (i, error) in errors.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, error));
    }
    output
}
