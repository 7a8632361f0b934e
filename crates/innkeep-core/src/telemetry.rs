//! Logging initialization.
//!
//! Installs a `tracing` subscriber driven by `RUST_LOG` when set and by the
//! configured level otherwise.

#[cfg(feature = "telemetry")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use serde::{Deserialize, Serialize};

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, multi-field lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    /// Parses a format name, falling back to `Pretty`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Builds the default filter directive for a base level.
#[must_use]
pub fn default_directive(level: &str) -> String {
    format!("{level},innkeep=debug,sqlx=warn")
}

/// Initializes logging once per process.
///
/// Returns `false` when a global subscriber was already installed, which is
/// the normal case when several tests call this.
#[cfg(feature = "telemetry")]
pub fn init_logging(level: &str, format: LogFormat) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init(),
    };

    if installed.is_ok() {
        tracing::debug!(level, ?format, "Logging initialized");
    }
    installed.is_ok()
}

/// Placeholder for when the telemetry feature is disabled.
#[cfg(not(feature = "telemetry"))]
pub fn init_logging(_level: &str, _format: LogFormat) -> bool {
    false
}
