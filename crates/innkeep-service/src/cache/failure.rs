//! Reporting of absorbed cache failures.

use crate::metrics;
use innkeep_core::{InnkeepError, Interface};
use std::fmt;
use tracing::warn;

/// The cache step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheOp {
    Get,
    Set,
    Delete,
    /// A cached value could not be parsed.
    Decode,
    /// A value could not be serialized for populate.
    Encode,
}

impl CacheOp {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Set => "set",
            Self::Delete => "delete",
            Self::Decode => "decode",
            Self::Encode => "encode",
        }
    }
}

impl fmt::Display for CacheOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives every cache failure the accessors swallow.
///
/// Cache errors never reach callers, so this is the only place a stale or
/// unreachable cache becomes visible.
pub trait CacheFailureSink: Interface {
    fn report(&self, op: CacheOp, key: &str, error: &InnkeepError);
}

/// Logs a warning and bumps `innkeep_cache_failures_total{op}`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingFailureSink;

impl CacheFailureSink for TracingFailureSink {
    fn report(&self, op: CacheOp, key: &str, error: &InnkeepError) {
        warn!(op = %op, key = %key, error = %error, "Cache operation failed");
        metrics::record_failure(op.as_str());
    }
}
