//! Metrics for cache effectiveness and cache failures.
//!
//! Recorded through the `metrics` facade; nothing is exported unless the
//! host process installs a recorder.

use metrics::{counter, describe_counter};

/// Metric names for the cache-aside layer.
pub mod names {
    /// Lookups answered from the cache.
    pub const CACHE_HITS_TOTAL: &str = "innkeep_cache_hits_total";
    /// Lookups that fell through to the store.
    pub const CACHE_MISSES_TOTAL: &str = "innkeep_cache_misses_total";
    /// Cache operations that failed and were absorbed, labelled by `op`.
    pub const CACHE_FAILURES_TOTAL: &str = "innkeep_cache_failures_total";
}

/// Register all metric descriptions.
pub fn register_metrics() {
    describe_counter!(names::CACHE_HITS_TOTAL, "Total number of cache hits");
    describe_counter!(names::CACHE_MISSES_TOTAL, "Total number of cache misses");
    describe_counter!(
        names::CACHE_FAILURES_TOTAL,
        "Total number of absorbed cache failures"
    );
}

pub(crate) fn record_hit(view: &'static str) {
    counter!(names::CACHE_HITS_TOTAL, "view" => view).increment(1);
}

pub(crate) fn record_miss(view: &'static str) {
    counter!(names::CACHE_MISSES_TOTAL, "view" => view).increment(1);
}

pub(crate) fn record_failure(op: &'static str) {
    counter!(names::CACHE_FAILURES_TOTAL, "op" => op).increment(1);
}
