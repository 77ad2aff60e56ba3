//! Cache Metrics System
//!
//! Provides BTreeMap-based metrics reporting for the 2Q cache. Counters are
//! updated under the same exclusive access as the cache state itself, so a
//! snapshot is always consistent with the operations that produced it.
//!
//! # Why BTreeMap over HashMap?
//!
//! BTreeMap is used instead of HashMap for several reasons:
//! - **Deterministic ordering**: Metrics always appear in consistent order
//! - **Reproducible output**: Essential for testing and benchmarking comparisons
//! - **Better debugging**: Consistent output makes logs more readable
//!
//! The performance difference (O(log n) vs O(1)) is negligible with ~20 metric keys.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

pub mod twoq;

pub use twoq::TwoQCacheMetrics;

/// Common counters tracked by the cache
#[derive(Debug, Default, Clone)]
pub struct CoreCacheMetrics {
    /// Total number of lookups (gets) made to the cache
    pub requests: u64,

    /// Number of lookups that found their key
    pub cache_hits: u64,

    /// Number of entries written by `set`
    pub insertions: u64,

    /// Number of `set` calls that replaced a live entry for the same key
    pub replacements: u64,

    /// Number of entries removed explicitly by `del`/`remove`
    pub removals: u64,

    /// Number of entries evicted from the back of the cold queue
    pub evictions: u64,
}

impl CoreCacheMetrics {
    /// Creates a zeroed set of counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a lookup that found its key
    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.cache_hits += 1;
    }

    /// Records a lookup that did not find its key
    ///
    /// Cache misses are derived as (requests - cache_hits).
    pub fn record_miss(&mut self) {
        self.requests += 1;
    }

    /// Records a new entry written into the hot queue
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    /// Records a `set` that displaced an existing entry for the same key
    pub fn record_replacement(&mut self) {
        self.replacements += 1;
    }

    /// Records an explicit removal
    pub fn record_removal(&mut self) {
        self.removals += 1;
    }

    /// Records an eviction from the cold queue
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Fraction of lookups that hit, or 0.0 before the first lookup
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Fraction of lookups that missed, or 0.0 before the first lookup
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            (self.requests - self.cache_hits) as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Convert core metrics to BTreeMap for reporting
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert(
            "cache_misses".to_string(),
            (self.requests - self.cache_hits) as f64,
        );
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("removals".to_string(), self.removals as f64);
        metrics.insert("replacements".to_string(), self.replacements as f64);
        metrics.insert("requests".to_string(), self.requests as f64);

        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());

        if self.insertions > 0 {
            metrics.insert(
                "eviction_rate".to_string(),
                self.evictions as f64 / self.insertions as f64,
            );
        }

        metrics
    }
}

/// Uniform metrics reporting for cache implementations
///
/// The trait uses BTreeMap to ensure deterministic ordering of metrics, which is
/// essential for reproducible benchmarks and consistent test results.
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs in deterministic order
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Algorithm name for identification (e.g. "2Q")
    fn algorithm_name(&self) -> &'static str;
}
