//! 2Q Cache Metrics
//!
//! Metrics specific to the 2Q (two-queue) cache algorithm.

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// 2Q-specific metrics (extends CoreCacheMetrics)
///
/// Tracks which queue served each hit and how entries flow between queues:
/// cold hits promote, hot overflow demotes, cold overflow evicts.
#[derive(Debug, Clone)]
pub struct TwoQCacheMetrics {
    /// Core metrics common to all cache algorithms
    pub core: CoreCacheMetrics,

    /// Number of entries currently in the hot queue
    pub hot_size: u64,

    /// Number of entries currently in the cold queue
    pub cold_size: u64,

    /// Configured hot queue capacity
    pub hot_capacity: u64,

    /// Configured cold queue capacity
    pub cold_capacity: u64,

    /// Number of hits served from the hot queue
    pub hot_hits: u64,

    /// Number of hits served from the cold queue
    pub cold_hits: u64,

    /// Total number of promotions from cold to hot
    pub total_promotions: u64,

    /// Total number of demotions from hot to cold
    pub total_demotions: u64,
}

impl TwoQCacheMetrics {
    /// Creates a new TwoQCacheMetrics instance for the given queue capacities
    pub fn new(hot_capacity: u64, cold_capacity: u64) -> Self {
        Self {
            core: CoreCacheMetrics::new(),
            hot_size: 0,
            cold_size: 0,
            hot_capacity,
            cold_capacity,
            hot_hits: 0,
            cold_hits: 0,
            total_promotions: 0,
            total_demotions: 0,
        }
    }

    /// Records a hit on an entry that was already hot
    pub fn record_hot_hit(&mut self) {
        self.core.record_hit();
        self.hot_hits += 1;
    }

    /// Records a hit on a cold entry
    pub fn record_cold_hit(&mut self) {
        self.core.record_hit();
        self.cold_hits += 1;
    }

    /// Records a promotion from cold to hot
    pub fn record_promotion(&mut self) {
        self.total_promotions += 1;
    }

    /// Records a demotion from hot to cold
    pub fn record_demotion(&mut self) {
        self.total_demotions += 1;
    }

    /// Updates the queue sizes
    pub fn update_queue_sizes(&mut self, hot_size: u64, cold_size: u64) {
        self.hot_size = hot_size;
        self.cold_size = cold_size;
    }

    /// Fraction of hits served by the hot queue, or 0.0 if no hits
    pub fn hot_hit_ratio(&self) -> f64 {
        if self.core.cache_hits > 0 {
            self.hot_hits as f64 / self.core.cache_hits as f64
        } else {
            0.0
        }
    }

    /// Hot queue fill level relative to its capacity
    ///
    /// Can exceed 1.0 between a promotion and the next `set`.
    pub fn hot_utilization(&self) -> f64 {
        if self.hot_capacity > 0 {
            self.hot_size as f64 / self.hot_capacity as f64
        } else {
            0.0
        }
    }

    /// Cold queue fill level relative to its capacity
    pub fn cold_utilization(&self) -> f64 {
        if self.cold_capacity > 0 {
            self.cold_size as f64 / self.cold_capacity as f64
        } else {
            0.0
        }
    }

    /// Converts 2Q metrics to a BTreeMap for reporting
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();

        // Queue occupancy
        metrics.insert("hot_size".to_string(), self.hot_size as f64);
        metrics.insert("cold_size".to_string(), self.cold_size as f64);
        metrics.insert("hot_capacity".to_string(), self.hot_capacity as f64);
        metrics.insert("cold_capacity".to_string(), self.cold_capacity as f64);
        metrics.insert("hot_utilization".to_string(), self.hot_utilization());
        metrics.insert("cold_utilization".to_string(), self.cold_utilization());

        // Queue movement
        metrics.insert("total_promotions".to_string(), self.total_promotions as f64);
        metrics.insert("total_demotions".to_string(), self.total_demotions as f64);

        // Per-queue hits
        metrics.insert("hot_hits".to_string(), self.hot_hits as f64);
        metrics.insert("cold_hits".to_string(), self.cold_hits as f64);
        metrics.insert("hot_hit_ratio".to_string(), self.hot_hit_ratio());

        metrics
    }
}

impl CacheMetrics for TwoQCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "2Q"
    }
}
