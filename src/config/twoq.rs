//! Configuration for the 2Q (two-queue) cache.

use crate::meta::PromotionPlacement;
use core::fmt;

/// Configuration for a 2Q cache.
///
/// # Fields
///
/// - `hot_capacity`: Maximum number of entries in the hot queue. May be zero,
///   in which case every insert is demoted straight to cold.
/// - `cold_capacity`: Maximum number of entries in the cold queue. May be
///   zero, in which case demoted entries are evicted immediately.
/// - `promotion`: Where a re-referenced cold entry is linked into hot.
///
/// # Examples
///
/// ```
/// use twoq_cache::config::TwoQCacheConfig;
/// use twoq_cache::meta::PromotionPlacement;
///
/// let config = TwoQCacheConfig::new(8, 2).with_promotion(PromotionPlacement::HotFront);
///
/// assert_eq!(config.hot_capacity, 8);
/// assert_eq!(config.cold_capacity, 2);
/// assert_eq!(config.total_capacity(), 10);
/// assert_eq!(config.promotion, PromotionPlacement::HotFront);
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TwoQCacheConfig {
    /// Maximum number of entries in the hot queue
    pub hot_capacity: usize,

    /// Maximum number of entries in the cold queue
    pub cold_capacity: usize,

    /// Placement of promoted cold entries inside the hot queue
    pub promotion: PromotionPlacement,
}

impl TwoQCacheConfig {
    /// Creates a config with the default promotion placement.
    #[must_use]
    pub fn new(hot_capacity: usize, cold_capacity: usize) -> Self {
        Self {
            hot_capacity,
            cold_capacity,
            promotion: PromotionPlacement::default(),
        }
    }

    /// Sets where promoted cold entries are linked into the hot queue.
    #[must_use]
    pub fn with_promotion(mut self, promotion: PromotionPlacement) -> Self {
        self.promotion = promotion;
        self
    }

    /// Maximum number of live entries across both queues.
    #[inline]
    pub fn total_capacity(&self) -> usize {
        self.hot_capacity.saturating_add(self.cold_capacity)
    }
}

impl fmt::Debug for TwoQCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwoQCacheConfig")
            .field("hot_capacity", &self.hot_capacity)
            .field("cold_capacity", &self.cold_capacity)
            .field("promotion", &self.promotion)
            .finish()
    }
}
