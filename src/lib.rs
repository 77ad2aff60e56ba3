#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Quick Reference
//!
//! | Type | Description | Access |
//! |------|-------------|--------|
//! | [`TwoQCache`] | 2Q cache, hot + cold queues | `&mut self` |
//! | `ConcurrentTwoQCache` | Same cache behind one lock | `&self`, `Send + Sync` |
//!
//! ## Performance Characteristics
//!
//! | Operation | Time | Notes |
//! |-----------|------|-------|
//! | `get` | O(1) | Touch or promote, never evicts |
//! | `set` | O(1) amortized | Extra demotions only after promotions |
//! | `del` | O(1) | |
//! | `reset` | O(n) | Drops every entry |
//!
//! ## Code Example
//!
//! ```rust
//! use twoq_cache::{Residence, TwoQCache};
//! use twoq_cache::config::TwoQCacheConfig;
//!
//! let config = TwoQCacheConfig::new(8, 2);
//! let mut cache = TwoQCache::init(config, None);
//!
//! for i in 0..10 {
//!     cache.set(i, i.to_string());
//! }
//!
//! // Hot holds the eight newest keys, cold the two demoted ones
//! assert_eq!(cache.hot_len(), 8);
//! assert_eq!(cache.cold_keys(), [1, 0]);
//!
//! // A cold hit promotes the entry back into hot
//! assert_eq!(cache.get(&0).map(String::as_str), Some("0"));
//! assert_eq!(cache.residence(&0), Some(Residence::Hot));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `hashbrown` | ✓ | Use hashbrown for the key index (required for no_std) |
//! | `concurrent` | ✓ | Enable `ConcurrentTwoQCache` (requires parking_lot) |
//! | `std` | | Enable standard library features |
//! | `nightly` | | Enable nightly-only hashbrown optimizations |

#![no_std]

#[cfg(not(feature = "hashbrown"))]
extern crate std;

#[cfg(test)]
extern crate scoped_threadpool;

/// Cache entry type.
///
/// `CacheEntry<K, V>` holds a key, its value and the queue that owns it.
pub mod entry;

/// Placement metadata.
///
/// - `Residence`: which queue holds an entry
/// - `PromotionPlacement`: where promoted cold entries land in hot
pub mod meta;

/// Structural invariant errors.
pub mod error;

/// Slab arena and index-linked queues.
///
/// **Note**: This module is internal infrastructure and should not be used
/// directly by library consumers.
pub(crate) mod list;

/// Cache configuration structures.
pub mod config;

/// 2Q cache implementation.
///
/// Provides a fixed-capacity cache that keeps recently inserted and touched
/// entries in a hot queue and gives demoted entries a second chance in a
/// cold queue before evicting them.
pub mod twoq;

/// Cache metrics system.
///
/// Provides counters for hits, misses, promotions, demotions and evictions,
/// reported through the `CacheMetrics` trait.
pub mod metrics;

/// Concurrent cache implementation.
///
/// Provides the thread-safe 2Q cache, guarded by a single lock.
///
/// Available when the `concurrent` feature is enabled.
#[cfg(feature = "concurrent")]
pub mod concurrent;

pub use twoq::TwoQCache;

pub use entry::CacheEntry;

pub use meta::{PromotionPlacement, Residence};

pub use error::InvariantError;

pub use metrics::CacheMetrics;

#[cfg(feature = "concurrent")]
pub use concurrent::ConcurrentTwoQCache;
