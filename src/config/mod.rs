//! Cache Configuration Module
//!
//! Configuration for the 2Q cache. The same config drives both the
//! single-threaded [`TwoQCache`](crate::TwoQCache) and the thread-safe
//! `ConcurrentTwoQCache`, since the concurrent wrapper guards a single
//! segment with one lock rather than sharding the key space.
//!
//! # Design Philosophy
//!
//! Configuration structs have all public fields for simple instantiation:
//!
//! - **Simple**: Just create the struct with all fields set
//! - **Type safety**: All parameters must be provided at construction
//! - **No boilerplate**: Helper constructors exist but are optional
//!
//! # Sizing Guidelines
//!
//! Capacity is strictly entry-count based. The cache never holds more than
//! `hot_capacity + cold_capacity` entries.
//!
//! - **`hot_capacity`**: entries kept as the retained working set. Every
//!   insert lands here first.
//! - **`cold_capacity`**: entries on probation after being pushed out of hot.
//!   A larger cold queue gives one-time entries more time to prove themselves
//!   before they are evicted.
//!
//! # Examples
//!
//! ```
//! use twoq_cache::config::TwoQCacheConfig;
//! use twoq_cache::meta::PromotionPlacement;
//! use twoq_cache::TwoQCache;
//!
//! let config = TwoQCacheConfig {
//!     hot_capacity: 800,
//!     cold_capacity: 200,
//!     promotion: PromotionPlacement::HotBack,
//! };
//!
//! let cache: TwoQCache<String, i32> = TwoQCache::init(config, None);
//! assert_eq!(cache.hot_capacity(), 800);
//! ```

pub mod twoq;

pub use twoq::TwoQCacheConfig;
