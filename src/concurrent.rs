//! Concurrent Cache Implementation
//!
//! This module provides the thread-safe 2Q cache.
//!
//! # Architecture
//!
//! The whole cache state sits behind one `parking_lot::Mutex`: the key index,
//! both queues, the live-entry counter and the metrics. Every operation takes
//! the lock once for its full read-modify-write, so the index and the queues
//! always change together.
//!
//! ## Why Mutex Instead of RwLock?
//!
//! A 2Q lookup mutates the cache. Every `get()` hit either moves a hot entry
//! to the front of the hot queue or promotes a cold entry into hot, and even a
//! miss updates the metrics. Since `get()` is a write, an `RwLock` would hand
//! out exclusive locks anyway. `Mutex` has less bookkeeping and states the
//! real contract: all operations are mutually exclusive.
//!
//! ## Why One Lock?
//!
//! Sharding the key space would give each shard its own hot and cold queue,
//! and a scan hitting one shard could never push out entries of another. The
//! cache would stop being one 2Q cache. Critical sections are O(1), so the
//! single lock is held briefly.
//!
//! # Example
//!
//! ```
//! use twoq_cache::concurrent::ConcurrentTwoQCache;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let cache = Arc::new(ConcurrentTwoQCache::new(800, 200));
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|t| {
//!         let cache = Arc::clone(&cache);
//!         thread::spawn(move || {
//!             for i in 0..100 {
//!                 let key = format!("key_{}_{}", t, i);
//!                 cache.set(key.clone(), i);
//!                 let _ = cache.get(&key);
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(cache.size(), 400);
//! assert!(cache.check_invariants().is_ok());
//! ```
//!
//! # Zero-Copy Access
//!
//! `get()` clones the value out so the lock is released before the caller
//! uses it. Use `get_with()` to work on the value while the lock is held:
//!
//! ```
//! use twoq_cache::concurrent::ConcurrentTwoQCache;
//!
//! let cache = ConcurrentTwoQCache::new(8, 2);
//! cache.set("greeting", String::from("hello world"));
//!
//! assert_eq!(cache.get_with(&"greeting", |value| value.len()), Some(11));
//! ```

mod twoq;

pub use self::twoq::ConcurrentTwoQCache;
