//! Concurrent 2Q Cache Implementation
//!
//! A thread-safe 2Q cache. This is the multi-threaded counterpart to
//! [`TwoQCache`](crate::TwoQCache) and runs the same algorithm.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────────────┐
//! │                        ConcurrentTwoQCache                                   │
//! │                                                                              │
//! │  get / set / del / reset / size  ──▶  lock()                                 │
//! │                                                                              │
//! │  ┌────────────────────────────────────────────────────────────────────────┐  │
//! │  │                              Mutex                                     │  │
//! │  │  ┌──────────────────────────────────────────────────────────────────┐  │  │
//! │  │  │ TwoQSegment                                                      │  │  │
//! │  │  │   key index ──▶ arena slots                                      │  │  │
//! │  │  │   hot  queue  [new, touched, promoted]                           │  │  │
//! │  │  │   cold queue  [demoted ... evict]                                │  │  │
//! │  │  │   used_size, metrics                                             │  │  │
//! │  │  └──────────────────────────────────────────────────────────────────┘  │  │
//! │  └────────────────────────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # When to Use
//!
//! **Use ConcurrentTwoQCache when:**
//! - Multiple threads need cache access
//! - The workload mixes a hot working set with one-off scans
//!
//! **Consider alternatives when:**
//! - Single-threaded access only → use `TwoQCache`
//!
//! # Thread Safety
//!
//! `ConcurrentTwoQCache` is `Send + Sync` whenever its keys, values and hasher
//! are `Send`, and can be shared via `Arc`.

extern crate alloc;

use crate::config::TwoQCacheConfig;
use crate::error::InvariantError;
use crate::meta::{PromotionPlacement, Residence};
use crate::metrics::CacheMetrics;
use crate::twoq::TwoQSegment;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use parking_lot::Mutex;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

/// A thread-safe 2Q cache guarded by a single lock.
pub struct ConcurrentTwoQCache<K, V, S = DefaultHashBuilder> {
    segment: Mutex<TwoQSegment<K, V, S>>,
}

impl<K, V> ConcurrentTwoQCache<K, V, DefaultHashBuilder>
where
    K: Hash + Eq + Clone + Send,
    V: Clone + Send,
{
    /// Creates a concurrent cache with the given queue capacities.
    pub fn new(hot_capacity: usize, cold_capacity: usize) -> Self {
        Self::init(TwoQCacheConfig::new(hot_capacity, cold_capacity), None)
    }

    /// Creates a concurrent cache from a configuration.
    ///
    /// # Arguments
    /// * `config` - Queue capacities and promotion placement
    /// * `hasher` - Optional custom hasher. If `None`, uses the default hasher.
    pub fn init(config: TwoQCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        Self::with_hasher(config, hasher.unwrap_or_default())
    }
}

impl<K, V, S> ConcurrentTwoQCache<K, V, S>
where
    K: Hash + Eq + Clone + Send,
    V: Clone + Send,
    S: BuildHasher + Send,
{
    /// Creates a concurrent cache from a configuration and a custom hash builder.
    pub fn with_hasher(config: TwoQCacheConfig, hash_builder: S) -> Self {
        Self {
            segment: Mutex::new(TwoQSegment::init(config, hash_builder)),
        }
    }

    /// Gets a value from the cache, re-referencing its entry.
    ///
    /// This clones the value to avoid holding the lock. For zero-copy access,
    /// use `get_with()` instead.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().get(key).cloned()
    }

    /// Gets a value and applies a function to it while holding the lock.
    ///
    /// Re-references the entry exactly like `get()`.
    pub fn get_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&V) -> R,
    {
        self.segment.lock().get(key).map(f)
    }

    /// Returns a clone of the value for `key` without changing its position or queue.
    pub fn peek<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().peek(key).cloned()
    }

    /// Returns `true` if the cache contains the specified key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().contains_key(key)
    }

    /// Returns the queue currently holding `key`.
    pub fn residence<Q>(&self, key: &Q) -> Option<Residence>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().residence(key)
    }

    /// Inserts a key-value pair at the front of the hot queue.
    ///
    /// Replaces any live entry for the same key, then demotes and evicts as
    /// needed, all under one lock acquisition.
    pub fn set(&self, key: K, value: V) {
        self.segment.lock().set(key, value);
    }

    /// Removes a key from the cache. Returns `true` if it was cached.
    pub fn del<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().remove(key).is_some()
    }

    /// Removes a key from the cache, returning the value if it existed.
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().remove(key)
    }

    /// Clears all entries from the cache. Capacities are unchanged.
    pub fn reset(&self) {
        self.segment.lock().reset();
    }

    /// Checks every structural invariant under the lock.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.segment.lock().check_invariants()
    }
}

impl<K, V, S> ConcurrentTwoQCache<K, V, S> {
    /// Returns the number of live entries.
    pub fn size(&self) -> usize {
        self.segment.lock().len()
    }

    /// Returns the number of live entries.
    pub fn len(&self) -> usize {
        self.segment.lock().len()
    }

    /// Returns `true` if the cache contains no entries.
    pub fn is_empty(&self) -> bool {
        self.segment.lock().is_empty()
    }

    /// Returns the number of entries in the hot queue.
    pub fn hot_len(&self) -> usize {
        self.segment.lock().hot_len()
    }

    /// Returns the number of entries in the cold queue.
    pub fn cold_len(&self) -> usize {
        self.segment.lock().cold_len()
    }

    /// Returns the configured hot queue capacity.
    pub fn hot_capacity(&self) -> usize {
        self.segment.lock().config().hot_capacity
    }

    /// Returns the configured cold queue capacity.
    pub fn cold_capacity(&self) -> usize {
        self.segment.lock().config().cold_capacity
    }

    /// Returns where promoted cold entries are linked into hot.
    pub fn promotion(&self) -> PromotionPlacement {
        self.segment.lock().config().promotion
    }

    /// Keys of the hot queue, most recently used first.
    pub fn hot_keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.segment.lock().queue_keys(Residence::Hot)
    }

    /// Keys of the cold queue, most recently demoted first.
    pub fn cold_keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.segment.lock().queue_keys(Residence::Cold)
    }

    /// Human-readable dump of both queues, taken under one lock.
    pub fn describe(&self) -> String
    where
        K: fmt::Debug,
    {
        self.segment.lock().describe()
    }
}

impl<K, V, S> CacheMetrics for ConcurrentTwoQCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.segment.lock().metrics().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        "Concurrent2Q"
    }
}

impl<K, V, S> fmt::Debug for ConcurrentTwoQCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let segment = self.segment.lock();
        f.debug_struct("ConcurrentTwoQCache")
            .field("hot_len", &segment.hot_len())
            .field("cold_len", &segment.cold_len())
            .field("total_len", &segment.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    extern crate std;
    use std::format;
    use std::string::ToString;
    use std::sync::Arc;
    use std::thread;
    use std::vec::Vec;

    #[test]
    fn test_basic_operations() {
        let cache: ConcurrentTwoQCache<String, i32> = ConcurrentTwoQCache::new(8, 2);

        cache.set("a".to_string(), 1);
        cache.set("b".to_string(), 2);

        assert_eq!(cache.get("a"), Some(1));
        assert_eq!(cache.get("b"), Some(2));
        assert_eq!(cache.size(), 2);
    }

    #[test]
    fn test_same_policy_as_single_threaded() {
        let cache: ConcurrentTwoQCache<u32, u32> = ConcurrentTwoQCache::new(8, 2);
        for i in 0..10 {
            cache.set(i, i);
        }
        assert_eq!(cache.hot_keys(), [9, 8, 7, 6, 5, 4, 3, 2]);
        assert_eq!(cache.cold_keys(), [1, 0]);

        cache.set(10, 10);
        assert_eq!(cache.get(&0), None);
        assert_eq!(cache.cold_keys(), [2, 1]);
        assert_eq!(cache.size(), 10);
    }

    #[test]
    fn test_concurrent_access() {
        let cache: Arc<ConcurrentTwoQCache<String, usize>> =
            Arc::new(ConcurrentTwoQCache::new(400, 100));
        let num_threads = 8;
        let ops_per_thread = 500;

        let mut handles: Vec<std::thread::JoinHandle<()>> = Vec::new();

        for t in 0..num_threads {
            let cache = Arc::clone(&cache);
            handles.push(thread::spawn(move || {
                for i in 0..ops_per_thread {
                    let key = format!("key_{}_{}", t, i);
                    cache.set(key.clone(), i);
                    let _ = cache.get(&key);
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert!(cache.size() <= 500);
        assert!(cache.hot_len() <= 400);
        assert!(cache.cold_len() <= 100);
        assert!(cache.check_invariants().is_ok());
    }

    #[test]
    fn test_scoped_workers_share_cache() {
        let cache: ConcurrentTwoQCache<u64, u64> = ConcurrentTwoQCache::new(64, 16);
        let mut pool = scoped_threadpool::Pool::new(4);

        pool.scoped(|scope| {
            for worker in 0..4u64 {
                let cache = &cache;
                scope.execute(move || {
                    for i in 0..1_000u64 {
                        let key = (worker * 1_000 + i) % 128;
                        if cache.get(&key).is_none() {
                            cache.set(key, key * 2);
                        }
                        if i % 97 == 0 {
                            cache.del(&key);
                        }
                    }
                });
            }
        });

        assert!(cache.size() <= 80);
        assert!(cache.hot_len() <= 64 + cache.cold_capacity());
        for key in cache.hot_keys().into_iter().chain(cache.cold_keys()) {
            assert_eq!(cache.peek(&key), Some(key * 2));
        }
        assert!(cache.check_invariants().is_ok());
    }

    #[test]
    fn test_len_and_is_empty() {
        let cache: ConcurrentTwoQCache<String, i32> = ConcurrentTwoQCache::new(8, 2);

        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);

        cache.set("key1".to_string(), 1);
        assert_eq!(cache.len(), 1);
        assert!(!cache.is_empty());

        cache.set("key1".to_string(), 2);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.peek("key1"), Some(2));
    }

    #[test]
    fn test_remove_and_del() {
        let cache: ConcurrentTwoQCache<String, i32> = ConcurrentTwoQCache::new(8, 2);

        cache.set("key1".to_string(), 1);
        cache.set("key2".to_string(), 2);

        assert_eq!(cache.remove("key1"), Some(1));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("key1"), None);
        assert!(cache.del("key2"));
        assert!(!cache.del("key2"));
        assert_eq!(cache.remove("nonexistent"), None);
    }

    #[test]
    fn test_reset() {
        let cache: ConcurrentTwoQCache<String, i32> = ConcurrentTwoQCache::new(2, 2);

        cache.set("key1".to_string(), 1);
        cache.set("key2".to_string(), 2);
        cache.set("key3".to_string(), 3);
        assert_eq!(cache.len(), 3);

        cache.reset();

        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
        assert_eq!(cache.get("key1"), None);
        assert_eq!(cache.hot_capacity(), 2);
        assert_eq!(cache.cold_capacity(), 2);
    }

    #[test]
    fn test_get_with() {
        let cache: ConcurrentTwoQCache<String, String> = ConcurrentTwoQCache::new(8, 2);

        cache.set("key".to_string(), "hello world".to_string());

        let len = cache.get_with("key", |v: &String| v.len());
        assert_eq!(len, Some(11));

        let missing = cache.get_with("missing", |v: &String| v.len());
        assert_eq!(missing, None);
    }

    #[test]
    fn test_get_promotes_cold_entry() {
        let config = TwoQCacheConfig::new(1, 1).with_promotion(PromotionPlacement::HotFront);
        let cache: ConcurrentTwoQCache<&str, i32> = ConcurrentTwoQCache::init(config, None);
        cache.set("a", 1);
        cache.set("b", 2);
        assert_eq!(cache.residence(&"a"), Some(Residence::Cold));

        // peek leaves it where it is
        assert_eq!(cache.peek(&"a"), Some(1));
        assert_eq!(cache.residence(&"a"), Some(Residence::Cold));

        assert_eq!(cache.get(&"a"), Some(1));
        assert_eq!(cache.residence(&"a"), Some(Residence::Hot));
        assert_eq!(cache.hot_keys(), ["a", "b"]);
        assert_eq!(cache.promotion(), PromotionPlacement::HotFront);
    }

    #[test]
    fn test_metrics() {
        let cache: ConcurrentTwoQCache<String, i32> = ConcurrentTwoQCache::new(8, 2);

        cache.set("a".to_string(), 1);
        cache.set("b".to_string(), 2);
        cache.get("a");
        cache.get("missing");

        let metrics = cache.metrics();
        assert_eq!(metrics.get("insertions"), Some(&2.0));
        assert_eq!(metrics.get("cache_hits"), Some(&1.0));
        assert_eq!(metrics.get("requests"), Some(&2.0));
        assert_eq!(cache.algorithm_name(), "Concurrent2Q");
    }

    #[test]
    fn test_describe_and_debug() {
        let cache: ConcurrentTwoQCache<u8, u8> = ConcurrentTwoQCache::new(1, 1);
        cache.set(1, 1);
        cache.set(2, 2);

        assert_eq!(cache.describe(), "hot (1/1): [2]\ncold (1/1): [1]\nused: 2");
        let debug = format!("{:?}", cache);
        assert!(debug.contains("ConcurrentTwoQCache"));
        assert!(debug.contains("total_len: 2"));
    }

    #[test]
    fn test_borrowed_key_lookup() {
        let cache: ConcurrentTwoQCache<String, i32> = ConcurrentTwoQCache::new(8, 2);

        cache.set("test_key".to_string(), 42);

        let key_str = "test_key";
        assert_eq!(cache.get(key_str), Some(42));
        assert!(cache.contains_key(key_str));
        assert_eq!(cache.remove(key_str), Some(42));
    }
}
