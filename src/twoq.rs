//! 2Q (Two-Queue) Cache Implementation
//!
//! 2Q is a scan-resistant variant of LRU that keeps two queues: a **hot queue**
//! for entries the cache intends to retain, and a **cold queue** for entries on
//! probation. Entries pushed out of hot get a second chance in cold; only the
//! back of cold is ever evicted. A cold entry that is looked up again is
//! promoted back into hot.
//!
//! # How the Algorithm Works
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                                 2Q Cache                                     │
//! │                                                                              │
//! │   set(k, v) ──▶ ┌────────────────────────────────────────────────────────┐   │
//! │                 │                  HOT QUEUE (hot_capacity)              │   │
//! │                 │  front ◀──▶ [new] ◀──▶ ... ◀──▶ [lru] ◀──▶ [promoted]  │   │
//! │                 └───────────────────────────────────────┬────────────────┘   │
//! │                          ▲ promote on get                │ demote when       │
//! │                          │ (to back or front)            │ used > hot_cap    │
//! │                          │                               ▼                   │
//! │                 ┌────────┴───────────────────────────────────────────────┐   │
//! │                 │                 COLD QUEUE (cold_capacity)             │   │
//! │                 │  front ◀──▶ [demoted] ◀──▶ ... ◀──▶ [evict]            │   │
//! │                 └────────────────────────────────────────┬───────────────┘   │
//! │                                                          ▼                   │
//! │                                               evicted when cold overflows    │
//! └─────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Entry Lifecycle
//!
//! 1. **Insert**: `set` always links a new entry at the front of hot
//! 2. **Capacity check**: if the cache now holds more than `hot_capacity`
//!    entries, the back of hot is demoted to the front of cold
//! 3. **Eviction**: if cold now holds more than `cold_capacity` entries, the
//!    back of cold is dropped and its key forgotten
//! 4. **Hit on hot**: moved to the front of hot
//! 5. **Hit on cold**: promoted into hot, at the back by default
//!    (see [`PromotionPlacement`])
//!
//! A lookup never demotes or evicts. A promotion can therefore leave hot above
//! its capacity until the next `set`, whose capacity check keeps demoting until
//! hot fits again.
//!
//! ## Scan Resistance Example
//!
//! ```text
//! hot_capacity = 3, cold_capacity = 2
//!
//! set A, B, C          hot=[C, B, A]          cold=[]
//! set D                hot=[D, C, B]          cold=[A]
//! get A (cold hit)     hot=[D, C, B, A]       cold=[]
//! set E                hot=[E, D, C]          cold=[B, A]   (A, then B demoted)
//! ```
//!
//! ## Operations
//!
//! | Operation | Action | Time |
//! |-----------|--------|------|
//! | `get(key)` | Touch hot entry or promote cold entry | O(1) |
//! | `set(key, value)` | Insert at hot front, demote/evict if needed | O(1) amortized |
//! | `del(key)` | Remove from whichever queue holds it | O(1) |
//! | `reset()` | Drop every entry, keep capacities | O(n) |
//!
//! # Storage
//!
//! Both queues link nodes of one slab arena. The key index maps each key to a
//! stable slot handle, and every entry carries a [`Residence`] tag naming the
//! queue that links it. Moving an entry between queues relinks the node and
//! flips the tag; the handle in the index stays valid.
//!
//! # Overwriting a Key
//!
//! `set` on a key that is already cached removes the old entry first, then
//! inserts the new value as a fresh hot entry. There is never more than one
//! entry per key.
//!
//! # Thread Safety
//!
//! `TwoQCache` is **not thread-safe**. For concurrent access use
//! `ConcurrentTwoQCache` (requires the `concurrent` feature), which guards the
//! whole structure with one lock.
//!
//! # Examples
//!
//! ```
//! use twoq_cache::TwoQCache;
//!
//! let mut cache = TwoQCache::new(2, 1);
//!
//! cache.set("a", 1);
//! cache.set("b", 2);
//! cache.set("c", 3); // "a" demoted to cold
//!
//! assert_eq!(cache.hot_keys(), ["c", "b"]);
//! assert_eq!(cache.cold_keys(), ["a"]);
//!
//! assert_eq!(cache.get(&"a"), Some(&1)); // promoted back into hot
//! assert_eq!(cache.size(), 3);
//! ```

extern crate alloc;

use crate::config::TwoQCacheConfig;
use crate::entry::CacheEntry;
use crate::error::InvariantError;
use crate::list::{Arena, NodeId, Queue};
use crate::meta::{PromotionPlacement, Residence};
use crate::metrics::{CacheMetrics, TwoQCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use tracing::{debug, trace};

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Upper bound on slots reserved up front, so huge capacities stay lazy.
const MAX_PREALLOCATED: usize = 1 << 16;

/// Internal 2Q segment containing the actual cache algorithm.
///
/// This is shared between `TwoQCache` (single-threaded) and
/// `ConcurrentTwoQCache` (multi-threaded). All algorithm logic lives here.
pub(crate) struct TwoQSegment<K, V, S = DefaultHashBuilder> {
    config: TwoQCacheConfig,

    /// Node storage shared by both queues
    arena: Arena<CacheEntry<K, V>>,

    hot: Queue,
    cold: Queue,

    /// Key index: key to the slot of its entry, whichever queue links it
    map: HashMap<K, NodeId, S>,

    /// Live entries, always `hot.len() + cold.len()`
    used_size: usize,

    metrics: TwoQCacheMetrics,
}

impl<K, V, S> TwoQSegment<K, V, S> {
    #[inline]
    pub(crate) fn config(&self) -> TwoQCacheConfig {
        self.config
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.used_size
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.used_size == 0
    }

    #[inline]
    pub(crate) fn hot_len(&self) -> usize {
        self.hot.len()
    }

    #[inline]
    pub(crate) fn cold_len(&self) -> usize {
        self.cold.len()
    }

    #[inline]
    pub(crate) fn metrics(&self) -> &TwoQCacheMetrics {
        &self.metrics
    }

    fn entry(&self, id: NodeId) -> &CacheEntry<K, V> {
        match self.arena.get(id) {
            Some(entry) => entry,
            None => panic!("{}", InvariantError::VacantSlot { index: id.index() }),
        }
    }

    fn entry_mut(&mut self, id: NodeId) -> &mut CacheEntry<K, V> {
        match self.arena.get_mut(id) {
            Some(entry) => entry,
            None => panic!("{}", InvariantError::VacantSlot { index: id.index() }),
        }
    }

    fn update_queue_sizes(&mut self) {
        self.metrics
            .update_queue_sizes(self.hot.len() as u64, self.cold.len() as u64);
    }

    /// Keys of one queue, front to back.
    pub(crate) fn queue_keys(&self, residence: Residence) -> Vec<K>
    where
        K: Clone,
    {
        let queue = match residence {
            Residence::Hot => &self.hot,
            Residence::Cold => &self.cold,
        };
        queue
            .iter(&self.arena)
            .map(|(_, entry)| entry.key.clone())
            .collect()
    }

    /// Human-readable dump of both queues, front to back.
    pub(crate) fn describe(&self) -> String
    where
        K: fmt::Debug,
    {
        Dump(self).to_string()
    }

    /// Re-references a live entry: a hot hit moves it to the front of hot,
    /// a cold hit promotes it into hot. Never demotes or evicts.
    fn reference(&mut self, id: NodeId) {
        let residence = self.entry(id).residence;
        match residence {
            Residence::Hot => {
                self.hot.move_to_front(&mut self.arena, id);
                self.metrics.record_hot_hit();
            }
            Residence::Cold => {
                self.cold.unlink(&mut self.arena, id);
                self.entry_mut(id).residence.promote();
                match self.config.promotion {
                    PromotionPlacement::HotBack => self.hot.push_back(&mut self.arena, id),
                    PromotionPlacement::HotFront => self.hot.push_front(&mut self.arena, id),
                }
                self.metrics.record_cold_hit();
                self.metrics.record_promotion();
                self.update_queue_sizes();
                trace!(
                    hot_len = self.hot.len(),
                    cold_len = self.cold.len(),
                    "promoted cold entry to hot"
                );
            }
        }
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> TwoQSegment<K, V, S> {
    /// Creates a new, empty segment.
    pub(crate) fn init(config: TwoQCacheConfig, hash_builder: S) -> Self {
        let reserved = config.total_capacity().min(MAX_PREALLOCATED);
        TwoQSegment {
            config,
            arena: Arena::with_capacity(reserved),
            hot: Queue::new(),
            cold: Queue::new(),
            map: HashMap::with_capacity_and_hasher(reserved, hash_builder),
            used_size: 0,
            metrics: TwoQCacheMetrics::new(
                config.hot_capacity as u64,
                config.cold_capacity as u64,
            ),
        }
    }

    /// Looks up `key`, re-referencing its entry on a hit.
    pub(crate) fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some(&id) = self.map.get(key) else {
            self.metrics.core.record_miss();
            return None;
        };
        self.reference(id);
        Some(&self.entry(id).value)
    }

    /// Looks up `key` mutably, re-referencing its entry on a hit.
    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some(&id) = self.map.get(key) else {
            self.metrics.core.record_miss();
            return None;
        };
        self.reference(id);
        Some(&mut self.entry_mut(id).value)
    }

    /// Looks up `key` without touching recency, residence or metrics.
    pub(crate) fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let &id = self.map.get(key)?;
        Some(&self.entry(id).value)
    }

    pub(crate) fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    pub(crate) fn residence<Q>(&self, key: &Q) -> Option<Residence>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let &id = self.map.get(key)?;
        Some(self.entry(id).residence)
    }

    /// Unlinks the entry for `key` from its queue and frees its slot.
    fn take<Q>(&mut self, key: &Q) -> Option<CacheEntry<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let id = self.map.remove(key)?;
        let residence = self.entry(id).residence;
        match residence {
            Residence::Hot => self.hot.unlink(&mut self.arena, id),
            Residence::Cold => self.cold.unlink(&mut self.arena, id),
        }
        let Some(entry) = self.arena.remove(id) else {
            panic!("{}", InvariantError::VacantSlot { index: id.index() });
        };
        self.used_size -= 1;
        Some(entry)
    }

    /// Removes `key`, returning its value if it was cached.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let entry = self.take(key)?;
        self.metrics.core.record_removal();
        self.update_queue_sizes();
        Some(entry.value)
    }

    /// Drops every entry. Capacities and cumulative metrics are kept.
    pub(crate) fn reset(&mut self) {
        let dropped = self.used_size;
        self.map.clear();
        self.arena.clear();
        self.hot.clear();
        self.cold.clear();
        self.used_size = 0;
        self.update_queue_sizes();
        debug!(dropped, "reset cache");
    }

    /// Runs after every insert. Demotes the back of hot once the cache holds
    /// more than `hot_capacity` entries, and keeps demoting while promotions
    /// have left hot above its capacity.
    fn check_capacity(&mut self) {
        if self.used_size <= self.config.hot_capacity {
            return;
        }
        let mut demoted = self.demote_lru_hot();
        while demoted && self.hot.len() > self.config.hot_capacity {
            demoted = self.demote_lru_hot();
        }
    }

    /// Moves the back of hot to the front of cold, evicting from cold if it
    /// overflows. Returns `false` if hot was empty.
    fn demote_lru_hot(&mut self) -> bool {
        let Some(id) = self.hot.pop_back(&mut self.arena) else {
            return false;
        };
        self.entry_mut(id).residence.demote();
        self.cold.push_front(&mut self.arena, id);
        self.metrics.record_demotion();
        trace!(
            hot_len = self.hot.len(),
            cold_len = self.cold.len(),
            "demoted hot entry to cold"
        );

        while self.cold.len() > self.config.cold_capacity {
            self.evict_lru_cold();
        }
        self.update_queue_sizes();
        true
    }

    /// Drops the back of cold and purges its key from the index.
    fn evict_lru_cold(&mut self) {
        let Some(id) = self.cold.pop_back(&mut self.arena) else {
            return;
        };
        let Some(entry) = self.arena.remove(id) else {
            panic!("{}", InvariantError::VacantSlot { index: id.index() });
        };
        self.map.remove(&entry.key);
        self.used_size -= 1;
        self.metrics.core.record_eviction();
        debug!(
            used_size = self.used_size,
            cold_len = self.cold.len(),
            "evicted cold entry"
        );
    }

    /// Walks the whole structure and reports the first broken invariant.
    pub(crate) fn check_invariants(&self) -> Result<(), InvariantError> {
        let (hot, cold) = (self.hot.len(), self.cold.len());
        if self.used_size != hot + cold {
            return Err(InvariantError::SizeMismatch {
                used: self.used_size,
                hot,
                cold,
            });
        }
        if cold > self.config.cold_capacity {
            return Err(InvariantError::OverCapacity {
                queue: Residence::Cold,
                len: cold,
                capacity: self.config.cold_capacity,
            });
        }
        // Hot may run over its own capacity after promotions, never over
        // the room cold leaves unused.
        let hot_room = self.config.total_capacity() - cold;
        if hot > hot_room {
            return Err(InvariantError::OverCapacity {
                queue: Residence::Hot,
                len: hot,
                capacity: hot_room,
            });
        }
        if self.map.len() != self.used_size || self.arena.len() != self.used_size {
            return Err(InvariantError::IndexMismatch {
                indexed: self.map.len(),
                stored: self.arena.len(),
            });
        }

        self.hot.check_links(&self.arena)?;
        self.cold.check_links(&self.arena)?;
        for (queue, linked) in [(&self.hot, Residence::Hot), (&self.cold, Residence::Cold)] {
            for (id, entry) in queue.iter(&self.arena) {
                if entry.residence != linked {
                    return Err(InvariantError::ResidenceMismatch {
                        index: id.index(),
                        tagged: entry.residence,
                        linked,
                    });
                }
            }
        }

        for (key, &id) in self.map.iter() {
            let entry = self
                .arena
                .get(id)
                .ok_or(InvariantError::VacantSlot { index: id.index() })?;
            if entry.key != *key {
                return Err(InvariantError::KeyMismatch { index: id.index() });
            }
        }
        Ok(())
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> TwoQSegment<K, V, S> {
    /// Inserts `value` as a brand-new hot entry, replacing any live entry for
    /// the same key, then runs the capacity check.
    pub(crate) fn set(&mut self, key: K, value: V) -> Option<V> {
        let replaced = self.take(&key).map(|entry| entry.value);
        if replaced.is_some() {
            self.metrics.core.record_replacement();
        }

        let id = self.arena.insert(CacheEntry::new(key.clone(), value));
        self.hot.push_front(&mut self.arena, id);
        self.map.insert(key, id);
        self.used_size += 1;
        self.metrics.core.record_insertion();

        self.check_capacity();
        self.update_queue_sizes();
        replaced
    }
}

impl<K, V, S> fmt::Debug for TwoQSegment<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwoQSegment")
            .field("hot_capacity", &self.config.hot_capacity)
            .field("cold_capacity", &self.config.cold_capacity)
            .field("hot_len", &self.hot.len())
            .field("cold_len", &self.cold.len())
            .field("used_size", &self.used_size)
            .finish()
    }
}

/// Display adapter behind `describe()`.
struct Dump<'a, K, V, S>(&'a TwoQSegment<K, V, S>);

impl<K: fmt::Debug, V, S> fmt::Display for Dump<'_, K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let segment = self.0;
        for (name, queue, capacity) in [
            ("hot", &segment.hot, segment.config.hot_capacity),
            ("cold", &segment.cold, segment.config.cold_capacity),
        ] {
            write!(f, "{} ({}/{}): ", name, queue.len(), capacity)?;
            f.debug_list()
                .entries(queue.iter(&segment.arena).map(|(_, entry)| &entry.key))
                .finish()?;
            writeln!(f)?;
        }
        write!(f, "used: {}", segment.used_size)
    }
}

/// A fixed-capacity 2Q cache.
///
/// New entries enter the hot queue. When the cache holds more entries than
/// the hot queue's capacity, the least recently used hot entry is demoted to
/// the cold queue; when cold overflows, its oldest entry is evicted. Looking
/// up a cold entry promotes it back into hot.
///
/// # Examples
///
/// ```
/// use twoq_cache::TwoQCache;
///
/// let mut cache = TwoQCache::new(8, 2);
/// for i in 0..11 {
///     cache.set(i, i * 10);
/// }
///
/// // The eleventh insert overflowed cold and evicted the oldest demoted key
/// assert_eq!(cache.get(&0), None);
/// assert_eq!(cache.get(&1), Some(&10));
/// assert_eq!(cache.size(), 10);
/// ```
pub struct TwoQCache<K, V, S = DefaultHashBuilder> {
    segment: TwoQSegment<K, V, S>,
}

impl<K: Hash + Eq, V> TwoQCache<K, V> {
    /// Creates a cache with the given queue capacities and default promotion placement.
    pub fn new(hot_capacity: usize, cold_capacity: usize) -> Self {
        Self::init(TwoQCacheConfig::new(hot_capacity, cold_capacity), None)
    }

    /// Creates a cache from a configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Queue capacities and promotion placement
    /// * `hasher` - Optional custom hasher. If `None`, uses the default hasher.
    ///
    /// # Example
    ///
    /// ```
    /// use twoq_cache::TwoQCache;
    /// use twoq_cache::config::TwoQCacheConfig;
    /// use twoq_cache::meta::PromotionPlacement;
    ///
    /// let config = TwoQCacheConfig::new(100, 20).with_promotion(PromotionPlacement::HotFront);
    /// let mut cache: TwoQCache<&str, i32> = TwoQCache::init(config, None);
    /// cache.set("key", 42);
    /// ```
    pub fn init(config: TwoQCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        Self::with_hasher(config, hasher.unwrap_or_default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> TwoQCache<K, V, S> {
    /// Creates a cache from a configuration and a custom hash builder.
    pub fn with_hasher(config: TwoQCacheConfig, hash_builder: S) -> Self {
        Self {
            segment: TwoQSegment::init(config, hash_builder),
        }
    }

    /// Returns the value for `key` and re-references its entry.
    ///
    /// The key may be any borrowed form of the cache's key type, but
    /// [`Hash`] and [`Eq`] on the borrowed form *must* match those for
    /// the key type.
    ///
    /// A hit on a hot entry moves it to the front of hot. A hit on a cold
    /// entry promotes it into hot. Lookups never evict.
    #[inline]
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.get(key)
    }

    /// Returns a mutable reference to the value for `key`, re-referencing
    /// its entry like [`TwoQCache::get`].
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.get_mut(key)
    }

    /// Returns the value for `key` without changing its position or queue.
    #[inline]
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.peek(key)
    }

    /// Returns `true` if `key` is cached. Does not re-reference the entry.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.contains_key(key)
    }

    /// Returns the queue currently holding `key`.
    #[inline]
    pub fn residence<Q>(&self, key: &Q) -> Option<Residence>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.residence(key)
    }

    /// Removes `key` from whichever queue holds it. Returns `true` if it was cached.
    #[inline]
    pub fn del<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.remove(key).is_some()
    }

    /// Removes `key` and returns its value if it was cached.
    #[inline]
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.remove(key)
    }

    /// Drops every entry. Capacities are unchanged.
    #[inline]
    pub fn reset(&mut self) {
        self.segment.reset()
    }

    /// Checks every structural invariant of the cache.
    ///
    /// Intended for tests and diagnostics; walks both queues and the key index.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.segment.check_invariants()
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> TwoQCache<K, V, S> {
    /// Inserts `value` for `key` at the front of the hot queue.
    ///
    /// A live entry for the same key is removed first. If the cache now holds
    /// more than `hot_capacity` entries, the least recently used hot entry is
    /// demoted to cold, which may evict the oldest cold entry.
    #[inline]
    pub fn set(&mut self, key: K, value: V) {
        self.segment.set(key, value);
    }
}

impl<K, V, S> TwoQCache<K, V, S> {
    /// Returns the number of live entries across both queues.
    #[inline]
    pub fn size(&self) -> usize {
        self.segment.len()
    }

    /// Returns the number of live entries across both queues.
    #[inline]
    pub fn len(&self) -> usize {
        self.segment.len()
    }

    /// Returns `true` if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segment.is_empty()
    }

    /// Returns the number of entries in the hot queue.
    #[inline]
    pub fn hot_len(&self) -> usize {
        self.segment.hot_len()
    }

    /// Returns the number of entries in the cold queue.
    #[inline]
    pub fn cold_len(&self) -> usize {
        self.segment.cold_len()
    }

    /// Returns the configured hot queue capacity.
    #[inline]
    pub fn hot_capacity(&self) -> usize {
        self.segment.config().hot_capacity
    }

    /// Returns the configured cold queue capacity.
    #[inline]
    pub fn cold_capacity(&self) -> usize {
        self.segment.config().cold_capacity
    }

    /// Returns where promoted cold entries are linked into hot.
    #[inline]
    pub fn promotion(&self) -> PromotionPlacement {
        self.segment.config().promotion
    }

    /// Keys of the hot queue, most recently used first.
    pub fn hot_keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.segment.queue_keys(Residence::Hot)
    }

    /// Keys of the cold queue, most recently demoted first.
    pub fn cold_keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.segment.queue_keys(Residence::Cold)
    }

    /// Human-readable dump of both queues for diagnostics and tests.
    ///
    /// The format is not stable.
    pub fn describe(&self) -> String
    where
        K: fmt::Debug,
    {
        self.segment.describe()
    }
}

impl<K, V, S> CacheMetrics for TwoQCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.segment.metrics().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.segment.metrics().algorithm_name()
    }
}

impl<K, V, S> fmt::Debug for TwoQCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwoQCache")
            .field("segment", &self.segment)
            .finish()
    }
}
