//! Cache entry stored in the queue arena.
//!
//! Each entry carries its key next to its value so that evicting the back of
//! the cold queue can purge the key index without a reverse lookup.
//!
//! # Memory Layout
//!
//! - `key: K` - stored once here and once in the key index
//! - `value: V`
//! - `residence: Residence` - 1 byte (+ padding)
//! - queue links - two `Option<usize>` held by the arena node

use crate::meta::Residence;
use core::fmt;

/// A key/value pair plus the queue that currently owns it.
///
/// # Examples
///
/// ```
/// use twoq_cache::entry::CacheEntry;
/// use twoq_cache::meta::Residence;
///
/// let mut entry = CacheEntry::new("key", 42);
/// assert_eq!(entry.residence, Residence::Hot);
///
/// entry.residence.demote();
/// assert!(entry.residence.is_cold());
/// ```
pub struct CacheEntry<K, V> {
    /// The cached key
    pub key: K,

    /// The cached value
    pub value: V,

    /// Queue that currently links this entry
    pub residence: Residence,
}

impl<K, V> CacheEntry<K, V> {
    /// Creates a new hot entry.
    #[inline]
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            residence: Residence::Hot,
        }
    }

    /// Consumes the entry and returns its key and value.
    #[inline]
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for CacheEntry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheEntry")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("residence", &self.residence)
            .finish()
    }
}

impl<K: Clone, V: Clone> Clone for CacheEntry<K, V> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            value: self.value.clone(),
            residence: self.residence,
        }
    }
}
