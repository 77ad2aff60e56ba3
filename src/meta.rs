//! Per-entry placement metadata for the 2Q cache.
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Residence`] | Which queue currently owns an entry |
//! | [`PromotionPlacement`] | Where a cold entry lands in the hot queue when re-referenced |
//!
//! # Usage
//!
//! ```
//! use twoq_cache::meta::{PromotionPlacement, Residence};
//!
//! // New entries always start hot
//! assert_eq!(Residence::default(), Residence::Hot);
//!
//! let mut residence = Residence::Hot;
//! residence.demote();
//! assert!(residence.is_cold());
//!
//! assert_eq!(PromotionPlacement::default(), PromotionPlacement::HotBack);
//! ```

use core::fmt;

/// Queue that owns an entry.
///
/// Every live entry is linked into exactly one queue, and its residence tag
/// always names that queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Residence {
    /// Retained entries. New inserts land here, at the front.
    #[default]
    Hot,

    /// Entries on probation. Demoted hot entries land here, and the back of
    /// this queue is the only place entries are evicted from.
    Cold,
}

impl Residence {
    /// Returns true if the entry lives in the hot queue.
    #[inline]
    pub fn is_hot(&self) -> bool {
        *self == Residence::Hot
    }

    /// Returns true if the entry lives in the cold queue.
    #[inline]
    pub fn is_cold(&self) -> bool {
        *self == Residence::Cold
    }

    /// Marks the entry as promoted into the hot queue.
    #[inline]
    pub fn promote(&mut self) {
        *self = Residence::Hot;
    }

    /// Marks the entry as demoted into the cold queue.
    #[inline]
    pub fn demote(&mut self) {
        *self = Residence::Cold;
    }
}

impl fmt::Display for Residence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Residence::Hot => f.write_str("hot"),
            Residence::Cold => f.write_str("cold"),
        }
    }
}

/// Where a re-referenced cold entry is linked into the hot queue.
///
/// ```text
///   HotBack:   hot = [MRU ... LRU, promoted]   next set demotes it again
///   HotFront:  hot = [promoted, MRU ... LRU]   treated like a fresh touch
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PromotionPlacement {
    /// Link at the back of the hot queue. The promoted entry has proven
    /// itself once but is the first candidate for the next demotion.
    #[default]
    HotBack,

    /// Link at the front of the hot queue, like an ordinary hot hit.
    HotFront,
}
