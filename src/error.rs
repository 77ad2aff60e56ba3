//! Structural invariant violations.
//!
//! A 2Q cache has no user-facing error path: misses are `None`, inserts cannot
//! fail short of allocation failure. What can go wrong is internal state
//! drifting out of shape. [`InvariantError`] names each way that can happen.
//! It is returned by `check_invariants()` and used as the panic message when
//! an operation trips over corrupted state.

use thiserror::Error;

use crate::meta::Residence;

/// A broken structural invariant inside a 2Q cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// The live-entry counter disagrees with the queue lengths.
    #[error("used size {used} does not match hot ({hot}) + cold ({cold})")]
    SizeMismatch {
        /// Recorded live-entry count.
        used: usize,
        /// Hot queue length.
        hot: usize,
        /// Cold queue length.
        cold: usize,
    },

    /// A queue holds more entries than its configured capacity.
    #[error("{queue} queue holds {len} entries, capacity is {capacity}")]
    OverCapacity {
        /// Which queue overflowed.
        queue: Residence,
        /// Its current length.
        len: usize,
        /// Its configured capacity.
        capacity: usize,
    },

    /// The key index and the queues disagree on how many entries exist.
    #[error("key index has {indexed} keys but {stored} entries are stored")]
    IndexMismatch {
        /// Keys in the index.
        indexed: usize,
        /// Live nodes in the arena.
        stored: usize,
    },

    /// A handle points at a slot that holds no entry.
    #[error("handle {index} points at a vacant slot")]
    VacantSlot {
        /// Slot index of the handle.
        index: usize,
    },

    /// An entry's residence tag names a different queue than the one linking it.
    #[error("entry in slot {index} is tagged {tagged} but linked into the {linked} queue")]
    ResidenceMismatch {
        /// Slot index of the entry.
        index: usize,
        /// Residence recorded on the entry.
        tagged: Residence,
        /// Queue that actually links it.
        linked: Residence,
    },

    /// A queue's recorded length disagrees with its linked chain.
    #[error("queue records {recorded} entries but links {linked}")]
    QueueLength {
        /// Length recorded on the queue.
        recorded: usize,
        /// Nodes reachable by walking it.
        linked: usize,
    },

    /// Forward and backward links of a queue disagree.
    #[error("queue links are inconsistent at slot {index}")]
    BrokenLink {
        /// Slot where the chain breaks.
        index: usize,
    },

    /// An indexed key maps to a slot holding a different key.
    #[error("indexed key does not match the entry stored in slot {index}")]
    KeyMismatch {
        /// Slot index the key index points at.
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::string::ToString;

    #[test]
    fn test_messages() {
        let err = InvariantError::SizeMismatch {
            used: 3,
            hot: 1,
            cold: 1,
        };
        assert_eq!(
            err.to_string(),
            "used size 3 does not match hot (1) + cold (1)"
        );

        let err = InvariantError::ResidenceMismatch {
            index: 7,
            tagged: Residence::Hot,
            linked: Residence::Cold,
        };
        assert_eq!(
            err.to_string(),
            "entry in slot 7 is tagged hot but linked into the cold queue"
        );

        let err = InvariantError::OverCapacity {
            queue: Residence::Cold,
            len: 3,
            capacity: 2,
        };
        assert_eq!(err.to_string(), "cold queue holds 3 entries, capacity is 2");
    }
}
