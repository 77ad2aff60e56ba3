//! Slab arena and index-linked queues.
//!
//! The hot and cold queues of a 2Q cache share one [`Arena`] of nodes. A node
//! is addressed by a [`NodeId`] that stays valid for as long as the node is
//! live, no matter which queue currently links it. Moving an entry between
//! queues only rewrites `prev`/`next` indices; the slot itself never moves,
//! so the key index never holds a stale handle.
//!
//! ```text
//!   Arena slots:  [0: A] [1: free] [2: B] [3: C] [4: D]
//!
//!   hot  queue:  head ─▶ 3 ◀──▶ 0 ◀──▶ 4 ◀─ tail
//!   cold queue:  head ─▶ 2 ◀─ tail
//! ```
//!
//! Freed slots are recycled through a free list, so a cache running at steady
//! state does not grow the arena.

extern crate alloc;

use crate::error::InvariantError;
use alloc::vec::Vec;
use core::fmt;

/// Stable handle to a node slot in an [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    /// Returns the raw slot index.
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// A value plus the links of whichever queue currently owns it.
struct Node<T> {
    value: T,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// Slot storage for queue nodes.
///
/// Nodes are created detached; a [`Queue`] links them. The arena does not
/// track queue membership, that is the job of the value stored in it.
pub(crate) struct Arena<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    live: usize,
}

impl<T> Arena<T> {
    /// Creates an arena with room for `capacity` nodes before reallocating.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Arena {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            live: 0,
        }
    }

    /// Number of live nodes.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.live
    }

    /// Stores `value` in a detached node and returns its handle.
    pub(crate) fn insert(&mut self, value: T) -> NodeId {
        let node = Node {
            value,
            prev: None,
            next: None,
        };
        self.live += 1;
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(node);
                NodeId(index)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Frees the slot behind `id` and returns its value.
    ///
    /// The node must already be unlinked from its queue.
    pub(crate) fn remove(&mut self, id: NodeId) -> Option<T> {
        let node = self.slots.get_mut(id.0)?.take()?;
        debug_assert!(node.prev.is_none() && node.next.is_none());
        self.free.push(id.0);
        self.live -= 1;
        Some(node.value)
    }

    /// Returns the value behind `id`, if the slot is live.
    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> Option<&T> {
        self.slots.get(id.0)?.as_ref().map(|node| &node.value)
    }

    /// Returns the value behind `id` mutably, if the slot is live.
    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.slots.get_mut(id.0)?.as_mut().map(|node| &mut node.value)
    }

    /// Drops every node and forgets all handles.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.live = 0;
    }

    #[inline]
    fn node(&self, id: NodeId) -> &Node<T> {
        match self.slots.get(id.0).and_then(Option::as_ref) {
            Some(node) => node,
            None => panic!("{}", InvariantError::VacantSlot { index: id.0 }),
        }
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match self.slots.get_mut(id.0).and_then(Option::as_mut) {
            Some(node) => node,
            None => panic!("{}", InvariantError::VacantSlot { index: id.0 }),
        }
    }
}

impl<T> fmt::Debug for Arena<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("slots", &self.slots.len())
            .field("live", &self.live)
            .field("free", &self.free.len())
            .finish()
    }
}

/// A doubly-linked sequence of arena nodes.
///
/// Front is the most recently used or inserted node, back is the next
/// candidate to leave the queue. All operations are O(1) except [`Queue::iter`].
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Queue {
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl Queue {
    /// Creates an empty queue.
    pub(crate) const fn new() -> Self {
        Queue {
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Number of linked nodes.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Handle of the front node.
    #[inline]
    pub(crate) fn front(&self) -> Option<NodeId> {
        self.head
    }

    /// Handle of the back node.
    #[inline]
    pub(crate) fn back(&self) -> Option<NodeId> {
        self.tail
    }

    /// Links a detached node at the front.
    pub(crate) fn push_front<T>(&mut self, arena: &mut Arena<T>, id: NodeId) {
        let old_head = self.head;
        {
            let node = arena.node_mut(id);
            node.prev = None;
            node.next = old_head;
        }
        match old_head {
            Some(head) => arena.node_mut(head).prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.len += 1;
    }

    /// Links a detached node at the back.
    pub(crate) fn push_back<T>(&mut self, arena: &mut Arena<T>, id: NodeId) {
        let old_tail = self.tail;
        {
            let node = arena.node_mut(id);
            node.prev = old_tail;
            node.next = None;
        }
        match old_tail {
            Some(tail) => arena.node_mut(tail).next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
    }

    /// Unlinks a node that this queue owns and leaves it detached.
    pub(crate) fn unlink<T>(&mut self, arena: &mut Arena<T>, id: NodeId) {
        let (prev, next) = {
            let node = arena.node_mut(id);
            (node.prev.take(), node.next.take())
        };
        match prev {
            Some(prev) => arena.node_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => arena.node_mut(next).prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;
    }

    /// Unlinks and returns the back node.
    pub(crate) fn pop_back<T>(&mut self, arena: &mut Arena<T>) -> Option<NodeId> {
        let tail = self.tail?;
        self.unlink(arena, tail);
        Some(tail)
    }

    /// Moves a node this queue owns to the front.
    pub(crate) fn move_to_front<T>(&mut self, arena: &mut Arena<T>, id: NodeId) {
        if self.head == Some(id) {
            return;
        }
        self.unlink(arena, id);
        self.push_front(arena, id);
    }

    /// Forgets every link. The nodes themselves live in the arena.
    pub(crate) fn clear(&mut self) {
        *self = Queue::new();
    }

    /// Walks the queue front to back.
    pub(crate) fn iter<'a, T>(&self, arena: &'a Arena<T>) -> Iter<'a, T> {
        Iter {
            arena,
            current: self.head,
            remaining: self.len,
        }
    }

    /// Verifies that the links form a consistent chain of `len` nodes.
    pub(crate) fn check_links<T>(&self, arena: &Arena<T>) -> Result<(), InvariantError> {
        let mut prev: Option<NodeId> = None;
        let mut current = self.front();
        let mut seen = 0usize;
        while let Some(id) = current {
            let node = arena
                .slots
                .get(id.0)
                .and_then(Option::as_ref)
                .ok_or(InvariantError::VacantSlot { index: id.0 })?;
            if node.prev != prev {
                return Err(InvariantError::BrokenLink { index: id.0 });
            }
            seen += 1;
            if seen > self.len {
                return Err(InvariantError::QueueLength {
                    recorded: self.len,
                    linked: seen,
                });
            }
            prev = current;
            current = node.next;
        }
        if self.back() != prev {
            return Err(InvariantError::BrokenLink {
                index: prev.map_or(usize::MAX, NodeId::index),
            });
        }
        if seen != self.len {
            return Err(InvariantError::QueueLength {
                recorded: self.len,
                linked: seen,
            });
        }
        Ok(())
    }
}

/// Front-to-back iterator over a [`Queue`].
pub(crate) struct Iter<'a, T> {
    arena: &'a Arena<T>,
    current: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (NodeId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.current?;
        let node = self.arena.node(id);
        self.current = node.next;
        self.remaining -= 1;
        Some((id, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("current", &self.current)
            .field("remaining", &self.remaining)
            .finish()
    }
}
