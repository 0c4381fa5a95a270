//! Detached cursor over a [`RingList`].
//!
//! A cursor is a (list identity, node handle) pair. It borrows nothing, so
//! any number of cursors can sit on one list at the same time; each list
//! operation takes the list by reference, the same way structures over
//! external storage take `&storage`.
//!
//! # Staleness
//!
//! A mutation issued *through* a cursor repairs that cursor. Any other cursor
//! whose node was removed becomes stale: it stops resolving rather than
//! dangling, and [`RingList::validate`] reports it as [`CursorError::Stale`].
//! Passing a stale or foreign cursor into a list or cursor operation panics;
//! call `validate` first when a cursor may have been invalidated elsewhere.

use core::fmt;

use crate::list::RingList;
use crate::node::NodeRef;

/// A movable position within a [`RingList`].
///
/// Created by [`RingList::cursor_at`], [`RingList::cursor_front`], or
/// [`RingCursor::fork`]. The "past the end" and "before the beginning"
/// position is the list's sentinel; [`RingCursor::at_end`] reports it.
///
/// # Example
///
/// ```
/// use ring_list::RingList;
///
/// let mut list: RingList<&str> = RingList::new();
/// list.push_back("A");
/// list.push_back("B");
///
/// let mut cur = list.cursor_front();
/// assert_eq!(list.value(&cur), Some(&"A"));
///
/// assert!(cur.move_next(&list));
/// assert_eq!(list.value(&cur), Some(&"B"));
///
/// assert!(!cur.move_next(&list)); // stepped onto the sentinel
/// assert!(cur.at_end(&list));
/// ```
#[derive(Debug)]
pub struct RingCursor {
    pub(crate) list: u64,
    pub(crate) at: NodeRef,
}

impl RingCursor {
    /// Moves to the structural successor.
    ///
    /// Returns `true` iff the new position is a real element. Once the
    /// sentinel is reached this is a no-op returning `false`.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is stale or belongs to another list.
    pub fn move_next<T>(&mut self, list: &RingList<T>) -> bool {
        let at = list.resolve(self);
        if at == list.sentinel() {
            return false;
        }
        self.at = list.ring(at).next;
        self.at != list.sentinel()
    }

    /// Moves to the structural predecessor.
    ///
    /// Fails (returns `false`, no movement) exactly when the cursor sits on
    /// the first real element. From the sentinel this moves to the last real
    /// element, or self-loops returning `false` when the list is empty.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is stale or belongs to another list.
    pub fn move_prev<T>(&mut self, list: &RingList<T>) -> bool {
        let at = list.resolve(self);
        let first = list.ring(list.sentinel()).next;
        if at == first {
            return false;
        }
        self.at = list.ring(at).prev;
        true
    }

    /// Returns `true` iff the cursor sits on the sentinel.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is stale or belongs to another list.
    #[inline]
    pub fn at_end<T>(&self, list: &RingList<T>) -> bool {
        list.resolve(self) == list.sentinel()
    }

    /// Repositions to the `pos`-th real element, walking from the front.
    ///
    /// `pos >= list.len()` clamps to the sentinel; that is not an error.
    /// Linear in `pos`.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is stale or belongs to another list.
    pub fn seek<T>(&mut self, list: &RingList<T>, pos: usize) {
        list.resolve(self);
        if pos >= list.len() {
            self.at = list.sentinel();
            return;
        }
        let mut at = list.ring(list.sentinel()).next;
        for _ in 0..pos {
            at = list.ring(at).next;
        }
        self.at = at;
    }

    /// Returns a new cursor at the same position. Independent thereafter.
    #[inline]
    pub fn fork(&self) -> Self {
        Self {
            list: self.list,
            at: self.at,
        }
    }

    /// Returns the 0-based position of the cursor, counting predecessor
    /// steps from a fork back to the front. At the sentinel this equals
    /// `list.len()`. Linear in the position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is stale or belongs to another list.
    pub fn ordinal<T>(&self, list: &RingList<T>) -> usize {
        let mut probe = self.fork();
        let mut pos = 0;
        while probe.move_prev(list) {
            pos += 1;
        }
        pos
    }
}

/// Why a cursor failed validation against a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    /// The cursor's node was removed, or the list was cleared since the
    /// cursor last pointed at a live node.
    Stale,
    /// The cursor was created by a different list.
    WrongList,
}

impl fmt::Display for CursorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CursorError::Stale => f.write_str("cursor points at a removed node"),
            CursorError::WrongList => f.write_str("cursor belongs to a different list"),
        }
    }
}

impl std::error::Error for CursorError {}
