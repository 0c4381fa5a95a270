//! Sentinel-ring doubly-linked list.
//!
//! All nodes, sentinel included, live in a slab-backed [`Arena`]. The ring is
//! circular: the sentinel's `next` is the first real element and its `prev`
//! is the last one; an empty list is the sentinel linked to itself. There is
//! no null link anywhere on a live ring, which removes every head/tail
//! special case from splicing.
//!
//! Mutations take the cursor they were issued through by `&mut` and leave it
//! on a well-defined neighbor: `insert` parks it on the new node, `remove`
//! advances it to the removed node's former successor. Cursors not involved
//! in the mutation keep their position; if their node was the one removed
//! they become stale and are rejected (see [`RingList::validate`]).

use core::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::arena::Arena;
use crate::cursor::{CursorError, RingCursor};
use crate::node::{Node, NodeRef};

/// Distinguishes lists so a cursor cannot be replayed against the wrong one.
static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(0);

/// A doubly-linked list over slab storage, traversed by detached cursors.
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
/// let mut cur = list.cursor_at(1);
/// list.insert("X", &mut cur); // cur now rests on "X"
/// assert_eq!(list.to_string(), "[A, X, B]");
///
/// assert_eq!(list.remove(&mut cur), Some("X")); // cur now rests on "B"
/// assert_eq!(list.to_string(), "[A, B]");
/// assert_eq!(list.value(&cur), Some(&"B"));
/// ```
#[derive(Debug)]
pub struct RingList<T> {
    arena: Arena<T>,
    sentinel: NodeRef,
    len: usize,
    id: u64,
}

impl<T> RingList<T> {
    /// Creates an empty list: self-linked sentinel, length 0.
    pub fn new() -> Self {
        Self::bootstrap(Arena::new())
    }

    /// Creates an empty list with room for `capacity` elements before the
    /// backing slab reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        // One extra slot for the sentinel.
        Self::bootstrap(Arena::with_capacity(capacity + 1))
    }

    fn bootstrap(mut arena: Arena<T>) -> Self {
        let sentinel = Self::alloc_sentinel(&mut arena);
        Self {
            arena,
            sentinel,
            len: 0,
            id: NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    fn alloc_sentinel(arena: &mut Arena<T>) -> NodeRef {
        let sentinel = arena.insert(Node::sentinel());
        let node = arena
            .get_mut(sentinel)
            .expect("sentinel slot was just allocated");
        node.prev = sentinel;
        node.next = sentinel;
        sentinel
    }

    /// Returns the number of real elements. O(1).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no real elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Resets to empty: fresh self-linked sentinel, length 0.
    ///
    /// Every outstanding cursor on this list, including cursors parked on the
    /// old sentinel, becomes stale and is rejected from then on.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.sentinel = Self::alloc_sentinel(&mut self.arena);
        self.len = 0;
    }

    // ========================================================================
    // Cursor factories
    // ========================================================================

    /// Returns a cursor on the first real element, or on the sentinel when
    /// the list is empty.
    pub fn cursor_front(&self) -> RingCursor {
        RingCursor {
            list: self.id,
            at: self.ring(self.sentinel).next,
        }
    }

    /// Returns a cursor on the `pos`-th real element (0-indexed).
    ///
    /// `pos >= len()` clamps to the sentinel; that is not an error.
    pub fn cursor_at(&self, pos: usize) -> RingCursor {
        let mut cursor = self.cursor_front();
        cursor.seek(self, pos);
        cursor
    }

    // ========================================================================
    // Value access
    // ========================================================================

    /// Returns the value under the cursor.
    ///
    /// At the sentinel there is no value and this returns `None`.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is stale or belongs to another list.
    pub fn value(&self, cursor: &RingCursor) -> Option<&T> {
        let at = self.resolve(cursor);
        self.ring(at).value.as_ref()
    }

    /// Overwrites the value under the cursor.
    ///
    /// Returns `true` if a value was written. At the sentinel the call is
    /// silently ignored and returns `false`.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is stale or belongs to another list.
    pub fn set_value(&mut self, value: T, cursor: &RingCursor) -> bool {
        let at = self.resolve(cursor);
        if at == self.sentinel {
            return false;
        }
        self.ring_mut(at).value = Some(value);
        true
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Splices a new node holding `value` immediately before the cursor's
    /// node, then parks the cursor on the new node. Inserting at the sentinel
    /// appends. Increments the length.
    ///
    /// The element the cursor used to rest on is now the new node's
    /// successor, one position further from the front.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is stale or belongs to another list.
    pub fn insert(&mut self, value: T, cursor: &mut RingCursor) {
        let anchor = self.resolve(cursor);
        let prev = self.ring(anchor).prev;

        let fresh = self.arena.insert(Node::detached(value));
        {
            let node = self.ring_mut(fresh);
            node.prev = prev;
            node.next = anchor;
        }
        self.ring_mut(prev).next = fresh;
        self.ring_mut(anchor).prev = fresh;

        self.len += 1;
        // Splice-then-step-back: the cursor lands on the inserted node, so an
        // immediate remove through the same cursor undoes the insert.
        cursor.at = fresh;
    }

    /// Appends `value` at the end and returns a cursor on the new node.
    pub fn push_back(&mut self, value: T) -> RingCursor {
        let mut cursor = RingCursor {
            list: self.id,
            at: self.sentinel,
        };
        self.insert(value, &mut cursor);
        cursor
    }

    /// Removes the node under the cursor and returns its value, advancing
    /// the cursor to the removed node's former successor (possibly the
    /// sentinel). The cursor stays usable for forward iteration.
    ///
    /// At the sentinel (which includes the empty list) nothing is removed
    /// and `None` is returned.
    ///
    /// Other cursors that were resting on the removed node become stale; the
    /// retired slot rejects them even after reuse.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is stale or belongs to another list.
    pub fn remove(&mut self, cursor: &mut RingCursor) -> Option<T> {
        let target = self.resolve(cursor);
        if target == self.sentinel {
            return None;
        }

        let (prev, next) = {
            let node = self.ring(target);
            (node.prev, node.next)
        };
        self.ring_mut(prev).next = next;
        self.ring_mut(next).prev = prev;
        cursor.at = next;
        self.len -= 1;

        let node = self
            .arena
            .remove(target)
            .expect("resolved cursor target is live");
        node.value
    }

    /// Removes and returns the last real element, or `None` when empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let mut cursor = RingCursor {
            list: self.id,
            at: self.ring(self.sentinel).prev,
        };
        self.remove(&mut cursor)
    }

    // ========================================================================
    // Cursor validity
    // ========================================================================

    /// Checks that a cursor was issued by this list and still points at a
    /// live node.
    ///
    /// # Errors
    ///
    /// [`CursorError::WrongList`] if the cursor came from another list,
    /// [`CursorError::Stale`] if its node was removed or the list cleared.
    pub fn validate(&self, cursor: &RingCursor) -> Result<(), CursorError> {
        if cursor.list != self.id {
            return Err(CursorError::WrongList);
        }
        if !self.arena.contains(cursor.at) {
            return Err(CursorError::Stale);
        }
        Ok(())
    }

    /// Returns `true` if [`validate`](Self::validate) would succeed.
    #[inline]
    pub fn is_valid(&self, cursor: &RingCursor) -> bool {
        self.validate(cursor).is_ok()
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over references to elements, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.ring(self.sentinel).next,
            back: self.ring(self.sentinel).prev,
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    #[inline]
    pub(crate) fn sentinel(&self) -> NodeRef {
        self.sentinel
    }

    /// Follows a ring link. Ring links always point at live nodes.
    #[inline]
    pub(crate) fn ring(&self, link: NodeRef) -> &Node<T> {
        self.arena.get(link).expect("ring link points at a live node")
    }

    #[inline]
    fn ring_mut(&mut self, link: NodeRef) -> &mut Node<T> {
        self.arena
            .get_mut(link)
            .expect("ring link points at a live node")
    }

    /// Resolves a cursor to its node handle, panicking on misuse.
    pub(crate) fn resolve(&self, cursor: &RingCursor) -> NodeRef {
        match self.validate(cursor) {
            Ok(()) => cursor.at,
            Err(err) => panic!("invalid cursor: {err}"),
        }
    }
}

impl<T> Default for RingList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for RingList<T> {
    /// Renders the contents as `[A, B, C]`; an empty list renders as `[]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        let mut first = true;
        for value in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
            first = false;
        }
        f.write_str("]")
    }
}

/// Iterator over references to list elements, front to back.
pub struct Iter<'a, T> {
    list: &'a RingList<T>,
    front: NodeRef,
    back: NodeRef,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.list.sentinel() {
            return None;
        }

        let node = self.list.ring(self.front);

        // Ends met in the middle: this is the last element to yield.
        if self.front == self.back {
            self.front = self.list.sentinel();
            self.back = self.list.sentinel();
        } else {
            self.front = node.next;
        }

        node.value.as_ref()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.back == self.list.sentinel() {
            return None;
        }

        let node = self.list.ring(self.back);

        if self.front == self.back {
            self.front = self.list.sentinel();
            self.back = self.list.sentinel();
        } else {
            self.back = node.prev;
        }

        node.value.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> RingList<&'static str> {
        let mut list = RingList::new();
        list.push_back("A");
        list.push_back("B");
        list.push_back("C");
        list
    }

    #[test]
    fn new_list_is_empty() {
        let list: RingList<u64> = RingList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.to_string(), "[]");
    }

    #[test]
    fn cursor_on_empty_list_is_at_end() {
        let list: RingList<u64> = RingList::new();
        let cur = list.cursor_at(0);
        assert!(cur.at_end(&list));
        assert_eq!(list.value(&cur), None);
    }

    #[test]
    fn appends_keep_insertion_order() {
        let mut list = RingList::new();
        for value in ["A", "B", "C", "D"] {
            list.push_back(value);
        }

        assert_eq!(list.len(), 4);
        assert_eq!(list.to_string(), "[A, B, C, D]");
        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn iter_walks_both_directions() {
        let list = abc();

        let forward: Vec<_> = list.iter().copied().collect();
        assert_eq!(forward, vec!["A", "B", "C"]);

        let backward: Vec<_> = list.iter().rev().copied().collect();
        assert_eq!(backward, vec!["C", "B", "A"]);
    }

    #[test]
    fn insert_parks_cursor_on_new_node() {
        let mut list = abc();
        let mut cur = list.cursor_at(1); // on B

        list.insert("X", &mut cur);

        assert_eq!(list.to_string(), "[A, X, B, C]");
        assert_eq!(list.value(&cur), Some(&"X"));
        assert_eq!(cur.ordinal(&list), 1);
    }

    #[test]
    fn insert_then_remove_is_a_content_noop() {
        let mut list = abc();
        let before = list.to_string();
        let mut cur = list.cursor_at(1);

        list.insert("X", &mut cur);
        let removed = list.remove(&mut cur);

        assert_eq!(removed, Some("X"));
        assert_eq!(list.to_string(), before);
        assert_eq!(list.len(), 3);
        // The cursor is back on the element it started from.
        assert_eq!(list.value(&cur), Some(&"B"));
    }

    #[test]
    fn insert_at_sentinel_appends() {
        let mut list = abc();
        let mut cur = list.cursor_at(99);
        assert!(cur.at_end(&list));

        list.insert("Z", &mut cur);

        assert_eq!(list.to_string(), "[A, B, C, Z]");
        assert_eq!(list.value(&cur), Some(&"Z"));
    }

    #[test]
    fn insert_into_empty_list() {
        let mut list: RingList<&str> = RingList::new();
        let mut cur = list.cursor_front();

        list.insert("A", &mut cur);

        assert_eq!(list.len(), 1);
        assert_eq!(list.to_string(), "[A]");
        assert_eq!(list.value(&cur), Some(&"A"));
        assert!(!cur.at_end(&list));
    }

    #[test]
    fn remove_advances_cursor_to_successor() {
        let mut list = abc();
        let mut cur = list.cursor_at(1); // on B

        let removed = list.remove(&mut cur);

        assert_eq!(removed, Some("B"));
        assert_eq!(list.to_string(), "[A, C]");
        assert_eq!(list.value(&cur), Some(&"C"));
        assert_eq!(cur.ordinal(&list), 1);
    }

    #[test]
    fn remove_last_element_leaves_cursor_at_end() {
        let mut list = abc();
        let mut cur = list.cursor_at(2); // on C

        assert_eq!(list.remove(&mut cur), Some("C"));
        assert!(cur.at_end(&list));
        assert_eq!(list.to_string(), "[A, B]");
    }

    #[test]
    fn remove_at_sentinel_is_a_noop() {
        let mut list = abc();
        let mut cur = list.cursor_at(3);

        assert_eq!(list.remove(&mut cur), None);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn remove_repairs_only_the_given_cursor() {
        let mut list = abc();
        let mut doomed = list.cursor_at(1); // on B
        let bystander = list.cursor_at(1); // also on B
        let elsewhere = list.cursor_at(0); // on A

        list.remove(&mut doomed);

        // The cursor used for the removal was repaired.
        assert!(list.is_valid(&doomed));
        assert_eq!(list.value(&doomed), Some(&"C"));

        // A cursor that pointed elsewhere is untouched.
        assert!(list.is_valid(&elsewhere));
        assert_eq!(list.value(&elsewhere), Some(&"A"));

        // A second cursor on the removed node is stale, not dangling.
        assert_eq!(list.validate(&bystander), Err(CursorError::Stale));
    }

    #[test]
    fn stale_cursor_survives_slot_reuse() {
        let mut list = abc();
        let mut doomed = list.cursor_at(1);
        let bystander = doomed.fork();

        list.remove(&mut doomed);
        // New insert likely reuses the retired slot; the old cursor must
        // still be rejected.
        list.push_back("D");

        assert_eq!(list.validate(&bystander), Err(CursorError::Stale));
    }

    #[test]
    #[should_panic(expected = "invalid cursor")]
    fn using_a_stale_cursor_panics() {
        let mut list = abc();
        let mut doomed = list.cursor_at(1);
        let bystander = doomed.fork();

        list.remove(&mut doomed);
        let _ = list.value(&bystander);
    }

    #[test]
    fn cursor_from_another_list_is_rejected() {
        let list_a = abc();
        let list_b = abc();
        let cur = list_a.cursor_front();

        assert_eq!(list_b.validate(&cur), Err(CursorError::WrongList));
    }

    #[test]
    fn pop_back_drains_in_reverse_order() {
        let mut list = abc();

        assert_eq!(list.pop_back(), Some("C"));
        assert_eq!(list.pop_back(), Some("B"));
        assert_eq!(list.pop_back(), Some("A"));
        assert_eq!(list.pop_back(), None);
        assert_eq!(list.len(), 0);
        assert_eq!(list.to_string(), "[]");
    }

    #[test]
    fn set_value_overwrites_in_place() {
        let mut list = abc();
        let cur = list.cursor_at(1);

        assert!(list.set_value("Q", &cur));
        assert_eq!(list.to_string(), "[A, Q, C]");
    }

    #[test]
    fn set_value_at_sentinel_is_ignored() {
        let mut list = abc();
        let cur = list.cursor_at(3);

        assert!(!list.set_value("Q", &cur));
        assert_eq!(list.to_string(), "[A, B, C]");
    }

    #[test]
    fn clear_resets_and_invalidates_cursors() {
        let mut list = abc();
        let cur = list.cursor_at(1);
        let end = list.cursor_at(3); // old sentinel

        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.to_string(), "[]");
        assert_eq!(list.validate(&cur), Err(CursorError::Stale));
        assert_eq!(list.validate(&end), Err(CursorError::Stale));

        // The list is fully usable again.
        list.push_back("Z");
        assert_eq!(list.to_string(), "[Z]");
    }

    #[test]
    fn length_tracks_ring_contents() {
        let mut list = RingList::new();
        for i in 0..100u64 {
            list.push_back(i);
        }
        assert_eq!(list.len(), 100);
        assert_eq!(list.iter().count(), 100);

        let mut cur = list.cursor_at(50);
        list.remove(&mut cur);
        list.insert(1000, &mut cur);
        assert_eq!(list.len(), 100);
        assert_eq!(list.iter().count(), 100);
    }

    #[test]
    fn push_back_returns_cursor_on_new_node() {
        let mut list = RingList::new();
        let cur = list.push_back("A");

        assert_eq!(list.value(&cur), Some(&"A"));
        assert_eq!(cur.ordinal(&list), 0);
    }
}
