//! The abstract list contract.
//!
//! Two capability sets: [`List`] for the container and [`Cursor`] for a
//! position within it. [`RingList`](crate::RingList) is one conforming
//! implementation; the contract is written so an array-backed or skip-list
//! variant could conform with the same caller code.
//!
//! Boundary conditions are deliberately quiet: movement past either end is a
//! boolean, reading at the end marker is `None`, out-of-range seeks clamp.
//! Conforming implementations must also honor the repair contract: a
//! mutation issued through a cursor leaves that cursor on a valid adjacent
//! position (the inserted node, or the removed node's successor).

use core::fmt::Display;

use crate::cursor::RingCursor;
use crate::list::RingList;

/// Container capability: length, clearing, positional access and mutation.
pub trait List<T> {
    /// The cursor type issued by this list.
    type Cursor: Cursor<T, List = Self>;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the list holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Empties the list. Outstanding cursors are no longer usable.
    fn clear(&mut self);

    /// Returns a cursor on the `pos`-th element, clamped to the end marker
    /// when `pos` is out of range.
    fn cursor_at(&self, pos: usize) -> Self::Cursor;

    /// Returns the value under the cursor, or `None` at the end marker.
    fn value<'a>(&'a self, cursor: &Self::Cursor) -> Option<&'a T>;

    /// Overwrites the value under the cursor. Returns `false` (and writes
    /// nothing) at the end marker.
    fn set_value(&mut self, value: T, cursor: &Self::Cursor) -> bool;

    /// Inserts `value` immediately before the cursor's position and leaves
    /// the cursor on the inserted element.
    fn insert(&mut self, value: T, cursor: &mut Self::Cursor);

    /// Appends `value` at the end.
    fn push_back(&mut self, value: T);

    /// Removes the element under the cursor, advancing the cursor to its
    /// successor. Returns `None` (removing nothing) at the end marker.
    fn remove(&mut self, cursor: &mut Self::Cursor) -> Option<T>;

    /// Removes and returns the last element, or `None` when empty.
    fn pop_back(&mut self) -> Option<T>;

    /// Renders the contents as `[A, B, C]`; empty renders as `[]`.
    fn render(&self) -> String
    where
        T: Display;
}

/// Position capability: movement, end detection, duplication, reporting.
pub trait Cursor<T> {
    /// The list type this cursor traverses.
    type List: ?Sized;

    /// Moves to the successor. Returns `true` iff the new position holds a
    /// real element; at the end marker this is a no-op returning `false`.
    fn move_next(&mut self, list: &Self::List) -> bool;

    /// Moves to the predecessor. Returns `false` without moving at the first
    /// element; from the end marker moves to the last element if any.
    fn move_prev(&mut self, list: &Self::List) -> bool;

    /// Returns `true` iff the cursor sits on the end marker.
    fn at_end(&self, list: &Self::List) -> bool;

    /// Repositions to the `pos`-th element, clamping out-of-range values to
    /// the end marker.
    fn seek(&mut self, list: &Self::List, pos: usize);

    /// Returns an independent duplicate at the same position.
    fn fork(&self) -> Self
    where
        Self: Sized;

    /// Returns the 0-based position, counted from the front. At the end
    /// marker this equals the list's length.
    fn ordinal(&self, list: &Self::List) -> usize;

    /// Returns the position as text.
    fn describe(&self, list: &Self::List) -> String {
        self.ordinal(list).to_string()
    }
}

impl<T> List<T> for RingList<T> {
    type Cursor = RingCursor;

    fn len(&self) -> usize {
        RingList::len(self)
    }

    fn clear(&mut self) {
        RingList::clear(self);
    }

    fn cursor_at(&self, pos: usize) -> RingCursor {
        RingList::cursor_at(self, pos)
    }

    fn value<'a>(&'a self, cursor: &RingCursor) -> Option<&'a T> {
        RingList::value(self, cursor)
    }

    fn set_value(&mut self, value: T, cursor: &RingCursor) -> bool {
        RingList::set_value(self, value, cursor)
    }

    fn insert(&mut self, value: T, cursor: &mut RingCursor) {
        RingList::insert(self, value, cursor);
    }

    fn push_back(&mut self, value: T) {
        RingList::push_back(self, value);
    }

    fn remove(&mut self, cursor: &mut RingCursor) -> Option<T> {
        RingList::remove(self, cursor)
    }

    fn pop_back(&mut self) -> Option<T> {
        RingList::pop_back(self)
    }

    fn render(&self) -> String
    where
        T: Display,
    {
        self.to_string()
    }
}

impl<T> Cursor<T> for RingCursor {
    type List = RingList<T>;

    fn move_next(&mut self, list: &RingList<T>) -> bool {
        RingCursor::move_next(self, list)
    }

    fn move_prev(&mut self, list: &RingList<T>) -> bool {
        RingCursor::move_prev(self, list)
    }

    fn at_end(&self, list: &RingList<T>) -> bool {
        RingCursor::at_end(self, list)
    }

    fn seek(&mut self, list: &RingList<T>, pos: usize) {
        RingCursor::seek(self, list, pos);
    }

    fn fork(&self) -> Self {
        RingCursor::fork(self)
    }

    fn ordinal(&self, list: &RingList<T>) -> usize {
        RingCursor::ordinal(self, list)
    }
}
