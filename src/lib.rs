//! Sentinel-ring doubly-linked list with detached, self-healing cursors.
//!
//! The list is a circular ring of nodes anchored by one valueless sentinel:
//! the sentinel's `next` is the first element, its `prev` is the last, and an
//! empty list is the sentinel linked to itself. The same node is therefore
//! both the "past the end" and "before the beginning" marker, and splicing
//! never has a head or tail special case.
//!
//! # Design
//!
//! Traditional linked lists chain owned boxes or raw pointers:
//!
//! ```text
//! Box<Node>      - cursors borrow the list, one at a time
//! *mut Node      - detached cursors, but dangling after removal is UB
//! ```
//!
//! This crate stores nodes in a slab and addresses them by generational
//! handle:
//!
//! ```text
//! Arena (slab)   - owns all nodes, slot + generation handles
//! RingList       - maintains the ring and the length
//! RingCursor     - detached (list id, handle) pair, any number at once
//! ```
//!
//! Benefits:
//! - **Many cursors**: cursors borrow nothing, so several can sit on one
//!   list and be passed into its operations.
//! - **Detectable staleness**: removal retires the slot's generation, so a
//!   cursor left on a removed node is rejected instead of dangling.
//! - **Self-healing mutation**: the cursor a mutation is issued through is
//!   repaired, landing on the inserted node or the removed node's successor.
//!
//! # Quick start
//!
//! ```
//! use ring_list::RingList;
//!
//! let mut list: RingList<&str> = RingList::new();
//! list.push_back("A");
//! list.push_back("B");
//! list.push_back("C");
//!
//! // A cursor on "B", obtained by position.
//! let mut cur = list.cursor_at(1);
//!
//! // Insert before the cursor; the cursor lands on the new element.
//! list.insert("X", &mut cur);
//! assert_eq!(list.to_string(), "[A, X, B, C]");
//! assert_eq!(list.value(&cur), Some(&"X"));
//!
//! // Remove through the cursor; it advances to the successor.
//! assert_eq!(list.remove(&mut cur), Some("X"));
//! assert_eq!(list.to_string(), "[A, B, C]");
//! assert_eq!(list.value(&cur), Some(&"B"));
//! ```
//!
//! # The aliasing hazard, stated plainly
//!
//! Only the cursor passed into `insert` or `remove` is repaired. Any *other*
//! cursor resting on a removed node keeps its old handle; the design makes
//! that handle stale rather than dangling, and every operation rejects it.
//! Check such cursors with [`RingList::validate`] or [`RingList::is_valid`]
//! before reuse:
//!
//! ```
//! use ring_list::{CursorError, RingList};
//!
//! let mut list: RingList<&str> = RingList::new();
//! list.push_back("A");
//! list.push_back("B");
//!
//! let mut doomed = list.cursor_at(0);
//! let bystander = list.cursor_at(0);
//!
//! list.remove(&mut doomed); // repairs `doomed` only
//! assert_eq!(list.validate(&bystander), Err(CursorError::Stale));
//! ```
//!
//! # Contract
//!
//! The [`List`] and [`Cursor`] traits capture the abstract contract this
//! ring-based variant conforms to, so callers can be written against the
//! traits and reused over other conforming implementations.
//!
//! # Concurrency
//!
//! None. The list is a single-threaded structure; there is no interior
//! mutability and no synchronization.

#![warn(missing_docs)]

mod arena;
mod node;

pub mod cursor;
pub mod list;
pub mod traits;

pub use cursor::{CursorError, RingCursor};
pub use list::{Iter, RingList};
pub use traits::{Cursor, List};
