//! Node representation for the ring.
//!
//! A node is a value slot plus two neighbor links. Links are generational
//! handles rather than pointers, so a link to a retired slot is detectable
//! instead of dangling.

/// Generational handle to a node slot in the arena.
///
/// The slot index alone is not enough: slots are reused after removal.
/// The generation is bumped every time a slot is retired, so a handle
/// captured before a removal no longer matches afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeRef {
    pub(crate) slot: u32,
    pub(crate) generation: u32,
}

impl NodeRef {
    /// Sentinel "no link" value, used only while a node is detached.
    pub(crate) const NONE: Self = Self {
        slot: u32::MAX,
        generation: 0,
    };
}

/// A node on the ring: one value slot and two neighbor links.
///
/// The list's sentinel is the only node whose `value` is `None`.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: Option<T>,
    pub(crate) prev: NodeRef,
    pub(crate) next: NodeRef,
}

impl<T> Node<T> {
    /// Creates a detached node holding `value`. Links are set when spliced.
    #[inline]
    pub(crate) fn detached(value: T) -> Self {
        Self {
            value: Some(value),
            prev: NodeRef::NONE,
            next: NodeRef::NONE,
        }
    }

    /// Creates the valueless sentinel node. The caller self-links it.
    #[inline]
    pub(crate) fn sentinel() -> Self {
        Self {
            value: None,
            prev: NodeRef::NONE,
            next: NodeRef::NONE,
        }
    }
}
