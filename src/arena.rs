//! Slab-backed node arena with generation tracking.
//!
//! Nodes live in a `slab::Slab`; the arena hands out [`NodeRef`] handles that
//! pair the slot index with its current generation. Removing a node (or
//! clearing the arena) bumps the slot's generation, so every handle captured
//! earlier stops resolving. Handles stay stable across unrelated mutations.

use slab::Slab;

use crate::node::{Node, NodeRef};

/// Owns all nodes of one list, including the sentinel.
#[derive(Debug)]
pub(crate) struct Arena<T> {
    slots: Slab<Node<T>>,
    /// Generation per slot, indexed by slot. Grows with the slab, never shrinks.
    generations: Vec<u32>,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Slab::new(),
            generations: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Slab::with_capacity(capacity),
            generations: Vec::with_capacity(capacity),
        }
    }

    /// Inserts a node and returns its handle at the slot's current generation.
    pub(crate) fn insert(&mut self, node: Node<T>) -> NodeRef {
        let slot = self.slots.insert(node);
        debug_assert!(slot < u32::MAX as usize, "slot index exceeds handle range");
        if slot >= self.generations.len() {
            self.generations.resize(slot + 1, 0);
        }
        NodeRef {
            slot: slot as u32,
            generation: self.generations[slot],
        }
    }

    /// Returns `true` if `link` resolves to a live node of the current generation.
    #[inline]
    pub(crate) fn contains(&self, link: NodeRef) -> bool {
        let slot = link.slot as usize;
        self.generations.get(slot) == Some(&link.generation) && self.slots.contains(slot)
    }

    #[inline]
    pub(crate) fn get(&self, link: NodeRef) -> Option<&Node<T>> {
        if !self.contains(link) {
            return None;
        }
        self.slots.get(link.slot as usize)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, link: NodeRef) -> Option<&mut Node<T>> {
        if !self.contains(link) {
            return None;
        }
        self.slots.get_mut(link.slot as usize)
    }

    /// Removes the node at `link`, retiring the slot's generation.
    ///
    /// Any other handle still pointing at this slot stops resolving from here
    /// on, even after the slot is reused.
    pub(crate) fn remove(&mut self, link: NodeRef) -> Option<Node<T>> {
        if !self.contains(link) {
            return None;
        }
        let slot = link.slot as usize;
        self.generations[slot] = self.generations[slot].wrapping_add(1);
        self.slots.try_remove(slot)
    }

    /// Drops every node and retires every occupied slot.
    pub(crate) fn clear(&mut self) {
        for (slot, _) in self.slots.iter() {
            self.generations[slot] = self.generations[slot].wrapping_add(1);
        }
        self.slots.clear();
    }
}
