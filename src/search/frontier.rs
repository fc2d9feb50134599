//! Frontier disciplines for graph search.
//!
//! The four uninformed search algorithms share one expansion loop and
//! differ only in the order the frontier hands nodes back: LIFO for
//! depth-first, FIFO for breadth-first, and lowest-key-first for the
//! cost-aware variants.

use std::{
    cmp::Ordering,
    collections::{BinaryHeap, VecDeque},
};

/// A frontier of not-yet-expanded search nodes.
pub(crate) enum Frontier<N> {
    /// LIFO stack (depth-first).
    Stack(Vec<N>),
    /// FIFO queue (breadth-first).
    Queue(VecDeque<N>),
    /// Min-priority queue; equal keys pop in insertion order.
    Priority {
        heap: BinaryHeap<Prioritized<N>>,
        next_seq: u64,
    },
}

impl<N> Frontier<N> {
    pub(crate) fn stack() -> Self {
        Frontier::Stack(Vec::new())
    }

    pub(crate) fn queue() -> Self {
        Frontier::Queue(VecDeque::new())
    }

    pub(crate) fn priority() -> Self {
        Frontier::Priority {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Push a node. The key is only consulted by the priority variant.
    pub(crate) fn push(&mut self, node: N, key: f64) {
        match self {
            Frontier::Stack(nodes) => nodes.push(node),
            Frontier::Queue(nodes) => nodes.push_back(node),
            Frontier::Priority { heap, next_seq } => {
                heap.push(Prioritized {
                    key,
                    seq: *next_seq,
                    node,
                });
                *next_seq += 1;
            }
        }
    }

    /// Pop the next node according to this frontier's discipline.
    pub(crate) fn pop(&mut self) -> Option<N> {
        match self {
            Frontier::Stack(nodes) => nodes.pop(),
            Frontier::Queue(nodes) => nodes.pop_front(),
            Frontier::Priority { heap, .. } => heap.pop().map(|entry| entry.node),
        }
    }
}

/// Heap entry ordered by ascending key, then insertion order.
pub(crate) struct Prioritized<N> {
    key: f64,
    seq: u64,
    node: N,
}

impl<N> PartialEq for Prioritized<N> {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq && self.key.total_cmp(&other.key) == Ordering::Equal
    }
}

impl<N> Eq for Prioritized<N> {}

impl<N> Ord for Prioritized<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; reverse both fields for min-first, FIFO ties.
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<N> PartialOrd for Prioritized<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
