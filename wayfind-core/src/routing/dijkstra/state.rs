use std::cmp::Ordering;

use crate::{Distance, NodeIndex};

/// Frontier entry of the weighted search
#[derive(Copy, Clone, Debug)]
pub(super) struct State {
    pub(super) cost: Distance,
    /// Push sequence number, earlier entries win cost ties
    pub(super) order: u64,
    pub(super) node: NodeIndex,
}

// Implement Ord for State to use in BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost, then by push order (reversed from standard Rust BinaryHeap)
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}
