use std::cmp::Ordering;

use crate::{graph::NodeId, sets::candidates::TotalF64};

/// A node waiting in the Dijkstra frontier together with its tentative path cost.
///
/// Entries order by cost first and node id second, so popping the minimum from a
/// `BinaryHeap<Reverse<FrontierEntry>>` is deterministic even when costs tie.
#[derive(PartialEq, Eq, Copy, Clone, Hash, Debug)]
pub struct FrontierEntry {
    /// Cost of the best path found so far from the search source.
    pub distance: TotalF64,

    pub node: NodeId,
}

impl FrontierEntry {
    pub fn new(distance: f64, node: NodeId) -> Self {
        FrontierEntry {
            distance: distance.into(),
            node,
        }
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.node.cmp(&other.node))
    }
}
