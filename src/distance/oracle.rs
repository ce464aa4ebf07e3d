use crate::{Result, graph::NodeId};

/// Source of shortest-path costs between two nodes.
///
/// Implementations must return the minimum total edge length over all paths
/// from `from` to `to`, `0.0` when both are the same node, and
/// [`TourError::Unreachable`](crate::TourError::Unreachable) when no path exists.
/// Queries take `&mut self` so implementations may fill a cache as they go.
pub trait DistanceOracle {
    fn distance(&mut self, from: NodeId, to: NodeId) -> Result<f64>;
}
