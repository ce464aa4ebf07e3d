use tracing::{debug, info};

use crate::{
    Result,
    distance::DistanceOracle,
    graph::NodeId,
    sets::{
        candidates::TotalF64,
        visited::{UncompressedSet, VisitedSet},
    },
    tour::Tour,
};

/// Greedy nearest-neighbor tour construction.
///
/// Starting from the first stop of the sample, repeatedly move to the closest stop
/// not yet visited, then return to the start. "Closest" is whatever the
/// [`DistanceOracle`] says, i.e. shortest-path cost on the road network.
///
/// The loop issues `n(n-1)/2` distance queries for the forward legs plus one for
/// the closing leg; no precomputation amortises them.
pub struct NearestNeighbor;

impl NearestNeighbor {
    /// Builds a closed tour through every node of `sample`.
    ///
    /// On equal distances the candidate appearing first in `sample` wins, which
    /// makes the result a pure function of the sample order and the oracle.
    ///
    /// Any oracle error, in particular
    /// [`TourError::Unreachable`](crate::TourError::Unreachable), aborts the
    /// construction and is returned unchanged: skipping a stop would break the
    /// permutation guarantee.
    pub fn build<O>(sample: &[NodeId], oracle: &mut O) -> Result<Tour>
    where
        O: DistanceOracle + ?Sized,
    {
        let Some(&start) = sample.first() else {
            return Ok(Tour::from_parts(Vec::new(), Vec::new(), Vec::new(), 0.0));
        };

        let mut visited = UncompressedSet::new(sample.len());
        let mut stops = Vec::with_capacity(sample.len());
        let mut positions = Vec::with_capacity(sample.len());
        let mut forward = Vec::with_capacity(sample.len().saturating_sub(1));

        visited.set(0);
        stops.push(start);
        positions.push(0);
        let mut current = start;

        while visited.count() < sample.len() {
            let mut nearest: Option<(usize, TotalF64)> = None;
            for (position, &candidate) in sample.iter().enumerate() {
                if visited.get(position) {
                    continue;
                }
                let distance = TotalF64(oracle.distance(current, candidate)?);
                // strict comparison keeps the first of equally near candidates
                if nearest.is_none_or(|(_, best)| distance < best) {
                    nearest = Some((position, distance));
                }
            }

            // the loop condition guarantees at least one unvisited candidate
            let Some((position, distance)) = nearest else {
                break;
            };
            let next = sample[position];
            debug!(
                from = current.internal,
                to = next.internal,
                distance = distance.0,
                "nearest neighbor step"
            );

            visited.set(position);
            stops.push(next);
            positions.push(position);
            forward.push(distance.0);
            current = next;
        }

        let closing = oracle.distance(current, start)?;
        info!(
            stops = stops.len(),
            closing, "nearest neighbor tour constructed"
        );

        Ok(Tour::from_parts(stops, positions, forward, closing))
    }
}
