use rand::{SeedableRng, rngs::StdRng, seq::index::sample};
use tracing::info;

use crate::{
    Result, TourError,
    graph::{NodeId, RoadGraph},
};

/// Draws `n` distinct nodes from `graph`, without replacement.
///
/// The generator is seeded explicitly, so the same graph, size and seed always give
/// the same ordered sample. Fails with [`TourError::InsufficientNodes`] rather than
/// returning a truncated sample when `n` exceeds the node count.
pub fn sample_nodes(graph: &RoadGraph, n: usize, seed: u64) -> Result<Vec<NodeId>> {
    if n > graph.len() {
        return Err(TourError::InsufficientNodes {
            requested: n,
            available: graph.len(),
        });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let picked: Vec<NodeId> = sample(&mut rng, graph.len(), n)
        .into_iter()
        .map(NodeId::new)
        .collect();

    info!(size = n, seed, pool = graph.len(), "sampled tour stops");
    Ok(picked)
}
