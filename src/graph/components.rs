use std::collections::VecDeque;

use tracing::info;

use crate::{
    Result, TourError,
    graph::{NodeId, RoadGraph},
    sets::visited::{UncompressedSet, VisitedSet},
};

/// Partitions the graph into weakly connected components.
///
/// Components are discovered by a breadth-first walk started from each not yet
/// visited node in id order, so both the component order and the node order
/// inside a component are deterministic. Edge direction is ignored.
pub fn weak_components(graph: &RoadGraph) -> Vec<Vec<NodeId>> {
    let mut visited = UncompressedSet::new(graph.len());
    let mut components = Vec::new();
    let mut queue = VecDeque::new();

    for root in graph.node_ids() {
        if visited.get(root.internal) {
            continue;
        }
        visited.set(root.internal);
        queue.push_back(root);

        let mut members = Vec::new();
        while let Some(current) = queue.pop_front() {
            members.push(current);
            for next in graph.undirected_neighbors(current) {
                if !visited.get(next.internal) {
                    visited.set(next.internal);
                    queue.push_back(next);
                }
            }
        }
        components.push(members);
    }

    components
}

/// Returns the subgraph induced by the largest weakly connected component.
///
/// Ties go to the component discovered first. Kept nodes retain their relative
/// order from the input graph.
///
/// Fails with [`TourError::EmptyGraph`] when the graph has no nodes.
pub fn largest_component(graph: &RoadGraph) -> Result<RoadGraph> {
    if graph.is_empty() {
        return Err(TourError::EmptyGraph);
    }

    let components = weak_components(graph);
    let mut largest = &components[0];
    for component in &components[1..] {
        if component.len() > largest.len() {
            largest = component;
        }
    }

    let mut keep = largest.clone();
    keep.sort_unstable();

    info!(
        components = components.len(),
        kept = keep.len(),
        discarded = graph.len() - keep.len(),
        "filtered road network to its largest component"
    );

    Ok(graph.induced_subgraph(&keep))
}
