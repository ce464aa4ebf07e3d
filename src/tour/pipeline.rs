use crate::{
    Result,
    config::TourParams,
    distance::DijkstraOracle,
    graph::{NodeId, RoadGraph, largest_component, sample_nodes},
    statistics::Stats,
    tour::{NearestNeighbor, Tour, TourLength, evaluate},
};

/// Everything one run produces, ready for the renderer.
#[derive(Debug, Clone)]
pub struct PlannedTour {
    /// The largest component the sample was drawn from. Node ids below refer to it.
    pub graph: RoadGraph,
    pub sample: Vec<NodeId>,
    pub tour: Tour,
    pub length: TourLength,
    pub stats: Stats,
}

/// Runs filter → sample → build → evaluate over a freshly acquired network.
///
/// The first error of any stage aborts the run; no partial tour is returned.
pub fn plan_tour(network: &RoadGraph, params: &TourParams) -> Result<PlannedTour> {
    let graph = largest_component(network)?;
    let sample = sample_nodes(&graph, params.sample_size, params.seed)?;

    let (tour, stats) = {
        let mut oracle = DijkstraOracle::new(&graph);
        let tour = NearestNeighbor::build(&sample, &mut oracle)?;
        (tour, *oracle.stats())
    };
    let length = evaluate(&tour)?;
    stats.summary();

    Ok(PlannedTour {
        graph,
        sample,
        tour,
        length,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TourError;

    fn two_islands() -> RoadGraph {
        let mut graph = RoadGraph::new(false);
        for key in 1..=13 {
            graph.add_node(key, 39.9 + key as f64 * 0.001, 32.8);
        }
        for key in 1..10 {
            graph.add_edge(key, key + 1, 100.0).unwrap();
        }
        graph.add_edge(11, 12, 5.0).unwrap();
        graph.add_edge(12, 13, 5.0).unwrap();
        graph
    }

    #[test]
    fn test_plan_uses_largest_component() {
        let planned = plan_tour(&two_islands(), &TourParams::new(3, 42)).unwrap();
        assert_eq!(planned.graph.len(), 10);
        assert_eq!(planned.tour.len(), 3);
        assert!(planned.length.metres > 0.0);
        assert!(planned.stats.get_distance_queries() >= 4);
    }

    #[test]
    fn test_plan_is_reproducible() {
        let network = two_islands();
        let a = plan_tour(&network, &TourParams::new(6, 5)).unwrap();
        let b = plan_tour(&network, &TourParams::new(6, 5)).unwrap();
        assert_eq!(a.sample, b.sample);
        assert_eq!(a.tour, b.tour);
        assert_eq!(a.length, b.length);
    }

    #[test]
    fn test_plan_rejects_sample_larger_than_component() {
        let result = plan_tour(&two_islands(), &TourParams::new(11, 42));
        assert!(matches!(
            result,
            Err(TourError::InsufficientNodes {
                requested: 11,
                available: 10
            })
        ));
    }

    #[test]
    fn test_plan_rejects_empty_network() {
        let result = plan_tour(&RoadGraph::new(true), &TourParams::default());
        assert!(matches!(result, Err(TourError::EmptyGraph)));
    }
}
