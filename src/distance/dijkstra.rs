use std::{cmp::Reverse, collections::BinaryHeap};

use hashbrown::HashMap;
use tracing::trace;

use crate::{
    Result, TourError,
    distance::DistanceOracle,
    graph::{NodeId, RoadGraph},
    sets::{
        candidates::{FrontierEntry, TotalF64},
        visited::{UncompressedSet, VisitedSet},
    },
    statistics::Stats,
};

/// Result of one completed single-pair search.
struct SearchOutcome {
    distance: f64,
    predecessors: Vec<Option<NodeId>>,
}

/// Distance oracle running Dijkstra's algorithm on demand.
///
/// Every uncached query is a fresh single-pair search that stops as soon as the
/// target is settled; no all-pairs table is built. Answers are memoised per
/// ordered pair (and mirrored when the graph is undirected) for the lifetime of
/// the oracle.
///
/// # Panics
/// Queries panic if given a [`NodeId`] that does not belong to the wrapped graph.
pub struct DijkstraOracle<'g> {
    graph: &'g RoadGraph,
    cache: HashMap<(NodeId, NodeId), f64>,
    stats: Stats,
}

impl<'g> DijkstraOracle<'g> {
    pub fn new(graph: &'g RoadGraph) -> Self {
        DijkstraOracle {
            graph,
            cache: HashMap::new(),
            stats: Stats::new(),
        }
    }

    pub fn graph(&self) -> &'g RoadGraph {
        self.graph
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Number of ordered pairs currently memoised.
    pub fn cached_pairs(&self) -> usize {
        self.cache.len()
    }

    /// Returns the node sequence of a cheapest path from `from` to `to`, both ends included.
    pub fn shortest_path(&mut self, from: NodeId, to: NodeId) -> Result<Vec<NodeId>> {
        if from == to {
            return Ok(vec![from]);
        }

        let outcome = self.search(from, to).ok_or_else(|| self.unreachable(from, to))?;
        self.remember(from, to, outcome.distance);

        let mut path = vec![to];
        let mut current = to;
        while let Some(previous) = outcome.predecessors[current.internal] {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        Ok(path)
    }

    fn unreachable(&self, from: NodeId, to: NodeId) -> TourError {
        TourError::Unreachable {
            from: self.graph.key(from),
            to: self.graph.key(to),
        }
    }

    fn remember(&mut self, from: NodeId, to: NodeId, distance: f64) {
        self.cache.insert((from, to), distance);
        if !self.graph.is_directed() {
            self.cache.insert((to, from), distance);
        }
    }

    /// Best-first expansion from `from` until `to` is settled or the frontier runs dry.
    fn search(&mut self, from: NodeId, to: NodeId) -> Option<SearchOutcome> {
        let size = self.graph.len();
        let mut best = vec![TotalF64::INFINITY; size];
        let mut predecessors: Vec<Option<NodeId>> = vec![None; size];
        let mut settled = UncompressedSet::new(size);
        let mut frontier = BinaryHeap::new();

        best[from.internal] = TotalF64::ZERO;
        frontier.push(Reverse(FrontierEntry::new(0.0, from)));

        let mut found = None;
        while let Some(Reverse(FrontierEntry { distance, node })) = frontier.pop() {
            if settled.get(node.internal) {
                continue;
            }
            settled.set(node.internal);

            if node == to {
                found = Some(distance.0);
                break;
            }

            for edge in self.graph.neighbors(node) {
                let candidate = distance + edge.length;
                if candidate < best[edge.target.internal] {
                    best[edge.target.internal] = candidate;
                    predecessors[edge.target.internal] = Some(node);
                    frontier.push(Reverse(FrontierEntry {
                        distance: candidate,
                        node: edge.target,
                    }));
                }
            }
        }

        self.stats.bump_search(settled.count());
        trace!(
            from = self.graph.key(from),
            to = self.graph.key(to),
            settled = settled.count(),
            "dijkstra search finished"
        );

        found.map(|distance| SearchOutcome {
            distance,
            predecessors,
        })
    }
}

impl DistanceOracle for DijkstraOracle<'_> {
    fn distance(&mut self, from: NodeId, to: NodeId) -> Result<f64> {
        self.stats.bump_distance_queries();
        if from == to {
            return Ok(0.0);
        }
        if let Some(&known) = self.cache.get(&(from, to)) {
            self.stats.bump_cache_hits();
            return Ok(known);
        }

        let outcome = self.search(from, to).ok_or_else(|| self.unreachable(from, to))?;
        self.remember(from, to, outcome.distance);
        Ok(outcome.distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    // A small road network:
    //
    //   1 --4-- 2 --1-- 3
    //   |               |
    //   1               1
    //   |               |
    //   4 -----1------- 5        6 (isolated)
    //
    // Cheapest 1 -> 3 goes 1-4-5-3 with cost 3, not 1-2-3 with cost 5.
    fn setup_simple_graph(directed: bool) -> RoadGraph {
        let mut graph = RoadGraph::new(directed);
        for key in 1..=6 {
            graph.add_node(key, 0.0, 0.0);
        }
        graph.add_edge(1, 2, 4.0).unwrap();
        graph.add_edge(2, 3, 1.0).unwrap();
        graph.add_edge(1, 4, 1.0).unwrap();
        graph.add_edge(4, 5, 1.0).unwrap();
        graph.add_edge(5, 3, 1.0).unwrap();
        graph
    }

    fn id(graph: &RoadGraph, key: u64) -> NodeId {
        graph.id_of(key).unwrap()
    }

    #[test]
    fn test_prefers_cheaper_detour() {
        let graph = setup_simple_graph(false);
        let mut oracle = DijkstraOracle::new(&graph);
        assert_eq!(oracle.distance(id(&graph, 1), id(&graph, 3)).unwrap(), 3.0);
        assert_eq!(oracle.distance(id(&graph, 2), id(&graph, 4)).unwrap(), 3.0);
    }

    #[test]
    fn test_self_distance_is_zero_without_search() {
        let graph = setup_simple_graph(false);
        let mut oracle = DijkstraOracle::new(&graph);
        assert_eq!(oracle.distance(id(&graph, 6), id(&graph, 6)).unwrap(), 0.0);
        assert_eq!(oracle.stats().get_searches(), 0);
        assert_eq!(oracle.stats().get_distance_queries(), 1);
    }

    #[test]
    fn test_unreachable_reports_external_keys() {
        let graph = setup_simple_graph(false);
        let mut oracle = DijkstraOracle::new(&graph);
        let err = oracle.distance(id(&graph, 1), id(&graph, 6)).unwrap_err();
        assert!(matches!(err, TourError::Unreachable { from: 1, to: 6 }));
        assert_eq!(oracle.cached_pairs(), 0);
    }

    #[test]
    fn test_directed_edges_are_respected() {
        let graph = setup_simple_graph(true);
        let mut oracle = DijkstraOracle::new(&graph);
        assert_eq!(oracle.distance(id(&graph, 1), id(&graph, 3)).unwrap(), 3.0);
        assert!(matches!(
            oracle.distance(id(&graph, 3), id(&graph, 1)),
            Err(TourError::Unreachable { from: 3, to: 1 })
        ));
    }

    #[test]
    fn test_cache_serves_repeats_and_mirrors_undirected() {
        let graph = setup_simple_graph(false);
        let mut oracle = DijkstraOracle::new(&graph);
        let (a, b) = (id(&graph, 1), id(&graph, 3));

        oracle.distance(a, b).unwrap();
        oracle.distance(a, b).unwrap();
        oracle.distance(b, a).unwrap();

        assert_eq!(oracle.stats().get_searches(), 1);
        assert_eq!(oracle.stats().get_cache_hits(), 2);
        assert_eq!(oracle.stats().get_distance_queries(), 3);
        assert_eq!(oracle.cached_pairs(), 2);
    }

    #[test]
    fn test_cache_is_not_mirrored_when_directed() {
        let graph = setup_simple_graph(true);
        let mut oracle = DijkstraOracle::new(&graph);
        oracle.distance(id(&graph, 1), id(&graph, 5)).unwrap();
        assert_eq!(oracle.cached_pairs(), 1);
    }

    #[test]
    fn test_shortest_path_follows_detour() {
        let graph = setup_simple_graph(false);
        let mut oracle = DijkstraOracle::new(&graph);
        let path = oracle
            .shortest_path(id(&graph, 1), id(&graph, 3))
            .unwrap()
            .into_iter()
            .map(|n| graph.key(n))
            .collect::<Vec<_>>();
        assert_eq!(path, vec![1, 4, 5, 3]);

        let trivial = oracle.shortest_path(id(&graph, 2), id(&graph, 2)).unwrap();
        assert_eq!(trivial, vec![id(&graph, 2)]);
    }

    #[test]
    fn test_shortest_path_unreachable() {
        let graph = setup_simple_graph(false);
        let mut oracle = DijkstraOracle::new(&graph);
        assert!(oracle.shortest_path(id(&graph, 6), id(&graph, 2)).is_err());
    }

    #[test]
    fn test_parallel_edges_use_cheapest() {
        let mut graph = RoadGraph::new(false);
        graph.add_node(1, 0.0, 0.0);
        graph.add_node(2, 0.0, 0.0);
        graph.add_edge(1, 2, 9.0).unwrap();
        graph.add_edge(1, 2, 2.0).unwrap();
        let mut oracle = DijkstraOracle::new(&graph);
        assert_eq!(oracle.distance(id(&graph, 1), id(&graph, 2)).unwrap(), 2.0);
    }

    /// Floyd-Warshall over the same graph as a brute-force reference.
    fn all_pairs(graph: &RoadGraph) -> Vec<Vec<f64>> {
        let n = graph.len();
        let mut d = vec![vec![f64::INFINITY; n]; n];
        for node in graph.node_ids() {
            d[node.internal][node.internal] = 0.0;
            for edge in graph.neighbors(node) {
                let slot = &mut d[node.internal][edge.target.internal];
                *slot = slot.min(edge.length);
            }
        }
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    if d[i][k] + d[k][j] < d[i][j] {
                        d[i][j] = d[i][k] + d[k][j];
                    }
                }
            }
        }
        d
    }

    #[test]
    fn test_randomized_against_floyd_warshall() {
        let mut rng = StdRng::seed_from_u64(42);
        for round in 0..10 {
            let size = rng.random_range(2..25u64);
            let mut graph = RoadGraph::new(round % 2 == 0);
            for key in 0..size {
                graph.add_node(key, 0.0, 0.0);
            }
            for _ in 0..size * 3 {
                let a = rng.random_range(0..size);
                let b = rng.random_range(0..size);
                let length = rng.random_range(0..50) as f64;
                graph.add_edge(a, b, length).unwrap();
            }

            let reference = all_pairs(&graph);
            let mut oracle = DijkstraOracle::new(&graph);
            for a in graph.node_ids() {
                for b in graph.node_ids() {
                    let expected = reference[a.internal][b.internal];
                    match oracle.distance(a, b) {
                        Ok(found) => assert_eq!(found, expected),
                        Err(TourError::Unreachable { .. }) => assert!(expected.is_infinite()),
                        Err(other) => panic!("unexpected error {other}"),
                    }
                }
            }
        }
    }
}
