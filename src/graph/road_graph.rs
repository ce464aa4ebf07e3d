use hashbrown::HashMap;

use crate::{
    Result, TourError,
    graph::{NodeId, NodeKey, RoadEdge, RoadNode},
};

/// In-memory weighted road network.
///
/// # Invariants
/// - `nodes[i]` is the node with [`NodeId`] `i`, and `outgoing[i]` its out-edges.
/// - Every edge length is finite and non-negative.
/// - For undirected graphs each segment is stored once in both endpoints' lists.
/// - For directed graphs `incoming[i]` lists the sources of edges into `i`, so
///   connectivity can be walked while ignoring direction.
#[derive(Debug, Clone)]
pub struct RoadGraph {
    nodes: Vec<RoadNode>,
    outgoing: Vec<Vec<RoadEdge>>,
    incoming: Vec<Vec<NodeId>>,
    index: HashMap<NodeKey, NodeId>,
    directed: bool,
    edge_count: usize,
}

impl RoadGraph {
    pub fn new(directed: bool) -> Self {
        RoadGraph {
            nodes: Vec::new(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
            index: HashMap::new(),
            directed,
            edge_count: 0,
        }
    }

    /// Inserts a node and returns its id. Re-adding a known key returns the
    /// existing id and leaves its coordinates untouched.
    pub fn add_node(&mut self, key: NodeKey, lat: f64, lon: f64) -> NodeId {
        if let Some(&existing) = self.index.get(&key) {
            return existing;
        }
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(RoadNode { key, lat, lon });
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        self.index.insert(key, id);
        id
    }

    /// Adds a road segment between two known nodes.
    ///
    /// Fails with [`TourError::UnknownNode`] if either endpoint is missing and with
    /// [`TourError::InvalidEdge`] if the length is negative, NaN or infinite.
    pub fn add_edge(&mut self, from: NodeKey, to: NodeKey, length: f64) -> Result<()> {
        if !length.is_finite() || length < 0.0 {
            return Err(TourError::InvalidEdge {
                from,
                to,
                weight: length,
            });
        }
        let source = self.id_of(from)?;
        let target = self.id_of(to)?;

        self.outgoing[source.internal].push(RoadEdge { target, length });
        if self.directed {
            self.incoming[target.internal].push(source);
        } else if source != target {
            self.outgoing[target.internal].push(RoadEdge {
                target: source,
                length,
            });
        }
        self.edge_count += 1;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of segments as they were added (an undirected segment counts once).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn node(&self, id: NodeId) -> &RoadNode {
        &self.nodes[id.internal]
    }

    pub fn key(&self, id: NodeId) -> NodeKey {
        self.nodes[id.internal].key
    }

    pub fn id_of(&self, key: NodeKey) -> Result<NodeId> {
        self.index
            .get(&key)
            .copied()
            .ok_or(TourError::UnknownNode(key))
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId::new)
    }

    /// Edges leaving `id`, following the network's direction semantics.
    pub fn neighbors(&self, id: NodeId) -> &[RoadEdge] {
        &self.outgoing[id.internal]
    }

    /// Every node adjacent to `id` when direction is ignored. May repeat nodes.
    pub fn undirected_neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.outgoing[id.internal]
            .iter()
            .map(|edge| edge.target)
            .chain(self.incoming[id.internal].iter().copied())
    }

    /// Builds the subgraph induced by `keep`.
    ///
    /// Kept nodes are re-indexed in the order they appear in `keep`; only edges with
    /// both endpoints kept survive. External keys and coordinates are preserved.
    pub fn induced_subgraph(&self, keep: &[NodeId]) -> RoadGraph {
        let mut sub = RoadGraph::new(self.directed);
        let mut remap: HashMap<NodeId, NodeId> = HashMap::with_capacity(keep.len());
        for &old in keep {
            let node = self.node(old);
            remap.insert(old, sub.add_node(node.key, node.lat, node.lon));
        }

        for &old_source in keep {
            let new_source = remap[&old_source];
            for edge in self.neighbors(old_source) {
                let Some(&new_target) = remap.get(&edge.target) else {
                    continue;
                };
                sub.outgoing[new_source.internal].push(RoadEdge {
                    target: new_target,
                    length: edge.length,
                });
                if self.directed {
                    sub.incoming[new_target.internal].push(new_source);
                    sub.edge_count += 1;
                } else if new_source <= new_target {
                    // undirected segments are mirrored, count each once
                    sub.edge_count += 1;
                }
            }
        }
        sub
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_graph(directed: bool) -> RoadGraph {
        let mut graph = RoadGraph::new(directed);
        for key in 1..=4 {
            graph.add_node(key, 39.0 + key as f64 * 0.01, 32.0);
        }
        graph.add_edge(1, 2, 10.0).unwrap();
        graph.add_edge(2, 3, 20.0).unwrap();
        graph.add_edge(3, 4, 30.0).unwrap();
        graph
    }

    #[test]
    fn test_add_node_is_idempotent_per_key() {
        let mut graph = RoadGraph::new(false);
        let a = graph.add_node(100, 1.0, 2.0);
        let b = graph.add_node(100, 5.0, 6.0);
        assert_eq!(a, b);
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.node(a).lat, 1.0);
    }

    #[test]
    fn test_undirected_edges_are_mirrored() {
        let graph = line_graph(false);
        let two = graph.id_of(2).unwrap();
        let targets: Vec<NodeKey> = graph
            .neighbors(two)
            .iter()
            .map(|e| graph.key(e.target))
            .collect();
        assert_eq!(targets, vec![1, 3]);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_directed_edges_only_leave_source() {
        let graph = line_graph(true);
        let two = graph.id_of(2).unwrap();
        assert_eq!(graph.neighbors(two).len(), 1);
        let around: Vec<NodeKey> = graph.undirected_neighbors(two).map(|n| graph.key(n)).collect();
        assert_eq!(around, vec![3, 1]);
    }

    #[test]
    fn test_rejects_negative_and_non_finite_lengths() {
        let mut graph = line_graph(false);
        assert!(matches!(
            graph.add_edge(1, 3, -1.0),
            Err(TourError::InvalidEdge { from: 1, to: 3, .. })
        ));
        assert!(graph.add_edge(1, 3, f64::NAN).is_err());
        assert!(graph.add_edge(1, 3, f64::INFINITY).is_err());
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_rejects_unknown_endpoint() {
        let mut graph = line_graph(false);
        assert!(matches!(
            graph.add_edge(1, 99, 1.0),
            Err(TourError::UnknownNode(99))
        ));
    }

    #[test]
    fn test_induced_subgraph_keeps_internal_edges_only() {
        let graph = line_graph(false);
        let keep = [graph.id_of(2).unwrap(), graph.id_of(3).unwrap()];
        let sub = graph.induced_subgraph(&keep);

        assert_eq!(sub.len(), 2);
        assert_eq!(sub.edge_count(), 1);
        let two = sub.id_of(2).unwrap();
        assert_eq!(two.internal, 0);
        assert_eq!(sub.neighbors(two).len(), 1);
        assert_eq!(sub.neighbors(two)[0].length, 20.0);
        assert!(sub.id_of(1).is_err());
    }

    #[test]
    fn test_induced_subgraph_directed_counts() {
        let graph = line_graph(true);
        let keep: Vec<NodeId> = graph.node_ids().collect();
        let sub = graph.induced_subgraph(&keep);
        assert_eq!(sub.edge_count(), graph.edge_count());
        assert!(sub.is_directed());
    }
}
