use hashbrown::HashMap;
use tracing::debug;

use crate::{
    Result, TourError,
    distance::{DijkstraOracle, DistanceOracle},
    graph::{NodeId, NodeKey},
};

/// Precomputed distance table over a fixed set of nodes.
///
/// Infinite entries mark unreachable pairs and are reported as
/// [`TourError::Unreachable`] on lookup.
///
/// # Panics
/// Lookups panic for nodes the table was not built over.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    keys: Vec<NodeKey>,
    position: HashMap<NodeId, usize>,
    rows: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    /// Builds a table from explicit rows. Node `i` of the table is `NodeId { internal: i }`
    /// and reports key `i` in errors.
    ///
    /// Rows must form a square matrix of non-negative, non-NaN entries with a zero diagonal.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(TourError::invalid_network(format!(
                    "distance row {i} has {} entries, expected {size}",
                    row.len()
                )));
            }
            if let Some(bad) = row.iter().find(|d| d.is_nan() || **d < 0.0) {
                return Err(TourError::invalid_network(format!(
                    "distance row {i} holds invalid entry {bad}"
                )));
            }
            if row[i] != 0.0 {
                return Err(TourError::invalid_network(format!(
                    "distance from node {i} to itself is {}",
                    row[i]
                )));
            }
        }

        Ok(DistanceMatrix {
            keys: (0..size as NodeKey).collect(),
            position: (0..size).map(|i| (NodeId::new(i), i)).collect(),
            rows,
        })
    }

    /// Fills a table for `nodes` by querying `oracle` for every ordered pair.
    /// The first unreachable pair aborts the computation.
    pub fn precompute(oracle: &mut DijkstraOracle<'_>, nodes: &[NodeId]) -> Result<Self> {
        let mut rows = vec![vec![0.0; nodes.len()]; nodes.len()];
        for (i, &from) in nodes.iter().enumerate() {
            for (j, &to) in nodes.iter().enumerate() {
                rows[i][j] = oracle.distance(from, to)?;
            }
        }
        debug!(nodes = nodes.len(), "precomputed distance matrix");

        let graph = oracle.graph();
        Ok(DistanceMatrix {
            keys: nodes.iter().map(|&n| graph.key(n)).collect(),
            position: nodes.iter().enumerate().map(|(i, &n)| (n, i)).collect(),
            rows,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl DistanceOracle for DistanceMatrix {
    fn distance(&mut self, from: NodeId, to: NodeId) -> Result<f64> {
        let (i, j) = (self.position[&from], self.position[&to]);
        let distance = self.rows[i][j];
        if distance.is_finite() {
            Ok(distance)
        } else {
            Err(TourError::Unreachable {
                from: self.keys[i],
                to: self.keys[j],
            })
        }
    }
}
