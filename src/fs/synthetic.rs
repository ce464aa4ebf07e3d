use rand::{SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Normal};
use tracing::info;

use crate::{
    Result, TourError,
    graph::{NodeKey, RoadGraph},
};

// Kizilay square, Ankara
const ORIGIN_LAT: f64 = 39.9208;
const ORIGIN_LON: f64 = 32.8541;
// about 110 m between neighbouring junctions
const BLOCK_DEG: f64 = 0.001;
const JITTER_DEG: f64 = 0.0002;
// roads are never perfectly straight
const DETOUR_SPREAD: f64 = 0.08;

impl RoadGraph {
    /// Generates a seeded, undirected street grid of `rows × cols` junctions.
    ///
    /// Junction coordinates are jittered around a regular lattice and each segment is
    /// as long as the great-circle distance between its ends stretched by a random
    /// detour factor of at least one. Node keys run from `1` in row-major order.
    /// The same arguments always give the same network.
    pub fn synthetic_grid(rows: usize, cols: usize, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let jitter = Normal::new(0.0, JITTER_DEG)
            .map_err(|e| TourError::invalid_network(format!("coordinate jitter: {e}")))?;
        let detour = Normal::new(0.0, DETOUR_SPREAD)
            .map_err(|e| TourError::invalid_network(format!("detour spread: {e}")))?;

        let key = |row: usize, col: usize| (row * cols + col + 1) as NodeKey;

        let mut graph = RoadGraph::new(false);
        for row in 0..rows {
            for col in 0..cols {
                let lat = ORIGIN_LAT + row as f64 * BLOCK_DEG + jitter.sample(&mut rng);
                let lon = ORIGIN_LON + col as f64 * BLOCK_DEG + jitter.sample(&mut rng);
                graph.add_node(key(row, col), lat, lon);
            }
        }

        for row in 0..rows {
            for col in 0..cols {
                let here = key(row, col);
                let mut neighbours = Vec::with_capacity(2);
                if col + 1 < cols {
                    neighbours.push(key(row, col + 1));
                }
                if row + 1 < rows {
                    neighbours.push(key(row + 1, col));
                }
                for there in neighbours {
                    let a = *graph.node(graph.id_of(here)?);
                    let b = *graph.node(graph.id_of(there)?);
                    let stretch = 1.0 + f64::abs(detour.sample(&mut rng));
                    graph.add_edge(here, there, a.haversine_to(&b) * stretch)?;
                }
            }
        }

        info!(
            rows,
            cols,
            seed,
            nodes = graph.len(),
            edges = graph.edge_count(),
            "generated synthetic street grid"
        );
        Ok(graph)
    }
}
