//! Shortest-path distance model used by the tour builder.
//!
//! The builder only depends on the [`DistanceOracle`] capability. [`DijkstraOracle`]
//! answers each query with an independent single-pair search over a [`RoadGraph`]
//! and remembers the answers; [`DistanceMatrix`] serves a precomputed table.
//!
//! [`RoadGraph`]: crate::graph::RoadGraph

mod dijkstra;
mod matrix;
mod oracle;

pub use dijkstra::*;
pub use matrix::*;
pub use oracle::*;
