//! Greedy tour construction over a sample of road-network nodes.
//!
//! [`NearestNeighbor`] turns a sample into a closed [`Tour`], asking a
//! [`DistanceOracle`](crate::distance::DistanceOracle) for every candidate step.
//! [`evaluate`] sums the resulting edges, and [`plan_tour`] runs the whole
//! filter → sample → build → evaluate pipeline.

mod closed_tour;
mod evaluator;
mod nearest_neighbor;
mod pipeline;

pub use closed_tour::*;
pub use evaluator::*;
pub use nearest_neighbor::*;
pub use pipeline::*;
