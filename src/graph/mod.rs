//! Road network model and the preparation steps that run before tour construction.
//!
//! A [`RoadGraph`] is built once from the acquisition source and is read-only afterwards.
//! [`largest_component`] narrows it to the biggest weakly connected piece and
//! [`sample_nodes`] draws the seeded set of stops the tour will visit.

mod components;
mod node;
mod road_graph;
mod sampler;

pub use components::*;
pub use node::*;
pub use road_graph::*;
pub use sampler::*;
