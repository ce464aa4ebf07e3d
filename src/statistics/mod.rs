//! Per-run counters for the distance model.
//!
//! Tracks how many distance queries the tour builder issued, how many were
//! answered from the cache, and how much shortest-path work the rest cost.

mod stats;
pub use stats::*;
