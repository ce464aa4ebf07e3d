//! Support structures for shortest-path search and tour construction.
//!
//! # Submodules
//!
//! - [`candidates`]: totally ordered distances and frontier entries for Dijkstra's priority queue
//! - [`visited`]: bitmap-based tracking of settled nodes and visited tour stops

pub mod candidates;
pub mod visited;
