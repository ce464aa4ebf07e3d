//! Frontier bookkeeping for shortest-path search.
//!
//! [`TotalF64`] gives path costs a total order so they can live in a
//! [`BinaryHeap`](std::collections::BinaryHeap), and [`FrontierEntry`] pairs a
//! tentative cost with the node it belongs to.

mod frontier_entry;
mod ordered_float;

pub use frontier_entry::*;
pub use ordered_float::*;
