//! Adapters between the tour core and the outside world.
//!
//! Loading road networks from JSON, generating seeded synthetic street grids,
//! and exporting the finished tour as a JSON payload for map rendering.

mod network_load;
mod report;
mod synthetic;

pub use network_load::*;
pub use report::*;
