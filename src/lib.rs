pub mod config;
pub mod distance;
pub mod error;
pub mod fs;
pub mod graph;
pub mod sets;
pub mod statistics;
pub mod tour;

pub use error::{Result, TourError};
