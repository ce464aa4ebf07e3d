use serde::Deserialize;

/// Parameters of one tour run.
///
/// Defaults match the reference setup: twelve sampled stops, seed 42.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TourParams {
    /// Number of nodes drawn from the largest component.
    pub sample_size: usize,
    /// Seed fed to the node sampler.
    pub seed: u64,
}

impl TourParams {
    pub fn new(sample_size: usize, seed: u64) -> Self {
        TourParams { sample_size, seed }
    }
}

impl Default for TourParams {
    fn default() -> Self {
        TourParams {
            sample_size: 12,
            seed: 42,
        }
    }
}
