use tracing::info;

use crate::{Result, TourError, tour::Tour};

/// Total length of a closed tour, in metres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TourLength {
    pub metres: f64,
}

impl TourLength {
    pub fn kilometres(&self) -> f64 {
        self.metres / 1000.0
    }
}

/// Sums the `n - 1` forward legs and the closing leg of an `n`-stop tour.
///
/// A tour whose forward distances do not number exactly `n - 1` was not produced by
/// [`NearestNeighbor`](crate::tour::NearestNeighbor) and yields [`TourError::MalformedTour`].
pub fn evaluate(tour: &Tour) -> Result<TourLength> {
    let length = total_length(tour.len(), tour.forward_distances(), tour.closing_distance())?;
    info!(
        stops = tour.len(),
        metres = length.metres,
        "tour length is {:.2} km",
        length.kilometres()
    );
    Ok(length)
}

/// Raw form of [`evaluate`] for callers holding the legs separately.
pub fn total_length(stops: usize, forward: &[f64], closing: f64) -> Result<TourLength> {
    if forward.len() != stops.saturating_sub(1) {
        return Err(TourError::MalformedTour {
            nodes: stops,
            edges: forward.len() + 1,
        });
    }
    if stops == 0 {
        return Ok(TourLength { metres: 0.0 });
    }

    let metres = forward.iter().sum::<f64>() + closing;
    Ok(TourLength { metres })
}
