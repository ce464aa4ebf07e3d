use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};
use tracing::info;

use crate::{
    Result,
    distance::DijkstraOracle,
    graph::{NodeKey, RoadGraph},
    tour::{PlannedTour, Tour, TourLength},
};

/// How a stop is drawn on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopRole {
    Start,
    End,
    Intermediate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopReport {
    /// Position of the stop in the sample.
    pub sample_index: usize,
    /// Position of the stop in the tour.
    pub tour_position: usize,
    pub key: NodeKey,
    pub lat: f64,
    pub lon: f64,
    pub role: StopRole,
    /// Length of the leg leaving this stop; for the last stop, the way back to the start.
    pub distance_to_next_m: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentReport {
    pub from: NodeKey,
    pub to: NodeKey,
    pub distance_m: f64,
    pub closing: bool,
    /// `[lat, lon]` pairs along the road path of the leg.
    pub path: Vec<[f64; 2]>,
}

/// Everything a map renderer needs to draw a finished tour.
///
/// Stops are listed in sample order, segments in visiting order with the
/// closing segment last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourReport {
    pub nodes: usize,
    /// Sample indices in visiting order.
    pub tour: Vec<usize>,
    pub total_m: f64,
    pub total_km: f64,
    /// Mean `[lat, lon]` of the stops.
    pub center: [f64; 2],
    pub stops: Vec<StopReport>,
    pub segments: Vec<SegmentReport>,
}

impl TourReport {
    pub fn from_plan(plan: &PlannedTour) -> Result<Self> {
        Self::build(&plan.graph, &plan.tour, plan.length)
    }

    /// Resolves coordinates and road paths for every stop and leg of `tour`.
    pub fn build(graph: &RoadGraph, tour: &Tour, length: TourLength) -> Result<Self> {
        let mut oracle = DijkstraOracle::new(graph);
        let segments = tour
            .segments()
            .into_iter()
            .map(|leg| -> Result<SegmentReport> {
                let path = oracle
                    .shortest_path(leg.from, leg.to)?
                    .into_iter()
                    .map(|id| {
                        let node = graph.node(id);
                        [node.lat, node.lon]
                    })
                    .collect();
                Ok(SegmentReport {
                    from: graph.key(leg.from),
                    to: graph.key(leg.to),
                    distance_m: leg.distance,
                    closing: leg.closing,
                    path,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let last_position = tour.len().saturating_sub(1);
        let mut stops: Vec<StopReport> = tour
            .stops()
            .iter()
            .zip(tour.sample_positions())
            .enumerate()
            .map(|(tour_position, (&id, &sample_index))| {
                let node = graph.node(id);
                let role = if tour_position == 0 {
                    StopRole::Start
                } else if tour_position == last_position {
                    StopRole::End
                } else {
                    StopRole::Intermediate
                };
                StopReport {
                    sample_index,
                    tour_position,
                    key: node.key,
                    lat: node.lat,
                    lon: node.lon,
                    role,
                    distance_to_next_m: segments[tour_position].distance_m,
                }
            })
            .collect();
        stops.sort_by_key(|stop| stop.sample_index);

        let center = if stops.is_empty() {
            [0.0, 0.0]
        } else {
            let count = stops.len() as f64;
            [
                stops.iter().map(|s| s.lat).sum::<f64>() / count,
                stops.iter().map(|s| s.lon).sum::<f64>() / count,
            ]
        };

        Ok(TourReport {
            nodes: tour.len(),
            tour: tour.sample_positions().to_vec(),
            total_m: length.metres,
            total_km: length.kilometres(),
            center,
            stops,
            segments,
        })
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        info!(path = %path.display(), "wrote tour report");
        Ok(())
    }
}
