/// External key of a node, as handed over by the network source (e.g. an OSM id).
pub type NodeKey = u64;

const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Dense index of a node inside one [`RoadGraph`](crate::graph::RoadGraph).
///
/// Indices are only meaningful for the graph that produced them; the component
/// filter re-indexes the nodes it keeps.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub internal: usize,
}

impl NodeId {
    pub fn new(internal: usize) -> Self {
        NodeId { internal }
    }
}

/// A junction of the road network. Coordinates are carried for display only.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RoadNode {
    pub key: NodeKey,
    pub lat: f64,
    pub lon: f64,
}

impl RoadNode {
    /// Great-circle distance in metres.
    pub fn haversine_to(&self, other: &RoadNode) -> f64 {
        let (phi1, phi2) = (self.lat.to_radians(), other.lat.to_radians());
        let d_phi = (other.lat - self.lat).to_radians();
        let d_lambda = (other.lon - self.lon).to_radians();

        let a = (d_phi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_M * a.sqrt().asin()
    }
}

/// Outgoing half of a road segment.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RoadEdge {
    pub target: NodeId,
    /// Physical length in metres; always finite and non-negative.
    pub length: f64,
}
