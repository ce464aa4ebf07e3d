use thiserror::Error as ThisError;

use crate::graph::NodeKey;

/// Every failure the sample → build → evaluate pipeline can surface.
///
/// Lower components never swallow each other's errors: whatever the graph model,
/// component filter or sampler reports reaches the caller unchanged.
#[derive(Debug, ThisError)]
pub enum TourError {
    #[error("the road network has no nodes")]
    EmptyGraph,

    #[error("requested a sample of {requested} nodes but only {available} are available")]
    InsufficientNodes { requested: usize, available: usize },

    #[error("no path from node {from} to node {to}")]
    Unreachable { from: NodeKey, to: NodeKey },

    #[error("node {0} is not part of the road network")]
    UnknownNode(NodeKey),

    #[error("edge {from} -> {to} has invalid length {weight}")]
    InvalidEdge {
        from: NodeKey,
        to: NodeKey,
        weight: f64,
    },

    #[error("invalid road network: {0}")]
    InvalidNetwork(String),

    #[error("malformed tour: {nodes} nodes but {edges} edge distances")]
    MalformedTour { nodes: usize, edges: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TourError>;

impl TourError {
    pub fn invalid_network(message: impl Into<String>) -> Self {
        Self::InvalidNetwork(message.into())
    }
}
