use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};
use tracing::info;

use crate::{
    Result, TourError,
    graph::{NodeKey, RoadGraph},
};

/// On-disk shape of a road network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkFile {
    #[serde(default)]
    pub directed: bool,
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeKey,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: NodeKey,
    pub to: NodeKey,
    pub length: f64,
}

impl NetworkFile {
    /// Validates the records and builds the graph. Duplicate node ids are rejected.
    pub fn into_graph(self) -> Result<RoadGraph> {
        let mut graph = RoadGraph::new(self.directed);
        for node in &self.nodes {
            let before = graph.len();
            graph.add_node(node.id, node.lat, node.lon);
            if graph.len() == before {
                return Err(TourError::invalid_network(format!(
                    "node {} is declared twice",
                    node.id
                )));
            }
        }
        for edge in &self.edges {
            graph.add_edge(edge.from, edge.to, edge.length)?;
        }
        Ok(graph)
    }

    /// Snapshot of an existing graph, e.g. to persist a synthetic network.
    pub fn from_graph(graph: &RoadGraph) -> Self {
        let nodes = graph
            .node_ids()
            .map(|id| {
                let node = graph.node(id);
                NodeRecord {
                    id: node.key,
                    lat: node.lat,
                    lon: node.lon,
                }
            })
            .collect();

        let mut edges = Vec::with_capacity(graph.edge_count());
        for source in graph.node_ids() {
            for edge in graph.neighbors(source) {
                // undirected segments are mirrored in memory; keep one copy
                if graph.is_directed() || source <= edge.target {
                    edges.push(EdgeRecord {
                        from: graph.key(source),
                        to: graph.key(edge.target),
                        length: edge.length,
                    });
                }
            }
        }

        NetworkFile {
            directed: graph.is_directed(),
            nodes,
            edges,
        }
    }
}

impl RoadGraph {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: NetworkFile = serde_json::from_str(json)?;
        file.into_graph()
    }

    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let file: NetworkFile = serde_json::from_reader(reader)?;
        let graph = file.into_graph()?;

        info!(
            path = %path.display(),
            nodes = graph.len(),
            edges = graph.edge_count(),
            directed = graph.is_directed(),
            "loaded road network"
        );
        Ok(graph)
    }

    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut writer, &NetworkFile::from_graph(self))?;
        writer.flush()?;
        Ok(())
    }
}
