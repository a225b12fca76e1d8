//! Node-link JSON snapshots.
//!
//! The document layout is the one used by networkx's `node_link_data`:
//!
//! ```json
//! {
//!   "directed": true,
//!   "multigraph": false,
//!   "graph": {"name": "organic"},
//!   "nodes": [{"id": 1, "group": "science", "subgroup": "maths", ...}],
//!   "links": [{"source": 2, "target": 1}]
//! }
//! ```
//!
//! Node attributes are flattened into the node object.

use crate::{db::graph::graph::Graph, errors::GraphError};
use citegraph_api::core::entities::{citation::CitationMeta, GID};
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};
use tracing::{info, warn};

/// Default node limit above which [`SnapshotWriter`] skips a graph.
pub const DEFAULT_MAX_SNAPSHOT_NODES: usize = 1000;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeLinkGraphAttrs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeLinkNode {
    pub id: GID,
    #[serde(flatten)]
    pub meta: CitationMeta,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeLinkEdge {
    pub source: GID,
    pub target: GID,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeLinkData {
    pub directed: bool,
    pub multigraph: bool,
    #[serde(default)]
    pub graph: NodeLinkGraphAttrs,
    pub nodes: Vec<NodeLinkNode>,
    pub links: Vec<NodeLinkEdge>,
}

impl NodeLinkData {
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            directed: true,
            multigraph: false,
            graph: NodeLinkGraphAttrs {
                name: graph.name().map(str::to_owned),
            },
            nodes: graph
                .nodes()
                .map(|n| NodeLinkNode {
                    id: n.global_id.clone(),
                    meta: n.meta.clone(),
                })
                .collect(),
            links: graph
                .edges()
                .map(|(src, dst)| NodeLinkEdge {
                    source: src.clone(),
                    target: dst.clone(),
                })
                .collect(),
        }
    }

    /// Rebuild a graph from the document.
    ///
    /// Links must refer to listed nodes; a repeated link is kept once.
    pub fn into_graph(self) -> Result<Graph, GraphError> {
        let mut graph = match self.graph.name {
            Some(name) => Graph::with_name(name),
            None => Graph::new(),
        };
        for node in self.nodes {
            graph.add_node(node.id, node.meta)?;
        }
        for link in &self.links {
            graph.add_edge(&link.source, &link.target)?;
        }
        Ok(graph)
    }
}

/// Writes node-link snapshots of graphs that are small enough to inspect.
#[derive(Copy, Clone, Debug)]
pub struct SnapshotWriter {
    max_nodes: usize,
}

impl Default for SnapshotWriter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SNAPSHOT_NODES)
    }
}

impl SnapshotWriter {
    pub fn new(max_nodes: usize) -> Self {
        Self { max_nodes }
    }

    pub fn max_nodes(&self) -> usize {
        self.max_nodes
    }

    /// Write `graph` to `path` unless it has more than `max_nodes` nodes.
    ///
    /// Returns whether a file was written.
    pub fn write<P: AsRef<Path>>(&self, graph: &Graph, path: P) -> Result<bool, GraphError> {
        let path = path.as_ref();
        if graph.count_nodes() > self.max_nodes {
            warn!(
                path = %path.display(),
                nodes = graph.count_nodes(),
                max_nodes = self.max_nodes,
                "graph too large, skipping snapshot"
            );
            return Ok(false);
        }
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut writer, &NodeLinkData::from_graph(graph))?;
        writer.flush()?;
        info!(path = %path.display(), nodes = graph.count_nodes(), "wrote snapshot");
        Ok(true)
    }
}

/// Load a graph from a node-link JSON file.
pub fn read_node_link<P: AsRef<Path>>(path: P) -> Result<Graph, GraphError> {
    let reader = BufReader::new(File::open(path)?);
    let data: NodeLinkData = serde_json::from_reader(reader)?;
    data.into_graph()
}
