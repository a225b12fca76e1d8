use crate::entities::{
    graph::logical_to_physical::{InvalidNodeId, Mapping},
    nodes::node_store::NodeStore,
};
use citegraph_api::core::{
    entities::{citation::CitationMeta, GidType, GID, VID},
    Direction,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Node already exists with ID {0}")]
    NodeExists(GID),
    #[error("No node with physical id {0:?}")]
    MissingNode(VID),
    #[error(transparent)]
    InvalidNodeId(#[from] InvalidNodeId),
}

/// Node and edge storage for a single directed graph.
///
/// Physical ids are handed out densely in insertion order and never move.
#[derive(Debug, Default)]
pub struct GraphStorage {
    logical_to_physical: Mapping,
    nodes: Vec<NodeStore>,
    num_edges: usize,
}

impl GraphStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Id type fixed by the first node, `None` while the graph is empty.
    pub fn id_type(&self) -> Option<GidType> {
        self.logical_to_physical.dtype()
    }

    pub fn resolve(&self, gid: &GID) -> Option<VID> {
        self.logical_to_physical.get(gid)
    }

    pub fn validate_gid(&self, gid: &GID) -> Result<(), InvalidNodeId> {
        self.logical_to_physical.validate(gid)
    }

    pub fn node(&self, vid: VID) -> Option<&NodeStore> {
        self.nodes.get(vid.index())
    }

    pub fn node_mut(&mut self, vid: VID) -> Option<&mut NodeStore> {
        self.nodes.get_mut(vid.index())
    }

    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &NodeStore> + '_ {
        self.nodes.iter()
    }

    pub fn nodes_mut(&mut self) -> impl ExactSizeIterator<Item = &mut NodeStore> + '_ {
        self.nodes.iter_mut()
    }

    /// All edges as `(src, dst)` pairs, ordered by source then destination.
    pub fn edges(&self) -> impl Iterator<Item = (VID, VID)> + '_ {
        self.nodes
            .iter()
            .flat_map(|n| n.neighbours(Direction::OUT).map(move |dst| (n.vid, dst)))
    }

    pub fn push_node(&mut self, gid: GID, meta: CitationMeta) -> Result<VID, StorageError> {
        let vid = VID(self.nodes.len());
        if self.logical_to_physical.set(&gid, vid)?.is_some() {
            return Err(StorageError::NodeExists(gid));
        }
        self.nodes.push(NodeStore::new(gid, vid, meta));
        Ok(vid)
    }

    fn check_node(&self, vid: VID) -> Result<(), StorageError> {
        if vid.index() < self.nodes.len() {
            Ok(())
        } else {
            Err(StorageError::MissingNode(vid))
        }
    }

    pub fn has_edge(&self, src: VID, dst: VID) -> bool {
        self.node(src).is_some_and(|n| n.has_neighbour(dst, Direction::OUT))
    }

    /// Add `src -> dst`. Returns `false` if the edge was already present.
    pub fn add_edge(&mut self, src: VID, dst: VID) -> Result<bool, StorageError> {
        self.check_node(src)?;
        self.check_node(dst)?;
        let added = self.nodes[src.index()].adj.add_edge_out(dst);
        if added {
            self.nodes[dst.index()].adj.add_edge_into(src);
            self.num_edges += 1;
        }
        Ok(added)
    }

    /// Remove `src -> dst`. Returns `false` if there was no such edge.
    pub fn remove_edge(&mut self, src: VID, dst: VID) -> Result<bool, StorageError> {
        self.check_node(src)?;
        self.check_node(dst)?;
        let removed = self.nodes[src.index()].adj.remove_edge_out(dst);
        if removed {
            self.nodes[dst.index()].adj.remove_edge_into(src);
            self.num_edges -= 1;
        }
        Ok(removed)
    }
}
