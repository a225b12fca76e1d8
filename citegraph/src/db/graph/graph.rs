//! Defines the `Graph` struct, the mutable directed citation graph.
//!
//! Nodes are addressed by their logical id ([`GID`]). Every node carries a
//! [`CitationMeta`] record. The graph is owned exclusively by its caller, so
//! all mutation goes through `&mut self`.
//!
//! # Examples
//!
//! ```rust
//! use citegraph::prelude::*;
//!
//! let mut graph = Graph::new();
//! let meta = CitationMeta::new(Group::Science, Subgroup::Physics, 0.2);
//! graph.add_node(1u64, meta.clone()).unwrap();
//! graph.add_node(2u64, meta).unwrap();
//! graph.add_edge(&GID::U64(1), &GID::U64(2)).unwrap();
//!
//! assert_eq!(graph.count_nodes(), 2);
//! assert_eq!(graph.count_edges(), 1);
//! assert!(graph.has_edge(&GID::U64(1), &GID::U64(2)));
//! ```

use crate::errors::GraphError;
use citegraph_api::core::{
    entities::{citation::CitationMeta, GID, VID},
    Direction,
};
use citegraph_core::entities::{graph::graph_storage::GraphStorage, nodes::node_store::NodeStore};
use std::fmt::{Debug, Formatter};

#[derive(Default)]
pub struct Graph {
    name: Option<String>,
    storage: GraphStorage,
}

impl Debug for Graph {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("name", &self.name)
            .field("num_nodes", &self.count_nodes())
            .field("num_edges", &self.count_edges())
            .finish()
    }
}

impl Graph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            storage: GraphStorage::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn count_nodes(&self) -> usize {
        self.storage.num_nodes()
    }

    pub fn count_edges(&self) -> usize {
        self.storage.num_edges()
    }

    pub fn is_empty(&self) -> bool {
        self.count_nodes() == 0
    }

    /// Underlying storage, for algorithms that work on physical ids.
    pub fn storage(&self) -> &GraphStorage {
        &self.storage
    }

    pub fn resolve(&self, gid: &GID) -> Option<VID> {
        self.storage.resolve(gid)
    }

    fn resolve_or_err(&self, gid: &GID) -> Result<VID, GraphError> {
        self.storage.validate_gid(gid)?;
        self.resolve(gid).ok_or_else(|| GraphError::node_missing(gid))
    }

    /// Logical id of a physical node.
    pub fn gid(&self, vid: VID) -> Option<&GID> {
        self.storage.node(vid).map(|n| &n.global_id)
    }

    pub fn has_node(&self, gid: &GID) -> bool {
        self.resolve(gid).is_some()
    }

    /// Insert a node with its metadata.
    ///
    /// Fails with [`GraphError::NodeExistsError`] if the id is taken and with
    /// [`GraphError::InvalidNodeId`] if its type differs from the graph's ids.
    pub fn add_node<V: Into<GID>>(
        &mut self,
        id: V,
        meta: CitationMeta,
    ) -> Result<VID, GraphError> {
        Ok(self.storage.push_node(id.into(), meta)?)
    }

    pub fn node(&self, gid: &GID) -> Option<&CitationMeta> {
        let vid = self.resolve(gid)?;
        self.storage.node(vid).map(|n| &n.meta)
    }

    pub fn node_mut(&mut self, gid: &GID) -> Option<&mut CitationMeta> {
        let vid = self.resolve(gid)?;
        self.storage.node_mut(vid).map(|n| &mut n.meta)
    }

    /// Metadata of a node, failing if the node does not exist.
    pub fn meta(&self, gid: &GID) -> Result<&CitationMeta, GraphError> {
        self.node(gid).ok_or_else(|| GraphError::node_missing(gid))
    }

    pub fn meta_mut(&mut self, gid: &GID) -> Result<&mut CitationMeta, GraphError> {
        let vid = self.resolve_or_err(gid)?;
        self.storage
            .node_mut(vid)
            .map(|n| &mut n.meta)
            .ok_or_else(|| GraphError::node_missing(gid))
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &NodeStore> + '_ {
        self.storage.nodes()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &GID> + '_ {
        self.storage.nodes().map(|n| &n.global_id)
    }

    pub fn metas_mut(&mut self) -> impl Iterator<Item = &mut CitationMeta> + '_ {
        self.storage.nodes_mut().map(|n| &mut n.meta)
    }

    /// Edges as `(source, target)` pairs of logical ids.
    pub fn edges(&self) -> impl Iterator<Item = (&GID, &GID)> + '_ {
        self.storage.edges().filter_map(|(src, dst)| {
            let src = self.gid(src)?;
            let dst = self.gid(dst)?;
            Some((src, dst))
        })
    }

    pub fn has_edge(&self, src: &GID, dst: &GID) -> bool {
        match (self.resolve(src), self.resolve(dst)) {
            (Some(src), Some(dst)) => self.storage.has_edge(src, dst),
            _ => false,
        }
    }

    /// Add the directed edge `src -> dst`. Both endpoints must exist.
    ///
    /// Returns `false` if the edge was already present; the graph is not a
    /// multigraph so nothing changes in that case.
    pub fn add_edge(&mut self, src: &GID, dst: &GID) -> Result<bool, GraphError> {
        let src_vid = self.resolve_or_err(src)?;
        let dst_vid = self.resolve_or_err(dst)?;
        Ok(self.storage.add_edge(src_vid, dst_vid)?)
    }

    /// Remove the directed edge `src -> dst`.
    ///
    /// Fails with [`GraphError::EdgeNotFound`] if there is no such edge, so
    /// callers are expected to check with [`Graph::has_edge`] first.
    pub fn remove_edge(&mut self, src: &GID, dst: &GID) -> Result<(), GraphError> {
        let not_found = || GraphError::EdgeNotFound {
            src: src.clone(),
            dst: dst.clone(),
        };
        let (Some(src_vid), Some(dst_vid)) = (self.resolve(src), self.resolve(dst)) else {
            return Err(not_found());
        };
        if self.storage.remove_edge(src_vid, dst_vid)? {
            Ok(())
        } else {
            Err(not_found())
        }
    }

    pub fn degree(&self, gid: &GID, dir: Direction) -> Option<usize> {
        let vid = self.resolve(gid)?;
        self.storage.node(vid).map(|n| n.degree(dir))
    }

    pub fn in_degree(&self, gid: &GID) -> Option<usize> {
        self.degree(gid, Direction::IN)
    }

    pub fn out_degree(&self, gid: &GID) -> Option<usize> {
        self.degree(gid, Direction::OUT)
    }

    pub fn neighbours(&self, gid: &GID, dir: Direction) -> Vec<&GID> {
        self.resolve(gid)
            .and_then(|vid| self.storage.node(vid))
            .map(|n| n.neighbours(dir).filter_map(|v| self.gid(v)).collect())
            .unwrap_or_default()
    }

    pub fn out_neighbours(&self, gid: &GID) -> Vec<&GID> {
        self.neighbours(gid, Direction::OUT)
    }

    pub fn in_neighbours(&self, gid: &GID) -> Vec<&GID> {
        self.neighbours(gid, Direction::IN)
    }

    /// Ids of all nodes with an edge to themselves.
    pub fn self_loop_edges(&self) -> Vec<GID> {
        self.nodes()
            .filter(|n| n.has_neighbour(n.vid, Direction::OUT))
            .map(|n| n.global_id.clone())
            .collect()
    }
}

#[cfg(test)]
mod graph_test {
    use super::*;
    use citegraph_api::core::entities::citation::{Group, Subgroup};
    use pretty_assertions::assert_eq;

    fn meta() -> CitationMeta {
        CitationMeta::new(Group::Comic, Subgroup::Chemistry, 0.3)
    }

    fn graph_with(ids: &[u64]) -> Graph {
        let mut g = Graph::new();
        for id in ids {
            g.add_node(*id, meta()).unwrap();
        }
        g
    }

    #[test]
    fn test_add_and_query() {
        let mut g = graph_with(&[1, 2, 3]);
        assert!(g.add_edge(&GID::U64(1), &GID::U64(2)).unwrap());
        assert!(!g.add_edge(&GID::U64(1), &GID::U64(2)).unwrap());
        g.add_edge(&GID::U64(3), &GID::U64(2)).unwrap();

        assert_eq!(g.count_edges(), 2);
        assert_eq!(g.in_degree(&GID::U64(2)), Some(2));
        assert_eq!(g.out_degree(&GID::U64(2)), Some(0));
        assert_eq!(
            g.in_neighbours(&GID::U64(2)),
            vec![&GID::U64(1), &GID::U64(3)]
        );
        assert_eq!(
            g.edges().collect::<Vec<_>>(),
            vec![(&GID::U64(1), &GID::U64(2)), (&GID::U64(3), &GID::U64(2))]
        );
    }

    #[test]
    fn test_duplicate_node_fails() {
        let mut g = graph_with(&[1]);
        let err = g.add_node(1u64, meta()).unwrap_err();
        assert!(matches!(err, GraphError::NodeExistsError(GID::U64(1))));
    }

    #[test]
    fn test_mixed_id_types_fail() {
        let mut g = graph_with(&[1]);
        let err = g.add_node("one", meta()).unwrap_err();
        assert!(matches!(err, GraphError::InvalidNodeId(_)));
    }

    #[test]
    fn test_edge_to_missing_node_fails() {
        let mut g = graph_with(&[1]);
        let err = g.add_edge(&GID::U64(1), &GID::U64(9)).unwrap_err();
        assert!(matches!(err, GraphError::NodeIdError(9)));
    }

    #[test]
    fn test_remove_missing_edge_fails() {
        let mut g = graph_with(&[1, 2]);
        let err = g.remove_edge(&GID::U64(1), &GID::U64(2)).unwrap_err();
        assert!(matches!(err, GraphError::EdgeNotFound { .. }));

        g.add_edge(&GID::U64(1), &GID::U64(2)).unwrap();
        g.remove_edge(&GID::U64(1), &GID::U64(2)).unwrap();
        assert_eq!(g.count_edges(), 0);
        assert!(!g.has_edge(&GID::U64(1), &GID::U64(2)));
    }

    #[test]
    fn test_self_loop_edges() {
        let mut g = graph_with(&[1, 2]);
        g.add_edge(&GID::U64(2), &GID::U64(2)).unwrap();
        assert_eq!(g.self_loop_edges(), vec![GID::U64(2)]);
    }
}
