use crate::entities::nodes::structure::adj::Adj;
use citegraph_api::core::{
    entities::{citation::CitationMeta, GID, VID},
    Direction,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct NodeStore {
    pub global_id: GID,
    pub vid: VID,
    pub meta: CitationMeta,
    pub(crate) adj: Adj,
}

impl NodeStore {
    pub fn new(global_id: GID, vid: VID, meta: CitationMeta) -> Self {
        Self {
            global_id,
            vid,
            meta,
            adj: Adj::Solo,
        }
    }

    pub fn neighbours(&self, dir: Direction) -> impl Iterator<Item = VID> + '_ {
        self.adj.iter(dir)
    }

    pub fn degree(&self, dir: Direction) -> usize {
        self.adj.degree(dir)
    }

    pub fn has_neighbour(&self, v: VID, dir: Direction) -> bool {
        self.adj.contains(v, dir)
    }
}
