use citegraph_api::core::{entities::VID, Direction};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Sorted, duplicate-free set of neighbours.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Default, Clone)]
pub struct AdjSet(Vec<VID>);

impl AdjSet {
    pub fn new(v: VID) -> Self {
        AdjSet(vec![v])
    }

    /// Returns `false` if `v` was already present.
    pub fn push(&mut self, v: VID) -> bool {
        match self.0.binary_search(&v) {
            Ok(_) => false,
            Err(pos) => {
                self.0.insert(pos, v);
                true
            }
        }
    }

    /// Returns `false` if `v` was not present.
    pub fn remove(&mut self, v: VID) -> bool {
        match self.0.binary_search(&v) {
            Ok(pos) => {
                self.0.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    pub fn contains(&self, v: VID) -> bool {
        self.0.binary_search(&v).is_ok()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = VID> + '_ {
        self.0.iter().copied()
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Default, Clone)]
pub enum Adj {
    #[default]
    Solo,
    List {
        out: AdjSet,
        into: AdjSet,
    },
}

impl Adj {
    pub(crate) fn new_out(v: VID) -> Self {
        Adj::List {
            out: AdjSet::new(v),
            into: AdjSet::default(),
        }
    }

    pub(crate) fn new_into(v: VID) -> Self {
        Adj::List {
            into: AdjSet::new(v),
            out: AdjSet::default(),
        }
    }

    pub(crate) fn add_edge_into(&mut self, v: VID) -> bool {
        match self {
            Adj::Solo => {
                *self = Self::new_into(v);
                true
            }
            Adj::List { into, .. } => into.push(v),
        }
    }

    pub(crate) fn add_edge_out(&mut self, v: VID) -> bool {
        match self {
            Adj::Solo => {
                *self = Self::new_out(v);
                true
            }
            Adj::List { out, .. } => out.push(v),
        }
    }

    pub(crate) fn remove_edge_into(&mut self, v: VID) -> bool {
        match self {
            Adj::Solo => false,
            Adj::List { into, .. } => into.remove(v),
        }
    }

    pub(crate) fn remove_edge_out(&mut self, v: VID) -> bool {
        match self {
            Adj::Solo => false,
            Adj::List { out, .. } => out.remove(v),
        }
    }

    pub fn contains(&self, v: VID, dir: Direction) -> bool {
        match self {
            Adj::Solo => false,
            Adj::List { out, into } => match dir {
                Direction::OUT => out.contains(v),
                Direction::IN => into.contains(v),
                Direction::BOTH => out.contains(v) || into.contains(v),
            },
        }
    }

    pub fn iter(&self, dir: Direction) -> Box<dyn Iterator<Item = VID> + '_> {
        match self {
            Adj::Solo => Box::new(std::iter::empty()),
            Adj::List { out, into } => match dir {
                Direction::OUT => Box::new(out.iter()),
                Direction::IN => Box::new(into.iter()),
                Direction::BOTH => Box::new(out.iter().merge(into.iter()).dedup()),
            },
        }
    }

    pub fn degree(&self, dir: Direction) -> usize {
        match self {
            Adj::Solo => 0,
            Adj::List { out, into } => match dir {
                Direction::OUT => out.len(),
                Direction::IN => into.len(),
                Direction::BOTH => out.iter().merge(into.iter()).dedup().count(),
            },
        }
    }
}
