use citegraph_api::core::entities::{GidType, GID, VID};
use rustc_hash::FxHashMap;
use thiserror::Error;

#[derive(Debug)]
enum Map {
    U64(FxHashMap<u64, VID>),
    Str(FxHashMap<String, VID>),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidNodeId {
    #[error("Node id {0} does not have the correct type, expected String")]
    InvalidNodeIdU64(u64),
    #[error("Node id {0} does not have the correct type, expected Numeric")]
    InvalidNodeIdStr(String),
}

impl InvalidNodeId {
    fn for_gid(gid: &GID) -> Self {
        match gid {
            GID::U64(v) => InvalidNodeId::InvalidNodeIdU64(*v),
            GID::Str(v) => InvalidNodeId::InvalidNodeIdStr(v.clone()),
        }
    }
}

/// Maps logical node ids to physical ids.
///
/// The id type is fixed by the first node that is inserted. After that,
/// ids of the other type are rejected.
#[derive(Debug, Default)]
pub struct Mapping {
    map: Option<Map>,
}

impl Mapping {
    pub fn new() -> Self {
        Self { map: None }
    }

    pub fn len(&self) -> usize {
        self.map.as_ref().map_or(0, |map| match map {
            Map::U64(map) => map.len(),
            Map::Str(map) => map.len(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dtype(&self) -> Option<GidType> {
        self.map.as_ref().map(|map| match map {
            Map::U64(_) => GidType::U64,
            Map::Str(_) => GidType::Str,
        })
    }

    pub fn get(&self, gid: &GID) -> Option<VID> {
        match (self.map.as_ref()?, gid) {
            (Map::U64(map), GID::U64(id)) => map.get(id).copied(),
            (Map::Str(map), GID::Str(id)) => map.get(id).copied(),
            _ => None,
        }
    }

    /// Check that `gid` has the type of this mapping (always true while empty).
    pub fn validate(&self, gid: &GID) -> Result<(), InvalidNodeId> {
        match self.dtype() {
            Some(dtype) if dtype != gid.dtype() => Err(InvalidNodeId::for_gid(gid)),
            _ => Ok(()),
        }
    }

    /// Insert a new mapping. Returns the previous physical id if `gid` was
    /// already mapped, in which case nothing changes.
    pub fn set(&mut self, gid: &GID, vid: VID) -> Result<Option<VID>, InvalidNodeId> {
        self.validate(gid)?;
        let map = self.map.get_or_insert_with(|| match gid {
            GID::U64(_) => Map::U64(FxHashMap::default()),
            GID::Str(_) => Map::Str(FxHashMap::default()),
        });
        let existing = match (map, gid) {
            (Map::U64(map), GID::U64(id)) => match map.get(id) {
                Some(v) => Some(*v),
                None => {
                    map.insert(*id, vid);
                    None
                }
            },
            (Map::Str(map), GID::Str(id)) => match map.get(id) {
                Some(v) => Some(*v),
                None => {
                    map.insert(id.clone(), vid);
                    None
                }
            },
            _ => return Err(InvalidNodeId::for_gid(gid)),
        };
        Ok(existing)
    }
}
