use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

pub mod citation;
pub mod properties;

// the only reason this is public is because the physical ids of the nodes don't move
#[repr(transparent)]
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize, Default,
)]
pub struct VID(pub usize);

impl VID {
    pub fn index(&self) -> usize {
        self.0
    }

    pub fn as_u64(&self) -> u64 {
        self.0 as u64
    }
}

impl From<usize> for VID {
    fn from(id: usize) -> Self {
        VID(id)
    }
}

impl From<VID> for usize {
    fn from(id: VID) -> Self {
        id.0
    }
}

/// Logical node identifier as seen by users of the graph.
///
/// Serialises untagged, so a node-link document carries `"id": 7` or
/// `"id": "hep-th/9201001"`.
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GID {
    U64(u64),
    Str(String),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GidType {
    U64,
    Str,
}

impl Display for GidType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GidType::U64 => write!(f, "Numeric"),
            GidType::Str => write!(f, "String"),
        }
    }
}

impl GID {
    pub fn dtype(&self) -> GidType {
        match self {
            GID::U64(_) => GidType::U64,
            GID::Str(_) => GidType::Str,
        }
    }
}

impl Display for GID {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GID::U64(v) => write!(f, "{}", v),
            GID::Str(v) => write!(f, "{}", v),
        }
    }
}

impl From<u64> for GID {
    fn from(id: u64) -> Self {
        Self::U64(id)
    }
}

impl From<String> for GID {
    fn from(id: String) -> Self {
        Self::Str(id)
    }
}

impl From<&str> for GID {
    fn from(id: &str) -> Self {
        Self::Str(id.to_owned())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_gid_serialises_untagged() {
        let json = serde_json::to_string(&vec![GID::U64(3), GID::from("a")]).unwrap();
        assert_eq!(json, r#"[3,"a"]"#);
        let back: Vec<GID> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![GID::U64(3), GID::Str("a".to_owned())]);
    }
}
