use serde::{Deserialize, Serialize};
use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
};

/// A comparable attribute value used by node filters.
///
/// Values of different variants never compare, so a filter asking for
/// `probability > "science"` simply matches nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Prop {
    Str(String),
    U64(u64),
    F64(f64),
}

impl PartialOrd for Prop {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Prop::Str(l), Prop::Str(r)) => l.partial_cmp(r),
            (Prop::U64(l), Prop::U64(r)) => l.partial_cmp(r),
            (Prop::F64(l), Prop::F64(r)) => l.partial_cmp(r),
            _ => None,
        }
    }
}

impl Display for Prop {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Prop::Str(v) => write!(f, "{}", v),
            Prop::U64(v) => write!(f, "{}", v),
            Prop::F64(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for Prop {
    fn from(value: &str) -> Self {
        Prop::Str(value.to_owned())
    }
}

impl From<String> for Prop {
    fn from(value: String) -> Self {
        Prop::Str(value)
    }
}

impl From<u64> for Prop {
    fn from(value: u64) -> Self {
        Prop::U64(value)
    }
}

impl From<f64> for Prop {
    fn from(value: f64) -> Self {
        Prop::F64(value)
    }
}
