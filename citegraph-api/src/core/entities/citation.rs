//! Metadata carried by every paper in a citation graph.
//!
//! The attribute set is closed, so it is a plain struct rather than a
//! property map. Attribute access by name still exists through [`NodeAttr`]
//! because node filters are expressed in terms of attribute names.

use crate::core::entities::{properties::Prop, GID};
use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};
use thiserror::Error;

/// Upper bound (exclusive) of a paper's citation probability.
pub const MAX_PROBABILITY: f64 = 0.5;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} '{value}'")]
pub struct ParseCategoryError {
    kind: &'static str,
    value: String,
}

macro_rules! category {
    (
        $(#[$meta:meta])* $name:ident, $kind:literal,
        { $($(#[$vmeta:meta])* $variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Draw a value uniformly from the enumeration.
            pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
                *Self::ALL.choose(rng).unwrap_or(&Self::ALL[0])
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseCategoryError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    _ => Err(ParseCategoryError {
                        kind: $kind,
                        value: s.to_owned(),
                    }),
                }
            }
        }

        impl From<$name> for Prop {
            fn from(value: $name) -> Self {
                Prop::Str(value.as_str().to_owned())
            }
        }
    };
}

category!(
    /// Top-level category of a paper.
    Group, "group", {
        Science => "science",
        Fictional => "fictional",
        Comic => "comic",
    }
);

category!(
    /// Field within a group.
    Subgroup, "subgroup", {
        Neuro => "neuro",
        Physics => "physics",
        Chemistry => "chemistry",
        Maths => "maths",
    }
);

category!(
    /// Popularity classification derived from normalised in-degree centrality.
    #[derive(Default)]
    PopularityLevel, "popularity level", {
        #[default]
        New => "new",
        Moderate => "moderate",
        Famous => "famous",
        Influential => "influential",
    }
);

impl PopularityLevel {
    /// Classify a normalised centrality value.
    ///
    /// `0` is new, `(0, 0.15]` moderate, `(0.15, 0.30]` famous and anything
    /// above `0.30` influential.
    pub fn from_centrality(c: f64) -> Self {
        if c > 0.30 {
            PopularityLevel::Influential
        } else if c > 0.15 {
            PopularityLevel::Famous
        } else if c > 0.0 {
            PopularityLevel::Moderate
        } else {
            PopularityLevel::New
        }
    }
}

/// Metadata of a single paper.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CitationMeta {
    pub group: Group,
    pub subgroup: Subgroup,
    /// Affinity of the paper, in `[0, 0.5)`
    pub probability: f64,
    /// Number of papers this paper cites (outbound edges)
    pub references: usize,
    /// Number of papers citing this paper (inbound edges)
    pub cited_by: usize,
    /// Id of the first paper that cited this one, `None` while uncited
    #[serde(default)]
    pub first_cited_time: Option<GID>,
    #[serde(default)]
    pub popularity_level: PopularityLevel,
}

impl CitationMeta {
    pub fn new(group: Group, subgroup: Subgroup, probability: f64) -> Self {
        Self {
            group,
            subgroup,
            probability,
            references: 0,
            cited_by: 0,
            first_cited_time: None,
            popularity_level: PopularityLevel::New,
        }
    }

    /// Value of a named attribute, `None` when the attribute is unset.
    pub fn prop(&self, attr: NodeAttr) -> Option<Prop> {
        match attr {
            NodeAttr::Group => Some(self.group.into()),
            NodeAttr::Subgroup => Some(self.subgroup.into()),
            NodeAttr::Probability => Some(Prop::F64(self.probability)),
            NodeAttr::References => Some(Prop::U64(self.references as u64)),
            NodeAttr::CitedBy => Some(Prop::U64(self.cited_by as u64)),
            NodeAttr::FirstCitedTime => self.first_cited_time.as_ref().map(|gid| match gid {
                GID::U64(v) => Prop::U64(*v),
                GID::Str(v) => Prop::Str(v.clone()),
            }),
            NodeAttr::PopularityLevel => Some(self.popularity_level.into()),
        }
    }

    /// Record a citation from `citer`, setting the first citer if unset.
    pub fn record_citation(&mut self, citer: &GID) {
        self.cited_by += 1;
        if self.first_cited_time.is_none() {
            self.first_cited_time = Some(citer.clone());
        }
    }
}

/// Attribute names understood by node filters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeAttr {
    Group,
    Subgroup,
    Probability,
    References,
    CitedBy,
    FirstCitedTime,
    PopularityLevel,
}

impl NodeAttr {
    pub fn name(&self) -> &'static str {
        match self {
            NodeAttr::Group => "group",
            NodeAttr::Subgroup => "subgroup",
            NodeAttr::Probability => "probability",
            NodeAttr::References => "references",
            NodeAttr::CitedBy => "cited_by",
            NodeAttr::FirstCitedTime => "first_cited_time",
            NodeAttr::PopularityLevel => "popularity_level",
        }
    }
}

impl Display for NodeAttr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NodeAttr {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "group" => Ok(NodeAttr::Group),
            "subgroup" => Ok(NodeAttr::Subgroup),
            "probability" => Ok(NodeAttr::Probability),
            "references" => Ok(NodeAttr::References),
            "cited_by" => Ok(NodeAttr::CitedBy),
            "first_cited_time" => Ok(NodeAttr::FirstCitedTime),
            "popularity_level" => Ok(NodeAttr::PopularityLevel),
            _ => Err(ParseCategoryError {
                kind: "attribute",
                value: s.to_owned(),
            }),
        }
    }
}
