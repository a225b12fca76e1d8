//! Attribute filters over the nodes of a graph.
//!
//! A [`NodeFilter`] always starts with a group equality test and then applies
//! an ordered list of [`PropertyFilter`]s. Each condition can only narrow the
//! set. Filters are plain values, so running one never changes it.
//!
//! # Examples
//!
//! ```rust
//! use citegraph::prelude::*;
//! use citegraph::db::filter::{NodeFilter, PropertyFilter};
//!
//! let filter = NodeFilter::new(Group::Science)
//!     .with(PropertyFilter::equals(NodeAttr::Subgroup, Subgroup::Maths))
//!     .with(PropertyFilter::greater_than(NodeAttr::Probability, 0.25));
//! assert_eq!(filter.conditions().len(), 2);
//! ```

use crate::db::graph::graph::Graph;
use citegraph_api::core::entities::{
    citation::{CitationMeta, Group, NodeAttr},
    properties::Prop,
    GID,
};
use itertools::Itertools;
use rand::{seq::index::sample, Rng};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use tracing::debug;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    Equals,
    LessThan,
    GreaterThan,
}

impl FilterOperator {
    pub fn apply(&self, left: &Prop, right: &Prop) -> bool {
        match self {
            FilterOperator::Equals => left == right,
            FilterOperator::LessThan => left < right,
            FilterOperator::GreaterThan => left > right,
        }
    }
}

impl Display for FilterOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let op = match self {
            FilterOperator::Equals => "==",
            FilterOperator::LessThan => "<",
            FilterOperator::GreaterThan => ">",
        };
        f.write_str(op)
    }
}

/// `attr <op> value`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyFilter {
    pub attr: NodeAttr,
    pub value: Prop,
    pub op: FilterOperator,
}

impl PropertyFilter {
    pub fn new(attr: NodeAttr, value: impl Into<Prop>, op: FilterOperator) -> Self {
        Self {
            attr,
            value: value.into(),
            op,
        }
    }

    pub fn equals(attr: NodeAttr, value: impl Into<Prop>) -> Self {
        Self::new(attr, value, FilterOperator::Equals)
    }

    pub fn less_than(attr: NodeAttr, value: impl Into<Prop>) -> Self {
        Self::new(attr, value, FilterOperator::LessThan)
    }

    pub fn greater_than(attr: NodeAttr, value: impl Into<Prop>) -> Self {
        Self::new(attr, value, FilterOperator::GreaterThan)
    }

    /// A node without the attribute never matches.
    pub fn matches(&self, meta: &CitationMeta) -> bool {
        meta.prop(self.attr)
            .is_some_and(|prop| self.op.apply(&prop, &self.value))
    }
}

impl Display for PropertyFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.attr, self.op, self.value)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeFilter {
    group: Group,
    conditions: Vec<PropertyFilter>,
}

impl Default for NodeFilter {
    fn default() -> Self {
        Self::new(Group::Science)
    }
}

impl NodeFilter {
    pub fn new(group: Group) -> Self {
        Self {
            group,
            conditions: Vec::new(),
        }
    }

    pub fn with(mut self, condition: PropertyFilter) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn group(&self) -> Group {
        self.group
    }

    pub fn conditions(&self) -> &[PropertyFilter] {
        &self.conditions
    }

    pub fn matches(&self, meta: &CitationMeta) -> bool {
        meta.group == self.group && self.conditions.iter().all(|c| c.matches(meta))
    }

    /// Ids of all matching nodes, in insertion order.
    pub fn filter_nodes<'a>(&self, graph: &'a Graph) -> Vec<&'a GID> {
        let mut candidates: Vec<_> = graph
            .nodes()
            .filter(|n| n.meta.group == self.group)
            .collect();
        debug!(group = %self.group, remaining = candidates.len(), "group filter applied");
        for condition in &self.conditions {
            candidates.retain(|n| condition.matches(&n.meta));
            debug!(%condition, remaining = candidates.len(), "condition applied");
        }
        candidates.into_iter().map(|n| &n.global_id).collect()
    }
}

impl Display for NodeFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "group == {}", self.group)?;
        if !self.conditions.is_empty() {
            write!(f, " && {}", self.conditions.iter().format(" && "))?;
        }
        Ok(())
    }
}

/// Sample up to `amount` distinct nodes that pass `filter`.
///
/// Asking for more nodes than match is not an error; the sample is clamped to
/// the matching set, which may be empty.
pub fn sample_nodes<R: Rng + ?Sized>(
    graph: &Graph,
    amount: usize,
    filter: &NodeFilter,
    rng: &mut R,
) -> Vec<GID> {
    let filtered = filter.filter_nodes(graph);
    let amount = amount.min(filtered.len());
    sample(rng, filtered.len(), amount)
        .into_iter()
        .map(|i| filtered[i].clone())
        .collect()
}
