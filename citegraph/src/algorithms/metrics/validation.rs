//! Consistency checks between the citation counters and the edges.

use crate::db::graph::graph::Graph;
use citegraph_api::core::{entities::GID, Direction};

/// A node whose counters disagree with its degree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterMismatch {
    pub node: GID,
    pub references: usize,
    pub out_degree: usize,
    pub cited_by: usize,
    pub in_degree: usize,
}

/// Every node whose `references` differs from its out-degree or whose
/// `cited_by` differs from its in-degree. Empty for a consistent graph.
pub fn validate_citation_counts(graph: &Graph) -> Vec<CounterMismatch> {
    graph
        .nodes()
        .filter_map(|n| {
            let out_degree = n.degree(Direction::OUT);
            let in_degree = n.degree(Direction::IN);
            (n.meta.references != out_degree || n.meta.cited_by != in_degree).then(|| {
                CounterMismatch {
                    node: n.global_id.clone(),
                    references: n.meta.references,
                    out_degree,
                    cited_by: n.meta.cited_by,
                    in_degree,
                }
            })
        })
        .collect()
}

/// All pairs of distinct papers that cite each other, each reported once with
/// the earlier inserted node first.
pub fn find_bidirectional_pairs(graph: &Graph) -> Vec<(GID, GID)> {
    let storage = graph.storage();
    storage
        .edges()
        .filter(|(src, dst)| src < dst && storage.has_edge(*dst, *src))
        .filter_map(|(src, dst)| Some((graph.gid(src)?.clone(), graph.gid(dst)?.clone())))
        .collect()
}
