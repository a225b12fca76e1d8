//! Degree calculations for the entire graph.
//!
//! In a citation graph the in-degree of a paper is the number of papers citing
//! it, and the out-degree is the number of papers it cites.
//!
//! This module provides:
//! - max_in_degree / min_in_degree / max_out_degree / min_out_degree
//! - average_degree - The average number of citations per paper.
//! - in_degree_centrality - in-degree divided by `n - 1`.
//! - normalized_in_degree_centrality - centrality scaled so the maximum is 1.
//!
//! # Examples
//!
//! ```rust
//! use citegraph::algorithms::metrics::degree::*;
//! use citegraph::prelude::*;
//!
//! let mut g = Graph::new();
//! for id in 1..=5u64 {
//!     g.add_node(id, CitationMeta::new(Group::Fictional, Subgroup::Neuro, 0.3)).unwrap();
//! }
//! for (src, dst) in [(1u64, 2u64), (1, 3), (2, 3), (4, 3), (5, 4)] {
//!     g.add_edge(&GID::U64(src), &GID::U64(dst)).unwrap();
//! }
//!
//! assert_eq!(max_in_degree(&g), 3);
//! assert_eq!(min_in_degree(&g), 0);
//! assert_eq!(max_out_degree(&g), 2);
//! assert_eq!(average_degree(&g), 1.0);
//! ```

use crate::db::graph::graph::Graph;
use citegraph_api::core::{entities::GID, Direction};
use tracing::trace;

/// The maximum in degree of any node in the graph.
pub fn max_in_degree(graph: &Graph) -> usize {
    graph
        .nodes()
        .map(|n| n.degree(Direction::IN))
        .max()
        .unwrap_or(0)
}

/// The minimum in degree of any node in the graph.
pub fn min_in_degree(graph: &Graph) -> usize {
    graph
        .nodes()
        .map(|n| n.degree(Direction::IN))
        .min()
        .unwrap_or(0)
}

/// The maximum out degree of any node in the graph.
pub fn max_out_degree(graph: &Graph) -> usize {
    graph
        .nodes()
        .map(|n| n.degree(Direction::OUT))
        .max()
        .unwrap_or(0)
}

/// The minimum out degree of any node in the graph.
pub fn min_out_degree(graph: &Graph) -> usize {
    graph
        .nodes()
        .map(|n| n.degree(Direction::OUT))
        .min()
        .unwrap_or(0)
}

/// Edges per node, `0.0` for an empty graph.
pub fn average_degree(graph: &Graph) -> f64 {
    if graph.is_empty() {
        0.0
    } else {
        graph.count_edges() as f64 / graph.count_nodes() as f64
    }
}

/// In-degree of every node divided by `n - 1`, in insertion order.
///
/// Graphs with fewer than two nodes have centrality `0` everywhere.
pub fn in_degree_centrality(graph: &Graph) -> Vec<(&GID, f64)> {
    let n = graph.count_nodes();
    let scale = if n > 1 { 1.0 / (n - 1) as f64 } else { 0.0 };
    graph
        .nodes()
        .map(|node| (&node.global_id, node.degree(Direction::IN) as f64 * scale))
        .collect()
}

/// In-degree centrality divided by its maximum.
///
/// The `n - 1` scale cancels out, so each value is `in_degree / max_in_degree`
/// computed in a single division. The most cited paper gets exactly `1.0`, and
/// a ratio such as `3 / 20` lands exactly on `0.15`. If nothing is cited at
/// all, or the graph has fewer than two nodes, every value stays `0`.
pub fn normalized_in_degree_centrality(graph: &Graph) -> Vec<(&GID, f64)> {
    let max = if graph.count_nodes() > 1 {
        max_in_degree(graph)
    } else {
        0
    };
    trace!(max, "maximum in-degree");
    graph
        .nodes()
        .map(|node| {
            let c = match max {
                0 => 0.0,
                max => node.degree(Direction::IN) as f64 / max as f64,
            };
            (&node.global_id, c)
        })
        .collect()
}

#[cfg(test)]
mod degree_test {
    use super::*;
    use citegraph_api::core::entities::citation::{CitationMeta, Group, Subgroup};
    use pretty_assertions::assert_eq;

    fn graph() -> Graph {
        let mut g = Graph::new();
        for id in 1..=5u64 {
            g.add_node(id, CitationMeta::new(Group::Science, Subgroup::Neuro, 0.2))
                .unwrap();
        }
        for (src, dst) in [(1u64, 2u64), (1, 3), (2, 3), (4, 3), (5, 4)] {
            g.add_edge(&GID::U64(src), &GID::U64(dst)).unwrap();
        }
        g
    }

    #[test]
    fn test_degree_extremes() {
        let g = graph();
        assert_eq!(max_in_degree(&g), 3);
        assert_eq!(min_in_degree(&g), 0);
        assert_eq!(max_out_degree(&g), 2);
        assert_eq!(min_out_degree(&g), 0);
        assert_eq!(average_degree(&g), 1.0);
        assert_eq!(average_degree(&Graph::new()), 0.0);
    }

    #[test]
    fn test_in_degree_centrality() {
        let g = graph();
        let values: Vec<f64> = in_degree_centrality(&g).into_iter().map(|(_, c)| c).collect();
        assert_eq!(values, vec![0.0, 0.25, 0.75, 0.25, 0.0]);
    }

    #[test]
    fn test_normalized_max_is_one() {
        let g = graph();
        let normalized = normalized_in_degree_centrality(&g);
        assert_eq!(normalized[2], (&GID::U64(3), 1.0));
        assert!(normalized.iter().all(|(_, c)| (0.0..=1.0).contains(c)));
    }

    #[test]
    fn test_normalized_is_a_single_division() {
        // 21 nodes: node 0 is cited by all others, node 1 by 3, node 2 by 6
        let mut g = Graph::new();
        for id in 0..21u64 {
            g.add_node(id, CitationMeta::new(Group::Science, Subgroup::Neuro, 0.2))
                .unwrap();
        }
        for src in 1..21u64 {
            g.add_edge(&GID::U64(src), &GID::U64(0)).unwrap();
        }
        for src in 3..6u64 {
            g.add_edge(&GID::U64(src), &GID::U64(1)).unwrap();
        }
        for src in 3..9u64 {
            g.add_edge(&GID::U64(src), &GID::U64(2)).unwrap();
        }
        let normalized = normalized_in_degree_centrality(&g);
        assert_eq!(normalized[0].1, 1.0);
        assert_eq!(normalized[1].1, 0.15);
        assert_eq!(normalized[2].1, 0.3);
    }

    #[test]
    fn test_tiny_graphs() {
        let mut g = Graph::new();
        assert!(in_degree_centrality(&g).is_empty());
        g.add_node(1u64, CitationMeta::new(Group::Comic, Subgroup::Maths, 0.1))
            .unwrap();
        assert_eq!(normalized_in_degree_centrality(&g), vec![(&GID::U64(1), 0.0)]);
    }
}
