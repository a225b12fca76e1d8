//! Random citation wiring for a single paper.
//!
//! A paper cites a small sample of existing papers that share a randomly
//! drawn group and subgroup and whose probability beats a random threshold.
//! The graph never gains a self-loop or a pair of papers citing each other.
//!
//! # Examples
//!
//! ```rust
//! use citegraph::prelude::*;
//! use citegraph::graphgen::citation::add_citations_with_filter;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut graph = Graph::new();
//! for id in 1..=5u64 {
//!     graph.add_node(id, CitationMeta::new(Group::Science, Subgroup::Maths, 0.49)).unwrap();
//! }
//! graph.add_node(6u64, CitationMeta::new(Group::Comic, Subgroup::Neuro, 0.1)).unwrap();
//!
//! let added = add_citations_with_filter(&mut graph, &GID::U64(6), &mut rng).unwrap();
//! assert!(added <= 1);
//! ```

use crate::{
    db::{
        filter::{sample_nodes, NodeFilter, PropertyFilter},
        graph::graph::Graph,
    },
    errors::GraphError,
};
use citegraph_api::core::entities::{
    citation::{Group, NodeAttr, Subgroup, MAX_PROBABILITY},
    GID,
};
use rand::Rng;
use tracing::debug;

/// Share of the graph size a single paper may cite at most.
pub const CITATION_BUDGET_FRACTION: f64 = 0.001;

/// Upper bound on the number of citations a paper draws in a graph of
/// `num_nodes` papers. Always at least one.
pub fn citation_budget(num_nodes: usize) -> usize {
    (num_nodes as f64 * CITATION_BUDGET_FRACTION).floor() as usize + 1
}

/// Filter with a random group, a random subgroup and a random probability
/// threshold.
pub fn random_citation_filter<R: Rng + ?Sized>(rng: &mut R) -> NodeFilter {
    NodeFilter::new(Group::random(rng))
        .with(PropertyFilter::equals(
            NodeAttr::Subgroup,
            Subgroup::random(rng),
        ))
        .with(PropertyFilter::greater_than(
            NodeAttr::Probability,
            rng.gen_range(0.0..MAX_PROBABILITY),
        ))
}

/// Let `paper` cite a random sample of matching papers.
///
/// Returns the number of citations that were kept. This is best-effort:
/// candidates that would create a self-loop or a mutual citation are skipped,
/// so the result can be anything from zero up to the drawn sample size.
///
/// Fails with [`GraphError::NodeIdError`] or [`GraphError::NodeNameError`] if
/// `paper` is not in the graph.
pub fn add_citations_with_filter<R: Rng + ?Sized>(
    graph: &mut Graph,
    paper: &GID,
    rng: &mut R,
) -> Result<usize, GraphError> {
    graph.meta(paper)?;

    let budget = citation_budget(graph.count_nodes());
    let amount = rng.gen_range(1..=budget);
    let filter = random_citation_filter(rng);
    let candidates = sample_nodes(graph, amount, &filter, rng);
    debug!(%paper, amount, sampled = candidates.len(), %filter, "sampled citation candidates");

    let mut added = 0;
    for reference in candidates {
        let inserted = if paper == &reference
            || graph.has_edge(paper, &reference)
            || graph.has_edge(&reference, paper)
        {
            debug!(%paper, %reference, "skipping citation");
            false
        } else {
            graph.add_edge(paper, &reference)?;
            graph.meta_mut(paper)?.references += 1;
            graph.meta_mut(&reference)?.record_citation(paper);
            debug!(%paper, %reference, "added citation");
            added += 1;
            true
        };

        if graph.has_edge(paper, &reference) && graph.has_edge(&reference, paper) {
            debug!(%paper, %reference, "removing mutual citation");
            graph.remove_edge(paper, &reference)?;
            retract_citation(graph, paper, &reference)?;
            if inserted {
                added -= 1;
            }
        }
    }

    if graph.has_edge(paper, paper) {
        debug!(%paper, "removing self citation");
        graph.remove_edge(paper, paper)?;
        retract_citation(graph, paper, paper)?;
    }

    Ok(added)
}

pub(crate) fn retract_citation(
    graph: &mut Graph,
    citer: &GID,
    cited: &GID,
) -> Result<(), GraphError> {
    let meta = graph.meta_mut(citer)?;
    meta.references = meta.references.saturating_sub(1);
    let meta = graph.meta_mut(cited)?;
    meta.cited_by = meta.cited_by.saturating_sub(1);
    Ok(())
}

#[cfg(test)]
mod citation_test {
    use super::*;
    use crate::algorithms::metrics::validation::{
        find_bidirectional_pairs, validate_citation_counts,
    };
    use citegraph_api::core::entities::citation::CitationMeta;
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_budget() {
        assert_eq!(citation_budget(0), 1);
        assert_eq!(citation_budget(999), 1);
        assert_eq!(citation_budget(1000), 2);
        assert_eq!(citation_budget(2500), 3);
    }

    #[test]
    fn test_missing_paper_fails() {
        let mut g = Graph::new();
        let mut rng = StdRng::seed_from_u64(0);
        let err = add_citations_with_filter(&mut g, &GID::U64(3), &mut rng).unwrap_err();
        assert!(matches!(err, GraphError::NodeIdError(3)));
    }

    #[test]
    fn test_single_node_never_cites_itself() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let mut g = Graph::new();
            g.add_node(1u64, CitationMeta::new(Group::Science, Subgroup::Maths, 0.49))
                .unwrap();
            let added = add_citations_with_filter(&mut g, &GID::U64(1), &mut rng).unwrap();
            assert_eq!(added, 0);
            assert_eq!(g.count_edges(), 0);
            assert_eq!(g.meta(&GID::U64(1)).unwrap().references, 0);
        }
    }

    #[test]
    fn test_existing_reverse_edge_is_respected() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut g = Graph::new();
        let meta = CitationMeta::new(Group::Fictional, Subgroup::Physics, 0.49);
        g.add_node(1u64, meta.clone()).unwrap();
        g.add_node(2u64, meta).unwrap();
        g.add_edge(&GID::U64(2), &GID::U64(1)).unwrap();
        g.meta_mut(&GID::U64(2)).unwrap().references = 1;
        g.meta_mut(&GID::U64(1)).unwrap().record_citation(&GID::U64(2));

        for _ in 0..200 {
            add_citations_with_filter(&mut g, &GID::U64(1), &mut rng).unwrap();
        }
        assert!(!g.has_edge(&GID::U64(1), &GID::U64(2)));
        assert!(find_bidirectional_pairs(&g).is_empty());
        assert!(validate_citation_counts(&g).is_empty());
    }

    #[test]
    fn test_mutual_pair_loses_forward_edge() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut g = Graph::new();
        let meta = CitationMeta::new(Group::Comic, Subgroup::Chemistry, 0.49);
        g.add_node(1u64, meta.clone()).unwrap();
        g.add_node(2u64, meta).unwrap();
        for (src, dst) in [(1u64, 2u64), (2, 1)] {
            g.add_edge(&GID::U64(src), &GID::U64(dst)).unwrap();
            g.meta_mut(&GID::U64(src)).unwrap().references += 1;
            g.meta_mut(&GID::U64(dst))
                .unwrap()
                .record_citation(&GID::U64(src));
        }
        assert_eq!(
            find_bidirectional_pairs(&g),
            vec![(GID::U64(1), GID::U64(2))]
        );

        for _ in 0..1000 {
            let added = add_citations_with_filter(&mut g, &GID::U64(1), &mut rng).unwrap();
            assert_eq!(added, 0);
            if !g.has_edge(&GID::U64(1), &GID::U64(2)) {
                break;
            }
        }
        assert!(!g.has_edge(&GID::U64(1), &GID::U64(2)));
        assert!(g.has_edge(&GID::U64(2), &GID::U64(1)));
        assert_eq!(g.count_edges(), 1);
        assert_eq!(g.meta(&GID::U64(1)).unwrap().references, 0);
        assert_eq!(g.meta(&GID::U64(2)).unwrap().cited_by, 0);
        assert!(find_bidirectional_pairs(&g).is_empty());
        assert!(validate_citation_counts(&g).is_empty());
    }

    #[test]
    fn test_counters_follow_edges() {
        let mut rng = StdRng::seed_from_u64(1234);
        let mut g = Graph::new();
        for id in 0..60u64 {
            let meta = CitationMeta::new(
                Group::random(&mut rng),
                Subgroup::random(&mut rng),
                rng.gen_range(0.0..MAX_PROBABILITY),
            );
            g.add_node(id, meta).unwrap();
        }
        let mut total = 0;
        for id in 0..60u64 {
            total += add_citations_with_filter(&mut g, &GID::U64(id), &mut rng).unwrap();
        }
        assert_eq!(total, g.count_edges());
        assert!(g.self_loop_edges().is_empty());
        assert!(find_bidirectional_pairs(&g).is_empty());
        assert!(validate_citation_counts(&g).is_empty());
        for (src, dst) in g.edges() {
            assert!(g.meta(dst).unwrap().first_cited_time.is_some());
            assert_ne!(src, dst);
        }
    }
}
