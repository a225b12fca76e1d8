//! Popularity classification of papers.
//!
//! Each paper is classified by its normalised in-degree centrality, see
//! [`PopularityLevel::from_centrality`] for the thresholds.

use crate::{
    algorithms::metrics::degree::normalized_in_degree_centrality, db::graph::graph::Graph,
    io::metrics_csv::MetricsRow,
};
use citegraph_api::core::entities::citation::PopularityLevel;
use tracing::debug;

/// Recompute `popularity_level` for every node in the graph.
pub fn reclassify_popularity(graph: &mut Graph) {
    let levels: Vec<PopularityLevel> = normalized_in_degree_centrality(graph)
        .into_iter()
        .map(|(_, c)| PopularityLevel::from_centrality(c))
        .collect();
    for (meta, level) in graph.metas_mut().zip(levels) {
        meta.popularity_level = level;
    }
    debug!(num_nodes = graph.count_nodes(), "reclassified popularity");
}

/// Count the nodes in each popularity level, as currently stored.
pub fn count_by_popularity(graph: &Graph) -> MetricsRow {
    let mut row = MetricsRow {
        total_no_of_nodes: graph.count_nodes(),
        ..Default::default()
    };
    for node in graph.nodes() {
        match node.meta.popularity_level {
            PopularityLevel::New => row.nodes_in_new_state += 1,
            PopularityLevel::Moderate => row.nodes_in_moderate_state += 1,
            PopularityLevel::Famous => row.nodes_in_famous_state += 1,
            PopularityLevel::Influential => row.nodes_in_influential_state += 1,
        }
    }
    row
}

#[cfg(test)]
mod popularity_test {
    use super::*;
    use citegraph_api::core::entities::{
        citation::{CitationMeta, Group, Subgroup},
        GID,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reclassify() {
        // 11 nodes: node 0 is cited by 10, node 1 by 2, node 2 by 1
        let mut g = Graph::new();
        for id in 0..11u64 {
            g.add_node(id, CitationMeta::new(Group::Science, Subgroup::Physics, 0.2))
                .unwrap();
        }
        for src in 1..11u64 {
            g.add_edge(&GID::U64(src), &GID::U64(0)).unwrap();
        }
        g.add_edge(&GID::U64(3), &GID::U64(1)).unwrap();
        g.add_edge(&GID::U64(4), &GID::U64(1)).unwrap();
        g.add_edge(&GID::U64(5), &GID::U64(2)).unwrap();

        reclassify_popularity(&mut g);
        let level = |id: u64| g.meta(&GID::U64(id)).unwrap().popularity_level;
        assert_eq!(level(0), PopularityLevel::Influential);
        assert_eq!(level(1), PopularityLevel::Famous);
        assert_eq!(level(2), PopularityLevel::Moderate);
        assert_eq!(level(3), PopularityLevel::New);

        assert_eq!(
            count_by_popularity(&g),
            MetricsRow {
                total_no_of_nodes: 11,
                nodes_in_new_state: 8,
                nodes_in_moderate_state: 1,
                nodes_in_famous_state: 1,
                nodes_in_influential_state: 1,
            }
        );
    }

    #[test]
    fn test_exact_thresholds_stay_in_lower_level() {
        // node 0 is cited by all 20 others, so node 1 sits at 3/20 = 0.15
        // and node 2 at 6/20 = 0.30
        let mut g = Graph::new();
        for id in 0..21u64 {
            g.add_node(id, CitationMeta::new(Group::Fictional, Subgroup::Maths, 0.1))
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

        reclassify_popularity(&mut g);
        let level = |id: u64| g.meta(&GID::U64(id)).unwrap().popularity_level;
        assert_eq!(level(0), PopularityLevel::Influential);
        assert_eq!(level(1), PopularityLevel::Moderate);
        assert_eq!(level(2), PopularityLevel::Famous);
        assert_eq!(level(3), PopularityLevel::New);
    }

    #[test]
    fn test_uncited_graph_is_all_new() {
        let mut g = Graph::new();
        for id in 0..3u64 {
            g.add_node(id, CitationMeta::new(Group::Comic, Subgroup::Neuro, 0.2))
                .unwrap();
        }
        g.meta_mut(&GID::U64(1)).unwrap().popularity_level = PopularityLevel::Famous;
        reclassify_popularity(&mut g);
        assert_eq!(count_by_popularity(&g).nodes_in_new_state, 3);
    }
}
