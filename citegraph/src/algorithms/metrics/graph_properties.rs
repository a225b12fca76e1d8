use crate::{
    algorithms::components::{
        number_strongly_connected_components, number_weakly_connected_components,
    },
    db::graph::graph::Graph,
};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use tracing::info;

/// Connectivity summary of a graph.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphProperties {
    pub scc: usize,
    pub wcc: usize,
}

impl Display for GraphProperties {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "strongly connected components: {}, weakly connected components: {}",
            self.scc, self.wcc
        )
    }
}

pub fn graph_properties(graph: &Graph) -> GraphProperties {
    let props = GraphProperties {
        scc: number_strongly_connected_components(graph),
        wcc: number_weakly_connected_components(graph),
    };
    info!(
        graph = graph.name().unwrap_or_default(),
        nodes = graph.count_nodes(),
        edges = graph.count_edges(),
        scc = props.scc,
        wcc = props.wcc,
        "graph properties"
    );
    props
}

#[cfg(test)]
mod test {
    use super::*;
    use citegraph_api::core::entities::{
        citation::{CitationMeta, Group, Subgroup},
        GID,
    };

    #[test]
    fn test_properties() {
        let mut g = Graph::with_name("test");
        for id in 1..=6u64 {
            g.add_node(id, CitationMeta::new(Group::Science, Subgroup::Chemistry, 0.1))
                .unwrap();
        }
        for (src, dst) in [(1u64, 2u64), (2, 3), (3, 1), (4, 5)] {
            g.add_edge(&GID::U64(src), &GID::U64(dst)).unwrap();
        }
        let props = graph_properties(&g);
        assert_eq!(props, GraphProperties { scc: 4, wcc: 3 });
        assert_eq!(
            props.to_string(),
            "strongly connected components: 4, weakly connected components: 3"
        );
    }
}
