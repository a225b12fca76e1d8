use crate::db::graph::graph::Graph;
use citegraph_api::core::entities::GID;
use rustc_hash::FxHashMap;

/// Union-find over physical ids with path halving and union by size.
struct ComponentState {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl ComponentState {
    fn new(num_nodes: usize) -> Self {
        Self {
            parent: (0..num_nodes).collect(),
            size: vec![1; num_nodes],
        }
    }

    fn find(&mut self, mut v: usize) -> usize {
        while self.parent[v] != v {
            self.parent[v] = self.parent[self.parent[v]];
            v = self.parent[v];
        }
        v
    }

    fn union(&mut self, a: usize, b: usize) {
        let (mut a, mut b) = (self.find(a), self.find(b));
        if a == b {
            return;
        }
        if self.size[a] < self.size[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        self.size[a] += self.size[b];
    }
}

fn component_state(graph: &Graph) -> ComponentState {
    let storage = graph.storage();
    let mut state = ComponentState::new(storage.num_nodes());
    for (src, dst) in storage.edges() {
        state.union(src.index(), dst.index());
    }
    state
}

/// Weakly connected components, ignoring edge direction.
///
/// Components are listed in order of their first node, and nodes within a
/// component keep insertion order.
pub fn weakly_connected_components(graph: &Graph) -> Vec<Vec<GID>> {
    let mut state = component_state(graph);
    let mut labels: FxHashMap<usize, usize> = FxHashMap::default();
    let mut components: Vec<Vec<GID>> = Vec::new();
    for node in graph.nodes() {
        let root = state.find(node.vid.index());
        let label = *labels.entry(root).or_insert_with(|| {
            components.push(Vec::new());
            components.len() - 1
        });
        components[label].push(node.global_id.clone());
    }
    components
}

pub fn number_weakly_connected_components(graph: &Graph) -> usize {
    let mut state = component_state(graph);
    (0..graph.count_nodes())
        .filter(|&v| state.find(v) == v)
        .count()
}

#[cfg(test)]
mod cc_test {
    use super::*;
    use citegraph_api::core::entities::citation::{CitationMeta, Group, Subgroup};
    use pretty_assertions::assert_eq;

    fn graph(nodes: &[u64], edges: &[(u64, u64)]) -> Graph {
        let mut g = Graph::new();
        for id in nodes {
            g.add_node(*id, CitationMeta::new(Group::Comic, Subgroup::Physics, 0.4))
                .unwrap();
        }
        for (src, dst) in edges {
            g.add_edge(&GID::U64(*src), &GID::U64(*dst)).unwrap();
        }
        g
    }

    #[test]
    fn simple_connected_components() {
        let g = graph(
            &[1, 2, 3, 4, 5, 6, 7, 8],
            &[(1, 2), (3, 2), (4, 5), (6, 5), (6, 7)],
        );
        let expected: Vec<Vec<GID>> = vec![
            vec![1u64.into(), 2u64.into(), 3u64.into()],
            vec![4u64.into(), 5u64.into(), 6u64.into(), 7u64.into()],
            vec![8u64.into()],
        ];
        assert_eq!(weakly_connected_components(&g), expected);
        assert_eq!(number_weakly_connected_components(&g), 3);
    }

    #[test]
    fn direction_is_ignored() {
        let g = graph(&[1, 2, 3], &[(1, 2), (3, 2)]);
        assert_eq!(number_weakly_connected_components(&g), 1);
    }

    #[test]
    fn empty_graph() {
        let g = Graph::new();
        assert_eq!(number_weakly_connected_components(&g), 0);
        assert!(weakly_connected_components(&g).is_empty());
    }
}
