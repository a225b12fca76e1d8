use crate::db::graph::graph::Graph;
use citegraph_api::core::{
    entities::{GID, VID},
    Direction,
};

const UNVISITED: usize = usize::MAX;

/// Tarjan's algorithm over physical ids.
///
/// Runs with an explicit frame stack, so deep citation chains from real
/// datasets cannot overflow the call stack.
fn tarjan_scc(graph: &Graph) -> Vec<Vec<VID>> {
    let storage = graph.storage();
    let num_nodes = storage.num_nodes();
    let mut index = 0;
    let mut indices = vec![UNVISITED; num_nodes];
    let mut lowlink = vec![0; num_nodes];
    let mut on_stack = vec![false; num_nodes];
    let mut stack: Vec<VID> = Vec::new();
    let mut result: Vec<Vec<VID>> = Vec::new();

    let neighbours = |v: VID| -> Vec<VID> {
        storage
            .node(v)
            .map(|n| n.neighbours(Direction::OUT).collect())
            .unwrap_or_default()
    };

    for root in 0..num_nodes {
        if indices[root] != UNVISITED {
            continue;
        }
        // (node, its out-neighbours, position of the next neighbour to visit)
        let mut frames: Vec<(VID, Vec<VID>, usize)> = vec![(VID(root), neighbours(VID(root)), 0)];
        indices[root] = index;
        lowlink[root] = index;
        index += 1;
        stack.push(VID(root));
        on_stack[root] = true;

        while let Some((node, out, pos)) = frames.last_mut() {
            let node = *node;
            if let Some(&neighbour) = out.get(*pos) {
                *pos += 1;
                let w = neighbour.index();
                if indices[w] == UNVISITED {
                    indices[w] = index;
                    lowlink[w] = index;
                    index += 1;
                    stack.push(neighbour);
                    on_stack[w] = true;
                    frames.push((neighbour, neighbours(neighbour), 0));
                } else if on_stack[w] {
                    lowlink[node.index()] = lowlink[node.index()].min(indices[w]);
                }
                continue;
            }

            frames.pop();
            let v = node.index();
            if let Some((parent, _, _)) = frames.last() {
                let p = parent.index();
                lowlink[p] = lowlink[p].min(lowlink[v]);
            }
            if indices[v] == lowlink[v] {
                let mut component = Vec::new();
                while let Some(top) = stack.pop() {
                    on_stack[top.index()] = false;
                    component.push(top);
                    if top == node {
                        break;
                    }
                }
                result.push(component);
            }
        }
    }
    result
}

/// Strongly connected components of the graph as groups of node ids.
///
/// Every node belongs to exactly one component; a node that is not on any
/// cycle forms a component on its own.
pub fn strongly_connected_components(graph: &Graph) -> Vec<Vec<GID>> {
    tarjan_scc(graph)
        .into_iter()
        .map(|component| {
            component
                .into_iter()
                .filter_map(|v| graph.gid(v).cloned())
                .collect()
        })
        .collect()
}

pub fn number_strongly_connected_components(graph: &Graph) -> usize {
    tarjan_scc(graph).len()
}
