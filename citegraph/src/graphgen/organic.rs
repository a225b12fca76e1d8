//! Grows a citation graph one paper at a time.

use crate::{
    db::graph::graph::Graph,
    errors::GraphError,
    graphgen::{
        citation::retract_citation,
        node_factory::NodeFactory,
        timestep::{add_nodes_in_timestep, TimestepOptions},
    },
};
use rand::Rng;
use tracing::{debug, info};

/// Smallest graph [`organic_graph`] builds.
pub const MIN_ORGANIC_NODES: usize = 10;

/// Number of seed papers that start without citations.
pub const ORGANIC_SEED_NODES: u64 = 4;

/// Builds a graph of `max(no_of_nodes, 10)` papers with ids `1..=n`.
///
/// Papers `1..=4` are seeds without citations. Every later paper arrives in
/// its own timestep and cites existing papers.
pub fn organic_graph<R: Rng + ?Sized>(
    no_of_nodes: usize,
    rng: &mut R,
) -> Result<Graph, GraphError> {
    let no_of_nodes = no_of_nodes.max(MIN_ORGANIC_NODES);
    let mut graph = Graph::with_name(format!("organic_graph({})", no_of_nodes));

    for id in 1..=ORGANIC_SEED_NODES {
        graph.add_node(id, NodeFactory::create(rng))?;
    }
    let options = TimestepOptions::new().with_edges(true);
    for _ in ORGANIC_SEED_NODES as usize..no_of_nodes {
        add_nodes_in_timestep(&mut graph, 1, options, rng)?;
    }
    info!(
        nodes = graph.count_nodes(),
        edges = graph.count_edges(),
        "organic graph grown"
    );

    let self_loops = graph.self_loop_edges();
    debug!(count = self_loops.len(), "removing self loops");
    for id in self_loops {
        graph.remove_edge(&id, &id)?;
        retract_citation(&mut graph, &id, &id)?;
    }
    Ok(graph)
}
