//! Generates a citation graph using the Erdős-Rényi model
//!
//! # Examples
//!
//! ```
//! use citegraph::graphgen::erdos_renyi::erdos_renyi;
//! let graph = erdos_renyi(100, 0.1, None).unwrap();
//! assert_eq!(graph.count_nodes(), 100);
//! ```

use crate::{
    db::graph::graph::Graph,
    errors::GraphError,
    graphgen::{
        citation::add_citations_with_filter,
        timestep::{add_nodes_in_timestep, TimestepOptions},
    },
};
use citegraph_api::core::entities::GID;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::info;

/// Generates an Erdős-Rényi style citation graph and returns it.
///
/// # Arguments
/// * `nodes_to_add` - Number of papers to create in the graph.
/// * `p` - Probability that an ordered pair of papers is selected.
/// * `seed` - Optional 64-bit seed for deterministic random generation. If `None`, uses entropy.
///
/// # Behavior
/// - Adds `nodes_to_add` papers with sequential u64 ids (0, 1, 2, ...) and random metadata.
/// - For each ordered pair `(i, j)` with `i != j`, selected with probability `p`,
///   paper `i` draws citations through [`add_citations_with_filter`]. The
///   selected pair only triggers the draw; it does not force the edge `i -> j`.
/// - `p <= 0` leaves the graph without edges.
///
/// # Example
/// ```
/// use citegraph::graphgen::erdos_renyi::erdos_renyi;
///
/// let graph = erdos_renyi(10, 0.2, Some(42)).unwrap();
/// assert_eq!(graph.name(), Some("gnp_random_graph(10,0.2)"));
/// ```
pub fn erdos_renyi(nodes_to_add: usize, p: f64, seed: Option<u64>) -> Result<Graph, GraphError> {
    let mut rng = match seed {
        Some(seed_value) => StdRng::seed_from_u64(seed_value),
        None => StdRng::from_entropy(),
    };
    let mut graph = Graph::with_name(format!("gnp_random_graph({},{})", nodes_to_add, p));
    add_nodes_in_timestep(&mut graph, nodes_to_add, TimestepOptions::new(), &mut rng)?;
    if p <= 0.0 {
        return Ok(graph);
    }

    let p = p.min(1.0);
    let mut selected = 0usize;
    for i in 0..nodes_to_add as u64 {
        let source_id = GID::U64(i);
        for j in 0..nodes_to_add as u64 {
            if i != j && rng.gen_bool(p) {
                selected += 1;
                add_citations_with_filter(&mut graph, &source_id, &mut rng)?;
            }
        }
    }
    info!(
        nodes = graph.count_nodes(),
        edges = graph.count_edges(),
        selected,
        "erdos renyi graph generated"
    );
    Ok(graph)
}
