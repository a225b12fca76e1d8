//! Provides functionality for growing citation graphs.
//!
//! Every generator takes the random source explicitly, so seeding a
//! `StdRng` makes a run reproducible end to end.

use crate::db::graph::graph::Graph;

pub mod citation;
pub mod erdos_renyi;
pub mod node_factory;
pub mod organic;
pub mod timestep;

/// First id handed out by the next timestep: `count + 1`, or `0` for an
/// empty graph.
pub(crate) fn next_id(g: &Graph) -> u64 {
    match g.count_nodes() {
        0 => 0,
        n => n as u64 + 1,
    }
}
