//! # citegraph
//!
//! `citegraph` simulates the growth of citation networks. Papers are nodes of
//! a directed graph and carry a small fixed set of attributes (group,
//! subgroup, probability, citation counters and a popularity level). New
//! papers cite a random, attribute-filtered sample of existing ones, so the
//! graph never gains a self-loop or a pair of papers citing each other.
//!
//! ## Modules
//!
//! * `db` - The graph store and node filters.
//! * `graphgen` - Random metadata, citation seeding, timestep growth and the
//!   organic and Erdős-Rényi generators.
//! * `algorithms` - Connected components, degree centrality, popularity
//!   classification and consistency checks.
//! * `graph_loader` - Loading real citation edge lists.
//! * `io` - Node-link JSON snapshots and metrics CSV output.
//!
//! ## Example
//!
//! ```rust
//! use citegraph::prelude::*;
//! use citegraph::graphgen::timestep::{add_nodes_in_timestep, TimestepOptions};
//! use citegraph::algorithms::metrics::graph_properties::graph_properties;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let mut graph = Graph::with_name("demo");
//! let options = TimestepOptions::new().with_edges(true).with_metrics(true);
//! add_nodes_in_timestep(&mut graph, 50, options, &mut rng).unwrap();
//!
//! let props = graph_properties(&graph);
//! assert!(props.wcc >= 1);
//! ```

pub mod algorithms;
pub mod db;
pub mod errors;
pub mod graph_loader;
pub mod graphgen;
pub mod io;

pub mod prelude {
    pub use crate::{
        db::{
            filter::{NodeFilter, PropertyFilter},
            graph::graph::Graph,
        },
        errors::GraphError,
    };
    pub use citegraph_api::core::{
        entities::{
            citation::{CitationMeta, Group, NodeAttr, PopularityLevel, Subgroup},
            properties::Prop,
            GID, VID,
        },
        Direction,
    };
}
