//! Algorithms that can be run on a citation graph.
//!
//! To run an algorithm simply import the module and call the function.
//!
//! # Examples
//!
//! ```rust
//! use citegraph::algorithms::metrics::graph_properties::graph_properties;
//! use citegraph::prelude::*;
//!
//! let mut g = Graph::new();
//! for id in 1..=3u64 {
//!     g.add_node(id, CitationMeta::new(Group::Science, Subgroup::Neuro, 0.1)).unwrap();
//! }
//! g.add_edge(&GID::U64(1), &GID::U64(2)).unwrap();
//!
//! let props = graph_properties(&g);
//! assert_eq!(props.wcc, 2);
//! assert_eq!(props.scc, 3);
//! ```

pub mod components;
pub mod metrics;
