//! Loaders for real citation datasets.
//!
//! # Example
//!
//! ```no_run
//! use citegraph::graph_loader::source::edge_list_loader::EdgeListLoader;
//! use citegraph::prelude::*;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut graph = Graph::with_name("cit-HepTh");
//! let summary = EdgeListLoader::new("data/cit-HepTh.txt.gz")
//!     .load_into_graph(&mut graph, &mut rng)
//!     .unwrap();
//! println!("{} edges from {} lines", summary.edges_added, summary.lines_read);
//! ```

pub mod source;
