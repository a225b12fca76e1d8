//! Grows a graph by a batch of papers per timestep.
//!
//! # Examples
//!
//! ```rust
//! use citegraph::graphgen::timestep::{add_nodes_in_timestep, TimestepOptions};
//! use citegraph::prelude::*;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut graph = Graph::new();
//! let report = add_nodes_in_timestep(&mut graph, 10, TimestepOptions::new(), &mut rng).unwrap();
//! assert_eq!(report.first_id, Some(0));
//! assert_eq!(report.last_id, Some(9));
//!
//! let options = TimestepOptions::new().with_edges(true).with_metrics(true);
//! let report = add_nodes_in_timestep(&mut graph, 5, options, &mut rng).unwrap();
//! assert_eq!(report.first_id, Some(11));
//! assert_eq!(report.metrics.unwrap().total_no_of_nodes, 15);
//! ```

use crate::{
    algorithms::metrics::popularity::{count_by_popularity, reclassify_popularity},
    db::graph::graph::Graph,
    errors::GraphError,
    graphgen::{citation::add_citations_with_filter, next_id, node_factory::NodeFactory},
    io::metrics_csv::{MetricsCsvWriter, MetricsRow},
};
use citegraph_api::core::entities::GID;
use rand::Rng;
use tracing::info;

#[derive(Copy, Clone, Debug, Default)]
pub struct TimestepOptions<'a> {
    /// Seed citations for every new paper
    pub with_edges: bool,
    /// Reclassify popularity and compute a metrics row after the batch
    pub with_metrics: bool,
    /// Where metrics rows are appended, if anywhere
    pub metrics_sink: Option<&'a MetricsCsvWriter>,
}

impl<'a> TimestepOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_edges(mut self, with_edges: bool) -> Self {
        self.with_edges = with_edges;
        self
    }

    pub fn with_metrics(mut self, with_metrics: bool) -> Self {
        self.with_metrics = with_metrics;
        self
    }

    /// Enables metrics and appends them to `sink`.
    pub fn metrics_sink(mut self, sink: &'a MetricsCsvWriter) -> Self {
        self.with_metrics = true;
        self.metrics_sink = Some(sink);
        self
    }
}

/// Outcome of a single timestep.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimestepReport {
    /// Id of the first paper added, `None` if the batch was empty
    pub first_id: Option<u64>,
    pub last_id: Option<u64>,
    pub edges_added: usize,
    pub metrics: Option<MetricsRow>,
}

/// Add `count` papers with contiguous ids.
///
/// The first id is the current node count plus one, or `0` for an empty
/// graph. Fails with [`GraphError::NodeExistsError`] if one of those ids is
/// already taken, and with [`GraphError::InvalidNodeId`] if the graph uses
/// string ids.
pub fn add_nodes_in_timestep<R: Rng + ?Sized>(
    graph: &mut Graph,
    count: usize,
    options: TimestepOptions<'_>,
    rng: &mut R,
) -> Result<TimestepReport, GraphError> {
    let first = next_id(graph);
    let mut report = TimestepReport::default();

    for id in (first..).take(count) {
        graph.add_node(id, NodeFactory::create(rng))?;
        if options.with_edges {
            report.edges_added += add_citations_with_filter(graph, &GID::U64(id), rng)?;
        }
        report.first_id.get_or_insert(id);
        report.last_id = Some(id);
    }

    if options.with_metrics {
        reclassify_popularity(graph);
        let row = count_by_popularity(graph);
        if let Some(sink) = options.metrics_sink {
            sink.append(&row)?;
        }
        report.metrics = Some(row);
    }

    info!(
        count,
        first_id = ?report.first_id,
        edges_added = report.edges_added,
        num_nodes = graph.count_nodes(),
        num_edges = graph.count_edges(),
        "timestep complete"
    );
    Ok(report)
}
