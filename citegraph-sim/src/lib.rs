//! Runs the citation network simulation end to end.
//!
//! The run has four stages, each writing into the configured output
//! directory:
//!
//! 1. grow an organic graph, extend it by one timestep and snapshot it;
//! 2. load a real citation edge list, if present, and snapshot it;
//! 3. generate an Erdős-Rényi graph and snapshot it;
//! 4. grow the Erdős-Rényi graph over several timesteps, appending popularity
//!    metrics to a CSV file.

use crate::config::sim_config::SimConfig;
use citegraph::{
    algorithms::metrics::graph_properties::{graph_properties, GraphProperties},
    errors::GraphError,
    graph_loader::source::edge_list_loader::EdgeListLoader,
    graphgen::{
        erdos_renyi::erdos_renyi,
        organic::organic_graph,
        timestep::{add_nodes_in_timestep, TimestepOptions},
    },
    io::{
        metrics_csv::{MetricsCsvWriter, MetricsRow},
        node_link::SnapshotWriter,
    },
    prelude::Graph,
};
use ::config::ConfigError;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::fs;
use tracing::{info, warn};

pub mod config;

#[derive(thiserror::Error, Debug)]
pub enum SimError {
    #[error("Simulation failed: {0}")]
    Graph(#[from] GraphError),
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Connectivity and metrics collected over a run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimReport {
    pub organic: GraphProperties,
    /// `None` when the edge list file does not exist
    pub edge_list: Option<GraphProperties>,
    pub erdos_renyi: GraphProperties,
    pub metrics: Vec<MetricsRow>,
}

pub fn run(config: &SimConfig) -> Result<SimReport, SimError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    fs::create_dir_all(&config.output_dir).map_err(GraphError::from)?;
    let writer = SnapshotWriter::new(config.max_snapshot_nodes);

    info!(nodes = config.organic.nodes, "growing organic graph");
    let mut organic = organic_graph(config.organic.nodes, &mut rng)?;
    add_nodes_in_timestep(
        &mut organic,
        config.organic.timestep_nodes,
        TimestepOptions::new().with_edges(true),
        &mut rng,
    )?;
    let organic_props = graph_properties(&organic);
    writer.write(&organic, config.output_dir.join(&config.organic.snapshot))?;

    let edge_list = if config.edge_list.path.exists() {
        let mut graph = Graph::with_name("citation_dataset");
        EdgeListLoader::new(&config.edge_list.path).load_into_graph(&mut graph, &mut rng)?;
        let props = graph_properties(&graph);
        writer.write(&graph, config.output_dir.join(&config.edge_list.snapshot))?;
        Some(props)
    } else {
        warn!(
            path = %config.edge_list.path.display(),
            "edge list not found, skipping dataset"
        );
        None
    };

    let mut erdos = erdos_renyi(
        config.erdos_renyi.nodes,
        config.erdos_renyi.p,
        Some(rng.gen()),
    )?;
    writer.write(&erdos, config.output_dir.join(&config.erdos_renyi.snapshot))?;
    let erdos_props = graph_properties(&erdos);

    let sink = MetricsCsvWriter::new(config.output_dir.join(&config.simulation.metrics_csv));
    let options = TimestepOptions::new().with_edges(true).metrics_sink(&sink);
    let mut metrics = Vec::with_capacity(config.simulation.timesteps);
    for step in 0..config.simulation.timesteps {
        let report = add_nodes_in_timestep(
            &mut erdos,
            config.simulation.nodes_per_timestep,
            options,
            &mut rng,
        )?;
        info!(step, metrics = ?report.metrics, "simulation step");
        metrics.extend(report.metrics);
    }

    Ok(SimReport {
        organic: organic_props,
        edge_list,
        erdos_renyi: erdos_props,
        metrics,
    })
}
