use citegraph_api::core::utils::logging::init_logger;
use citegraph_sim::{
    config::sim_config::{load_config, SimConfigBuilder},
    run, SimError,
};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(about = "Simulate the growth of citation networks")]
struct Args {
    /// TOML, JSON or YAML file with simulation settings
    #[arg(long, env = "CITEGRAPH_CONFIG")]
    config: Option<PathBuf>,

    #[arg(long, env = "CITEGRAPH_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    #[arg(long, env = "CITEGRAPH_SEED")]
    seed: Option<u64>,

    #[arg(long, env = "CITEGRAPH_LOG_LEVEL")]
    log_level: Option<String>,

    #[arg(long, env = "CITEGRAPH_MAX_SNAPSHOT_NODES")]
    max_snapshot_nodes: Option<usize>,

    #[arg(long, env = "CITEGRAPH_ORGANIC_NODES")]
    organic_nodes: Option<usize>,

    #[arg(long, env = "CITEGRAPH_EDGE_LIST")]
    edge_list: Option<PathBuf>,

    #[arg(long, env = "CITEGRAPH_ERDOS_RENYI_NODES")]
    erdos_renyi_nodes: Option<usize>,

    #[arg(long, env = "CITEGRAPH_ERDOS_RENYI_P")]
    erdos_renyi_p: Option<f64>,

    #[arg(long, env = "CITEGRAPH_SIM_TIMESTEPS")]
    sim_timesteps: Option<usize>,

    #[arg(long, env = "CITEGRAPH_SIM_TIMESTEP_NODES")]
    sim_timestep_nodes: Option<usize>,

    #[arg(long, env = "CITEGRAPH_METRICS_CSV")]
    metrics_csv: Option<PathBuf>,
}

pub(crate) fn cli() -> Result<(), SimError> {
    let args = Args::parse();

    let mut builder = SimConfigBuilder::from(load_config(None, args.config)?);
    if let Some(output_dir) = args.output_dir {
        builder = builder.with_output_dir(output_dir);
    }
    if args.seed.is_some() {
        builder = builder.with_seed(args.seed);
    }
    if let Some(log_level) = args.log_level {
        builder = builder.with_log_level(log_level);
    }
    if let Some(max_snapshot_nodes) = args.max_snapshot_nodes {
        builder = builder.with_max_snapshot_nodes(max_snapshot_nodes);
    }
    if let Some(nodes) = args.organic_nodes {
        builder = builder.with_organic_nodes(nodes);
    }
    if let Some(path) = args.edge_list {
        builder = builder.with_edge_list(path);
    }
    if let Some(nodes) = args.erdos_renyi_nodes {
        builder = builder.with_erdos_renyi_nodes(nodes);
    }
    if let Some(p) = args.erdos_renyi_p {
        builder = builder.with_erdos_renyi_p(p);
    }
    if let Some(timesteps) = args.sim_timesteps {
        builder = builder.with_sim_timesteps(timesteps);
    }
    if let Some(nodes) = args.sim_timestep_nodes {
        builder = builder.with_sim_timestep_nodes(nodes);
    }
    if let Some(path) = args.metrics_csv {
        builder = builder.with_metrics_csv(path);
    }
    let config = builder.build();

    init_logger(config.logging.env_filter());
    info!(?config, "starting simulation");

    let report = run(&config)?;
    info!(organic = %report.organic, "organic graph");
    if let Some(props) = &report.edge_list {
        info!(dataset = %props, "citation dataset");
    }
    info!(erdos_renyi = %report.erdos_renyi, "erdos renyi graph");
    info!(steps = report.metrics.len(), "simulation finished");
    Ok(())
}
