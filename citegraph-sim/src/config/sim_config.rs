use crate::config::log_config::LoggingConfig;
use citegraph::io::node_link::DEFAULT_MAX_SNAPSHOT_NODES;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_DIR: &str = ".";
pub const DEFAULT_ORGANIC_NODES: usize = 35;
pub const DEFAULT_ORGANIC_TIMESTEP_NODES: usize = 10;
pub const DEFAULT_ORGANIC_SNAPSHOT: &str = "node_link_data.json";
pub const DEFAULT_EDGE_LIST: &str = "test.edgelist";
pub const DEFAULT_EDGE_LIST_SNAPSHOT: &str = "stanford_dataset.json";
pub const DEFAULT_ERDOS_RENYI_NODES: usize = 100;
pub const DEFAULT_ERDOS_RENYI_P: f64 = 0.3;
pub const DEFAULT_ERDOS_RENYI_SNAPSHOT: &str = "erdos_renyi.json";
pub const DEFAULT_SIM_TIMESTEPS: usize = 2;
pub const DEFAULT_SIM_TIMESTEP_NODES: usize = 50;
pub const DEFAULT_METRICS_CSV: &str = "erdos_renyi_sim_metrics.csv";

/// Organically grown graph, extended by one timestep.
#[derive(Debug, Deserialize, PartialEq, Clone, Serialize)]
pub struct OrganicConfig {
    pub nodes: usize,
    pub timestep_nodes: usize,
    pub snapshot: PathBuf,
}

impl Default for OrganicConfig {
    fn default() -> Self {
        Self {
            nodes: DEFAULT_ORGANIC_NODES,
            timestep_nodes: DEFAULT_ORGANIC_TIMESTEP_NODES,
            snapshot: DEFAULT_ORGANIC_SNAPSHOT.into(),
        }
    }
}

/// Real dataset loaded from an edge list. Relative paths resolve against the
/// working directory, not the output directory.
#[derive(Debug, Deserialize, PartialEq, Clone, Serialize)]
pub struct EdgeListConfig {
    pub path: PathBuf,
    pub snapshot: PathBuf,
}

impl Default for EdgeListConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_EDGE_LIST.into(),
            snapshot: DEFAULT_EDGE_LIST_SNAPSHOT.into(),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq, Clone, Serialize)]
pub struct ErdosRenyiConfig {
    pub nodes: usize,
    pub p: f64,
    pub snapshot: PathBuf,
}

impl Default for ErdosRenyiConfig {
    fn default() -> Self {
        Self {
            nodes: DEFAULT_ERDOS_RENYI_NODES,
            p: DEFAULT_ERDOS_RENYI_P,
            snapshot: DEFAULT_ERDOS_RENYI_SNAPSHOT.into(),
        }
    }
}

/// Timesteps with metrics run on top of the Erdős-Rényi graph.
#[derive(Debug, Deserialize, PartialEq, Clone, Serialize)]
pub struct SimulationConfig {
    pub timesteps: usize,
    pub nodes_per_timestep: usize,
    pub metrics_csv: PathBuf,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            timesteps: DEFAULT_SIM_TIMESTEPS,
            nodes_per_timestep: DEFAULT_SIM_TIMESTEP_NODES,
            metrics_csv: DEFAULT_METRICS_CSV.into(),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq, Clone, Serialize)]
pub struct SimConfig {
    pub logging: LoggingConfig,
    /// Directory that snapshots and metrics are written to
    pub output_dir: PathBuf,
    /// Seed for the whole run, entropy when unset
    pub seed: Option<u64>,
    pub max_snapshot_nodes: usize,
    pub organic: OrganicConfig,
    pub edge_list: EdgeListConfig,
    pub erdos_renyi: ErdosRenyiConfig,
    pub simulation: SimulationConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            output_dir: DEFAULT_OUTPUT_DIR.into(),
            seed: None,
            max_snapshot_nodes: DEFAULT_MAX_SNAPSHOT_NODES,
            organic: OrganicConfig::default(),
            edge_list: EdgeListConfig::default(),
            erdos_renyi: ErdosRenyiConfig::default(),
            simulation: SimulationConfig::default(),
        }
    }
}

pub struct SimConfigBuilder {
    config: SimConfig,
}

impl From<SimConfig> for SimConfigBuilder {
    fn from(config: SimConfig) -> Self {
        Self { config }
    }
}

impl Default for SimConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SimConfigBuilder {
    pub fn new() -> Self {
        SimConfig::default().into()
    }

    pub fn with_log_level(mut self, log_level: String) -> Self {
        self.config.logging.log_level = log_level;
        self
    }

    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.config.output_dir = output_dir;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn with_max_snapshot_nodes(mut self, max_snapshot_nodes: usize) -> Self {
        self.config.max_snapshot_nodes = max_snapshot_nodes;
        self
    }

    pub fn with_organic_nodes(mut self, nodes: usize) -> Self {
        self.config.organic.nodes = nodes;
        self
    }

    pub fn with_organic_timestep_nodes(mut self, nodes: usize) -> Self {
        self.config.organic.timestep_nodes = nodes;
        self
    }

    pub fn with_edge_list(mut self, path: PathBuf) -> Self {
        self.config.edge_list.path = path;
        self
    }

    pub fn with_erdos_renyi_nodes(mut self, nodes: usize) -> Self {
        self.config.erdos_renyi.nodes = nodes;
        self
    }

    pub fn with_erdos_renyi_p(mut self, p: f64) -> Self {
        self.config.erdos_renyi.p = p;
        self
    }

    pub fn with_sim_timesteps(mut self, timesteps: usize) -> Self {
        self.config.simulation.timesteps = timesteps;
        self
    }

    pub fn with_sim_timestep_nodes(mut self, nodes: usize) -> Self {
        self.config.simulation.nodes_per_timestep = nodes;
        self
    }

    pub fn with_metrics_csv(mut self, metrics_csv: PathBuf) -> Self {
        self.config.simulation.metrics_csv = metrics_csv;
        self
    }

    pub fn build(self) -> SimConfig {
        self.config
    }
}

// Order of precedence: config path >> sim_config >> defaults.
// Command line overrides are applied on top of the result by the caller.
pub fn load_config(
    sim_config: Option<SimConfig>,
    config_path: Option<PathBuf>,
) -> Result<SimConfig, ConfigError> {
    let sim_config = sim_config.unwrap_or_default();
    let json = serde_json::to_string(&sim_config).map_err(|e| ConfigError::Foreign(Box::new(e)))?;
    let mut builder = Config::builder().add_source(File::from_str(&json, FileFormat::Json));
    if let Some(config_path) = config_path {
        builder = builder.add_source(File::from(config_path));
    }
    builder.build()?.try_deserialize::<SimConfig>()
}
