use citegraph_api::core::utils::logging::{get_log_env, DEFAULT_LOG_LEVEL};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize, PartialEq, Clone, serde::Serialize)]
pub struct LoggingConfig {
    pub log_level: String,
}

impl LoggingConfig {
    /// Filter for the configured level, overridden by `RUST_LOG`.
    pub fn env_filter(&self) -> EnvFilter {
        get_log_env(self.log_level.clone())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
