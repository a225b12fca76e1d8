use tracing_subscriber::{
    fmt, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

pub const DEFAULT_LOG_LEVEL: &str = "INFO";

/// Build the filter for a level such as `"INFO"` or `"citegraph=debug"`.
///
/// `RUST_LOG` wins when it is set.
pub fn get_log_env(log_level: String) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}

/// Install a global subscriber at `log_level`. Later calls are ignored, which
/// lets every test call this freely.
pub fn init_global_logger(log_level: String) {
    init_logger(get_log_env(log_level))
}

/// Install a global subscriber with a prepared filter.
pub fn init_logger(filter: EnvFilter) {
    Registry::default()
        .with(filter)
        .with(fmt::layer().with_span_events(FmtSpan::NONE))
        .try_init()
        .ok();
}

pub fn global_info_logger() {
    init_global_logger(DEFAULT_LOG_LEVEL.to_string())
}

pub fn global_debug_logger() {
    init_global_logger("DEBUG".to_string())
}
