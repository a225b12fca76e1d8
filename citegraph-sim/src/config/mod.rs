pub mod log_config;
pub mod sim_config;
