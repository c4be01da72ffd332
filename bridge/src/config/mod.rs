pub mod bridge_config;
pub mod config_error;
