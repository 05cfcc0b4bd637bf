mod app_config;
mod error;

pub use app_config::{AppConfig, ApproximationConfig, config_schema, load_config};
pub use error::ConfigError;
