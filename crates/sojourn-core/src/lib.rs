//! Shared configuration types for the Sojourn vendor-scout service.

mod app_config;
mod config;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingEnvVar(String),

    #[error("environment variable {var} has an invalid value: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
