pub mod app_config;
pub mod config;
pub mod model;
pub mod sizing;
pub mod wire;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use model::{Outlet, OutletDetailsResponse};
pub use sizing::{load_sizing, resolve_sizing, SizingConfig};

/// Placeholder shared secret accepted in development when none is configured.
pub const DEVELOPMENT_SECRET_KEY: &str = "eazle-secret-2025";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read sizing file {path}: {source}")]
    SizingFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse sizing file: {0}")]
    SizingFileParse(#[from] serde_yaml::Error),

    #[error("unknown sizing profile \"{0}\" (expected baseline, compact or disabled)")]
    UnknownProfile(String),

    #[error("configuration validation failed: {0}")]
    Validation(String),
}
