//! Error types for configuration loading

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported config format '{extension}' (expected .json, .yaml or .yml)")]
    UnsupportedFormat { extension: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
