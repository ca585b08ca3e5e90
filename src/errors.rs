use thiserror::Error;

use chart_config::ConfigError;
use chart_core::CoreError;

/// Error type surfaced by the application layer and CLI.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Usage: {0}")]
    Usage(String),
}
