use std::io;

use thiserror::Error;

/// Failures while reading or writing the chart preferences file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Config file is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
}
