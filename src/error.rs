//! Error types for racetally
//!
//! Centralized error handling using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// All error types that can occur while sampling a test binary
#[derive(Debug, Error)]
pub enum RaceTallyError {
    /// The target could not be spawned (missing, not executable, ...)
    #[error("Failed to launch {}: {source}", .binary.display())]
    Launch {
        binary: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration value
    #[error("Config error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML config parse error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for racetally operations
pub type Result<T> = std::result::Result<T, RaceTallyError>;
