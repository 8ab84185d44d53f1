// file: src/error.rs
// version: 1.0.0
// guid: 3fd7064e-7b5a-4940-823e-a8845d0df651

use thiserror::Error;

/// Result type alias for the agent
pub type Result<T> = std::result::Result<T, ImportError>;

/// Error types for the normatives import agent
#[derive(Error, Debug)]
pub enum ImportError {
    /// The initializer ran and exited with a non-zero status
    #[error("Initializer failed with exit code {exit_code}")]
    ProcessFailure { exit_code: i32 },

    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Initializer working directory does not exist: {}", .0.display())]
    MissingWorkDir(std::path::PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Archive error: {0}")]
    Archive(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ImportError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new archive error
    pub fn archive(msg: impl Into<String>) -> Self {
        Self::Archive(msg.into())
    }

    /// Exit code the agent process should terminate with for this error.
    ///
    /// Initializer failures are surfaced verbatim; everything else maps to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ProcessFailure { exit_code } if *exit_code > 0 => *exit_code,
            _ => 1,
        }
    }
}
