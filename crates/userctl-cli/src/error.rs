//! Error types for the CLI

use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Bootstrap(#[from] userctl_core::BootstrapError),

    #[error("Configuration error: {0}")]
    Config(#[from] userctl_core::ConfigError),

    #[error("{0}")]
    Argument(#[from] userctl_core::ArgumentError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("General error: {0}")]
    General(String),
}

impl CliError {
    /// Usage problems exit with 2 like clap's own errors; everything else with 1
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Argument(_) => 2,
            _ => 1,
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
