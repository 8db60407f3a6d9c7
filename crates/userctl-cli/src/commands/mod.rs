pub mod action;
pub mod context;
pub mod describe;

// Re-export command handlers
pub use action::{ActionCommand, ActionRequest};
pub use context::ContextCommand;
pub use describe::DescribeCommand;

use crate::cli::Cli;
use crate::error::CliResult;
use tracing::debug;
use userctl_core::{Config, ConfigLayer};

/// Defaults, then the config file if one was given, then flags and env
pub fn load_config(cli: &Cli) -> CliResult<Config> {
    let mut config = Config::default();

    if let Some(path) = &cli.config {
        debug!("Loading config file {}", path.display());
        config.merge(ConfigLayer::load_from_file(path)?);
    }

    config.merge(cli.config_layer());
    config.validate()?;
    Ok(config)
}
