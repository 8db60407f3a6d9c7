//! CLI argument definitions using clap

use crate::error::CliResult;
use clap::{builder::NonEmptyStringValueParser, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use userctl_core::{Action, ConfigLayer};

#[derive(Parser)]
#[command(
    name = "userctl",
    about = "userctl - CRUD actions against the user directory service",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory service base URL
    #[arg(long, global = true, env = "USERCTL_BASE_URL")]
    pub base_url: Option<String>,

    /// Bearer token file written by the execution host
    #[arg(long, global = true, env = "USERCTL_TOKEN_PATH")]
    pub token_path: Option<PathBuf>,

    /// Cluster CA certificate file written by the execution host
    #[arg(long, global = true, env = "USERCTL_CA_CERT_PATH")]
    pub ca_cert_path: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "USERCTL_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Config file (YAML or JSON)
    #[arg(long, global = true, env = "USERCTL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        global = true,
        value_enum,
        env = "USERCTL_FORMAT",
        default_value = "text"
    )]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

impl Cli {
    /// Settings given on the command line or through the environment
    pub fn config_layer(&self) -> ConfigLayer {
        ConfigLayer {
            base_url: self.base_url.clone(),
            token_path: self.token_path.clone(),
            ca_cert_path: self.ca_cert_path.clone(),
            timeout_secs: self.timeout,
            ..Default::default()
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Retrieve all users from the database
    #[command(name = "get_all_users")]
    GetAllUsers,

    /// Retrieve a specific user by ID or email
    #[command(name = "get_user")]
    GetUser {
        /// ID or email of the user to retrieve
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        identifier: String,
    },

    /// Create a new user
    #[command(name = "create_user")]
    CreateUser {
        /// Name of the user
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        name: String,
        /// Email of the user
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        email: String,
    },

    /// Update an existing user by ID or email
    #[command(name = "update_user")]
    UpdateUser {
        /// ID or email of the user to update
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        identifier: String,
        /// New name for the user
        new_name: Option<String>,
        /// New email for the user
        new_email: Option<String>,
    },

    /// Delete a user by ID or email
    #[command(name = "delete_user")]
    DeleteUser {
        /// ID or email of the user to delete
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        identifier: String,
    },

    /// Run an action by name with positional arguments
    Run {
        /// Action name (see `userctl actions`)
        action: String,

        /// Positional arguments in declaration order
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// List the available actions and their parameters
    Actions,

    /// Load the cluster credentials and show the resulting context
    Context,
}

impl Commands {
    /// The bound action for the named subcommands; `None` for the rest
    pub fn to_action(&self) -> Option<Action> {
        match self {
            Self::GetAllUsers => Some(Action::GetAllUsers),
            Self::GetUser { identifier } => Some(Action::get_user(identifier)),
            Self::CreateUser { name, email } => Some(Action::create_user(name, email)),
            Self::UpdateUser {
                identifier,
                new_name,
                new_email,
            } => Some(Action::update_user(
                identifier,
                new_name.clone(),
                new_email.clone(),
            )),
            Self::DeleteUser { identifier } => Some(Action::delete_user(identifier)),
            Self::Run { .. } | Self::Actions | Self::Context => None,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Pretty-printed JSON
    Pretty,
    /// Compact JSON
    Json,
    /// YAML format
    Yaml,
}

impl OutputFormat {
    /// Serialize a value for the structured formats. `Text` falls back to
    /// pretty JSON; callers render text themselves.
    pub fn format<T: Serialize>(&self, value: &T) -> CliResult<String> {
        let output = match self {
            Self::Text | Self::Pretty => serde_json::to_string_pretty(value)?,
            Self::Json => serde_json::to_string(value)?,
            Self::Yaml => serde_yaml::to_string(value)?,
        };
        Ok(output)
    }
}
