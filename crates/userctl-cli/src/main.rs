//! userctl CLI main entry point

use clap::Parser;
use tracing::info;
use userctl_cli::{
    cli::{Cli, Commands},
    commands::{load_config, ActionCommand, ActionRequest, ContextCommand, DescribeCommand},
    error::{CliError, CliResult},
    utils::{init_tracing, ColoredOutput},
};

// Actions issue their requests strictly one after another.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{} {}", ColoredOutput::error("Error:"), e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> CliResult<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose)?;

    // Disable colored output if requested
    if cli.no_color {
        colored::control::set_override(false);
    }

    info!("userctl v{}", env!("CARGO_PKG_VERSION"));

    let request = match &cli.command {
        Commands::Actions => return DescribeCommand::run(cli.format),
        Commands::Context => {
            let config = load_config(&cli)?;
            return ContextCommand::run(&config, cli.format);
        }
        Commands::Run { action, args } => ActionRequest::Positional {
            name: action.clone(),
            args: args.clone(),
        },
        named => ActionRequest::Bound(named.to_action().ok_or_else(|| {
            CliError::General("subcommand does not name an action".to_string())
        })?),
    };

    let config = load_config(&cli)?;
    ActionCommand::run(&config, request, cli.format).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use userctl_cli::cli::OutputFormat;
    use userctl_core::{Action, Identifier, UserUpdate};

    #[test]
    fn test_get_user_parsing() {
        let cli = Cli::try_parse_from(["userctl", "get_user", "a@x.com"]).unwrap();
        assert_eq!(
            cli.command.to_action(),
            Some(Action::GetUser {
                identifier: Identifier::Email("a@x.com".to_string())
            })
        );
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_update_user_optional_arguments() {
        let cli = Cli::try_parse_from(["userctl", "update_user", "42", "Bob"]).unwrap();
        assert_eq!(
            cli.command.to_action(),
            Some(Action::UpdateUser {
                identifier: Identifier::Id("42".to_string()),
                update: UserUpdate::new(Some("Bob".to_string()), None),
            })
        );
    }

    #[test]
    fn test_required_arguments_are_enforced() {
        assert!(Cli::try_parse_from(["userctl", "create_user", "Alice"]).is_err());
        assert!(Cli::try_parse_from(["userctl", "get_user"]).is_err());
        assert!(Cli::try_parse_from(["userctl", "delete_user"]).is_err());

        // An empty required argument is as good as a missing one
        let cases: [&[&str]; 4] = [
            &["userctl", "delete_user", ""],
            &["userctl", "get_user", ""],
            &["userctl", "create_user", "Alice", ""],
            &["userctl", "update_user", "", "Bob"],
        ];
        for args in cases {
            let err = Cli::try_parse_from(args).err().unwrap();
            assert_eq!(err.exit_code(), 2, "{:?}", args);
        }
        assert!(Cli::try_parse_from(["userctl", "update_user", "42", "", "b@x.com"]).is_ok());
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "userctl",
            "get_all_users",
            "--format",
            "json",
            "--base-url",
            "http://localhost:8000",
            "--token-path",
            "/run/token",
            "--timeout",
            "5",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        let layer = cli.config_layer();
        assert_eq!(layer.base_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(layer.token_path, Some(PathBuf::from("/run/token")));
        assert_eq!(layer.timeout_secs, Some(5));
        assert_eq!(cli.command.to_action(), Some(Action::GetAllUsers));
    }

    #[test]
    fn test_run_collects_positional_arguments() {
        let cli =
            Cli::try_parse_from(["userctl", "run", "update_user", "a@x.com", "", "-new@x.com"])
                .unwrap();

        if let Commands::Run { action, args } = cli.command {
            assert_eq!(action, "update_user");
            assert_eq!(args, vec!["a@x.com", "", "-new@x.com"]);
        } else {
            panic!("Expected Run command");
        }
    }
}
