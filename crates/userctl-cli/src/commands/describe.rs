//! `actions` command: print the static action registry

use crate::{
    cli::OutputFormat,
    error::CliResult,
    utils::{truncate_text, ColoredOutput},
};
use serde_json::json;
use userctl_core::registry::{ACTIONS, GROUP};

pub struct DescribeCommand;

impl DescribeCommand {
    pub fn run(format: OutputFormat) -> CliResult<()> {
        match format {
            OutputFormat::Text => Self::display_table(),
            _ => {
                let value = json!({ "group": GROUP, "actions": ACTIONS });
                println!("{}", format.format(&value)?);
            }
        }
        Ok(())
    }

    fn display_table() {
        println!("{}", ColoredOutput::highlight(&format!("Actions ({})", GROUP)));
        println!();
        println!("{:<16} {:<48} {}", "NAME", "USAGE", "DESCRIPTION");
        println!("{}", "-".repeat(100));

        for spec in ACTIONS {
            println!(
                "{:<16} {:<48} {}",
                spec.name,
                truncate_text(&spec.usage(), 48),
                truncate_text(spec.description, 40)
            );
            for param in spec.params {
                let required = if param.required { "required" } else { "optional" };
                println!(
                    "{:<16} {}",
                    "",
                    ColoredOutput::dim(&format!(
                        "  {} ({}): {}",
                        param.name, required, param.description
                    ))
                );
            }
        }
    }
}
