//! `context` command: bootstrap credentials without calling the service

use crate::{
    cli::OutputFormat,
    error::CliResult,
    utils::ColoredOutput,
};
use serde::Serialize;
use userctl_core::{ActionRunner, Config, ContextSummary};

#[derive(Debug, Serialize)]
struct ContextReport {
    #[serde(flatten)]
    credentials: ContextSummary,
    base_url: String,
    timeout_ms: u64,
}

pub struct ContextCommand;

impl ContextCommand {
    pub fn run(config: &Config, format: OutputFormat) -> CliResult<()> {
        let runner = ActionRunner::bootstrap(config)?;
        let report = ContextReport {
            credentials: runner.context().summary(),
            base_url: runner.client().base_url().to_string(),
            timeout_ms: config.timeout.total_ms,
        };

        match format {
            OutputFormat::Text => {
                println!(
                    "{} {}",
                    ColoredOutput::success("Context:"),
                    report.credentials.context
                );
                println!("Cluster server: {}", report.credentials.cluster_server);
                println!("Token file:     {}", report.credentials.token_path.display());
                println!("CA cert file:   {}", report.credentials.ca_cert_path.display());
                println!("Token:          {}", report.credentials.token);
                println!("CA certs:       {}", report.credentials.ca_certificates);
                println!("Directory URL:  {}", report.base_url);
                println!("Timeout:        {}ms", report.timeout_ms);
            }
            _ => println!("{}", format.format(&report)?),
        }
        Ok(())
    }
}
