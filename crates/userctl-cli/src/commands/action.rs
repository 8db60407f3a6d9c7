//! Directory action execution command

use crate::{cli::OutputFormat, error::CliResult, render::render_text};
use tracing::debug;
use userctl_core::{registry, Action, ActionKind, ActionRunner, Config, Envelope};

/// What to run: an action already bound by clap, or a name plus positional
/// arguments bound through the registry.
#[derive(Debug, Clone)]
pub enum ActionRequest {
    Bound(Action),
    Positional { name: String, args: Vec<String> },
}

pub struct ActionCommand;

impl ActionCommand {
    /// Bootstrap credentials, bind, run, print the envelope.
    ///
    /// Returns `Ok` for both success and error envelopes; only bootstrap and
    /// argument problems are errors here.
    pub async fn run(
        config: &Config,
        request: ActionRequest,
        format: OutputFormat,
    ) -> CliResult<Envelope> {
        let runner = ActionRunner::bootstrap(config)?;

        let action = match request {
            ActionRequest::Bound(action) => action,
            ActionRequest::Positional { name, args } => registry::bind(&name, &args)?,
        };
        debug!("Bound action: {:?}", action);

        let envelope = runner.run(&action).await;
        println!("{}", Self::render(action.kind(), &envelope, format)?);
        Ok(envelope)
    }

    pub fn render(kind: ActionKind, envelope: &Envelope, format: OutputFormat) -> CliResult<String> {
        match format {
            OutputFormat::Text => Ok(render_text(kind, envelope)),
            _ => format.format(envelope),
        }
    }
}
