//! Command routing logic for CLI

use crate::args::{Cli, Commands};
use crate::commands;
use std::process::ExitCode;

/// Route CLI commands to their respective handlers
pub async fn route(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Some(Commands::Ask { utterance }) => {
            Ok(commands::ask::execute(&cli.config, &utterance, cli.verbose).await)
        }
        Some(Commands::Status) => Ok(commands::status::execute(&cli.config, cli.verbose)),
        Some(Commands::Detect { text }) => Ok(commands::detect::execute(&text)),
        None => commands::interactive::execute(&cli.config, cli.verbose).await,
    }
}
