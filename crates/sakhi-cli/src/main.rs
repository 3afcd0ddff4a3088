//! Krishi Sakhi CLI application
//!
//! A terminal front-end for the farming advisor.
//!
//! # Modes
//!
//! - `sakhi`: interactive chat loop (default)
//! - `sakhi ask "<question>"`: one-shot, exit code 0 only when an answer came back
//! - `sakhi status`: configuration overview
//! - `sakhi detect "<text>"`: show which language a message is detected as
//!
//! Set `RUST_LOG=debug` (or pass `--verbose`) for diagnostic logging.

mod args;
mod commands;
mod console;
mod router;

use args::Cli;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    router::route(cli).await
}

/// Install the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or debug
/// output from the sakhi crates with `--verbose`. Logs go to stderr so that
/// answers on stdout stay clean.
fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let default_directive = if verbose {
        "warn,sakhi=debug,sakhi_core=debug,sakhi_cli=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))
}
