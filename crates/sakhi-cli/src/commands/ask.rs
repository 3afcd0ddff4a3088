//! One-shot question

use super::prepare_advisor;
use crate::console::CliConsole;
use std::path::Path;
use std::process::ExitCode;

/// Ask one question; succeeds only when an answer came back
pub async fn execute(config_file: &Path, utterance: &str, verbose: bool) -> ExitCode {
    let mut console = CliConsole::new(verbose);
    let Some(advisor) = prepare_advisor(config_file, &console) else {
        return ExitCode::FAILURE;
    };

    if utterance.trim().is_empty() {
        console.warn("Please type a question.");
        return ExitCode::FAILURE;
    }

    console.start_progress("Thinking...");
    let outcome = advisor.advise(utterance).await;
    console.finish_progress();
    console.print_outcome(&outcome);

    if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
