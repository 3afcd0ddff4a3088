//! Interactive chat loop

use super::prepare_advisor;
use crate::console::CliConsole;
use anyhow::Context;
use sakhi_core::prompt::GREETING;
use sakhi_core::{Outcome, ThrottleState};
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Run the chat loop until `/quit`, `/exit` or end of input
pub async fn execute(config_file: &Path, verbose: bool) -> anyhow::Result<ExitCode> {
    let mut console = CliConsole::new(verbose);
    let Some(advisor) = prepare_advisor(config_file, &console) else {
        return Ok(ExitCode::FAILURE);
    };

    console.info(&format!("Models: {}", advisor.candidates().join(", ")));
    console.print_greeting(GREETING);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        console.print_prompt();
        std::io::stdout().flush().context("failed to flush stdout")?;

        let Some(line) = lines.next_line().await.context("failed to read input")? else {
            println!();
            break;
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if is_exit_command(trimmed) {
            break;
        }

        console.start_progress("Thinking...");
        let outcome = advisor.advise(&line).await;
        console.finish_progress();
        console.print_outcome(&outcome);

        if let Some(hint) = cooldown_hint(&outcome, advisor.gate().state(Instant::now())) {
            console.warn(&hint);
        }
        if ends_session(&outcome) {
            console.warn("Retrying will not help until the configuration is fixed. Ending the session.");
            return Ok(ExitCode::FAILURE);
        }
    }

    console.success("നന്ദി! Happy farming.");
    Ok(ExitCode::SUCCESS)
}

/// How long until the gate accepts again, for a throttled outcome
fn cooldown_hint(outcome: &Outcome, state: ThrottleState) -> Option<String> {
    match (outcome, state) {
        (Outcome::Throttled, ThrottleState::Cooling { remaining }) => Some(format!(
            "Ready again in {:.1}s",
            remaining.as_secs_f32()
        )),
        _ => None,
    }
}

/// A failure that no amount of waiting will fix
fn ends_session(outcome: &Outcome) -> bool {
    outcome
        .user_message()
        .is_some_and(|friendly| !friendly.is_recoverable)
}

fn is_exit_command(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "/quit" | "/exit")
}
