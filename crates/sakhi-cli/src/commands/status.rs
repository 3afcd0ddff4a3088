//! Configuration status

use crate::console::CliConsole;
use colored::*;
use sakhi_core::config::load_config;
use sakhi_core::error::UserFriendlyError;
use std::path::Path;
use std::process::ExitCode;

/// Show configuration; fails when the advisor could not answer questions
pub fn execute(config_file: &Path, verbose: bool) -> ExitCode {
    let console = CliConsole::new(verbose);
    console.print_header("Krishi Sakhi Status");
    println!("  Version: {}", env!("CARGO_PKG_VERSION").green());
    println!(
        "  Config File: {}",
        if config_file.exists() {
            config_file.display().to_string().green()
        } else {
            format!("{} (not found, using defaults)", config_file.display()).dimmed()
        }
    );
    println!();

    let config = match load_config(Some(config_file)) {
        Ok(config) => config,
        Err(e) => {
            console.print_friendly(&UserFriendlyError::from(&e));
            return ExitCode::FAILURE;
        }
    };

    println!("{}", "Credential".cyan().bold());
    if config.is_configured() {
        console.success(&format!("API key: {}", config.masked_api_key()));
    } else {
        console.warn("API key not set. Set GEMINI_API_KEY in your environment or .env file.");
    }
    println!();

    println!("{}", "Models (fallback order)".cyan().bold());
    for (i, model) in config.models.iter().enumerate() {
        println!("  {}. {}", i + 1, model.cyan());
    }
    println!();

    println!("{}", "Request Settings".cyan().bold());
    println!("  Base URL: {}", config.base_url);
    println!(
        "  Min Interval: {}",
        format!("{}ms", config.min_interval_ms).yellow()
    );
    println!(
        "  Timeouts: connect {}s, request {}s",
        config.timeouts.connection_timeout_secs, config.timeouts.request_timeout_secs
    );
    if let Some(temperature) = config.temperature {
        println!("  Temperature: {}", temperature);
    }
    if let Some(max_output_tokens) = config.max_output_tokens {
        println!("  Max Output Tokens: {}", max_output_tokens);
    }

    if config.is_configured() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
