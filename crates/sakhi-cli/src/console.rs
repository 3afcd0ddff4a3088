//! CLI console utilities

use colored::*;
use console::measure_text_width;
use indicatif::{ProgressBar, ProgressStyle};
use sakhi_core::Outcome;
use sakhi_core::error::UserFriendlyError;
use std::time::Duration;

/// CLI console for formatted output
pub struct CliConsole {
    verbose: bool,
    progress_bar: Option<ProgressBar>,
}

impl CliConsole {
    pub const fn new(verbose: bool) -> Self {
        Self {
            verbose,
            progress_bar: None,
        }
    }

    /// Print an info message (verbose only)
    pub fn info(&self, message: &str) {
        if self.verbose {
            println!("{} {}", "ℹ".blue().bold(), message);
        }
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", "✓".green().bold(), message.green());
    }

    pub fn warn(&self, message: &str) {
        println!("{} {}", "⚠".yellow().bold(), message.yellow());
    }

    /// Print a header
    pub fn print_header(&self, title: &str) {
        println!();
        println!("{}", title.bold().underline());
        println!("{}", "=".repeat(measure_text_width(title)).dimmed());
    }

    /// Print the advisor greeting
    pub fn print_greeting(&self, greeting: &str) {
        println!();
        println!("{}", greeting.green().bold());
        println!(
            "{}",
            "Type your question and press Enter. /quit or /exit to leave.".dimmed()
        );
        println!();
    }

    /// Print the input prompt marker, unless input is piped in
    pub fn print_prompt(&self) {
        if console::user_attended() {
            print!("{} ", "you ›".blue().bold());
        }
    }

    /// Start the thinking spinner
    pub fn start_progress(&mut self, message: &str) {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        let pb = ProgressBar::new_spinner();
        pb.set_style(style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        self.progress_bar = Some(pb);
    }

    /// Remove the spinner line
    pub fn finish_progress(&mut self) {
        if let Some(pb) = self.progress_bar.take() {
            pb.finish_and_clear();
        }
    }

    /// Render an orchestration outcome
    pub fn print_outcome(&self, outcome: &Outcome) {
        if let Some(text) = outcome.text() {
            println!("{} {}", "sakhi ›".green().bold(), text);
        } else if let Some(friendly) = outcome.user_message() {
            self.print_friendly(&friendly);
        }
        println!();
    }

    /// Render a user-facing error with its suggestions
    pub fn print_friendly(&self, friendly: &UserFriendlyError) {
        eprintln!(
            "{} {}",
            "⚠️".yellow().bold(),
            friendly.format_display().yellow()
        );
    }
}
