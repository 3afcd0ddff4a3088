//! CLI argument definitions using clap
//!
//! - sakhi                      # Interactive chat (default)
//! - sakhi ask "question"       # One-shot answer
//! - sakhi status               # Show configuration
//! - sakhi detect "text"        # Show detected language

use clap::{Parser, Subcommand};
use sakhi_core::config::DEFAULT_CONFIG_FILE;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sakhi")]
#[command(about = "Krishi Sakhi - multilingual farming advisor")]
#[command(
    long_about = r#"Krishi Sakhi - multilingual farming advisor

Ask about crops, weather, pests or fertilizer in Malayalam, Hindi, Tamil or
English; the advisor answers in the language you write in.

USAGE:
  sakhi                          # Start interactive chat
  sakhi ask "your question"      # One-shot answer
  sakhi status                   # Show configuration
  sakhi detect "some text"       # Show detected language

The credential is read from GEMINI_API_KEY (or GOOGLE_API_KEY), a .env file,
or api_key in the config file."#
)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (toml, yaml or json)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Ask a single question and print the answer
    Ask {
        /// The question, in any supported language
        utterance: String,
    },

    /// Show configuration and credential status
    Status,

    /// Print the language detected for a piece of text
    Detect {
        /// Text to inspect
        text: String,
    },
}
