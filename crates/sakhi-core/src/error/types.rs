//! Core error types for Sakhi

use thiserror::Error;

/// Result type alias for Sakhi operations
pub type SakhiResult<T> = Result<T, SakhiError>;

/// Main error type for Sakhi
///
/// Only `Config` ever reaches a caller of [`crate::advisor::Advisor`]; every
/// other variant is produced inside the orchestration layer and folded into an
/// [`crate::outcome::Outcome`] before it crosses the public boundary.
#[derive(Error, Debug, Clone)]
pub enum SakhiError {
    /// Configuration related errors (missing credential, bad values)
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// Completion service errors reported by the provider
    #[error("LLM error: {message}")]
    Llm {
        message: String,
        provider: Option<String>,
        status_code: Option<u16>,
    },

    /// Transport-level failures (connect, timeout, TLS)
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        url: Option<String>,
    },
}

impl SakhiError {
    /// Stable error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "SAKHI_CONFIG",
            Self::Llm { .. } => "SAKHI_LLM",
            Self::Http { .. } => "SAKHI_HTTP",
        }
    }

    /// Human-readable message without the variant prefix
    pub fn message(&self) -> &str {
        match self {
            Self::Config { message, .. }
            | Self::Llm { message, .. }
            | Self::Http { message, .. } => message,
        }
    }

    /// Whether this is a configuration error (fail-fast class)
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }
}
