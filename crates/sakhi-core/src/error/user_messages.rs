//! User-friendly error messages
//!
//! Rendering layer shared by configuration errors and non-success outcomes.
//! Messages here are safe to show to a farmer: they never embed raw provider
//! detail.

use super::types::SakhiError;

/// Error category for user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Configuration issues
    Configuration,
    /// Local pacing, caller asked too quickly
    Pacing,
    /// Authentication/authorization failures
    Authentication,
    /// Provider rate limiting
    RateLimit,
    /// Account quota exhausted
    Quota,
    /// No configured model is currently served
    ServiceUnavailable,
    /// Anything else
    Internal,
}

impl ErrorCategory {
    /// Get a user-friendly category name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Configuration => "Configuration Error",
            Self::Pacing => "Please Wait",
            Self::Authentication => "Authentication Error",
            Self::RateLimit => "Rate Limit Exceeded",
            Self::Quota => "Quota Exceeded",
            Self::ServiceUnavailable => "Service Unavailable",
            Self::Internal => "Something Went Wrong",
        }
    }
}

/// User-friendly error information
#[derive(Debug, Clone)]
pub struct UserFriendlyError {
    /// The error category
    pub category: ErrorCategory,
    /// User-friendly title/summary
    pub title: String,
    /// Detailed user-friendly message
    pub message: String,
    /// Suggested actions to resolve the error
    pub suggestions: Vec<String>,
    /// Whether waiting or retrying can help
    pub is_recoverable: bool,
}

impl UserFriendlyError {
    /// Create a new user-friendly error
    pub fn new(
        category: ErrorCategory,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            title: title.into(),
            message: message.into(),
            suggestions: Vec::new(),
            is_recoverable: true,
        }
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Set whether the error is recoverable
    pub fn recoverable(mut self, is_recoverable: bool) -> Self {
        self.is_recoverable = is_recoverable;
        self
    }

    /// Format the error for display
    pub fn format_display(&self) -> String {
        let mut output = format!(
            "{}: {}\n\n{}",
            self.category.display_name(),
            self.title,
            self.message
        );

        if !self.suggestions.is_empty() {
            output.push_str("\n\nSuggested actions:");
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                output.push_str(&format!("\n  {}. {}", i + 1, suggestion));
            }
        }

        output
    }
}

impl From<&SakhiError> for UserFriendlyError {
    fn from(error: &SakhiError) -> Self {
        match error {
            SakhiError::Config { message, .. } => {
                let message_lower = message.to_lowercase();
                let friendly = UserFriendlyError::new(
                    ErrorCategory::Configuration,
                    "Advisor is not configured",
                    message.clone(),
                )
                .recoverable(false);
                if message_lower.contains("api_key") || message_lower.contains("credential") {
                    friendly
                        .with_suggestion("Set GEMINI_API_KEY in your environment or .env file")
                        .with_suggestion("Or add api_key to sakhi.toml")
                } else {
                    friendly.with_suggestion("Review sakhi.toml and SAKHI_* environment variables")
                }
            }
            // Runtime faults never show their raw detail.
            SakhiError::Llm { .. } | SakhiError::Http { .. } => UserFriendlyError::new(
                ErrorCategory::Internal,
                "Unexpected error",
                "Something went wrong while fetching the AI response.",
            )
            .with_suggestion("Try again in a moment"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_mentions_credential() {
        let error = SakhiError::config("GEMINI_API_KEY is not set (api_key missing)");
        let friendly: UserFriendlyError = (&error).into();
        assert_eq!(friendly.category, ErrorCategory::Configuration);
        assert!(!friendly.is_recoverable);
        assert!(friendly.suggestions[0].contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_runtime_detail_is_withheld() {
        let error = SakhiError::llm("upstream stack trace at node 7");
        let friendly: UserFriendlyError = (&error).into();
        assert_eq!(friendly.category, ErrorCategory::Internal);
        assert!(!friendly.format_display().contains("node 7"));
    }

    #[test]
    fn test_format_display() {
        let error = UserFriendlyError::new(
            ErrorCategory::Authentication,
            "API key invalid",
            "The provided API key was rejected",
        )
        .with_suggestion("Check your API key")
        .with_suggestion("Regenerate the key if needed");

        let display = error.format_display();
        assert!(display.contains("Authentication Error"));
        assert!(display.contains("API key invalid"));
        assert!(display.contains("Suggested actions"));
        assert!(display.contains("1. Check your API key"));
        assert!(display.contains("2. Regenerate the key"));
    }
}
