//! Orchestration outcomes
//!
//! [`Outcome`] is the only thing callers of `advise` ever receive. Renderers
//! show `Success` text as-is and everything else through
//! [`Outcome::user_message`], which never exposes upstream detail.

use crate::error::{ErrorCategory, UserFriendlyError};
use std::fmt;

/// Result of one orchestration call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Completion text, verbatim from the service
    Success(String),
    /// Rejected locally by the throttle gate
    Throttled,
    /// Provider rate limit
    RateLimited,
    /// Account quota exhausted
    QuotaExceeded,
    /// Credential rejected
    AuthFailure,
    /// Every configured model was reported as not found
    AllModelsUnavailable,
    /// Anything unclassified; the detail is for diagnostics only
    UnknownFailure(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The completion text, if any
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Success(text) => Some(text),
            _ => None,
        }
    }

    /// Stable snake_case label for logs
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::Success(_) => "success",
            Self::Throttled => "throttled",
            Self::RateLimited => "rate_limited",
            Self::QuotaExceeded => "quota_exceeded",
            Self::AuthFailure => "auth_failure",
            Self::AllModelsUnavailable => "all_models_unavailable",
            Self::UnknownFailure(_) => "unknown_failure",
        }
    }

    /// End-user rendering of a non-success outcome
    pub fn user_message(&self) -> Option<UserFriendlyError> {
        let friendly = match self {
            Self::Success(_) => return None,
            Self::Throttled => UserFriendlyError::new(
                ErrorCategory::Pacing,
                "Too many questions at once",
                "Please wait a few seconds before asking again.",
            )
            .with_suggestion("Wait a few seconds, then send your question again"),
            Self::RateLimited => UserFriendlyError::new(
                ErrorCategory::RateLimit,
                "The advisor is busy",
                "The AI service is receiving too many requests right now.",
            )
            .with_suggestion("Wait a moment and try again"),
            Self::QuotaExceeded => UserFriendlyError::new(
                ErrorCategory::Quota,
                "Daily limit reached",
                "The AI service quota for this account has been used up.",
            )
            .with_suggestion("Try again later")
            .with_suggestion("Ask the administrator to check the plan and billing details"),
            Self::AuthFailure => UserFriendlyError::new(
                ErrorCategory::Authentication,
                "The AI service rejected the credential",
                "The configured API key was not accepted.",
            )
            .with_suggestion("Check that GEMINI_API_KEY is correct and still active")
            .recoverable(false),
            Self::AllModelsUnavailable => UserFriendlyError::new(
                ErrorCategory::ServiceUnavailable,
                "Service unavailable",
                "The AI service is not available right now.",
            )
            .with_suggestion("Try again later"),
            Self::UnknownFailure(_) => UserFriendlyError::new(
                ErrorCategory::Internal,
                "Unexpected error",
                "Something went wrong while fetching the AI response.",
            )
            .with_suggestion("Try again in a moment"),
        };
        Some(friendly)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(text) => f.write_str(text),
            other => match other.user_message() {
                Some(friendly) => write!(f, "⚠️ {}", friendly.message),
                None => Ok(()),
            },
        }
    }
}
