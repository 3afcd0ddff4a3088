//! Failure classification for completion service errors
//!
//! The completion service is an opaque dependency, so failures are classified
//! by case-insensitive substring matching over their textual detail. The
//! checks run in a fixed priority order and the first match wins.

use super::types::SakhiError;

/// Account- or model-level class of a completion failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Too many requests in a short window
    RateLimited,
    /// Account quota or billing exhausted
    QuotaExceeded,
    /// Credential missing, invalid or lacking permission
    AuthFailure,
    /// The requested model identifier does not exist or is not deployed
    NotFound,
    /// Anything not recognized above
    Unknown,
}

impl FailureKind {
    /// Only a not-found failure lets the dispatcher try the next model.
    pub fn permits_fallback(self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Stable snake_case label for logs
    pub fn label(self) -> &'static str {
        match self {
            Self::RateLimited => "rate_limited",
            Self::QuotaExceeded => "quota_exceeded",
            Self::AuthFailure => "auth_failure",
            Self::NotFound => "not_found",
            Self::Unknown => "unknown",
        }
    }
}

const RATE_LIMIT_MARKERS: &[&str] = &["rate limit", "rate-limit", "ratelimit", "too many requests"];

const QUOTA_MARKERS: &[&str] = &["quota", "resource_exhausted", "resource has been exhausted"];

const AUTH_MARKERS: &[&str] = &[
    "api key",
    "api_key",
    "apikey",
    "unauthorized",
    "unauthenticated",
    "permission denied",
    "permission_denied",
    "status 401",
    "status 403",
];

const NOT_FOUND_MARKERS: &[&str] = &["not found", "not_found", "status 404"];

/// Classify a failure detail string.
pub fn classify(detail: &str) -> FailureKind {
    let detail_lower = detail.to_lowercase();
    let has_any = |markers: &[&str]| markers.iter().any(|m| detail_lower.contains(m));

    if has_any(RATE_LIMIT_MARKERS) {
        FailureKind::RateLimited
    } else if has_any(QUOTA_MARKERS) {
        FailureKind::QuotaExceeded
    } else if has_any(AUTH_MARKERS) {
        FailureKind::AuthFailure
    } else if has_any(NOT_FOUND_MARKERS) {
        FailureKind::NotFound
    } else {
        FailureKind::Unknown
    }
}

/// Classify an error raised at the completion service boundary.
pub fn classify_error(error: &SakhiError) -> FailureKind {
    classify(&error.to_string())
}
