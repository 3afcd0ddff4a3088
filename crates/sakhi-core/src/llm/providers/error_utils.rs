//! Provider error sanitization helpers.

use crate::error::SakhiError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

const MAX_ERROR_TEXT_CHARS: usize = 1_024;
const REDACTED: &str = "[REDACTED]";
const EMPTY_BODY: &str = "<empty error response body>";

static BEARER_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bBearer\s+[A-Za-z0-9._\-+/=]{8,}").expect("valid bearer token regex")
});

static KEY_VALUE_SECRET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)\b(api[_-]?key|key|access[_-]?token|token|secret|password|authorization|x-goog-api-key)\b\s*[:=]\s*["']?[^"'&,\s}]+"#,
    )
    .expect("valid key/value secret regex")
});

// Google API keys have a fixed prefix and may appear bare inside messages.
static GOOGLE_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"AIza[0-9A-Za-z_\-]{20,}").expect("valid google key regex"));

/// Sanitize provider error text by redacting secrets and truncating large payloads.
pub fn sanitize_provider_error_text(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return EMPTY_BODY.to_string();
    }

    if let Ok(mut json) = serde_json::from_str::<Value>(trimmed) {
        redact_json_value(&mut json);
        let serialized =
            serde_json::to_string(&json).unwrap_or_else(|_| "<unserializable error>".to_string());
        return truncate_with_suffix(serialized);
    }

    truncate_with_suffix(redact_inline_secrets(trimmed))
}

fn redact_json_value(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, val) in map.iter_mut() {
                if is_sensitive_key(key) {
                    *val = Value::String(REDACTED.to_string());
                } else {
                    redact_json_value(val);
                }
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                redact_json_value(item);
            }
        }
        Value::String(s) => {
            *s = redact_inline_secrets(s);
        }
        _ => {}
    }
}

fn is_sensitive_key(key: &str) -> bool {
    let normalized = key.to_ascii_lowercase().replace(['-', ' '], "_");
    normalized == "key"
        || normalized.contains("api_key")
        || normalized.contains("apikey")
        || normalized.contains("token")
        || normalized.contains("secret")
        || normalized.contains("password")
        || normalized.contains("authorization")
}

fn redact_inline_secrets(input: &str) -> String {
    let redacted = BEARER_TOKEN_RE.replace_all(input, "Bearer [REDACTED]");
    let redacted = KEY_VALUE_SECRET_RE.replace_all(&redacted, "$1=[REDACTED]");
    GOOGLE_KEY_RE.replace_all(&redacted, REDACTED).into_owned()
}

fn truncate_with_suffix(input: String) -> String {
    let char_count = input.chars().count();
    if char_count <= MAX_ERROR_TEXT_CHARS {
        return input;
    }

    let truncated: String = input.chars().take(MAX_ERROR_TEXT_CHARS).collect();
    format!(
        "{}... [truncated {} chars]",
        truncated,
        char_count - MAX_ERROR_TEXT_CHARS
    )
}

/// Build a SakhiError from a non-success HTTP response.
///
/// An empty body is replaced by the status reason phrase so that status-only
/// failures still carry classifiable text.
pub async fn handle_http_error(response: reqwest::Response, provider: &str) -> SakhiError {
    let status = response.status();
    let error_text = response.text().await.unwrap_or_default();
    let detail = if error_text.trim().is_empty() {
        status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| EMPTY_BODY.to_string())
    } else {
        sanitize_provider_error_text(&error_text)
    };

    SakhiError::llm_with_status(
        format!(
            "{} API error (status {}): {}",
            provider,
            status.as_u16(),
            detail
        ),
        provider.to_lowercase(),
        status.as_u16(),
    )
}
