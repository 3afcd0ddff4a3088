//! Constructor methods for SakhiError

use super::types::SakhiError;

impl SakhiError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: None,
        }
    }

    /// Create a configuration error with context
    pub fn config_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create a new LLM error
    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm {
            message: message.into(),
            provider: None,
            status_code: None,
        }
    }

    /// Create an LLM error with provider
    pub fn llm_with_provider(message: impl Into<String>, provider: impl Into<String>) -> Self {
        Self::Llm {
            message: message.into(),
            provider: Some(provider.into()),
            status_code: None,
        }
    }

    /// Create an LLM error carrying the HTTP status the provider answered with
    pub fn llm_with_status(
        message: impl Into<String>,
        provider: impl Into<String>,
        status_code: u16,
    ) -> Self {
        Self::Llm {
            message: message.into(),
            provider: Some(provider.into()),
            status_code: Some(status_code),
        }
    }

    /// Create a new HTTP transport error
    pub fn http(message: impl Into<String>) -> Self {
        Self::Http {
            message: message.into(),
            url: None,
        }
    }
}

impl From<reqwest::Error> for SakhiError {
    fn from(err: reqwest::Error) -> Self {
        let url = err.url().map(|u| {
            // The Gemini endpoint carries the key in the query string.
            let mut u = u.clone();
            u.set_query(None);
            u.to_string()
        });
        let message = if err.is_timeout() {
            format!("request timed out: {}", err.without_url())
        } else if err.is_connect() {
            format!("connection failed: {}", err.without_url())
        } else {
            err.without_url().to_string()
        };
        Self::Http { message, url }
    }
}
