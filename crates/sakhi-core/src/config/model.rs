//! Advisor configuration model

use super::timeouts::TimeoutConfig;
use crate::throttle::DEFAULT_MIN_INTERVAL_MS;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default Gemini endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model fallback order, cheapest/fastest first
pub const DEFAULT_MODELS: &[&str] = &["gemini-1.5-flash-8b", "gemini-1.5-flash", "gemini-1.5-pro"];

/// Configuration for the orchestration layer
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// Completion service credential
    pub api_key: Option<String>,
    /// Ordered model candidates
    pub models: Vec<String>,
    /// Minimum spacing between accepted requests, in milliseconds
    pub min_interval_ms: u64,
    /// Completion service base URL
    pub base_url: String,
    /// Transport timeouts
    pub timeouts: TimeoutConfig,
    /// Sampling temperature passed as generation config
    pub temperature: Option<f32>,
    /// Output token cap passed as generation config
    pub max_output_tokens: Option<u32>,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            models: DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
            min_interval_ms: DEFAULT_MIN_INTERVAL_MS,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeouts: TimeoutConfig::default(),
            temperature: None,
            max_output_tokens: None,
        }
    }
}

// Hand-written so the credential never ends up in logs.
impl fmt::Debug for AdvisorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdvisorConfig")
            .field("api_key", &self.masked_api_key())
            .field("models", &self.models)
            .field("min_interval_ms", &self.min_interval_ms)
            .field("base_url", &self.base_url)
            .field("timeouts", &self.timeouts)
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .finish()
    }
}

impl AdvisorConfig {
    /// True when a non-blank credential is present
    pub fn is_configured(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }

    /// Credential trimmed of surrounding whitespace, if configured
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Display-safe form of the credential
    pub fn masked_api_key(&self) -> String {
        match self.api_key() {
            None => "(not set)".to_string(),
            Some(key) => {
                let chars: Vec<char> = key.chars().collect();
                if chars.len() <= 8 {
                    "****".to_string()
                } else {
                    let head: String = chars[..4].iter().collect();
                    let tail: String = chars[chars.len() - 2..].iter().collect();
                    format!("{head}…{tail}")
                }
            }
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_models<I, S>(mut self, models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.models = models.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_min_interval_ms(mut self, min_interval_ms: u64) -> Self {
        self.min_interval_ms = min_interval_ms;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
