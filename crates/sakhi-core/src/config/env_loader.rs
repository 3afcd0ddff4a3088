//! Environment variable-based configuration overrides

use super::model::AdvisorConfig;
use crate::error::{SakhiError, SakhiResult};
use std::env;
use std::str::FromStr;

/// Credential variables, first non-blank wins
pub const API_KEY_VARS: &[&str] = &["GEMINI_API_KEY", "GOOGLE_API_KEY"];

pub const MODELS_VAR: &str = "SAKHI_MODELS";
pub const MIN_INTERVAL_VAR: &str = "SAKHI_MIN_INTERVAL_MS";
pub const BASE_URL_VAR: &str = "SAKHI_BASE_URL";
pub const CONNECT_TIMEOUT_VAR: &str = "SAKHI_CONNECT_TIMEOUT_SECS";
pub const REQUEST_TIMEOUT_VAR: &str = "SAKHI_REQUEST_TIMEOUT_SECS";
pub const TEMPERATURE_VAR: &str = "SAKHI_TEMPERATURE";
pub const MAX_OUTPUT_TOKENS_VAR: &str = "SAKHI_MAX_OUTPUT_TOKENS";

/// Apply overrides from the process environment
pub fn apply_env(config: &mut AdvisorConfig) -> SakhiResult<()> {
    apply_env_from(config, |name| env::var(name).ok())
}

/// Apply overrides using an arbitrary variable lookup
pub fn apply_env_from<F>(config: &mut AdvisorConfig, lookup: F) -> SakhiResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = API_KEY_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.trim().is_empty())
    {
        config.api_key = Some(key);
    }

    if let Some(models) = lookup(MODELS_VAR) {
        config.models = parse_model_list(&models);
    }

    if let Some(value) = lookup(MIN_INTERVAL_VAR) {
        config.min_interval_ms = parse_var(MIN_INTERVAL_VAR, &value)?;
    }

    if let Some(base_url) = lookup(BASE_URL_VAR) {
        config.base_url = base_url.trim().to_string();
    }

    if let Some(value) = lookup(CONNECT_TIMEOUT_VAR) {
        config.timeouts.connection_timeout_secs = parse_var(CONNECT_TIMEOUT_VAR, &value)?;
    }

    if let Some(value) = lookup(REQUEST_TIMEOUT_VAR) {
        config.timeouts.request_timeout_secs = parse_var(REQUEST_TIMEOUT_VAR, &value)?;
    }

    if let Some(value) = lookup(TEMPERATURE_VAR) {
        config.temperature = Some(parse_var(TEMPERATURE_VAR, &value)?);
    }

    if let Some(value) = lookup(MAX_OUTPUT_TOKENS_VAR) {
        config.max_output_tokens = Some(parse_var(MAX_OUTPUT_TOKENS_VAR, &value)?);
    }

    Ok(())
}

/// Split a comma-separated model list, dropping blank entries
pub fn parse_model_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_var<T: FromStr>(name: &str, value: &str) -> SakhiResult<T> {
    value.trim().parse().map_err(|_| {
        SakhiError::config_with_context(
            format!("Invalid {} value", name),
            format!("Parsing environment value '{}'", value),
        )
    })
}
