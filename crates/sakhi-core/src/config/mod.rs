//! Configuration management for Sakhi
//!
//! Layers, lowest precedence first: built-in defaults, an optional config
//! file, a `.env` file in the working directory, then the process environment.

mod env_loader;
mod file_loader;
mod model;
mod validation;

pub mod timeouts;

pub use env_loader::{API_KEY_VARS, apply_env, apply_env_from, parse_model_list};
pub use file_loader::load_from_file;
pub use model::{AdvisorConfig, DEFAULT_BASE_URL, DEFAULT_MODELS};
pub use timeouts::TimeoutConfig;

use crate::error::SakhiResult;
use std::path::Path;
use tracing::debug;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "sakhi.toml";

/// Load and validate configuration from all layers
pub fn load_config(config_file: Option<&Path>) -> SakhiResult<AdvisorConfig> {
    // .env never overrides variables already set in the process environment
    match dotenv::dotenv() {
        Ok(env_path) => debug!("Loaded environment from {}", env_path.display()),
        Err(e) => debug!("No .env file loaded: {}", e),
    }

    load_config_with(config_file, |name| std::env::var(name).ok())
}

/// Layer defaults, the config file and `lookup` variables, then validate
pub fn load_config_with<F>(config_file: Option<&Path>, lookup: F) -> SakhiResult<AdvisorConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let path = config_file.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
    let mut config = load_from_file(path)?;
    apply_env_from(&mut config, lookup)?;
    config.validate()?;

    debug!("Loaded configuration: {:?}", config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    fn write_config(dir: &TempDir) -> std::path::PathBuf {
        let path = dir.path().join("sakhi.toml");
        fs::write(
            &path,
            r#"
api_key = "file-key"
models = ["file-a", "file-b"]
min_interval_ms = 1000
temperature = 0.4
"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir);

        let config = load_config_with(
            Some(&path),
            lookup(&[
                ("GEMINI_API_KEY", "env-key"),
                ("SAKHI_MIN_INTERVAL_MS", "250"),
            ]),
        )
        .unwrap();

        assert_eq!(config.api_key(), Some("env-key"));
        assert_eq!(config.min_interval_ms, 250);
        // untouched by the environment, so the file value stands
        assert_eq!(config.models, vec!["file-a", "file-b"]);
        assert_eq!(config.temperature, Some(0.4));
        // absent from both, so the default stands
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_file_overrides_defaults_without_environment() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir);

        let config = load_config_with(Some(&path), lookup(&[])).unwrap();
        assert_eq!(config.api_key(), Some("file-key"));
        assert_eq!(config.min_interval_ms, 1000);
        assert_eq!(
            config.timeouts.request_timeout_secs,
            TimeoutConfig::default().request_timeout_secs
        );
    }

    #[test]
    fn test_layered_result_is_validated() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir);

        let err = load_config_with(Some(&path), lookup(&[("SAKHI_BASE_URL", "ftp://example")]))
            .unwrap_err();
        assert!(err.is_config());
    }
}
