//! File-based configuration loading

use super::model::AdvisorConfig;
use crate::error::{SakhiError, SakhiResult};
use std::fs;
use std::path::Path;

/// Load configuration from a file
///
/// Supports JSON, TOML, and YAML formats based on file extension.
/// Returns the default config if the file doesn't exist.
pub fn load_from_file(path: &Path) -> SakhiResult<AdvisorConfig> {
    if !path.exists() {
        return Ok(AdvisorConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        SakhiError::config_with_context(
            format!("Failed to read config file: {}", e),
            format!("Reading configuration from '{}'", path.display()),
        )
    })?;

    let config: AdvisorConfig = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|e| {
            SakhiError::config_with_context(
                format!("Failed to parse TOML config: {}", e),
                format!("Deserializing TOML configuration from '{}'", path.display()),
            )
        })?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| {
            SakhiError::config_with_context(
                format!("Failed to parse YAML config: {}", e),
                format!("Deserializing YAML configuration from '{}'", path.display()),
            )
        })?,
        _ => serde_json::from_str(&content).map_err(|e| {
            SakhiError::config_with_context(
                format!("Failed to parse JSON config: {}", e),
                format!("Deserializing JSON configuration from '{}'", path.display()),
            )
        })?,
    };

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_from_file(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AdvisorConfig::default());
    }

    #[test]
    fn test_load_from_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sakhi.toml");
        fs::write(
            &path,
            r#"
api_key = "toml_key"
models = ["gemini-2.0-flash"]
min_interval_ms = 5000

[timeouts]
request_timeout_secs = 15
"#,
        )
        .unwrap();

        let config = load_from_file(&path).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("toml_key"));
        assert_eq!(config.models, vec!["gemini-2.0-flash"]);
        assert_eq!(config.min_interval_ms, 5_000);
        assert_eq!(config.timeouts.request_timeout_secs, 15);
        // unspecified fields keep their defaults
        assert_eq!(config.timeouts.connection_timeout_secs, 30);
        assert_eq!(config.base_url, AdvisorConfig::default().base_url);
    }

    #[test]
    fn test_load_from_json_and_yaml() {
        let temp_dir = TempDir::new().unwrap();

        let json_path = temp_dir.path().join("sakhi.json");
        fs::write(&json_path, r#"{"min_interval_ms": 250, "temperature": 0.2}"#).unwrap();
        let config = load_from_file(&json_path).unwrap();
        assert_eq!(config.min_interval_ms, 250);
        assert_eq!(config.temperature, Some(0.2));

        let yaml_path = temp_dir.path().join("sakhi.yaml");
        fs::write(&yaml_path, "models:\n  - a\n  - b\nmax_output_tokens: 64\n").unwrap();
        let config = load_from_file(&yaml_path).unwrap();
        assert_eq!(config.models, vec!["a", "b"]);
        assert_eq!(config.max_output_tokens, Some(64));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sakhi.toml");
        fs::write(&path, "min_interval_ms = \"not a number\"").unwrap();

        let err = load_from_file(&path).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("TOML"));
    }
}
