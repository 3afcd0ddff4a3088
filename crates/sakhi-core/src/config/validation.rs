//! Configuration validation

use super::model::AdvisorConfig;
use crate::error::{SakhiError, SakhiResult};

impl AdvisorConfig {
    /// Validate value ranges. Does not require a credential; use
    /// [`AdvisorConfig::require_credential`] for that.
    ///
    /// An empty model list is valid: dispatch then reports every model as
    /// unavailable.
    pub fn validate(&self) -> SakhiResult<()> {
        if let Some(index) = self.models.iter().position(|m| m.trim().is_empty()) {
            return Err(SakhiError::config_with_context(
                "Model identifiers must not be blank",
                format!("Validating models[{}]", index),
            ));
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(SakhiError::config(format!(
                "Invalid base_url '{}': must start with http:// or https://",
                self.base_url
            )));
        }

        if let Some(temperature) = self.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(SakhiError::config(format!(
                    "Invalid temperature {}: must be between 0.0 and 2.0",
                    temperature
                )));
            }
        }

        if self.timeouts.connection_timeout_secs == 0 || self.timeouts.request_timeout_secs == 0 {
            return Err(SakhiError::config("Timeouts must be greater than zero"));
        }

        Ok(())
    }

    /// Fail fast when the credential is missing
    pub fn require_credential(&self) -> SakhiResult<&str> {
        self.api_key().ok_or_else(|| {
            SakhiError::config_with_context(
                "GEMINI_API_KEY is not configured (api_key missing)",
                "Add GEMINI_API_KEY to your environment or .env file",
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AdvisorConfig::default().validate().is_ok());
        assert!(AdvisorConfig::default().with_models(Vec::<String>::new()).validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(AdvisorConfig::default().with_models(["a", " "]).validate().is_err());
        assert!(AdvisorConfig::default().with_base_url("ftp://x").validate().is_err());

        let mut config = AdvisorConfig::default();
        config.temperature = Some(3.5);
        assert!(config.validate().is_err());

        let mut config = AdvisorConfig::default();
        config.timeouts.request_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_require_credential() {
        let err = AdvisorConfig::default().require_credential().unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("GEMINI_API_KEY"));

        let config = AdvisorConfig::default().with_api_key("key");
        assert_eq!(config.require_credential().unwrap(), "key");
    }
}
