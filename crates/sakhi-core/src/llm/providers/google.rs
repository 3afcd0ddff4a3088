//! Google (Gemini) provider implementation

use super::error_utils::handle_http_error;
use crate::config::AdvisorConfig;
use crate::error::{SakhiError, SakhiResult};
use crate::llm::service::CompletionService;
use crate::prompt::CompletionRequest;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::{debug, instrument};

const PROVIDER: &str = "Google";

/// Google (Gemini) completion provider
#[derive(Clone)]
pub struct GoogleProvider {
    api_key: String,
    base_url: String,
    temperature: Option<f32>,
    max_output_tokens: Option<u32>,
    http_client: Client,
}

impl std::fmt::Debug for GoogleProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleProvider")
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .finish_non_exhaustive()
    }
}

impl GoogleProvider {
    /// Create a new Google provider over an existing HTTP client
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>, http_client: Client) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            temperature: None,
            max_output_tokens: None,
            http_client,
        }
    }

    /// Build a provider from configuration.
    ///
    /// Fails with a configuration error when the credential is missing.
    pub fn from_config(config: &AdvisorConfig) -> SakhiResult<Self> {
        let api_key = config.require_credential()?;

        let http_client = Client::builder()
            .connect_timeout(config.timeouts.connection_timeout())
            .timeout(config.timeouts.request_timeout())
            .build()
            .map_err(|e| {
                SakhiError::config_with_context(
                    format!("Failed to create HTTP client: {}", e),
                    "Building the Gemini transport",
                )
            })?;

        debug!(
            "Created Google provider with timeouts: connection={}s, request={}s",
            config.timeouts.connection_timeout_secs, config.timeouts.request_timeout_secs
        );

        let mut provider = Self::new(api_key, config.base_url.clone(), http_client);
        provider.temperature = config.temperature;
        provider.max_output_tokens = config.max_output_tokens;
        Ok(provider)
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        )
    }

    /// Build the `generateContent` request body
    pub fn request_body(&self, request: &CompletionRequest) -> Value {
        let mut body = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": request.to_prompt_text() }],
            }],
        });

        let mut generation_config = json!({});
        if let Some(temperature) = self.temperature {
            generation_config["temperature"] = json!(temperature);
        }
        if let Some(max_tokens) = self.max_output_tokens {
            generation_config["maxOutputTokens"] = json!(max_tokens);
        }
        if generation_config
            .as_object()
            .is_some_and(|obj| !obj.is_empty())
        {
            body["generationConfig"] = generation_config;
        }

        body
    }
}

#[async_trait]
impl CompletionService for GoogleProvider {
    #[instrument(skip(self, request), fields(language = %request.language()), level = "debug")]
    async fn complete(&self, model: &str, request: &CompletionRequest) -> SakhiResult<String> {
        let response = self
            .http_client
            .post(self.endpoint(model))
            .json(&self.request_body(request))
            .send()
            .await
            .map_err(SakhiError::from)?;

        if !response.status().is_success() {
            return Err(handle_http_error(response, PROVIDER).await);
        }

        let response_json: Value = response.json().await.map_err(|e| {
            SakhiError::llm_with_provider(
                format!("Failed to parse Google response: {}", e.without_url()),
                "google",
            )
        })?;

        parse_response(&response_json)
    }
}

/// Extract the generated text from a `generateContent` response.
///
/// Text parts of the first candidate are concatenated as-is.
fn parse_response(response: &Value) -> SakhiResult<String> {
    let candidates = match response["candidates"].as_array() {
        Some(candidates) if !candidates.is_empty() => candidates,
        _ => {
            let message = match response["promptFeedback"]["blockReason"].as_str() {
                Some(reason) => format!("Google response blocked: {}", reason),
                None => "No candidates in Google response".to_string(),
            };
            return Err(SakhiError::llm_with_provider(message, "google"));
        }
    };

    let parts = candidates[0]["content"]["parts"].as_array().ok_or_else(|| {
        let reason = candidates[0]["finishReason"].as_str().unwrap_or("unknown");
        SakhiError::llm_with_provider(
            format!("No content parts in Google response (finish reason: {})", reason),
            "google",
        )
    })?;

    Ok(parts
        .iter()
        .filter_map(|part| part["text"].as_str())
        .collect::<String>())
}
