// SPDX-FileCopyrightText: 2026 Prowriter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Google Gemini provider adapter for the Prowriter writing coach.
//!
//! This crate implements [`GenerationProvider`] on top of the Generative
//! Language `generateContent` endpoint. One call to [`GeminiProvider::generate`]
//! is one HTTP request; retry policy lives in `prowriter-pipeline`.

pub mod client;
pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use prowriter_config::model::GeminiConfig;
use prowriter_core::error::ProwriterError;
use prowriter_core::traits::{GenerationProvider, PluginAdapter};
use secrecy::SecretString;
use tracing::{debug, info};

use crate::client::GeminiClient;
use crate::types::GenerateContentRequest;

/// Environment variable consulted when `gemini.api_key` is not configured.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Gemini provider implementing [`GenerationProvider`].
///
/// API key resolution order: config -> `GEMINI_API_KEY` env var -> error.
pub struct GeminiProvider {
    client: GeminiClient,
}

impl GeminiProvider {
    /// Creates a new Gemini provider from the `[gemini]` config section.
    ///
    /// Fails with [`ProwriterError::Config`] when no API key can be found, so
    /// the server refuses to start instead of failing on the first request.
    pub fn new(config: &GeminiConfig) -> Result<Self, ProwriterError> {
        let api_key = resolve_api_key(&config.api_key)?;
        let client = GeminiClient::new(
            &api_key,
            &config.base_url,
            &config.model,
            Duration::from_secs(config.timeout_secs),
        )?;

        info!(model = %config.model, "Gemini provider initialized");
        Ok(Self { client })
    }

    /// Creates a provider with an existing client (for testing).
    pub fn with_client(client: GeminiClient) -> Self {
        Self { client }
    }
}

impl PluginAdapter for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }
}

#[async_trait]
impl GenerationProvider for GeminiProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ProwriterError> {
        if prompt.trim().is_empty() {
            return Err(ProwriterError::InvalidInput("prompt text is empty".into()));
        }

        let request = GenerateContentRequest::from_prompt(prompt);
        let response = self.client.generate_content(&request).await?;

        if let Some(reason) = response
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            return Err(ProwriterError::generation(format!(
                "prompt blocked by Gemini: {reason}"
            )));
        }

        let text = response
            .text()
            .ok_or_else(|| ProwriterError::generation("Gemini response contained no text"))?;

        debug!(
            model = %self.client.model(),
            chars = text.len(),
            "generation completed"
        );
        Ok(text)
    }
}

fn resolve_api_key(config_key: &Option<String>) -> Result<SecretString, ProwriterError> {
    if let Some(key) = config_key.as_deref().filter(|k| !k.trim().is_empty()) {
        return Ok(SecretString::from(key.to_string()));
    }

    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() => Ok(SecretString::from(key)),
        _ => Err(ProwriterError::Config(
            "Gemini API key not found. Set gemini.api_key in config or GEMINI_API_KEY environment variable.".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use serial_test::serial;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider_for(server: &MockServer) -> GeminiProvider {
        let config = GeminiConfig {
            api_key: Some("test-key".into()),
            base_url: server.uri(),
            ..GeminiConfig::default()
        };
        GeminiProvider::new(&config).unwrap()
    }

    #[test]
    #[serial]
    fn resolve_api_key_prefers_config() {
        let key = resolve_api_key(&Some("from-config".into())).unwrap();
        assert_eq!(key.expose_secret(), "from-config");
    }

    #[test]
    #[serial]
    fn resolve_api_key_falls_back_to_env() {
        // SAFETY: serialized with every other test touching the environment.
        unsafe { std::env::set_var(API_KEY_ENV, "from-env") };
        let key = resolve_api_key(&Some("  ".into())).unwrap();
        assert_eq!(key.expose_secret(), "from-env");
        unsafe { std::env::remove_var(API_KEY_ENV) };
    }

    #[test]
    #[serial]
    fn missing_api_key_is_config_error() {
        unsafe { std::env::remove_var(API_KEY_ENV) };
        let err = GeminiProvider::new(&GeminiConfig::default())
            .err()
            .expect("construction should fail without a key");
        assert!(matches!(err, ProwriterError::Config(_)));
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[tokio::test]
    async fn generate_returns_candidate_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-2.5-flash:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{"content": {"parts": [{"text": "{\"a\":"}, {"text": "1}"}]}}]
            })))
            .mount(&server)
            .await;

        let text = provider_for(&server).generate("prompt").await.unwrap();
        assert_eq!(text, "{\"a\":1}");
    }

    #[tokio::test]
    async fn empty_prompt_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = provider_for(&server).generate("   ").await.unwrap_err();
        assert!(matches!(err, ProwriterError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn blocked_prompt_is_generation_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [],
                "promptFeedback": {"blockReason": "SAFETY"}
            })))
            .mount(&server)
            .await;

        let err = provider_for(&server).generate("prompt").await.unwrap_err();
        assert!(matches!(err, ProwriterError::Generation { .. }));
        assert!(err.to_string().contains("SAFETY"));
    }

    #[tokio::test]
    async fn no_candidates_is_generation_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"candidates": []})),
            )
            .mount(&server)
            .await;

        let err = provider_for(&server).generate("prompt").await.unwrap_err();
        assert!(err.to_string().contains("no text"));
    }

    #[test]
    fn adapter_metadata() {
        let client = GeminiClient::new(
            &SecretString::from("k"),
            "http://localhost",
            "gemini-2.5-flash",
            Duration::from_secs(1),
        )
        .unwrap();
        let provider = GeminiProvider::with_client(client);
        assert_eq!(provider.name(), "gemini");
    }
}
