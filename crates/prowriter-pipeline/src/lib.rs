// SPDX-FileCopyrightText: 2026 Prowriter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generation pipeline for the Prowriter writing coach.
//!
//! [`Generator`] sends a built prompt to a [`GenerationProvider`] under a
//! [`RetryPolicy`] and a whole-call deadline, then runs the completion through
//! [`extract`]. Provider failures are retried; unusable output is not, it
//! comes back as [`GenerationResult::RawText`].

pub mod extract;
pub mod retry;

use std::sync::Arc;
use std::time::Duration;

use prowriter_config::model::GenerationConfig;
use prowriter_core::{GenerationProvider, GenerationRequest, GenerationResult, ProwriterError};
use tokio_util::sync::CancellationToken;
use tracing::debug;

pub use extract::extract;
pub use retry::{RetryPolicy, run_with_retry};

/// Runs prompts through a provider with retries, a deadline and extraction.
#[derive(Clone)]
pub struct Generator {
    provider: Arc<dyn GenerationProvider>,
    max_retries: u32,
    retry_delay: Duration,
    request_timeout: Duration,
}

impl Generator {
    pub fn new(
        provider: Arc<dyn GenerationProvider>,
        policy: RetryPolicy,
        request_timeout: Duration,
    ) -> Self {
        Self {
            provider,
            max_retries: policy.max_retries,
            retry_delay: policy.delay,
            request_timeout,
        }
    }

    /// Builds a generator from the `[generation]` config section.
    pub fn from_config(provider: Arc<dyn GenerationProvider>, config: &GenerationConfig) -> Self {
        Self::new(
            provider,
            RetryPolicy::new(
                config.max_retries,
                Duration::from_millis(config.retry_delay_ms),
            ),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Retry budget applied by [`Generator::request`].
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// A request for `prompt` carrying this generator's retry budget.
    pub fn request(&self, prompt: impl Into<String>) -> GenerationRequest {
        GenerationRequest::new(prompt).with_max_retries(self.max_retries)
    }

    /// Executes `request` and interprets the completion.
    ///
    /// # Errors
    /// - [`ProwriterError::InvalidInput`] for an empty prompt, before any call.
    /// - [`ProwriterError::Generation`] once `max_retries + 1` attempts failed.
    /// - [`ProwriterError::Timeout`] when the whole call outlives the deadline.
    /// - [`ProwriterError::Cancelled`] when `cancel` fires first.
    pub async fn generate(
        &self,
        request: GenerationRequest,
        cancel: &CancellationToken,
    ) -> Result<GenerationResult, ProwriterError> {
        if request.prompt_text.trim().is_empty() {
            return Err(ProwriterError::InvalidInput("prompt text is empty".into()));
        }

        let policy = RetryPolicy::new(request.max_retries, self.retry_delay);
        let prompt = request.prompt_text.as_str();
        let provider = &self.provider;
        let call = run_with_retry(policy, cancel, move |_| provider.generate(prompt));

        let raw = tokio::time::timeout(self.request_timeout, call)
            .await
            .map_err(|_| ProwriterError::Timeout {
                duration: self.request_timeout,
            })??;

        let result = extract(&raw);
        debug!(
            provider = provider.name(),
            structured = !result.is_raw_text(),
            "generation completed"
        );
        Ok(result)
    }
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("provider", &self.provider.name())
            .field("max_retries", &self.max_retries)
            .field("retry_delay", &self.retry_delay)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
