// SPDX-FileCopyrightText: 2026 Prowriter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock generation provider for deterministic testing.
//!
//! `MockProvider` implements `GenerationProvider` with a scripted queue of
//! outcomes and records every prompt it receives.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use prowriter_core::ProwriterError;
use prowriter_core::traits::{GenerationProvider, PluginAdapter};

/// One scripted provider outcome.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// Return this raw completion text.
    Text(String),
    /// Fail with a retryable [`ProwriterError::Generation`] carrying this message.
    Fail(String),
}

impl MockOutcome {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn fail(s: impl Into<String>) -> Self {
        Self::Fail(s.into())
    }
}

/// A mock provider that replays pre-configured outcomes.
///
/// Outcomes are popped from a FIFO queue. When the queue is empty,
/// the fallback outcome is returned (`"mock response"` by default).
pub struct MockProvider {
    outcomes: Arc<Mutex<VecDeque<MockOutcome>>>,
    fallback: MockOutcome,
    prompts: Arc<Mutex<Vec<String>>>,
    calls: AtomicUsize,
    delay: Option<Duration>,
}

impl MockProvider {
    /// Create a new mock provider with an empty queue.
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
            fallback: MockOutcome::text("mock response"),
            prompts: Arc::new(Mutex::new(Vec::new())),
            calls: AtomicUsize::new(0),
            delay: None,
        }
    }

    /// Create a mock provider pre-loaded with the given outcomes.
    pub fn with_outcomes(outcomes: Vec<MockOutcome>) -> Self {
        let provider = Self::new();
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::from(outcomes))),
            ..provider
        }
    }

    /// Create a mock provider that answers every call with `text`.
    pub fn always(text: impl Into<String>) -> Self {
        Self::new().with_fallback(MockOutcome::Text(text.into()))
    }

    /// Create a mock provider whose every call fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::new().with_fallback(MockOutcome::Fail(message.into()))
    }

    /// Replace the outcome used once the queue is drained.
    pub fn with_fallback(mut self, outcome: MockOutcome) -> Self {
        self.fallback = outcome;
        self
    }

    /// Sleep for `delay` before answering each call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Append an outcome to the queue.
    pub async fn push(&self, outcome: MockOutcome) {
        self.outcomes.lock().await.push_back(outcome);
    }

    /// Number of `generate` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every prompt received, in call order.
    pub async fn prompts(&self) -> Vec<String> {
        self.prompts.lock().await.clone()
    }

    /// The most recent prompt, if any.
    pub async fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().await.last().cloned()
    }

    async fn next_outcome(&self) -> MockOutcome {
        self.outcomes
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl PluginAdapter for MockProvider {
    fn name(&self) -> &str {
        "mock-provider"
    }
}

#[async_trait]
impl GenerationProvider for MockProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ProwriterError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().await.push(prompt.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match self.next_outcome().await {
            MockOutcome::Text(text) => Ok(text),
            MockOutcome::Fail(message) => Err(ProwriterError::generation(message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn default_response_when_queue_empty() {
        let provider = MockProvider::new();
        assert_eq!(provider.generate("p").await.unwrap(), "mock response");
    }

    #[tokio::test]
    async fn queued_outcomes_replayed_in_order() {
        let provider = MockProvider::with_outcomes(vec![
            MockOutcome::fail("quota"),
            MockOutcome::text("second"),
        ]);

        let err = provider.generate("a").await.unwrap_err();
        assert!(err.is_retryable());
        assert_eq!(provider.generate("b").await.unwrap(), "second");
        assert_eq!(provider.calls(), 2);
        assert_eq!(provider.prompts().await, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn failing_provider_never_succeeds() {
        let provider = MockProvider::failing("down");
        for _ in 0..3 {
            assert!(provider.generate("p").await.is_err());
        }
        assert_eq!(provider.calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn delay_is_applied() {
        let provider = MockProvider::always("ok").with_delay(Duration::from_secs(5));
        let start = tokio::time::Instant::now();
        provider.generate("p").await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(5));
    }
}
