// SPDX-FileCopyrightText: 2026 Prowriter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bounded fixed-delay retry with cancellation.

use std::future::Future;
use std::time::Duration;

use prowriter_core::ProwriterError;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};

/// Default pause between attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(1000);

/// How many times to retry and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt. Total attempts = `max_retries + 1`.
    pub max_retries: u32,
    /// Fixed delay before each retry.
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, delay: Duration) -> Self {
        Self { max_retries, delay }
    }

    /// Total number of attempts this policy allows.
    pub fn attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(1, DEFAULT_RETRY_DELAY)
    }
}

/// Runs `op` until it succeeds, fails terminally, or the policy is exhausted.
///
/// `op` receives the 1-based attempt number. Only errors for which
/// [`ProwriterError::is_retryable`] holds trigger another attempt; anything
/// else is returned as-is. Exhaustion yields a single
/// [`ProwriterError::Generation`] whose source is the last failure.
///
/// Cancelling `cancel` aborts both the in-flight attempt (its future is
/// dropped) and any pending delay, returning [`ProwriterError::Cancelled`].
pub async fn run_with_retry<T, F, Fut>(
    policy: RetryPolicy,
    cancel: &CancellationToken,
    mut op: F,
) -> Result<T, ProwriterError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, ProwriterError>>,
{
    let attempts = policy.attempts();
    let mut last_error = None;

    for attempt in 1..=attempts {
        if attempt > 1 {
            warn!(attempt, delay_ms = policy.delay.as_millis() as u64, "retrying generation after failure");
            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(ProwriterError::Cancelled),
                _ = tokio::time::sleep(policy.delay) => {}
            }
        }

        debug!(attempt, attempts, "generation attempt");
        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(ProwriterError::Cancelled),
            outcome = op(attempt) => outcome,
        };

        match outcome {
            Ok(value) => return Ok(value),
            Err(e) if !e.is_retryable() => return Err(e),
            Err(e) => {
                warn!(attempt, error = %e, "generation attempt failed");
                last_error = Some(e);
            }
        }
    }

    let last = last_error.unwrap_or_else(|| ProwriterError::generation("no attempt was made"));
    error!(attempts, error = %last, "generation failed after exhausting retries");
    Err(ProwriterError::Generation {
        message: format!("failed after {attempts} attempt(s): {last}"),
        source: Some(Box::new(last)),
    })
}
