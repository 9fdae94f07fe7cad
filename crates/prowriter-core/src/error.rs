// SPDX-FileCopyrightText: 2026 Prowriter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Prowriter writing coach.

use thiserror::Error;

/// The primary error type used across all Prowriter adapters and pipeline stages.
#[derive(Debug, Error)]
pub enum ProwriterError {
    /// Configuration errors (missing credential, invalid values). Raised at startup.
    #[error("configuration error: {0}")]
    Config(String),

    /// Client-supplied input is missing or empty. Never retried.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The generation provider failed (transport, auth, quota, provider-side error).
    #[error("generation failed: {message}")]
    Generation {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Key/value store errors (database open, query failure, serialization).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The operation was cancelled before it completed.
    #[error("operation cancelled")]
    Cancelled,

    /// Operation timed out.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ProwriterError {
    /// Shorthand for a [`ProwriterError::Generation`] without an underlying source.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
            source: None,
        }
    }

    /// Whether a retry of the same call could plausibly succeed.
    ///
    /// Only provider failures and timeouts qualify. Input-contract violations,
    /// configuration problems and cancellation are terminal.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Generation { .. } | Self::Timeout { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_generation_and_timeout_are_retryable() {
        assert!(ProwriterError::generation("quota").is_retryable());
        assert!(
            ProwriterError::Timeout {
                duration: std::time::Duration::from_secs(1)
            }
            .is_retryable()
        );
        assert!(!ProwriterError::InvalidInput("empty prompt".into()).is_retryable());
        assert!(!ProwriterError::Config("no key".into()).is_retryable());
        assert!(!ProwriterError::Cancelled.is_retryable());
    }

    #[test]
    fn generation_display_carries_message() {
        let err = ProwriterError::generation("API returned 503");
        assert_eq!(err.to_string(), "generation failed: API returned 503");
    }
}
