// SPDX-FileCopyrightText: 2026 Prowriter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider adapter trait for the external text-generation service.

use async_trait::async_trait;

use crate::error::ProwriterError;
use crate::traits::adapter::PluginAdapter;

/// Adapter for a text-generation provider.
///
/// One call is one outbound request: no caching, no deduplication. Every
/// transport, authentication, quota or provider-side problem surfaces as
/// [`ProwriterError::Generation`]. An empty prompt is an input-contract
/// violation and fails with [`ProwriterError::InvalidInput`] without any
/// network traffic.
///
/// Dropping the returned future aborts the in-flight request.
#[async_trait]
pub trait GenerationProvider: PluginAdapter {
    /// Submits `prompt` and returns the raw completion text.
    async fn generate(&self, prompt: &str) -> Result<String, ProwriterError>;
}
