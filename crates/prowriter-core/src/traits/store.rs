// SPDX-FileCopyrightText: 2026 Prowriter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client-side key/value store trait.

use async_trait::async_trait;

use crate::error::ProwriterError;
use crate::traits::adapter::PluginAdapter;

/// A flat string-to-string store, keyed by fixed names.
///
/// The store does not enforce any schema; values are whatever the caller wrote.
#[async_trait]
pub trait KeyValueStore: PluginAdapter {
    /// Returns the stored value for `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, ProwriterError>;

    /// Inserts or replaces the value for `key`.
    async fn set(&self, key: &str, value: &str) -> Result<(), ProwriterError>;

    /// Removes `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), ProwriterError>;

    /// Removes the given keys.
    async fn clear(&self, keys: &[&str]) -> Result<(), ProwriterError> {
        for key in keys {
            self.remove(key).await?;
        }
        Ok(())
    }
}
