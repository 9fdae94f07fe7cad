// SPDX-FileCopyrightText: 2026 Prowriter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory KeyValueStore.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use prowriter_core::{KeyValueStore, PluginAdapter, ProwriterError};

/// A [`KeyValueStore`] backed by a `HashMap`. Contents vanish on drop.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

impl PluginAdapter for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, ProwriterError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), ProwriterError> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), ProwriterError> {
        self.entries.lock().await.remove(key);
        Ok(())
    }
}
