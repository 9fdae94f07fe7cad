// SPDX-FileCopyrightText: 2026 Prowriter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed access to the values the CLI keeps between runs.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use prowriter_core::progress::{DailyProgress, DailyTaskSnapshot, check_answer};
use prowriter_core::{KeyValueStore, PluginAdapter, ProwriterError, UserPreferences};

use crate::{ALL_KEYS, DAILY_PROGRESS_KEY, DAILY_TASKS_KEY, PREFERENCES_KEY};

/// Result of answering a daily task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Correct; carries the updated progress.
    Correct(DailyProgress),
    /// Wrong; carries the expected answer.
    Incorrect { expected: String },
    /// The task was already completed today.
    AlreadyCompleted,
}

/// Preferences, daily progress and today's tasks on top of any [`KeyValueStore`].
///
/// Unreadable stored values are treated as absent, so a corrupted entry
/// never locks the user out.
#[derive(Clone)]
pub struct ProfileStore {
    store: Arc<dyn KeyValueStore>,
}

impl ProfileStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        debug!(store = store.name(), "profile store ready");
        Self { store }
    }

    /// Stored preferences, or all-default preferences.
    pub async fn preferences(&self) -> Result<UserPreferences, ProwriterError> {
        Ok(self.read(PREFERENCES_KEY).await?.unwrap_or_default())
    }

    pub async fn set_preferences(&self, prefs: &UserPreferences) -> Result<(), ProwriterError> {
        self.write(PREFERENCES_KEY, prefs).await
    }

    pub async fn progress(&self) -> Result<Option<DailyProgress>, ProwriterError> {
        self.read(DAILY_PROGRESS_KEY).await
    }

    /// Counts one correct answer on `today` and persists the new progress.
    pub async fn record_correct(
        &self,
        today: NaiveDate,
        total: u32,
    ) -> Result<DailyProgress, ProwriterError> {
        let prev = self.progress().await?;
        let next = DailyProgress::record_correct(prev.as_ref(), today, total);
        self.write(DAILY_PROGRESS_KEY, &next).await?;
        Ok(next)
    }

    /// The stored task snapshot, whatever day it belongs to.
    pub async fn daily_tasks(&self) -> Result<Option<DailyTaskSnapshot>, ProwriterError> {
        self.read(DAILY_TASKS_KEY).await
    }

    /// The stored snapshot if it was generated on `today`.
    pub async fn daily_tasks_for(
        &self,
        today: NaiveDate,
    ) -> Result<Option<DailyTaskSnapshot>, ProwriterError> {
        Ok(self.daily_tasks().await?.filter(|s| s.is_for(today)))
    }

    pub async fn save_daily_tasks(&self, snapshot: &DailyTaskSnapshot) -> Result<(), ProwriterError> {
        self.write(DAILY_TASKS_KEY, snapshot).await
    }

    /// Checks `answer` against today's task `task_id`.
    ///
    /// A correct answer marks the task completed and bumps the progress.
    ///
    /// # Errors
    /// [`ProwriterError::InvalidInput`] when there are no tasks for `today`
    /// or no task with that id.
    pub async fn answer_task(
        &self,
        today: NaiveDate,
        task_id: &str,
        answer: &str,
    ) -> Result<AnswerOutcome, ProwriterError> {
        let mut snapshot = self.daily_tasks_for(today).await?.ok_or_else(|| {
            ProwriterError::InvalidInput("no daily tasks for today; run `prowriter daily` first".into())
        })?;
        let total = u32::try_from(snapshot.tasks.len()).unwrap_or(u32::MAX);

        let tracked = snapshot
            .find_mut(task_id)
            .ok_or_else(|| ProwriterError::InvalidInput(format!("no task with id `{task_id}`")))?;
        if tracked.completed {
            return Ok(AnswerOutcome::AlreadyCompleted);
        }
        if !check_answer(&tracked.task.answer, answer) {
            return Ok(AnswerOutcome::Incorrect {
                expected: tracked.task.answer.clone(),
            });
        }

        tracked.completed = true;
        self.save_daily_tasks(&snapshot).await?;
        let progress = self.record_correct(today, total).await?;
        debug!(task_id, streak = progress.streak, "daily task completed");
        Ok(AnswerOutcome::Correct(progress))
    }

    /// Removes every value this store manages.
    pub async fn clear_all(&self) -> Result<(), ProwriterError> {
        self.store.clear(&ALL_KEYS).await
    }

    async fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ProwriterError> {
        let Some(raw) = self.store.get(key).await? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(key, error = %e, "ignoring unreadable stored value");
                Ok(None)
            }
        }
    }

    async fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), ProwriterError> {
        let raw = serde_json::to_string(value).map_err(|e| ProwriterError::Storage {
            source: Box::new(e),
        })?;
        self.store.set(key, &raw).await
    }
}
