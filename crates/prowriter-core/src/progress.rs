// SPDX-FileCopyrightText: 2026 Prowriter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Daily practice progress: answer checking and streak bookkeeping.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::contract::DailyTask;

/// Compares a user's answer with the expected one, ignoring case and
/// surrounding whitespace. An empty answer never matches.
pub fn check_answer(expected: &str, given: &str) -> bool {
    let given = given.trim();
    !given.is_empty() && expected.trim().to_lowercase() == given.to_lowercase()
}

/// Progress counters for the current day plus the running streak.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyProgress {
    /// Day the `completed` counter belongs to.
    pub date: NaiveDate,
    pub completed: u32,
    pub total: u32,
    /// Consecutive days with at least one correct answer.
    pub streak: u32,
    pub last_completed_date: Option<NaiveDate>,
}

impl DailyProgress {
    /// Fresh progress for `today` with nothing completed.
    pub fn new(today: NaiveDate, total: u32) -> Self {
        Self {
            date: today,
            completed: 0,
            total,
            streak: 0,
            last_completed_date: None,
        }
    }

    /// Number completed on `today`; counters from another day read as zero.
    pub fn completed_on(&self, today: NaiveDate) -> u32 {
        if self.date == today { self.completed } else { 0 }
    }

    /// Records one correct answer on `today` and returns the updated progress.
    pub fn record_correct(prev: Option<&Self>, today: NaiveDate, total: u32) -> Self {
        let yesterday = today.pred_opt();
        let (completed, streak) = match prev {
            Some(p) => {
                let streak = match p.last_completed_date {
                    Some(last) if last == today => p.streak.max(1),
                    Some(last) if Some(last) == yesterday => p.streak + 1,
                    _ => 1,
                };
                (p.completed_on(today) + 1, streak)
            }
            None => (1, 1),
        };
        Self {
            date: today,
            completed,
            total,
            streak,
            last_completed_date: Some(today),
        }
    }
}

/// A day's generated tasks and which of them the user has finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTaskSnapshot {
    pub date: NaiveDate,
    pub tasks: Vec<TrackedTask>,
}

/// A daily task plus client-side completion state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedTask {
    #[serde(flatten)]
    pub task: DailyTask,
    #[serde(default)]
    pub completed: bool,
}

impl DailyTaskSnapshot {
    pub fn new(date: NaiveDate, tasks: Vec<DailyTask>) -> Self {
        Self {
            date,
            tasks: tasks
                .into_iter()
                .map(|task| TrackedTask {
                    task,
                    completed: false,
                })
                .collect(),
        }
    }

    /// Whether this snapshot was generated on `today`.
    pub fn is_for(&self, today: NaiveDate) -> bool {
        self.date == today
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut TrackedTask> {
        self.tasks.iter_mut().find(|t| t.task.id == id)
    }
}
