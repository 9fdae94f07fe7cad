// SPDX-FileCopyrightText: 2026 Prowriter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed views over the structured payloads each feature asks the model for.
//!
//! The pipeline only guarantees "a JSON object". These views default every
//! missing field, so a partially conforming payload still converts.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ProwriterError;
use crate::types::{GenerationResult, TaskType};

/// Converts a structured payload into a typed contract.
///
/// Returns `None` for raw-text results or when a present field has the wrong type.
pub fn from_payload<T: DeserializeOwned>(result: &GenerationResult) -> Option<T> {
    let map = result.as_structured()?;
    serde_json::from_value(Value::Object(map.clone())).ok()
}

/// Payload returned by both correction prompts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectionResult {
    pub corrected_text: String,
    pub explanation: Vec<String>,
    pub alternatives: Vec<String>,
    pub tone: String,
    pub confidence_score: Option<f64>,
    pub timestamp: Option<String>,
}

/// One daily practice task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTask {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    #[serde(default)]
    pub instruction: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub answer: String,
}

/// Payload returned by the daily-task prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyTaskSet {
    pub tasks: Vec<DailyTask>,
    pub generated_at: Option<String>,
}

/// Payload returned by a roleplay turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PracticeReply {
    pub response: String,
}

/// Payload returned when a roleplay conversation ends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PracticeFeedback {
    pub feedback: String,
    pub scores: BTreeMap<String, i64>,
    pub improvements: Vec<String>,
    pub best_parts: Vec<String>,
}

/// Brings a daily-task payload to exactly `count` usable tasks.
///
/// Extra tasks are dropped and a missing or empty `id` becomes `task-<n>`.
/// Every other field is passed through untouched. Fewer than `count` tasks,
/// a task without an answer, or a raw-text result is a
/// [`ProwriterError::Generation`].
pub fn normalize_daily_tasks(
    result: GenerationResult,
    count: usize,
) -> Result<Map<String, Value>, ProwriterError> {
    let mut map = match result {
        GenerationResult::Structured(map) => map,
        GenerationResult::RawText(_) => {
            return Err(ProwriterError::generation("daily tasks response was not JSON"));
        }
    };

    let Some(Value::Array(tasks)) = map.get_mut("tasks") else {
        return Err(ProwriterError::generation("daily tasks response has no `tasks` list"));
    };
    if tasks.len() < count {
        return Err(ProwriterError::generation(format!(
            "expected {count} daily tasks, got {}",
            tasks.len()
        )));
    }
    tasks.truncate(count);

    for (index, task) in tasks.iter_mut().enumerate() {
        let Some(task) = task.as_object_mut() else {
            return Err(ProwriterError::generation(format!(
                "daily task {} is not an object",
                index + 1
            )));
        };
        if !has_text(task.get("id")) {
            task.insert("id".into(), Value::String(format!("task-{}", index + 1)));
        }
        if !has_text(task.get("answer")) {
            return Err(ProwriterError::generation(format!(
                "daily task {} has no answer",
                index + 1
            )));
        }
    }

    Ok(map)
}

fn has_text(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_str)
        .is_some_and(|s| !s.trim().is_empty())
}
