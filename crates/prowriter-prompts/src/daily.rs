// SPDX-FileCopyrightText: 2026 Prowriter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Daily practice task prompt.

use chrono::{DateTime, Utc};
use prowriter_core::UserPreferences;

use crate::{JSON_ONLY, iso_timestamp};

/// Number of tasks the daily prompt asks for.
pub const DAILY_TASK_COUNT: usize = 3;

/// Builds the prompt asking for exactly three tasks, one of each type
/// (`rewrite`, `choice`, `fill`), each with a unique id and an answer.
pub fn daily_task_prompt(prefs: &UserPreferences, now: &DateTime<Utc>) -> String {
    format!(
        r#"
Generate {DAILY_TASK_COUNT} short English practice tasks for today. Make them practical and useful for workplace communication.
Use exactly one task of each type: "rewrite", "choice" and "fill". Give every task a unique id and a correct answer. Only "choice" tasks have an "options" list.

User preferences:
- Domain: {domain}
- Level: {level}

Provide tasks in this exact JSON format ({JSON_ONLY}):
{{
  "tasks": [
    {{
      "id": "task-1",
      "type": "rewrite",
      "instruction": "Rewrite this sentence formally",
      "content": "can u send me the report asap",
      "answer": "Could you please send me the report at your earliest convenience?"
    }},
    {{
      "id": "task-2",
      "type": "choice",
      "instruction": "Choose the correct preposition",
      "content": "I will arrive ___ the office at 9 AM",
      "options": ["in", "at", "on", "to"],
      "answer": "at"
    }},
    {{
      "id": "task-3",
      "type": "fill",
      "instruction": "Fill in the blank with appropriate word",
      "content": "Thank you for your ___ response to my inquiry",
      "answer": "prompt"
    }}
  ],
  "generated_at": "{timestamp}"
}}
"#,
        domain = prefs.domain(),
        level = prefs.level(),
        timestamp = iso_timestamp(now),
    )
}
