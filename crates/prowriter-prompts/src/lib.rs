// SPDX-FileCopyrightText: 2026 Prowriter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt builders for every Prowriter feature.
//!
//! Each builder maps typed inputs to one instruction string that ends with a
//! literal example of the JSON object the model must return. Builders are
//! pure and total: the same inputs (including the timestamp argument) always
//! produce byte-identical output, and no input makes them fail. Rejecting
//! malformed input is the caller's job.
//!
//! User text is interpolated verbatim, without escaping.

pub mod correction;
pub mod daily;
pub mod roleplay;
pub mod scenarios;

use chrono::{DateTime, SecondsFormat, Utc};

pub use correction::{grammar_prompt, professional_prompt};
pub use daily::{DAILY_TASK_COUNT, daily_task_prompt};
pub use roleplay::{format_history, roleplay_feedback_prompt, roleplay_prompt, roleplay_turn_prompt};
pub use scenarios::{Scenario, find_scenario, workplace_scenarios};

/// Closing instruction attached to every schema example.
pub const JSON_ONLY: &str = "return ONLY valid JSON, no markdown";

/// Formats a timestamp the way the schema examples embed it
/// (`2024-01-01T00:00:00.000Z`).
pub(crate) fn iso_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
