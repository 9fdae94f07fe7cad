// SPDX-FileCopyrightText: 2026 Prowriter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Canned model outputs shaped like each feature contract.

use serde_json::json;

/// A correction payload wrapped in prose and a markdown fence, the way
/// models tend to answer despite being told not to.
pub fn correction_output() -> String {
    let payload = json!({
        "corrected_text": "I have an apple.",
        "explanation": ["Use have with I.", "Use an before a vowel sound."],
        "alternatives": ["I've got an apple."],
        "tone": "neutral",
        "confidence_score": 0.95,
        "timestamp": "2026-01-01T00:00:00.000Z"
    });
    format!("Sure! Here is the result:\n```json\n{payload}\n```\nHope it helps.")
}

/// A daily task payload with `count` tasks.
pub fn daily_output(count: usize) -> String {
    let types = ["rewrite", "choice", "fill"];
    let tasks: Vec<_> = (0..count)
        .map(|i| {
            let kind = types[i % types.len()];
            let mut task = json!({
                "id": format!("task-{}", i + 1),
                "type": kind,
                "instruction": format!("Instruction {}", i + 1),
                "content": format!("Content {}", i + 1),
                "answer": format!("answer {}", i + 1)
            });
            if kind == "choice" {
                task["options"] = json!(["answer 2", "other", "another"]);
            }
            task
        })
        .collect();
    json!({"tasks": tasks, "generated_at": "2026-01-01T00:00:00.000Z"}).to_string()
}

/// A roleplay reply payload.
pub fn practice_reply_output(text: &str) -> String {
    json!({"response": text}).to_string()
}

/// A roleplay feedback payload.
pub fn practice_feedback_output() -> String {
    json!({
        "feedback": "Clear and polite overall.",
        "scores": {"clarity": 85, "tone": 90, "conciseness": 80, "politeness": 95},
        "improvements": ["Vary sentence openings."],
        "best_parts": ["Thank you for your time."]
    })
    .to_string()
}
