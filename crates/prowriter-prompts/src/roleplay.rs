// SPDX-FileCopyrightText: 2026 Prowriter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Workplace roleplay prompts: a colleague's next turn, or end-of-conversation feedback.

use prowriter_core::ConversationTurn;

use crate::JSON_ONLY;

/// Serializes history as `"<n>. <role>: <content>"` lines, 1-based, in order.
pub fn format_history(history: &[ConversationTurn]) -> String {
    history
        .iter()
        .enumerate()
        .map(|(i, turn)| format!("{}. {}: {}", i + 1, turn.role, turn.content))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Picks the turn prompt or the feedback prompt depending on `is_end`.
///
/// `user_message` is ignored for feedback.
pub fn roleplay_prompt(
    scenario: &str,
    user_message: &str,
    history: &[ConversationTurn],
    is_end: bool,
) -> String {
    if is_end {
        roleplay_feedback_prompt(scenario, history)
    } else {
        roleplay_turn_prompt(scenario, user_message, history)
    }
}

/// Asks the model to answer as a colleague in 2-3 sentences, returning `{response}`.
pub fn roleplay_turn_prompt(
    scenario: &str,
    user_message: &str,
    history: &[ConversationTurn],
) -> String {
    let history = format_history(history);
    format!(
        r#"
You are a realistic workplace colleague in this scenario: {scenario}

Conversation history:
{history}

User's message: "{user_message}"

Respond naturally and professionally as a colleague would. Keep it brief (2-3 sentences). Return response in this exact JSON format ({JSON_ONLY}):
{{
  "response": "Your response as a colleague here"
}}
"#
    )
}

/// Asks for an assessment of the finished conversation with 0-100 category scores.
pub fn roleplay_feedback_prompt(scenario: &str, history: &[ConversationTurn]) -> String {
    let history = format_history(history);
    format!(
        r#"
Conversation scenario: {scenario}

Conversation history:
{history}

The conversation has ended. Score each category as an integer from 0 to 100. Provide detailed feedback in this exact JSON format ({JSON_ONLY}):
{{
  "feedback": "Overall assessment of the conversation",
  "scores": {{
    "clarity": 85,
    "tone": 90,
    "conciseness": 80,
    "politeness": 95
  }},
  "improvements": ["Improvement suggestion 1", "Improvement suggestion 2", "Improvement suggestion 3"],
  "best_parts": ["What you did well 1", "What you did well 2"]
}}
"#
    )
}
