// SPDX-FileCopyrightText: 2026 Prowriter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Grammar-only correction and professional rewrite prompts.

use chrono::{DateTime, Utc};
use prowriter_core::UserPreferences;

use crate::{JSON_ONLY, iso_timestamp};

/// Builds the grammar-only prompt: fix grammar, spelling, punctuation and
/// capitalization while keeping the writer's meaning and style.
pub fn grammar_prompt(text: &str, prefs: &UserPreferences, now: &DateTime<Utc>) -> String {
    format!(
        r#"
You are a precise English editor. Only correct grammar, spelling, punctuation, and capitalization. Preserve meaning and style as much as possible.

User's text: "{text}"

User preferences:
- Tone: {tone}
- Domain: {domain}
- Level: {level}

Provide your response in this exact JSON format ({JSON_ONLY}):
{{
  "corrected_text": "the corrected sentence here",
  "explanation": ["First change explained", "Second change explained"],
  "alternatives": ["Alternative 1", "Alternative 2"],
  "tone": "formal/neutral/friendly",
  "confidence_score": 0.95,
  "timestamp": "{timestamp}"
}}
"#,
        tone = prefs.tone(),
        domain = prefs.domain(),
        level = prefs.level(),
        timestamp = iso_timestamp(now),
    )
}

/// Builds the professional rewrite prompt for the requested `tone`.
///
/// Only domain and level are read from `prefs`; the explicit `tone` wins.
pub fn professional_prompt(
    text: &str,
    tone: &str,
    prefs: &UserPreferences,
    now: &DateTime<Utc>,
) -> String {
    format!(
        r#"
You are a workplace communication coach. Rewrite the input text to be professional, polished, and appropriate for workplace communication.

User's text: "{text}"

Desired tone: {tone}
User preferences:
- Domain: {domain}
- Level: {level}

Rewrite this to be clear, concise, professional, and {tone}. Make it suitable for workplace emails, messages, or documents.

Provide your response in this exact JSON format ({JSON_ONLY}):
{{
  "corrected_text": "the professionally rewritten sentence here",
  "explanation": ["What was improved", "Why this version is better"],
  "alternatives": ["Alternative professional version 1", "Alternative professional version 2"],
  "tone": "{tone}",
  "confidence_score": 0.95,
  "timestamp": "{timestamp}"
}}
"#,
        domain = prefs.domain(),
        level = prefs.level(),
        timestamp = iso_timestamp(now),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn grammar_prompt_is_deterministic() {
        let prefs = UserPreferences::default();
        assert_eq!(
            grammar_prompt("i has a apple", &prefs, &at()),
            grammar_prompt("i has a apple", &prefs, &at())
        );
    }

    #[test]
    fn grammar_prompt_differs_only_in_timestamp() {
        let prefs = UserPreferences::default();
        let later = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let a = grammar_prompt("text", &prefs, &at());
        let b = grammar_prompt("text", &prefs, &later);
        assert_ne!(a, b);
        assert_eq!(
            a.replace("2024-01-01T00:00:00.000Z", "<ts>"),
            b.replace("2025-06-01T12:00:00.000Z", "<ts>")
        );
    }

    #[test]
    fn missing_preferences_equal_explicit_defaults() {
        let explicit = UserPreferences {
            tone: Some("neutral".into()),
            domain: Some("general".into()),
            level: Some("intermediate".into()),
        };
        assert_eq!(
            grammar_prompt("hello", &UserPreferences::default(), &at()),
            grammar_prompt("hello", &explicit, &at())
        );
        assert_eq!(
            professional_prompt("hello", "formal", &UserPreferences::default(), &at()),
            professional_prompt("hello", "formal", &explicit, &at())
        );
    }

    #[test]
    fn grammar_prompt_embeds_text_verbatim_and_schema() {
        let text = r#"he said "hi" {and} left"#;
        let prompt = grammar_prompt(text, &UserPreferences::default(), &at());
        assert!(prompt.contains(r#"User's text: "he said "hi" {and} left""#));
        assert!(prompt.contains("Preserve meaning"));
        assert!(prompt.contains("- Tone: neutral"));
        assert!(prompt.contains("\"corrected_text\""));
        assert!(prompt.contains("\"confidence_score\": 0.95"));
        assert!(prompt.contains("return ONLY valid JSON, no markdown"));
    }

    #[test]
    fn professional_prompt_uses_explicit_tone() {
        let prefs = UserPreferences {
            tone: Some("friendly".into()),
            domain: Some("sales".into()),
            level: None,
        };
        let prompt = professional_prompt("pls fix", "persuasive", &prefs, &at());
        assert!(prompt.contains("Desired tone: persuasive"));
        assert!(prompt.contains("\"tone\": \"persuasive\""));
        assert!(prompt.contains("- Domain: sales"));
        assert!(prompt.contains("- Level: intermediate"));
        assert!(!prompt.contains("friendly"));
    }
}
