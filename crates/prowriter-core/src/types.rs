// SPDX-FileCopyrightText: 2026 Prowriter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the prompt builders, the generation pipeline and the
//! feature endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{Display, EnumString};

/// Tone used when the caller's preferences do not name one.
pub const DEFAULT_TONE: &str = "neutral";
/// Domain used when the caller's preferences do not name one.
pub const DEFAULT_DOMAIN: &str = "general";
/// Level used when the caller's preferences do not name one.
pub const DEFAULT_LEVEL: &str = "intermediate";
/// Tone requested from the professional rewrite when none is supplied.
pub const DEFAULT_REWRITE_TONE: &str = "formal";

/// A single generation call: the prompt plus the retry budget for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Prompt text sent verbatim to the provider. Must be non-empty.
    pub prompt_text: String,
    /// Retries after the first failed attempt (total attempts = `max_retries + 1`).
    pub max_retries: u32,
}

impl GenerationRequest {
    /// Creates a request with the default budget of one retry.
    pub fn new(prompt_text: impl Into<String>) -> Self {
        Self {
            prompt_text: prompt_text.into(),
            max_retries: 1,
        }
    }

    /// Overrides the retry budget.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}

/// Best-effort interpretation of a provider completion.
///
/// `Structured` is only produced when the completion contained a syntactically
/// valid JSON object. Anything else is carried as trimmed `RawText`.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationResult {
    /// The first JSON object found in the completion.
    Structured(Map<String, Value>),
    /// The trimmed completion, unparsed.
    RawText(String),
}

impl GenerationResult {
    /// Returns the structured payload, if any.
    pub fn as_structured(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Structured(map) => Some(map),
            Self::RawText(_) => None,
        }
    }

    /// Returns true for the raw-text fallback.
    pub fn is_raw_text(&self) -> bool {
        matches!(self, Self::RawText(_))
    }

    /// Converts the result into the JSON value placed in a response envelope.
    ///
    /// Raw text is wrapped as `{"text": "..."}` so clients always receive an object.
    pub fn into_value(self) -> Value {
        match self {
            Self::Structured(map) => Value::Object(map),
            Self::RawText(text) => {
                let mut map = Map::new();
                map.insert("text".to_string(), Value::String(text));
                Value::Object(map)
            }
        }
    }
}

/// Speaker of a conversation turn.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message in a practice conversation. Order in the history is chronological.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Writing preferences a user keeps in their profile.
///
/// Every field is optional on the wire; missing values fall back to
/// [`DEFAULT_TONE`], [`DEFAULT_DOMAIN`] and [`DEFAULT_LEVEL`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl UserPreferences {
    pub fn tone(&self) -> &str {
        non_empty(self.tone.as_deref()).unwrap_or(DEFAULT_TONE)
    }

    pub fn domain(&self) -> &str {
        non_empty(self.domain.as_deref()).unwrap_or(DEFAULT_DOMAIN)
    }

    pub fn level(&self) -> &str {
        non_empty(self.level.as_deref()).unwrap_or(DEFAULT_LEVEL)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Tones offered by the profile editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Tone {
    Formal,
    Neutral,
    Friendly,
}

/// Work domains offered by the profile editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Domain {
    Engineering,
    Product,
    General,
    Sales,
    Support,
}

/// Proficiency levels offered by the profile editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

/// Which correction prompt the correction endpoint uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum CorrectionMode {
    /// Grammar, spelling and punctuation only.
    #[default]
    Grammar,
    /// Full stylistic rewrite for workplace communication.
    Professional,
}

impl CorrectionMode {
    /// Maps the optional wire value; anything other than `professional` is grammar.
    pub fn from_wire(mode: Option<&str>) -> Self {
        match mode {
            Some("professional") => Self::Professional,
            _ => Self::Grammar,
        }
    }
}

/// The three kinds of daily practice task.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TaskType {
    Rewrite,
    Choice,
    Fill,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn raw_text_wraps_as_text_object() {
        let value = GenerationResult::RawText("hello".into()).into_value();
        assert_eq!(value, serde_json::json!({"text": "hello"}));
    }

    #[test]
    fn structured_into_value_is_the_object() {
        let mut map = Map::new();
        map.insert("response".into(), Value::String("Sure.".into()));
        let value = GenerationResult::Structured(map).into_value();
        assert_eq!(value, serde_json::json!({"response": "Sure."}));
    }

    #[test]
    fn preferences_fall_back_to_defaults() {
        let prefs = UserPreferences::default();
        assert_eq!(prefs.tone(), "neutral");
        assert_eq!(prefs.domain(), "general");
        assert_eq!(prefs.level(), "intermediate");

        let partial: UserPreferences =
            serde_json::from_str(r#"{"domain": "sales", "tone": ""}"#).unwrap();
        assert_eq!(partial.tone(), "neutral");
        assert_eq!(partial.domain(), "sales");
        assert_eq!(partial.level(), "intermediate");
    }

    #[test]
    fn role_round_trips_lowercase() {
        let turn: ConversationTurn =
            serde_json::from_str(r#"{"role": "assistant", "content": "Hi"}"#).unwrap();
        assert_eq!(turn.role, Role::Assistant);
        assert_eq!(turn.role.to_string(), "assistant");
        assert_eq!(Role::from_str("user").unwrap(), Role::User);
    }

    #[test]
    fn unknown_mode_is_grammar() {
        assert_eq!(CorrectionMode::from_wire(None), CorrectionMode::Grammar);
        assert_eq!(CorrectionMode::from_wire(Some("casual")), CorrectionMode::Grammar);
        assert_eq!(
            CorrectionMode::from_wire(Some("professional")),
            CorrectionMode::Professional
        );
    }

    #[test]
    fn profile_enums_parse_lowercase() {
        assert_eq!(Tone::from_str("friendly").unwrap(), Tone::Friendly);
        assert_eq!(Domain::from_str("support").unwrap(), Domain::Support);
        assert_eq!(Level::from_str("advanced").unwrap(), Level::Advanced);
        assert!(Tone::from_str("sarcastic").is_err());
    }

    #[test]
    fn generation_request_defaults_to_one_retry() {
        let req = GenerationRequest::new("prompt");
        assert_eq!(req.max_retries, 1);
        assert_eq!(req.with_max_retries(3).max_retries, 3);
    }
}
