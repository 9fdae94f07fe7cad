// SPDX-FileCopyrightText: 2026 Prowriter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end pipeline tests: prompt builder -> generator -> typed contract.

use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use prowriter_core::contract::{
    CorrectionResult, DailyTaskSet, PracticeFeedback, PracticeReply, from_payload,
};
use prowriter_core::{ConversationTurn, ProwriterError, UserPreferences};
use prowriter_pipeline::{Generator, RetryPolicy};
use prowriter_prompts::{daily_task_prompt, grammar_prompt, roleplay_prompt};
use prowriter_test_utils::{MockOutcome, MockProvider, fixtures};
use tokio_util::sync::CancellationToken;

fn generator(provider: Arc<MockProvider>) -> Generator {
    Generator::new(provider, RetryPolicy::default(), Duration::from_secs(120))
}

#[tokio::test]
async fn correction_round_trip_through_prose_wrapped_output() {
    let provider = Arc::new(MockProvider::always(
        r#"Here is the result: {"corrected_text":"Hello.","explanation":[],"alternatives":[],"tone":"neutral","confidence_score":0.9,"timestamp":"2024-01-01T00:00:00Z"}"#,
    ));
    let generator = generator(provider.clone());
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let prompt = grammar_prompt("hello", &UserPreferences::default(), &now);

    let result = generator
        .generate(generator.request(prompt.clone()), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(provider.last_prompt().await.as_deref(), Some(prompt.as_str()));
    let correction: CorrectionResult = from_payload(&result).unwrap();
    assert_eq!(correction.corrected_text, "Hello.");
    assert_eq!(correction.confidence_score, Some(0.9));
}

#[tokio::test]
async fn daily_tasks_parse_into_contract() {
    let provider = Arc::new(MockProvider::always(fixtures::daily_output(3)));
    let generator = generator(provider);
    let prompt = daily_task_prompt(&UserPreferences::default(), &Utc::now());

    let result = generator
        .generate(generator.request(prompt), &CancellationToken::new())
        .await
        .unwrap();

    let set: DailyTaskSet = from_payload(&result).unwrap();
    assert_eq!(set.tasks.len(), 3);
    assert!(set.tasks.iter().all(|t| !t.id.is_empty() && !t.answer.is_empty()));
}

#[tokio::test]
async fn roleplay_turn_yields_reply_contract() {
    let provider = Arc::new(MockProvider::always(format!(
        "Sure thing:\n{}",
        fixtures::practice_reply_output("Thursday at 10 works for me.")
    )));
    let generator = generator(provider.clone());
    let history = vec![ConversationTurn::user("Can we move the meeting?")];
    let prompt = roleplay_prompt("Reschedule a meeting", "Can we move the meeting?", &history, false);

    let result = generator
        .generate(generator.request(prompt), &CancellationToken::new())
        .await
        .unwrap();

    let reply: PracticeReply = from_payload(&result).unwrap();
    assert_eq!(reply.response, "Thursday at 10 works for me.");
    assert_eq!(provider.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn feedback_survives_one_provider_failure() {
    let provider = Arc::new(MockProvider::with_outcomes(vec![
        MockOutcome::fail("connection reset"),
        MockOutcome::text(fixtures::practice_feedback_output()),
    ]));
    let generator = generator(provider.clone());
    let history = vec![
        ConversationTurn::user("Can we move the meeting?"),
        ConversationTurn::assistant("Sure, does Thursday work?"),
    ];
    let prompt = roleplay_prompt("Reschedule a meeting", "", &history, true);

    let result = generator
        .generate(generator.request(prompt), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(provider.calls(), 2);
    let feedback: PracticeFeedback = from_payload(&result).unwrap();
    assert_eq!(feedback.scores.get("clarity"), Some(&85));
    assert_eq!(feedback.best_parts.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn never_exceeds_retry_budget() {
    let provider = Arc::new(MockProvider::failing("unavailable"));
    let generator = Generator::new(
        provider.clone(),
        RetryPolicy::new(2, Duration::from_millis(1000)),
        Duration::from_secs(120),
    );

    let err = generator
        .generate(generator.request("prompt"), &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, ProwriterError::Generation { .. }));
    assert_eq!(provider.calls(), 3);
}

#[tokio::test]
async fn raw_text_degrades_without_error() {
    let provider = Arc::new(MockProvider::always("I'd rather not answer in JSON."));
    let generator = generator(provider);

    let result = generator
        .generate(generator.request("prompt"), &CancellationToken::new())
        .await
        .unwrap();

    assert!(result.is_raw_text());
    assert!(from_payload::<CorrectionResult>(&result).is_none());
    assert_eq!(
        result.into_value(),
        serde_json::json!({"text": "I'd rather not answer in JSON."})
    );
}
