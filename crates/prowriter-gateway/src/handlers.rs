// SPDX-FileCopyrightText: 2026 Prowriter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the feature endpoints.
//!
//! Handles POST /api/correct, POST /api/daily, POST /api/practice,
//! GET /api/scenarios and GET /health.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use prowriter_core::contract::normalize_daily_tasks;
use prowriter_core::types::{CorrectionMode, DEFAULT_REWRITE_TONE};
use prowriter_core::{ConversationTurn, GenerationResult, ProwriterError, UserPreferences};
use prowriter_prompts::{
    DAILY_TASK_COUNT, Scenario, daily_task_prompt, find_scenario, grammar_prompt,
    professional_prompt, roleplay_prompt, workplace_scenarios,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error};

use crate::server::AppState;

/// Request body for POST /api/correct.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CorrectRequest {
    /// Text to correct. Required and non-blank.
    pub text: Option<String>,
    /// `grammar` (default) or `professional`.
    pub mode: Option<String>,
    /// Rewrite tone for professional mode, `formal` when absent.
    pub tone: Option<String>,
    pub user_preferences: Option<UserPreferences>,
}

/// Request body for POST /api/daily.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DailyRequest {
    pub user_preferences: Option<UserPreferences>,
}

/// Request body for POST /api/practice.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PracticeRequest {
    /// Free-text scenario description.
    pub scenario: Option<String>,
    /// Catalog id, used when `scenario` is absent.
    pub scenario_id: Option<String>,
    /// Any JSON scalar; non-strings are rendered as JSON text.
    pub user_message: Option<Value>,
    pub conversation_history: Option<Vec<ConversationTurn>>,
    /// `true` asks for feedback on the finished conversation.
    pub is_end: Option<bool>,
}

impl PracticeRequest {
    fn message(&self) -> String {
        match &self.user_message {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        }
    }

    fn history(&self) -> &[ConversationTurn] {
        self.conversation_history.as_deref().unwrap_or_default()
    }

    fn is_end(&self) -> bool {
        self.is_end.unwrap_or_default()
    }
}

/// Successful response envelope.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
        })
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Short user-facing message.
    pub error: String,
    /// Underlying cause, for diagnostics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

/// A failed request: status code plus [`ErrorResponse`] body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    fn bad_request(error: &str, details: Option<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorResponse {
                error: error.to_string(),
                details,
            },
        }
    }

    /// Maps a pipeline failure for the feature whose generic message is `failure`.
    fn from_generation(failure: &str, err: ProwriterError) -> Self {
        let (status, message) = match &err {
            ProwriterError::Cancelled => (StatusCode::SERVICE_UNAVAILABLE, "Service shutting down"),
            ProwriterError::InvalidInput(_) => (StatusCode::BAD_REQUEST, failure),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, failure),
        };
        error!(error = %err, status = status.as_u16(), "{failure}");
        Self {
            status,
            body: ErrorResponse {
                error: message.to_string(),
                details: Some(err.to_string()),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Parses a JSON body; an empty body means "all fields absent".
fn parse_body<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| ApiError::bad_request("Invalid request body", Some(e.to_string())))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// POST /api/correct
///
/// Grammar-only correction, or a professional rewrite when `mode` is
/// `professional`.
pub async fn post_correct(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    const FAILURE: &str = "Failed to process text";

    let req: CorrectRequest = parse_body(&body)?;
    let Some(text) = non_blank(req.text.as_deref()) else {
        return Err(ApiError::bad_request("Text is required", None));
    };
    let prefs = req.user_preferences.unwrap_or_default();
    let now = Utc::now();

    let mode = CorrectionMode::from_wire(req.mode.as_deref());
    let prompt = match mode {
        CorrectionMode::Professional => {
            let tone = non_blank(req.tone.as_deref()).unwrap_or(DEFAULT_REWRITE_TONE);
            professional_prompt(text, tone, &prefs, &now)
        }
        CorrectionMode::Grammar => grammar_prompt(text, &prefs, &now),
    };
    debug!(?mode, chars = text.len(), "correction requested");

    let result = run(&state, prompt)
        .await
        .map_err(|e| ApiError::from_generation(FAILURE, e))?;
    Ok(Envelope::ok(result.into_value()).into_response())
}

/// POST /api/daily
///
/// Always answers with exactly [`DAILY_TASK_COUNT`] tasks or an error.
pub async fn post_daily(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    const FAILURE: &str = "Failed to generate daily tasks";

    let req: DailyRequest = parse_body(&body)?;
    let prefs = req.user_preferences.unwrap_or_default();
    let prompt = daily_task_prompt(&prefs, &Utc::now());

    let tasks = run(&state, prompt)
        .await
        .and_then(|result| normalize_daily_tasks(result, DAILY_TASK_COUNT))
        .map_err(|e| ApiError::from_generation(FAILURE, e))?;
    Ok(Envelope::ok(Value::Object(tasks)).into_response())
}

/// POST /api/practice
///
/// One roleplay turn, or feedback on the whole conversation when `isEnd`.
pub async fn post_practice(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    const FAILURE: &str = "Failed to process practice";

    let req: PracticeRequest = parse_body(&body)?;
    let scenario = resolve_scenario(&req)?;
    let prompt = roleplay_prompt(scenario, &req.message(), req.history(), req.is_end());
    debug!(
        turns = req.history().len(),
        is_end = req.is_end(),
        "practice requested"
    );

    let result = run(&state, prompt)
        .await
        .map_err(|e| ApiError::from_generation(FAILURE, e))?;
    Ok(Envelope::ok(result.into_value()).into_response())
}

fn resolve_scenario(req: &PracticeRequest) -> Result<&str, ApiError> {
    if let Some(scenario) = non_blank(req.scenario.as_deref()) {
        return Ok(scenario);
    }
    match non_blank(req.scenario_id.as_deref()) {
        Some(id) => find_scenario(id).map(|s| s.context).ok_or_else(|| {
            ApiError::bad_request("Scenario is required", Some(format!("unknown scenario id `{id}`")))
        }),
        None => Err(ApiError::bad_request("Scenario is required", None)),
    }
}

async fn run(state: &AppState, prompt: String) -> Result<GenerationResult, ProwriterError> {
    let request = state.generator.request(prompt);
    state.generator.generate(request, &state.shutdown).await
}

/// GET /api/scenarios
pub async fn get_scenarios() -> Json<Envelope<&'static [Scenario]>> {
    Envelope::ok(workplace_scenarios())
}

/// GET /health
pub async fn get_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}
