// SPDX-FileCopyrightText: 2026 Prowriter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local client commands: correct, daily, answer, profile, scenarios.
//!
//! Calls the pipeline in-process with the user's stored preferences and keeps
//! progress in the configured SQLite store.

use std::io::Write;
use std::sync::Arc;

use chrono::{Local, NaiveDate, Utc};
use prowriter_config::ProwriterConfig;
use prowriter_core::contract::{CorrectionResult, DailyTaskSet, from_payload, normalize_daily_tasks};
use prowriter_core::progress::{DailyProgress, DailyTaskSnapshot};
use prowriter_core::types::{CorrectionMode, DEFAULT_REWRITE_TONE, Domain, Level, Tone};
use prowriter_core::{GenerationResult, ProwriterError, UserPreferences};
use prowriter_pipeline::Generator;
use prowriter_prompts::{
    DAILY_TASK_COUNT, daily_task_prompt, grammar_prompt, professional_prompt, workplace_scenarios,
};
use prowriter_storage::profile::AnswerOutcome;
use prowriter_storage::{ProfileStore, SqliteStore};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::{serve, shutdown};

fn io_err(e: std::io::Error) -> ProwriterError {
    ProwriterError::Internal(format!("failed to write output: {e}"))
}

/// In-process client over the pipeline and the profile store.
pub struct Client {
    generator: Option<Generator>,
    profile: ProfileStore,
    cancel: CancellationToken,
    today: NaiveDate,
}

impl Client {
    pub fn new(
        generator: Option<Generator>,
        profile: ProfileStore,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            generator,
            profile,
            cancel,
            today: Local::now().date_naive(),
        }
    }

    /// Opens the configured store. The Gemini-backed pipeline is built only
    /// when `generate` is set, so profile commands work without an API key.
    pub async fn from_config(
        config: &ProwriterConfig,
        generate: bool,
    ) -> Result<Self, ProwriterError> {
        let generator = if generate {
            Some(serve::build_generator(config)?)
        } else {
            None
        };
        let store = SqliteStore::open(&config.storage.database_path).await?;
        Ok(Self::new(
            generator,
            ProfileStore::new(Arc::new(store)),
            shutdown::install_signal_handler(),
        ))
    }

    #[cfg(test)]
    fn on(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    async fn generate(&self, prompt: String) -> Result<GenerationResult, ProwriterError> {
        let generator = self
            .generator
            .as_ref()
            .ok_or_else(|| ProwriterError::Internal("client has no generator".into()))?;
        generator.generate(generator.request(prompt), &self.cancel).await
    }

    /// `prowriter correct`
    pub async fn correct(
        &self,
        out: &mut dyn Write,
        text: &str,
        mode: CorrectionMode,
        tone: Option<&str>,
    ) -> Result<(), ProwriterError> {
        if text.trim().is_empty() {
            return Err(ProwriterError::InvalidInput("Text is required".into()));
        }
        let prefs = self.profile.preferences().await?;
        let now = Utc::now();
        let prompt = match mode {
            CorrectionMode::Grammar => grammar_prompt(text, &prefs, &now),
            CorrectionMode::Professional => professional_prompt(
                text,
                tone.filter(|t| !t.trim().is_empty())
                    .unwrap_or(DEFAULT_REWRITE_TONE),
                &prefs,
                &now,
            ),
        };

        let result = self.generate(prompt).await?;
        match from_payload::<CorrectionResult>(&result) {
            Some(correction) => write_correction(out, &correction).map_err(io_err),
            None => write_raw(out, result).map_err(io_err),
        }
    }

    /// `prowriter daily`
    pub async fn daily(&self, out: &mut dyn Write, refresh: bool) -> Result<(), ProwriterError> {
        let existing = self.profile.daily_tasks_for(self.today).await?;
        let snapshot = match existing {
            Some(snapshot) if !refresh => snapshot,
            _ => {
                let prefs = self.profile.preferences().await?;
                let result = self.generate(daily_task_prompt(&prefs, &Utc::now())).await?;
                let payload = normalize_daily_tasks(result, DAILY_TASK_COUNT)?;
                let set: DailyTaskSet = serde_json::from_value(Value::Object(payload))
                    .map_err(|e| ProwriterError::generation(format!("unusable daily tasks: {e}")))?;
                let snapshot = DailyTaskSnapshot::new(self.today, set.tasks);
                self.profile.save_daily_tasks(&snapshot).await?;
                snapshot
            }
        };

        let progress = self.profile.progress().await?;
        let completed = progress.as_ref().map_or(0, |p| p.completed_on(self.today));
        let streak = progress.as_ref().map_or(0, |p| p.streak);
        write_daily(out, &snapshot, completed, streak).map_err(io_err)
    }

    /// `prowriter answer`
    pub async fn answer(
        &self,
        out: &mut dyn Write,
        task_id: &str,
        answer: &str,
    ) -> Result<(), ProwriterError> {
        let outcome = self.profile.answer_task(self.today, task_id, answer).await?;
        let line = match outcome {
            AnswerOutcome::Correct(p) => format!(
                "Correct! {}/{} done today, streak {} day(s).",
                p.completed, p.total, p.streak
            ),
            AnswerOutcome::Incorrect { expected } => {
                format!("Not quite. Expected: {expected}")
            }
            AnswerOutcome::AlreadyCompleted => format!("{task_id} is already completed."),
        };
        writeln!(out, "{line}").map_err(io_err)
    }

    /// `prowriter profile show`
    pub async fn profile_show(&self, out: &mut dyn Write) -> Result<(), ProwriterError> {
        let prefs = self.profile.preferences().await?;
        let progress = self.profile.progress().await?;
        write_profile(out, &prefs, progress.as_ref(), self.today).map_err(io_err)
    }

    /// `prowriter profile set`
    pub async fn profile_set(
        &self,
        out: &mut dyn Write,
        tone: Option<Tone>,
        domain: Option<Domain>,
        level: Option<Level>,
    ) -> Result<(), ProwriterError> {
        if tone.is_none() && domain.is_none() && level.is_none() {
            return Err(ProwriterError::InvalidInput(
                "nothing to set; pass --tone, --domain or --level".into(),
            ));
        }
        let mut prefs = self.profile.preferences().await?;
        if let Some(tone) = tone {
            prefs.tone = Some(tone.to_string());
        }
        if let Some(domain) = domain {
            prefs.domain = Some(domain.to_string());
        }
        if let Some(level) = level {
            prefs.level = Some(level.to_string());
        }
        self.profile.set_preferences(&prefs).await?;
        writeln!(out, "Preferences saved.").map_err(io_err)
    }

    /// `prowriter profile clear`
    pub async fn profile_clear(&self, out: &mut dyn Write) -> Result<(), ProwriterError> {
        self.profile.clear_all().await?;
        writeln!(out, "All local data cleared.").map_err(io_err)
    }
}

/// `prowriter scenarios`
pub fn print_scenarios(out: &mut dyn Write) -> Result<(), ProwriterError> {
    write_scenarios(out).map_err(io_err)
}

fn write_scenarios(out: &mut dyn Write) -> std::io::Result<()> {
    for s in workplace_scenarios() {
        writeln!(out, "{:<15} {}", s.id, s.title)?;
        writeln!(out, "{:<15} {} (with: {})", "", s.description, s.roleplay_as)?;
    }
    Ok(())
}

fn write_profile(
    out: &mut dyn Write,
    prefs: &UserPreferences,
    progress: Option<&DailyProgress>,
    today: NaiveDate,
) -> std::io::Result<()> {
    writeln!(out, "tone:   {}", prefs.tone())?;
    writeln!(out, "domain: {}", prefs.domain())?;
    writeln!(out, "level:  {}", prefs.level())?;
    match progress {
        Some(p) => writeln!(
            out,
            "today:  {}/{} completed, streak {}",
            p.completed_on(today),
            p.total,
            p.streak
        ),
        None => writeln!(out, "today:  no progress yet"),
    }
}

fn write_correction(out: &mut dyn Write, c: &CorrectionResult) -> std::io::Result<()> {
    writeln!(out, "{}", c.corrected_text)?;
    if !c.explanation.is_empty() {
        writeln!(out, "\nWhat changed:")?;
        for line in &c.explanation {
            writeln!(out, "  - {line}")?;
        }
    }
    if !c.alternatives.is_empty() {
        writeln!(out, "\nAlternatives:")?;
        for alt in &c.alternatives {
            writeln!(out, "  - {alt}")?;
        }
    }
    if let Some(score) = c.confidence_score {
        writeln!(out, "\nConfidence: {:.0}%", score * 100.0)?;
    }
    Ok(())
}

fn write_raw(out: &mut dyn Write, result: GenerationResult) -> std::io::Result<()> {
    match result {
        GenerationResult::RawText(text) => writeln!(out, "{text}"),
        structured => writeln!(out, "{}", structured.into_value()),
    }
}

fn write_daily(
    out: &mut dyn Write,
    snapshot: &DailyTaskSnapshot,
    completed: u32,
    streak: u32,
) -> std::io::Result<()> {
    writeln!(
        out,
        "Daily tasks for {}  ({completed}/{} done, streak {streak})\n",
        snapshot.date,
        snapshot.tasks.len()
    )?;
    for tracked in &snapshot.tasks {
        let task = &tracked.task;
        let mark = if tracked.completed { "x" } else { " " };
        writeln!(out, "[{mark}] {} ({}) {}", task.id, task.task_type, task.instruction)?;
        writeln!(out, "      {}", task.content)?;
        if let Some(options) = &task.options {
            writeln!(out, "      options: {}", options.join(" | "))?;
        }
    }
    Ok(())
}
