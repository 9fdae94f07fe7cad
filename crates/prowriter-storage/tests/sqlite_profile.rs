// SPDX-FileCopyrightText: 2026 Prowriter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! ProfileStore on top of a real SQLite file.

use std::sync::Arc;

use chrono::NaiveDate;
use prowriter_core::contract::DailyTask;
use prowriter_core::progress::DailyTaskSnapshot;
use prowriter_core::types::TaskType;
use prowriter_core::{KeyValueStore, UserPreferences};
use prowriter_storage::profile::AnswerOutcome;
use prowriter_storage::{DAILY_TASKS_KEY, ProfileStore, SqliteStore};

fn task(id: &str, task_type: TaskType, answer: &str) -> DailyTask {
    DailyTask {
        id: id.into(),
        task_type,
        instruction: "Choose".into(),
        content: "I will arrive ___ the office".into(),
        options: (task_type == TaskType::Choice).then(|| vec!["in".into(), "at".into()]),
        answer: answer.into(),
    }
}

#[tokio::test]
async fn profile_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prowriter.db");
    let path = path.to_str().unwrap();
    let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();

    {
        let profile = ProfileStore::new(Arc::new(SqliteStore::open(path).await.unwrap()));
        profile
            .set_preferences(&UserPreferences {
                tone: Some("formal".into()),
                domain: Some("engineering".into()),
                level: Some("advanced".into()),
            })
            .await
            .unwrap();
        profile
            .save_daily_tasks(&DailyTaskSnapshot::new(
                today,
                vec![
                    task("task-1", TaskType::Rewrite, "Could you send it?"),
                    task("task-2", TaskType::Choice, "at"),
                    task("task-3", TaskType::Fill, "prompt"),
                ],
            ))
            .await
            .unwrap();
        let outcome = profile.answer_task(today, "task-2", "AT").await.unwrap();
        assert!(matches!(outcome, AnswerOutcome::Correct(_)));
    }

    let store = Arc::new(SqliteStore::open(path).await.unwrap());
    let profile = ProfileStore::new(store.clone());
    assert_eq!(profile.preferences().await.unwrap().domain(), "engineering");

    let progress = profile.progress().await.unwrap().unwrap();
    assert_eq!((progress.completed, progress.total, progress.streak), (1, 3, 1));

    let raw = store.get(DAILY_TASKS_KEY).await.unwrap().unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored["tasks"][1]["type"], "choice");
    assert_eq!(stored["tasks"][1]["completed"], true);
}
