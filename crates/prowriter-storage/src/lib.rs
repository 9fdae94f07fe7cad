// SPDX-FileCopyrightText: 2026 Prowriter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client-side persistence for the Prowriter CLI.
//!
//! Values are opaque JSON strings under a handful of fixed keys. The HTTP
//! server never touches this crate; only the local client does.

pub mod memory;
pub mod profile;
pub mod sqlite;

pub use memory::MemoryStore;
pub use profile::ProfileStore;
pub use sqlite::SqliteStore;

/// Key holding the user's [`prowriter_core::UserPreferences`].
pub const PREFERENCES_KEY: &str = "prowriter_preferences";
/// Key holding the user's [`prowriter_core::progress::DailyProgress`].
pub const DAILY_PROGRESS_KEY: &str = "prowriter_daily_progress";
/// Key holding today's [`prowriter_core::progress::DailyTaskSnapshot`].
pub const DAILY_TASKS_KEY: &str = "prowriter_daily_tasks";

/// Every key this crate writes.
pub const ALL_KEYS: [&str; 3] = [PREFERENCES_KEY, DAILY_PROGRESS_KEY, DAILY_TASKS_KEY];
