// SPDX-FileCopyrightText: 2026 Prowriter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the Prowriter writing coach.
//!
//! Serves the four feature endpoints (correction, daily tasks, practice turn
//! and practice feedback) plus the scenario catalog and a health endpoint. The
//! server holds no per-user state: every request builds a prompt, runs it
//! through the shared [`prowriter_pipeline::Generator`] and answers with a
//! `{success, data}` envelope or an `{error, details}` body.

pub mod handlers;
pub mod server;

pub use server::{AppState, ServerConfig, router, start_server};
