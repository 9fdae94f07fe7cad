// SPDX-FileCopyrightText: 2026 Prowriter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Prowriter writing coach.
//!
//! This crate provides the error type, the request/result types that flow
//! through the generation pipeline, typed feature contracts, and the adapter
//! traits implemented by the provider and store crates.

pub mod contract;
pub mod error;
pub mod progress;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::ProwriterError;
pub use types::{ConversationTurn, GenerationRequest, GenerationResult, Role, UserPreferences};

pub use traits::{GenerationProvider, KeyValueStore, PluginAdapter};
