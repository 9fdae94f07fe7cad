// SPDX-FileCopyrightText: 2026 Prowriter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Prowriter integration tests.
//!
//! Provides a scripted generation provider and canned model outputs so the
//! pipeline and gateway can be tested without network access.
//!
//! # Components
//!
//! - [`MockProvider`] - Generation provider replaying a queue of outcomes
//! - [`fixtures`] - Model outputs shaped like each feature contract

pub mod fixtures;
pub mod mock_provider;

pub use mock_provider::{MockOutcome, MockProvider};
