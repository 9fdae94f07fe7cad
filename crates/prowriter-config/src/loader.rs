// SPDX-FileCopyrightText: 2026 Prowriter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./prowriter.toml` > `~/.config/prowriter/prowriter.toml` >
//! `/etc/prowriter/prowriter.toml` with environment variable overrides via `PROWRITER_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::ProwriterConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/prowriter/prowriter.toml` (system-wide)
/// 3. `~/.config/prowriter/prowriter.toml` (user XDG config)
/// 4. `./prowriter.toml` (local directory)
/// 5. `PROWRITER_*` environment variables
pub fn load_config() -> Result<ProwriterConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<ProwriterConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ProwriterConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<ProwriterConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ProwriterConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for config loading, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(ProwriterConfig::default()))
        .merge(Toml::file("/etc/prowriter/prowriter.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("prowriter/prowriter.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("prowriter.toml"))
        .merge(env_provider())
}

/// Environment provider with explicit section mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so that underscore-containing
/// keys stay intact: `PROWRITER_GEMINI_API_KEY` maps to `gemini.api_key`, not
/// `gemini.api.key`.
fn env_provider() -> Env {
    Env::prefixed("PROWRITER_").map(|key| {
        let mapped = key
            .as_str()
            .replacen("server_", "server.", 1)
            .replacen("gemini_", "gemini.", 1)
            .replacen("generation_", "generation.", 1)
            .replacen("storage_", "storage.", 1);
        mapped.into()
    })
}
