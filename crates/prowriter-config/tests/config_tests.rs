// SPDX-FileCopyrightText: 2026 Prowriter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Prowriter configuration system.

use prowriter_config::diagnostic::ConfigError;
use prowriter_config::model::ProwriterConfig;
use prowriter_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_config() {
    let toml = r#"
[server]
host = "0.0.0.0"
port = 8080
log_level = "debug"

[gemini]
api_key = "test-key"
model = "gemini-2.5-pro"
base_url = "http://localhost:9999/v1beta"
timeout_secs = 10

[generation]
max_retries = 2
retry_delay_ms = 500
request_timeout_secs = 40

[storage]
database_path = "/tmp/prowriter.db"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.log_level, "debug");
    assert_eq!(config.gemini.api_key.as_deref(), Some("test-key"));
    assert_eq!(config.gemini.model, "gemini-2.5-pro");
    assert_eq!(config.gemini.timeout_secs, 10);
    assert_eq!(config.generation.max_retries, 2);
    assert_eq!(config.generation.retry_delay_ms, 500);
    assert_eq!(config.generation.request_timeout_secs, 40);
    assert_eq!(config.storage.database_path, "/tmp/prowriter.db");
}

/// Missing optional sections use defaults without error.
#[test]
fn missing_sections_use_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.log_level, "info");
    assert!(config.gemini.api_key.is_none());
    assert_eq!(config.gemini.model, "gemini-2.5-flash");
    assert_eq!(
        config.gemini.base_url,
        "https://generativelanguage.googleapis.com/v1beta"
    );
    assert_eq!(config.generation.max_retries, 1);
    assert_eq!(config.generation.retry_delay_ms, 1000);
    assert!(config.storage.database_path.ends_with("prowriter.db"));
}

/// Dot-notation overrides land in the right section.
#[test]
fn dotted_override_sets_nested_key() {
    use figment::{Figment, providers::Serialized};

    let config: ProwriterConfig = Figment::new()
        .merge(Serialized::defaults(ProwriterConfig::default()))
        .merge(("gemini.api_key", "from-override"))
        .extract()
        .expect("should set api_key via dot notation");

    assert_eq!(config.gemini.api_key.as_deref(), Some("from-override"));
}

/// Missing config files are silently skipped.
#[test]
fn missing_config_files_silently_skipped() {
    use figment::{
        Figment,
        providers::{Format, Serialized, Toml},
    };

    let config: ProwriterConfig = Figment::new()
        .merge(Serialized::defaults(ProwriterConfig::default()))
        .merge(Toml::file("/nonexistent/path/prowriter.toml"))
        .extract()
        .expect("missing file should be silently skipped");

    assert_eq!(config.server.port, 3000);
}

/// Unexpected top-level section is rejected by deny_unknown_fields.
#[test]
fn unknown_top_level_section_rejected() {
    let toml = r#"
[anthropic]
api_key = "nope"
"#;

    let err = load_config_from_str(toml).expect_err("unknown section should be rejected");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("anthropic"),
        "error should mention unknown field, got: {err_str}"
    );
}

/// Unknown key "prot" in [server] produces an UnknownKey with suggestion "port".
#[test]
fn typo_in_server_suggests_port() {
    let toml = r#"
[server]
prot = 8080
"#;

    let errors = load_and_validate_str(toml).expect_err("should produce errors");
    let found = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { key, suggestion, valid_keys, .. } if {
            key == "prot"
                && suggestion.as_deref() == Some("port")
                && valid_keys.contains("log_level")
        })
    });
    assert!(found, "expected UnknownKey for 'prot', got: {errors:?}");
}

/// String where a number is expected is reported as a type problem.
#[test]
fn invalid_type_is_reported() {
    let toml = r#"
[generation]
max_retries = "lots"
"#;

    let err = load_config_from_str(toml).expect_err("should reject invalid type");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("invalid type") || err_str.contains("max_retries"),
        "error should mention type mismatch, got: {err_str}"
    );
}

/// UnknownKey renders through miette with the suggestion in the help text.
#[test]
fn unknown_key_renders_with_miette() {
    use miette::{Diagnostic, GraphicalReportHandler};

    let error = ConfigError::UnknownKey {
        key: "prot".to_string(),
        suggestion: Some("port".to_string()),
        valid_keys: "host, port, log_level".to_string(),
        span: None,
        src: None,
    };

    assert!(error.code().is_some());
    let help = error.help().expect("should have help").to_string();
    assert!(help.contains("did you mean `port`"), "got: {help}");

    let mut buf = String::new();
    GraphicalReportHandler::new()
        .render_report(&mut buf, &error)
        .expect("should render");
    assert!(buf.contains("prot"));
}

/// Semantic validation runs after a successful parse.
#[test]
fn validation_runs_after_parse() {
    let toml = r#"
[generation]
retry_delay_ms = 999999
"#;

    let errors = load_and_validate_str(toml).expect_err("oversized delay should fail");
    assert!(errors.iter().any(|e| {
        matches!(e, ConfigError::Validation { message } if message.contains("retry_delay_ms"))
    }));
}

/// A valid file passes both stages.
#[test]
fn load_and_validate_valid_toml() {
    let config = load_and_validate_str("[server]\nport = 4000\n").expect("should validate");
    assert_eq!(config.server.port, 4000);
}
