// SPDX-FileCopyrightText: 2026 Prowriter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use crate::diagnostic::ConfigError;
use crate::model::ProwriterConfig;

/// Longest accepted delay between generation attempts.
const MAX_RETRY_DELAY_MS: u64 = 60_000;

/// Most retries a single generation call may make.
const MAX_RETRIES: u32 = 10;

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every failure instead of stopping at the first one.
pub fn validate_config(config: &ProwriterConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut fail = |message: String| errors.push(ConfigError::Validation { message });

    let host = config.server.host.trim();
    if host.is_empty() {
        fail("server.host must not be empty".to_string());
    } else if host.parse::<std::net::IpAddr>().is_err()
        && !host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-')
    {
        fail(format!(
            "server.host `{host}` is not a valid IP address or hostname"
        ));
    }

    if config.gemini.model.trim().is_empty() {
        fail("gemini.model must not be empty".to_string());
    }

    let base_url = config.gemini.base_url.trim();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        fail(format!(
            "gemini.base_url must start with http:// or https://, got `{base_url}`"
        ));
    }

    if config.gemini.timeout_secs == 0 {
        fail("gemini.timeout_secs must be at least 1".to_string());
    }

    if config.generation.max_retries > MAX_RETRIES {
        fail(format!(
            "generation.max_retries must be at most {MAX_RETRIES}, got {}",
            config.generation.max_retries
        ));
    }

    if config.generation.retry_delay_ms > MAX_RETRY_DELAY_MS {
        fail(format!(
            "generation.retry_delay_ms must be at most {MAX_RETRY_DELAY_MS}, got {}",
            config.generation.retry_delay_ms
        ));
    }

    let generation = &config.generation;
    if generation.request_timeout_secs == 0 {
        fail("generation.request_timeout_secs must be at least 1".to_string());
    } else if generation.max_retries <= MAX_RETRIES
        && generation.retry_delay_ms <= MAX_RETRY_DELAY_MS
    {
        let needed_ms = worst_case_call_ms(config);
        if generation.request_timeout_secs.saturating_mul(1000) < needed_ms {
            fail(format!(
                "generation.request_timeout_secs ({}) is shorter than {} attempt(s) of \
                 gemini.timeout_secs ({}) plus retry delays; raise it to at least {}",
                generation.request_timeout_secs,
                generation.max_retries + 1,
                config.gemini.timeout_secs,
                needed_ms.div_ceil(1000)
            ));
        }
    }

    if config.storage.database_path.trim().is_empty() {
        fail("storage.database_path must not be empty".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Longest a call can take when every attempt runs to the HTTP timeout.
fn worst_case_call_ms(config: &ProwriterConfig) -> u64 {
    let retries = u64::from(config.generation.max_retries);
    (retries + 1)
        .saturating_mul(config.gemini.timeout_secs.saturating_mul(1000))
        .saturating_add(retries.saturating_mul(config.generation.retry_delay_ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_error(errors: &[ConfigError], needle: &str) -> bool {
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains(needle)))
    }

    #[test]
    fn default_config_validates() {
        assert!(validate_config(&ProwriterConfig::default()).is_ok());
    }

    #[test]
    fn empty_host_fails() {
        let mut config = ProwriterConfig::default();
        config.server.host = "  ".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "server.host"));
    }

    #[test]
    fn bad_base_url_fails() {
        let mut config = ProwriterConfig::default();
        config.gemini.base_url = "ftp://example.com".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "gemini.base_url"));
    }

    #[test]
    fn collects_all_errors() {
        let mut config = ProwriterConfig::default();
        config.gemini.model = String::new();
        config.generation.max_retries = 50;
        config.generation.retry_delay_ms = 120_000;
        config.storage.database_path = String::new();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(has_error(&errors, "max_retries"));
        assert!(has_error(&errors, "retry_delay_ms"));
    }

    #[test]
    fn deadline_must_cover_every_attempt() {
        let mut config = ProwriterConfig::default();
        config.gemini.timeout_secs = 60;
        config.generation.max_retries = 1;
        config.generation.retry_delay_ms = 1000;
        config.generation.request_timeout_secs = 120;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(has_error(&errors, "at least 121"));

        config.generation.request_timeout_secs = 121;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn zero_retries_is_valid() {
        let mut config = ProwriterConfig::default();
        config.generation.max_retries = 0;
        config.generation.retry_delay_ms = 0;
        assert!(validate_config(&config).is_ok());
    }
}
