//! Configuration validation.
//!
//! Serde handles the syntactic checks; this module covers value ranges and
//! cross-field rules. All errors are collected, not just the first.

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ChirpyConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address `{0}` is not a socket address")]
    BindAddress(String),
    #[error("chirps.max_length must be greater than 0")]
    ZeroMaxLength,
    #[error("chirps.banned_words entry `{0}` must be non-empty lowercase without whitespace")]
    BannedWord(String),
    #[error("chirps.banned_words contains `{0}` more than once")]
    DuplicateBannedWord(String),
    #[error("timeouts.request_secs must be greater than 0")]
    ZeroRequestTimeout,
    #[error("security.max_body_size must be greater than 0")]
    ZeroBodyLimit,
    #[error("admin.api_key must not be empty when set")]
    EmptyApiKey,
    #[error("observability.log_level `{0}` is not one of trace, debug, info, warn, error")]
    LogLevel(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &ChirpyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    if config.chirps.max_length == 0 {
        errors.push(ValidationError::ZeroMaxLength);
    }

    let mut seen = HashSet::new();
    for word in &config.chirps.banned_words {
        let well_formed = !word.is_empty()
            && !word.chars().any(char::is_whitespace)
            && word.to_lowercase() == *word;
        if !well_formed {
            errors.push(ValidationError::BannedWord(word.clone()));
        } else if !seen.insert(word.as_str()) {
            errors.push(ValidationError::DuplicateBannedWord(word.clone()));
        }
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.security.max_body_size == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if matches!(config.admin.api_key.as_deref(), Some("")) {
        errors.push(ValidationError::EmptyApiKey);
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::LogLevel(config.observability.log_level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
