//! Chirp payload validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::chirps::filter::{FilterError, WordFilter};
use crate::config::ChirpConfig;

/// A chirp that passed shape validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChirpRequest {
    pub body: String,
}

/// Successful validation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChirpResponse {
    pub cleaned_body: String,
}

/// Why a chirp payload was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChirpError {
    #[error("request body is not valid JSON")]
    MalformedJson,
    #[error("request body has no string `body` field")]
    MissingOrInvalidField,
    #[error("chirp body is {length} characters, limit is {max_length}")]
    TooLong { length: usize, max_length: usize },
}

/// Validates raw chirp payloads and cleans accepted bodies.
#[derive(Debug, Clone)]
pub struct ChirpValidator {
    max_length: usize,
    filter: WordFilter,
}

impl ChirpValidator {
    pub fn new(max_length: usize, filter: WordFilter) -> Self {
        Self { max_length, filter }
    }

    pub fn from_config(config: &ChirpConfig) -> Result<Self, FilterError> {
        Ok(Self::new(
            config.max_length,
            WordFilter::new(&config.banned_words)?,
        ))
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn banned_word_count(&self) -> usize {
        self.filter.len()
    }

    /// Parse `raw` into a typed request without accepting partial shapes.
    ///
    /// An empty `body` counts as missing.
    pub fn parse(&self, raw: &[u8]) -> Result<ChirpRequest, ChirpError> {
        let value: Value = serde_json::from_slice(raw).map_err(|_| ChirpError::MalformedJson)?;
        match value.get("body") {
            Some(Value::String(body)) if !body.is_empty() => {
                Ok(ChirpRequest { body: body.clone() })
            }
            _ => Err(ChirpError::MissingOrInvalidField),
        }
    }

    /// Parse, length-check and clean a raw chirp payload.
    pub fn validate(&self, raw: &[u8]) -> Result<ChirpResponse, ChirpError> {
        let request = self.parse(raw)?;

        // UTF-16 code units, so astral characters count twice.
        let length = request.body.encode_utf16().count();
        if length > self.max_length {
            return Err(ChirpError::TooLong {
                length,
                max_length: self.max_length,
            });
        }

        Ok(ChirpResponse {
            cleaned_body: self.filter.filter(&request.body),
        })
    }
}
