// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Text encodings for structured documents.
//!
//! The document tree is [`serde_json::Value`]; each supported encoding
//! renders it to text with or without humanized formatting and parses it
//! back. Encoding choice and formatting never affect semantic content.

use crate::error::RoundTripError;
use serde_json::Value;
use std::fmt;

/// A supported text encoding for result documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocFormat {
    Json,
    Toml,
}

impl DocFormat {
    /// All supported encodings, for uniform random choice per run.
    pub const ALL: [DocFormat; 2] = [DocFormat::Json, DocFormat::Toml];

    /// Render a document tree to text.
    ///
    /// `humanized` selects the pretty layout; the machine layout is the
    /// compact default.
    pub fn to_text(self, doc: &Value, humanized: bool) -> Result<String, RoundTripError> {
        match (self, humanized) {
            (DocFormat::Json, true) => Ok(serde_json::to_string_pretty(doc)?),
            (DocFormat::Json, false) => Ok(serde_json::to_string(doc)?),
            (DocFormat::Toml, true) => Ok(toml::to_string_pretty(doc)?),
            (DocFormat::Toml, false) => Ok(toml::to_string(doc)?),
        }
    }

    /// Parse text back into a document tree.
    pub fn from_text(self, text: &str) -> Result<Value, RoundTripError> {
        match self {
            DocFormat::Json => Ok(serde_json::from_str(text)?),
            DocFormat::Toml => {
                let value: toml::Value = toml::from_str(text)?;
                Ok(serde_json::to_value(value)?)
            }
        }
    }
}

impl fmt::Display for DocFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocFormat::Json => write!(f, "json"),
            DocFormat::Toml => write!(f, "toml"),
        }
    }
}

/// Human-readable kind of a document value, for error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
