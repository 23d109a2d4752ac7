// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy for round-trip verification

use thiserror::Error;

/// Errors raised while encoding, decoding, or comparing result documents.
///
/// Every variant aborts the verification run that raised it, except
/// [`RoundTripError::MissingType`], which the verifier catches at the
/// decode boundary and converts into a skipped run. Callers match the
/// variant itself, never the rendered message.
#[derive(Debug, Error)]
pub enum RoundTripError {
    /// Encode precondition violation: a key part already holds `#`.
    #[error("{part} {value:?} contains the reserved '#' delimiter")]
    ReservedDelimiter { part: &'static str, value: String },
    /// A field key without the delimiter was handed to the decoder.
    #[error("malformed typed key {key:?}: no '#' delimiter")]
    MalformedKey { key: String },
    /// No parser registered for the decoded type identifier.
    #[error("no parser registered for type {type_id:?}")]
    MissingType { type_id: String },
    /// Document contents do not match the expected schema.
    #[error("malformed document at {path}: {reason}")]
    MalformedDocument { path: String, reason: String },
    /// Decoded form differs from the original.
    #[error("decoded document differs at {path}: expected {expected}, got {actual}")]
    EquivalenceMismatch {
        path: String,
        expected: String,
        actual: String,
    },
    /// Two registry entries share a type identifier.
    #[error("duplicate parser registered for type {type_id:?}")]
    DuplicateType { type_id: String },
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml encode: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("toml decode: {0}")]
    TomlDe(#[from] toml::de::Error),
}

impl RoundTripError {
    /// Shorthand for [`RoundTripError::MalformedDocument`].
    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        RoundTripError::MalformedDocument {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
