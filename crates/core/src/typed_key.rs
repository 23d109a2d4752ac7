// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed field keys: `type#name`.
//!
//! A typed key embeds a result's declared type and instance name into a
//! single document field key, so a self-describing document can be routed
//! to the right parser without an extra wrapper object.

use crate::error::RoundTripError;

/// Reserved delimiter between the type identifier and the instance name.
pub const TYPED_KEY_DELIMITER: char = '#';

/// Build a typed field key from a type identifier and an instance name.
///
/// Neither part may contain the reserved delimiter. The codec concatenates
/// without escaping; a delimiter inside either part would make the key
/// ambiguous, so names containing `#` are invalid by construction rather
/// than something to route around.
pub fn encode_typed_key(type_id: &str, name: &str) -> Result<String, RoundTripError> {
    if type_id.contains(TYPED_KEY_DELIMITER) {
        return Err(RoundTripError::ReservedDelimiter {
            part: "type",
            value: type_id.to_string(),
        });
    }
    if name.contains(TYPED_KEY_DELIMITER) {
        return Err(RoundTripError::ReservedDelimiter {
            part: "name",
            value: name.to_string(),
        });
    }
    Ok(format!("{}{}{}", type_id, TYPED_KEY_DELIMITER, name))
}

/// Split a typed field key into `(type, name)` at the first delimiter.
///
/// A key without a delimiter was not produced by this codec (the field does
/// not hold a polymorphic typed value); callers must treat that as a hard
/// parse failure, not a soft skip.
pub fn decode_typed_key(key: &str) -> Result<(&str, &str), RoundTripError> {
    key.split_once(TYPED_KEY_DELIMITER)
        .ok_or_else(|| RoundTripError::MalformedKey {
            key: key.to_string(),
        })
}

#[cfg(test)]
#[path = "typed_key_tests.rs"]
mod tests;
