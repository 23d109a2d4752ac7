// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structural equivalence over document trees.
//!
//! Two documents are equivalent when they carry the same fields and values
//! at every level. Sibling-field order is ignored; numeric subtypes are
//! compared by value (an integer `5` equals a float `5.0`, since the text
//! encodings do not share one number type); array element order is
//! significant.

use crate::error::RoundTripError;
use serde_json::Value;
use std::fmt;

/// Location and rendering of the first structural difference found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// Dotted field path from the document root (`$`).
    pub path: String,
    pub expected: String,
    pub actual: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "at {}: expected {}, got {}",
            self.path, self.expected, self.actual
        )
    }
}

impl From<Mismatch> for RoundTripError {
    fn from(mismatch: Mismatch) -> Self {
        RoundTripError::EquivalenceMismatch {
            path: mismatch.path,
            expected: mismatch.expected,
            actual: mismatch.actual,
        }
    }
}

/// True when no structural difference exists between the two trees.
pub fn structural_eq(expected: &Value, actual: &Value) -> bool {
    structural_diff(expected, actual).is_none()
}

/// First structural difference between two trees, if any.
pub fn structural_diff(expected: &Value, actual: &Value) -> Option<Mismatch> {
    diff_at("$", expected, actual)
}

fn diff_at(path: &str, expected: &Value, actual: &Value) -> Option<Mismatch> {
    match (expected, actual) {
        (Value::Object(a), Value::Object(b)) => {
            for (key, expected_value) in a {
                let child_path = child(path, key);
                match b.get(key) {
                    Some(actual_value) => {
                        if let Some(mismatch) = diff_at(&child_path, expected_value, actual_value) {
                            return Some(mismatch);
                        }
                    }
                    None => {
                        return Some(Mismatch {
                            path: child_path,
                            expected: expected_value.to_string(),
                            actual: "<missing>".to_string(),
                        })
                    }
                }
            }
            for (key, actual_value) in b {
                if !a.contains_key(key) {
                    return Some(Mismatch {
                        path: child(path, key),
                        expected: "<missing>".to_string(),
                        actual: actual_value.to_string(),
                    });
                }
            }
            None
        }
        (Value::Array(a), Value::Array(b)) => {
            if a.len() != b.len() {
                return Some(Mismatch {
                    path: path.to_string(),
                    expected: format!("array of {} elements", a.len()),
                    actual: format!("array of {} elements", b.len()),
                });
            }
            for (index, (expected_item, actual_item)) in a.iter().zip(b).enumerate() {
                let item_path = format!("{path}[{index}]");
                if let Some(mismatch) = diff_at(&item_path, expected_item, actual_item) {
                    return Some(mismatch);
                }
            }
            None
        }
        (Value::Number(a), Value::Number(b)) => {
            if numbers_eq(a, b) {
                None
            } else {
                Some(scalar_mismatch(path, expected, actual))
            }
        }
        _ => {
            if expected == actual {
                None
            } else {
                Some(scalar_mismatch(path, expected, actual))
            }
        }
    }
}

fn child(path: &str, key: &str) -> String {
    format!("{path}.{key}")
}

/// Numbers compare by value across integer/float subtypes.
fn numbers_eq(a: &serde_json::Number, b: &serde_json::Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

fn scalar_mismatch(path: &str, expected: &Value, actual: &Value) -> Mismatch {
    Mismatch {
        path: path.to_string(),
        expected: expected.to_string(),
        actual: actual.to_string(),
    }
}

#[cfg(test)]
#[path = "equivalence_tests.rs"]
mod tests;
