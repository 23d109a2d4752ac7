// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sibling-field order perturbation.
//!
//! Decoders and the equivalence check must be insensitive to field order,
//! so the verifier re-emits every document with sibling fields permuted at
//! every nesting level before parsing it back.

use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::{Map, Value};

/// Rebuild a document with sibling field order permuted at every nesting
/// level. Array element order is semantic and left untouched.
pub fn shuffle_fields<R: Rng + ?Sized>(doc: &Value, rng: &mut R) -> Value {
    match doc {
        Value::Object(fields) => {
            let mut keys: Vec<&String> = fields.keys().collect();
            keys.shuffle(rng);
            let mut out = Map::with_capacity(fields.len());
            for key in keys {
                if let Some(value) = fields.get(key) {
                    out.insert(key.clone(), shuffle_fields(value, rng));
                }
            }
            Value::Object(out)
        }
        Value::Array(items) => {
            Value::Array(items.iter().map(|item| shuffle_fields(item, rng)).collect())
        }
        scalar => scalar.clone(),
    }
}

#[cfg(test)]
#[path = "shuffle_tests.rs"]
mod tests;
