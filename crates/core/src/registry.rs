// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Named parser registry: type identifier → decoding function.
//!
//! Built once from the entries the result modules contribute, then treated
//! as immutable shared state for however many verification runs follow.
//! Lookups take `&self` and are safe to share across runs without
//! synchronization; no writer exists after construction.

use crate::error::RoundTripError;
use crate::result::ParsedResult;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::fmt;

/// Decoding function: body fields plus the already-decoded instance name.
pub type ParseFn =
    Box<dyn Fn(&Map<String, Value>, &str) -> Result<ParsedResult, RoundTripError> + Send + Sync>;

/// A single `(type identifier, parser)` registration.
pub struct ParserEntry {
    type_id: String,
    parse: ParseFn,
}

impl ParserEntry {
    pub fn new<F>(type_id: impl Into<String>, parse: F) -> Self
    where
        F: Fn(&Map<String, Value>, &str) -> Result<ParsedResult, RoundTripError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            type_id: type_id.into(),
            parse: Box::new(parse),
        }
    }

    pub fn type_id(&self) -> &str {
        &self.type_id
    }
}

impl fmt::Debug for ParserEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserEntry")
            .field("type_id", &self.type_id)
            .finish_non_exhaustive()
    }
}

/// Immutable mapping from type identifier to decoding function.
pub struct ParserRegistry {
    parsers: IndexMap<String, ParseFn>,
}

impl ParserRegistry {
    /// Build from an ordered entry sequence.
    ///
    /// Two entries sharing a type identifier are a configuration error and
    /// fail fast, before any verification run executes.
    pub fn new(entries: impl IntoIterator<Item = ParserEntry>) -> Result<Self, RoundTripError> {
        let mut parsers = IndexMap::new();
        for entry in entries {
            if parsers.contains_key(&entry.type_id) {
                return Err(RoundTripError::DuplicateType {
                    type_id: entry.type_id,
                });
            }
            parsers.insert(entry.type_id, entry.parse);
        }
        Ok(Self { parsers })
    }

    /// Registered type identifiers, in registration order.
    pub fn type_ids(&self) -> impl Iterator<Item = &str> {
        self.parsers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    /// Look up the parser for a type identifier.
    pub fn lookup(&self, type_id: &str) -> Result<&ParseFn, RoundTripError> {
        self.parsers
            .get(type_id)
            .ok_or_else(|| RoundTripError::MissingType {
                type_id: type_id.to_string(),
            })
    }

    /// Decode a body through the parser registered for `type_id`.
    pub fn parse(
        &self,
        type_id: &str,
        body: &Map<String, Value>,
        name: &str,
    ) -> Result<ParsedResult, RoundTripError> {
        let parse = self.lookup(type_id)?;
        parse(body, name)
    }
}

impl fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("types", &self.parsers.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
