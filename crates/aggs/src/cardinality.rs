// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cardinality result: a single distinct-value count.
//!
//! Serialized body shape: `{ "value": <count> }`.

use rand::rngs::StdRng;
use rand::Rng;
use serde_json::{Map, Value};
use tk_core::{
    value_kind, AggResult, Metadata, ParsedResult, ParserEntry, PipelineRef, ResultFixture,
    RoundTripError,
};

/// Type identifier for cardinality results.
pub const CARDINALITY: &str = "cardinality";

const VALUE_FIELD: &str = "value";

/// The serialized form of a cardinality estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct CardinalityResult {
    name: String,
    metadata: Option<Metadata>,
    count: u64,
}

impl CardinalityResult {
    pub fn new(name: impl Into<String>, metadata: Option<Metadata>, count: u64) -> Self {
        Self {
            name: name.into(),
            metadata,
            count,
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

impl AggResult for CardinalityResult {
    fn name(&self) -> &str {
        &self.name
    }

    fn type_id(&self) -> &str {
        CARDINALITY
    }

    fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    fn body(&self) -> Result<Map<String, Value>, RoundTripError> {
        let mut body = Map::new();
        body.insert(VALUE_FIELD.to_string(), Value::from(self.count));
        Ok(body)
    }
}

/// Parse a cardinality body.
///
/// `value` is required and must be numeric. Unknown sibling fields are
/// tolerated and preserved so the parsed form re-serializes equivalently.
pub fn parse(body: &Map<String, Value>, name: &str) -> Result<ParsedResult, RoundTripError> {
    match body.get(VALUE_FIELD) {
        Some(Value::Number(_)) => ParsedResult::from_body(CARDINALITY, name, body),
        Some(other) => Err(RoundTripError::malformed(
            VALUE_FIELD,
            format!("expected a number, got {}", value_kind(other)),
        )),
        None => Err(RoundTripError::malformed(
            VALUE_FIELD,
            "missing required field",
        )),
    }
}

/// Registry entry for [`CARDINALITY`].
pub fn parser_entry() -> ParserEntry {
    ParserEntry::new(CARDINALITY, parse)
}

/// Generates randomized cardinality instances for verification runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardinalityFixture;

impl ResultFixture for CardinalityFixture {
    type Result = CardinalityResult;

    fn create_instance(
        &self,
        name: String,
        _pipelines: Vec<PipelineRef>,
        metadata: Option<Metadata>,
        rng: &mut StdRng,
    ) -> CardinalityResult {
        CardinalityResult::new(name, metadata, rng.random_range(0..=1_000_000))
    }

    fn assert_parsed(
        &self,
        original: &CardinalityResult,
        parsed: &ParsedResult,
    ) -> Result<(), RoundTripError> {
        let value = parsed.body().get(VALUE_FIELD).and_then(Value::as_f64);
        if value != Some(original.count() as f64) {
            return Err(RoundTripError::EquivalenceMismatch {
                path: VALUE_FIELD.to_string(),
                expected: original.count().to_string(),
                actual: value.map_or_else(|| "<missing>".to_string(), |v| v.to_string()),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "cardinality_tests.rs"]
mod tests;
