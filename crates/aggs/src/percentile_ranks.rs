// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Percentile-ranks results for the HDR and t-digest estimators.
//!
//! At this boundary the two estimators differ only in their type
//! identifier, so one module covers both. Serialized body shape (keyed
//! form): `{ "values": { "<percent>": <rank>, ... } }`.

use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::Rng;
use serde_json::{Map, Value};
use tk_core::{
    value_kind, AggResult, Metadata, ParsedResult, ParserEntry, PipelineRef, ResultFixture,
    RoundTripError,
};

/// Type identifier for HDR-histogram percentile ranks.
pub const HDR_PERCENTILE_RANKS: &str = "hdr_percentile_ranks";
/// Type identifier for t-digest percentile ranks.
pub const TDIGEST_PERCENTILE_RANKS: &str = "tdigest_percentile_ranks";

const VALUES_FIELD: &str = "values";

/// The serialized form of a percentile-ranks computation.
#[derive(Debug, Clone, PartialEq)]
pub struct PercentileRanksResult {
    type_id: &'static str,
    name: String,
    metadata: Option<Metadata>,
    ranks: IndexMap<String, f64>,
}

impl PercentileRanksResult {
    /// HDR-estimator flavor.
    pub fn hdr(
        name: impl Into<String>,
        metadata: Option<Metadata>,
        ranks: IndexMap<String, f64>,
    ) -> Self {
        Self::with_type(HDR_PERCENTILE_RANKS, name, metadata, ranks)
    }

    /// t-digest-estimator flavor.
    pub fn tdigest(
        name: impl Into<String>,
        metadata: Option<Metadata>,
        ranks: IndexMap<String, f64>,
    ) -> Self {
        Self::with_type(TDIGEST_PERCENTILE_RANKS, name, metadata, ranks)
    }

    fn with_type(
        type_id: &'static str,
        name: impl Into<String>,
        metadata: Option<Metadata>,
        ranks: IndexMap<String, f64>,
    ) -> Self {
        Self {
            type_id,
            name: name.into(),
            metadata,
            ranks,
        }
    }

    /// Percent key → rank value, in serialization order.
    pub fn ranks(&self) -> &IndexMap<String, f64> {
        &self.ranks
    }
}

impl AggResult for PercentileRanksResult {
    fn name(&self) -> &str {
        &self.name
    }

    fn type_id(&self) -> &str {
        self.type_id
    }

    fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    fn body(&self) -> Result<Map<String, Value>, RoundTripError> {
        let mut values = Map::with_capacity(self.ranks.len());
        for (percent, rank) in &self.ranks {
            values.insert(percent.clone(), Value::from(*rank));
        }
        let mut body = Map::new();
        body.insert(VALUES_FIELD.to_string(), Value::Object(values));
        Ok(body)
    }
}

/// Parse a percentile-ranks body for the given type identifier.
///
/// `values` is required, must be an object, and every entry must be
/// numeric. Unknown sibling fields are tolerated and preserved.
fn parse(
    type_id: &'static str,
    body: &Map<String, Value>,
    name: &str,
) -> Result<ParsedResult, RoundTripError> {
    match body.get(VALUES_FIELD) {
        Some(Value::Object(values)) => {
            for (percent, rank) in values {
                if !rank.is_number() {
                    return Err(RoundTripError::malformed(
                        format!("{VALUES_FIELD}.{percent}"),
                        format!("expected a number, got {}", value_kind(rank)),
                    ));
                }
            }
            ParsedResult::from_body(type_id, name, body)
        }
        Some(other) => Err(RoundTripError::malformed(
            VALUES_FIELD,
            format!("expected an object, got {}", value_kind(other)),
        )),
        None => Err(RoundTripError::malformed(
            VALUES_FIELD,
            "missing required field",
        )),
    }
}

/// Registry entry for one of the two percentile-ranks type identifiers.
pub fn parser_entry(type_id: &'static str) -> ParserEntry {
    ParserEntry::new(type_id, move |body, name| parse(type_id, body, name))
}

/// Generates randomized percentile-ranks instances for either estimator.
#[derive(Debug, Clone, Copy)]
pub struct PercentileRanksFixture {
    type_id: &'static str,
}

impl PercentileRanksFixture {
    pub fn hdr() -> Self {
        Self {
            type_id: HDR_PERCENTILE_RANKS,
        }
    }

    pub fn tdigest() -> Self {
        Self {
            type_id: TDIGEST_PERCENTILE_RANKS,
        }
    }

    pub fn type_id(&self) -> &'static str {
        self.type_id
    }
}

impl ResultFixture for PercentileRanksFixture {
    type Result = PercentileRanksResult;

    fn create_instance(
        &self,
        name: String,
        _pipelines: Vec<PipelineRef>,
        metadata: Option<Metadata>,
        rng: &mut StdRng,
    ) -> PercentileRanksResult {
        let count = rng.random_range(1..=8);
        let mut ranks = IndexMap::new();
        while ranks.len() < count {
            let percent = format!("{:.1}", rng.random_range(0.0..=100.0f64));
            let rank = rng.random_range(0.0..=100.0f64);
            ranks.insert(percent, rank);
        }
        PercentileRanksResult::with_type(self.type_id, name, metadata, ranks)
    }

    fn assert_parsed(
        &self,
        original: &PercentileRanksResult,
        parsed: &ParsedResult,
    ) -> Result<(), RoundTripError> {
        let values = match parsed.body().get(VALUES_FIELD) {
            Some(Value::Object(values)) => values,
            _ => {
                return Err(RoundTripError::malformed(
                    VALUES_FIELD,
                    "missing from parsed body",
                ))
            }
        };
        for (percent, rank) in original.ranks() {
            let parsed_rank = values.get(percent).and_then(Value::as_f64);
            if parsed_rank != Some(*rank) {
                return Err(RoundTripError::EquivalenceMismatch {
                    path: format!("{VALUES_FIELD}.{percent}"),
                    expected: rank.to_string(),
                    actual: parsed_rank
                        .map_or_else(|| "<missing>".to_string(), |v| v.to_string()),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "percentile_ranks_tests.rs"]
mod tests;
