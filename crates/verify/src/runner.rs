// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The round-trip verifier state machine.
//!
//! Each run is a straight-line pass:
//! `BUILD → ENCODE → SHUFFLE → DECODE → COMPARE`, ending in a pass, a
//! skip (unknown type), or an error that fails the run. No retries; a
//! failure is deterministic given its seed.

use crate::config::RunConfig;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde_json::{Map, Value};
use tk_core::{
    decode_typed_key, shuffle_fields, structural_diff, value_kind, AggResult, DocFormat,
    Metadata, ParsedResult, ParserRegistry, PipelineRef, ResultFixture, RoundTripError,
    META_FIELD,
};

const NAME_LEN: usize = 5;
const MAX_METADATA_ENTRIES: usize = 10;

/// Terminal outcome of a single verification run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Decode succeeded and every comparison held.
    Passed,
    /// The registry had no parser for the decoded type. The run is
    /// inconclusive, not failed: not every type under development has a
    /// registered parser yet.
    SkippedUnknownType { type_id: String },
}

/// Aggregate counts for a multi-run suite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuiteReport {
    pub passed: usize,
    pub skipped: usize,
}

/// Drives round-trip verification runs against an immutable parser
/// registry. The registry is built once and shared read-only across every
/// run; no synchronization is needed because no writer exists after
/// construction.
pub struct Verifier {
    registry: ParserRegistry,
}

impl Verifier {
    pub fn new(registry: ParserRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ParserRegistry {
        &self.registry
    }

    /// Run the protocol once with the given seed.
    pub fn verify_once<F: ResultFixture>(
        &self,
        fixture: &F,
        seed: u64,
    ) -> Result<RunOutcome, RoundTripError> {
        let mut rng = StdRng::seed_from_u64(seed);

        // BUILD
        let name = random_alpha(&mut rng, NAME_LEN);
        let metadata = random_metadata(&mut rng);
        let original = fixture.create_instance(name, Vec::<PipelineRef>::new(), metadata, &mut rng);

        // ENCODE
        let doc = original.to_document()?;
        let format = *DocFormat::ALL
            .choose(&mut rng)
            .unwrap_or(&DocFormat::Json);
        let humanized = rng.random();
        tracing::debug!(seed, %format, humanized, name = original.name(), "round trip begin");

        // SHUFFLE
        let shuffled = shuffle_fields(&doc, &mut rng);
        let original_text = format.to_text(&shuffled, humanized)?;

        // DECODE
        let reread = format.from_text(&original_text)?;
        let (key, body) = single_typed_field(&reread)?;
        let (type_id, decoded_name) = decode_typed_key(key)?;
        let parsed = match self.registry.parse(type_id, body, decoded_name) {
            Ok(parsed) => parsed,
            Err(RoundTripError::MissingType { type_id }) => {
                tracing::warn!(type_id = %type_id, "no parser registered; run is inconclusive");
                return Ok(RunOutcome::SkippedUnknownType { type_id });
            }
            Err(err) => return Err(err),
        };

        // COMPARE
        compare_identity(&original, &parsed)?;
        let reserialized_text = format.to_text(&parsed.to_document()?, humanized)?;
        let reserialized = format.from_text(&reserialized_text)?;
        if let Some(mismatch) = structural_diff(&reread, &reserialized) {
            return Err(mismatch.into());
        }
        fixture.assert_parsed(&original, &parsed)?;
        tracing::debug!(seed, "round trip pass");
        Ok(RunOutcome::Passed)
    }

    /// Run the protocol `config.runs` times with derived seeds, stopping
    /// at the first failure.
    pub fn verify_suite<F: ResultFixture>(
        &self,
        fixture: &F,
        config: &RunConfig,
    ) -> Result<SuiteReport, RoundTripError> {
        let mut report = SuiteReport::default();
        for run in 0..config.runs {
            let seed = config.seed.wrapping_add(run as u64);
            match self.verify_once(fixture, seed) {
                Ok(RunOutcome::Passed) => report.passed += 1,
                Ok(RunOutcome::SkippedUnknownType { .. }) => report.skipped += 1,
                Err(err) => {
                    tracing::error!(seed, error = %err, "round trip failed");
                    return Err(err);
                }
            }
        }
        tracing::debug!(
            passed = report.passed,
            skipped = report.skipped,
            "suite complete"
        );
        Ok(report)
    }
}

/// The document of record must be an object holding exactly one field,
/// whose value is the result body.
fn single_typed_field(doc: &Value) -> Result<(&str, &Map<String, Value>), RoundTripError> {
    let fields = match doc {
        Value::Object(fields) => fields,
        other => {
            return Err(RoundTripError::malformed(
                "$",
                format!("expected an object, got {}", value_kind(other)),
            ))
        }
    };
    if fields.len() != 1 {
        return Err(RoundTripError::malformed(
            "$",
            format!("expected a single typed-key field, found {}", fields.len()),
        ));
    }
    match fields.iter().next() {
        Some((key, Value::Object(body))) => Ok((key.as_str(), body)),
        Some((key, other)) => Err(RoundTripError::malformed(
            key.as_str(),
            format!("expected an object body, got {}", value_kind(other)),
        )),
        None => Err(RoundTripError::malformed(
            "$",
            "expected a single typed-key field, found none",
        )),
    }
}

/// Name, type, and metadata must survive the trip exactly. Absent metadata
/// and a present-but-empty mapping never compare equal.
fn compare_identity(
    original: &impl AggResult,
    parsed: &ParsedResult,
) -> Result<(), RoundTripError> {
    if parsed.name() != original.name() {
        return Err(RoundTripError::EquivalenceMismatch {
            path: "name".to_string(),
            expected: original.name().to_string(),
            actual: parsed.name().to_string(),
        });
    }
    if parsed.type_id() != original.type_id() {
        return Err(RoundTripError::EquivalenceMismatch {
            path: "type".to_string(),
            expected: original.type_id().to_string(),
            actual: parsed.type_id().to_string(),
        });
    }
    match (original.metadata(), parsed.metadata()) {
        (None, None) => Ok(()),
        (Some(original_meta), Some(parsed_meta)) if original_meta == parsed_meta => Ok(()),
        (original_meta, parsed_meta) => Err(RoundTripError::EquivalenceMismatch {
            path: META_FIELD.to_string(),
            expected: render_metadata(original_meta),
            actual: render_metadata(parsed_meta),
        }),
    }
}

fn render_metadata(metadata: Option<&Metadata>) -> String {
    match metadata {
        None => "<absent>".to_string(),
        Some(metadata) => {
            serde_json::to_string(metadata).unwrap_or_else(|_| format!("{metadata:?}"))
        }
    }
}

/// Random lowercase ASCII identifier.
fn random_alpha(rng: &mut StdRng, len: usize) -> String {
    (0..len)
        .map(|_| rng.random_range(b'a'..=b'z') as char)
        .collect()
}

/// Absent half the time; otherwise 0–10 random string entries. An empty
/// mapping is a distinct, deliberately generated case.
fn random_metadata(rng: &mut StdRng) -> Option<Metadata> {
    if rng.random() {
        return None;
    }
    let count = rng.random_range(0..=MAX_METADATA_ENTRIES);
    let mut metadata = Metadata::new();
    while metadata.len() < count {
        metadata.insert(
            random_alpha(rng, NAME_LEN),
            Value::String(random_alpha(rng, NAME_LEN)),
        );
    }
    Some(metadata)
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
