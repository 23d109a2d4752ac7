// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registry construction and unknown-type handling.

use crate::prelude::{cardinality_only_verifier, full_verifier};
use tk_core::{ParserEntry, ParserRegistry, ParsedResult, RoundTripError};
use tk_verify::RunOutcome;

#[test]
fn full_registry_knows_the_three_shipped_types() {
    let registry = tk_aggs::registry().unwrap();
    let ids: Vec<&str> = registry.type_ids().collect();
    assert_eq!(
        ids,
        vec![
            "cardinality",
            "hdr_percentile_ranks",
            "tdigest_percentile_ranks"
        ]
    );
}

#[test]
fn duplicate_registration_fails_fast() {
    let entries = vec![
        tk_aggs::cardinality::parser_entry(),
        tk_aggs::cardinality::parser_entry(),
    ];
    assert!(matches!(
        ParserRegistry::new(entries).unwrap_err(),
        RoundTripError::DuplicateType { type_id } if type_id == "cardinality"
    ));
}

#[test]
fn unknown_type_lookup_is_structured() {
    let registry = tk_aggs::registry().unwrap();
    assert!(matches!(
        registry.lookup("unknown_type").err().unwrap(),
        RoundTripError::MissingType { type_id } if type_id == "unknown_type"
    ));
}

#[test]
fn unknown_type_skips_the_run_instead_of_failing() {
    let verifier = cardinality_only_verifier();
    let outcome = verifier
        .verify_once(&tk_aggs::PercentileRanksFixture::hdr(), 42)
        .unwrap();
    assert_eq!(
        outcome,
        RunOutcome::SkippedUnknownType {
            type_id: "hdr_percentile_ranks".to_string()
        }
    );
}

#[test]
fn registered_types_never_skip() {
    let verifier = full_verifier();
    for seed in 0..8 {
        let outcome = verifier
            .verify_once(&tk_aggs::CardinalityFixture, seed)
            .unwrap();
        assert_eq!(outcome, RunOutcome::Passed);
    }
}

#[test]
fn custom_entries_extend_the_registry() {
    let custom = ParserEntry::new("custom_type", |body, name| {
        ParsedResult::from_body("custom_type", name, body)
    });
    let mut entries = tk_aggs::parser_entries();
    entries.push(custom);
    let registry = ParserRegistry::new(entries).unwrap();
    assert_eq!(registry.len(), 4);
    assert!(registry.lookup("custom_type").is_ok());
}
