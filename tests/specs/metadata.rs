// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Metadata strictness: absent and present-but-empty never conflate.

use serde_json::json;
use tk_core::{structural_diff, AggResult, Metadata, ParsedResult, META_FIELD};
use tk_aggs::CardinalityResult;

#[test]
fn absent_metadata_omits_the_meta_field() {
    let doc = CardinalityResult::new("q1", None, 7).to_document().unwrap();
    assert_eq!(doc, json!({ "cardinality#q1": { "value": 7 } }));
}

#[test]
fn empty_metadata_serializes_an_empty_object() {
    let doc = CardinalityResult::new("q1", Some(Metadata::new()), 7)
        .to_document()
        .unwrap();
    assert_eq!(doc, json!({ "cardinality#q1": { "value": 7, "meta": {} } }));
}

#[test]
fn absent_and_empty_documents_are_not_equivalent() {
    let absent = CardinalityResult::new("q1", None, 7).to_document().unwrap();
    let empty = CardinalityResult::new("q1", Some(Metadata::new()), 7)
        .to_document()
        .unwrap();
    let mismatch = structural_diff(&absent, &empty).unwrap();
    assert!(mismatch.path.ends_with(META_FIELD));
}

#[test]
fn parsing_keeps_the_distinction() {
    let absent_body = json!({ "value": 7 });
    let empty_body = json!({ "value": 7, "meta": {} });
    let absent =
        ParsedResult::from_body("cardinality", "q1", absent_body.as_object().unwrap()).unwrap();
    let empty =
        ParsedResult::from_body("cardinality", "q1", empty_body.as_object().unwrap()).unwrap();
    assert_eq!(absent.metadata(), None);
    assert_eq!(empty.metadata(), Some(&Metadata::new()));
    assert_ne!(absent.metadata(), empty.metadata());
}

#[test]
fn populated_metadata_round_trips_by_value() {
    let metadata: Metadata = [
        ("owner".to_string(), json!("search-infra")),
        ("ticket".to_string(), json!("SRCH-112")),
    ]
    .into_iter()
    .collect();
    let original = CardinalityResult::new("q1", Some(metadata.clone()), 7);
    let doc = original.to_document().unwrap();
    let body = doc["cardinality#q1"].as_object().unwrap();
    let parsed = ParsedResult::from_body("cardinality", "q1", body).unwrap();
    assert_eq!(parsed.metadata(), Some(&metadata));
}
