// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed-key codec laws.

use tk_core::{decode_typed_key, encode_typed_key, RoundTripError, TYPED_KEY_DELIMITER};

#[test]
fn delimiter_is_hash() {
    assert_eq!(TYPED_KEY_DELIMITER, '#');
}

#[test]
fn encode_example() {
    assert_eq!(
        encode_typed_key("cardinality", "agg1").unwrap(),
        "cardinality#agg1"
    );
}

#[test]
fn decode_example() {
    assert_eq!(
        decode_typed_key("cardinality#agg1").unwrap(),
        ("cardinality", "agg1")
    );
}

#[yare::parameterized(
    cardinality = { "cardinality", "agg1" },
    hdr         = { "hdr_percentile_ranks", "page_load" },
    tdigest     = { "tdigest_percentile_ranks", "q.99" },
)]
fn decode_inverts_encode(type_id: &str, name: &str) {
    let key = encode_typed_key(type_id, name).unwrap();
    assert_eq!(decode_typed_key(&key).unwrap(), (type_id, name));
}

#[test]
fn plain_field_keys_are_a_hard_parse_failure() {
    assert!(matches!(
        decode_typed_key("buckets").unwrap_err(),
        RoundTripError::MalformedKey { .. }
    ));
}

#[test]
fn delimiter_bearing_inputs_cannot_be_encoded() {
    assert!(encode_typed_key("a#b", "name").is_err());
    assert!(encode_typed_key("type", "a#b").is_err());
}
