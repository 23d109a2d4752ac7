// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Encoding choice is immaterial to semantic content.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tk_core::{shuffle_fields, structural_eq, AggResult, DocFormat, Metadata, ResultFixture};
use tk_aggs::CardinalityFixture;

fn sample_instance() -> impl AggResult {
    let mut rng = StdRng::seed_from_u64(11);
    let metadata: Metadata = [
        ("team".to_string(), serde_json::json!("search")),
        ("tier".to_string(), serde_json::json!("gold")),
    ]
    .into_iter()
    .collect();
    CardinalityFixture.create_instance("agg1".to_string(), Vec::new(), Some(metadata), &mut rng)
}

#[test]
fn every_format_and_flag_renders_the_same_tree() {
    let doc = sample_instance().to_document().unwrap();
    let mut trees = Vec::new();
    for format in DocFormat::ALL {
        for humanized in [false, true] {
            let text = format.to_text(&doc, humanized).unwrap();
            trees.push(format.from_text(&text).unwrap());
        }
    }
    for tree in &trees[1..] {
        assert!(
            structural_eq(&trees[0], tree),
            "encoding choice changed content"
        );
    }
}

#[test]
fn same_format_renderings_parse_to_identical_trees() {
    let doc = sample_instance().to_document().unwrap();
    let compact = DocFormat::Json.to_text(&doc, false).unwrap();
    let pretty = DocFormat::Json.to_text(&doc, true).unwrap();
    similar_asserts::assert_eq!(
        DocFormat::Json.from_text(&compact).unwrap(),
        DocFormat::Json.from_text(&pretty).unwrap()
    );
}

#[test]
fn shuffled_renderings_stay_equivalent_in_both_formats() {
    let doc = sample_instance().to_document().unwrap();
    let mut rng = StdRng::seed_from_u64(23);
    let shuffled = shuffle_fields(&doc, &mut rng);
    for format in DocFormat::ALL {
        let text = format.to_text(&shuffled, false).unwrap();
        let reread = format.from_text(&text).unwrap();
        assert!(structural_eq(&doc, &reread), "{format}");
    }
}
