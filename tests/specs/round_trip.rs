// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The core round-trip law across every shipped type.

use crate::prelude::full_verifier;
use tk_aggs::{CardinalityFixture, PercentileRanksFixture};
use tk_verify::{RunConfig, RunOutcome};

#[test]
fn cardinality_round_trips_across_many_seeds() {
    let verifier = full_verifier();
    for seed in 0..100 {
        assert_eq!(
            verifier.verify_once(&CardinalityFixture, seed).unwrap(),
            RunOutcome::Passed,
            "seed {seed}"
        );
    }
}

#[test]
fn hdr_percentile_ranks_round_trip_across_many_seeds() {
    let verifier = full_verifier();
    for seed in 0..100 {
        assert_eq!(
            verifier
                .verify_once(&PercentileRanksFixture::hdr(), seed)
                .unwrap(),
            RunOutcome::Passed,
            "seed {seed}"
        );
    }
}

#[test]
fn tdigest_percentile_ranks_round_trip_across_many_seeds() {
    let verifier = full_verifier();
    for seed in 0..100 {
        assert_eq!(
            verifier
                .verify_once(&PercentileRanksFixture::tdigest(), seed)
                .unwrap(),
            RunOutcome::Passed,
            "seed {seed}"
        );
    }
}

#[test]
fn identical_seeds_reproduce_identical_outcomes() {
    let verifier = full_verifier();
    for seed in [0, 1, 99, u64::MAX] {
        let first = verifier.verify_once(&CardinalityFixture, seed).unwrap();
        let second = verifier.verify_once(&CardinalityFixture, seed).unwrap();
        similar_asserts::assert_eq!(first, second, "seed {}", seed);
    }
}

#[test]
fn suites_report_their_counts() {
    let verifier = full_verifier();
    let report = verifier
        .verify_suite(&CardinalityFixture, &RunConfig::new(7).with_runs(25))
        .unwrap();
    assert_eq!(report.passed, 25);
    assert_eq!(report.skipped, 0);
}

#[test]
fn suite_seed_is_honored_per_run() {
    // Suites derive run seeds from the base seed, so two suites with the
    // same config agree run for run.
    let verifier = full_verifier();
    let config = RunConfig::new(31).with_runs(10);
    let first = verifier
        .verify_suite(&PercentileRanksFixture::hdr(), &config)
        .unwrap();
    let second = verifier
        .verify_suite(&PercentileRanksFixture::hdr(), &config)
        .unwrap();
    assert_eq!(first, second);
}
