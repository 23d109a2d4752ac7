// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Concrete aggregation result types and their parsers.
//!
//! Each module contributes a result struct, a body parser, and a fixture;
//! this crate assembles the registry entries the verifier dispatches
//! through. Only serialized shapes live here — the estimation algorithms
//! behind the numbers are someone else's problem.

pub mod cardinality;
pub mod percentile_ranks;

pub use cardinality::{CardinalityFixture, CardinalityResult, CARDINALITY};
pub use percentile_ranks::{
    PercentileRanksFixture, PercentileRanksResult, HDR_PERCENTILE_RANKS,
    TDIGEST_PERCENTILE_RANKS,
};

use tk_core::{ParserEntry, ParserRegistry, RoundTripError};

/// Registry entries for every result type this crate can parse.
pub fn parser_entries() -> Vec<ParserEntry> {
    vec![
        cardinality::parser_entry(),
        percentile_ranks::parser_entry(HDR_PERCENTILE_RANKS),
        percentile_ranks::parser_entry(TDIGEST_PERCENTILE_RANKS),
    ]
}

/// Build the full registry over [`parser_entries`].
pub fn registry() -> Result<ParserRegistry, RoundTripError> {
    ParserRegistry::new(parser_entries())
}
