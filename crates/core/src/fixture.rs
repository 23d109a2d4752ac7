// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Injected factory contract for objects under verification.

use crate::error::RoundTripError;
use crate::result::{AggResult, Metadata, ParsedResult, PipelineRef};
use rand::rngs::StdRng;

/// Per-type factory and assertion hooks driven by the verifier.
///
/// One implementation exists per concrete result type. The verifier hands
/// it a generated identity and metadata and receives an instance to push
/// through the round trip; after a successful decode it offers the pair
/// back for type-specific assertions.
pub trait ResultFixture {
    /// Concrete result type this fixture produces.
    type Result: AggResult;

    /// Create a randomized instance with the supplied identity.
    ///
    /// `pipelines` is reserved and currently always empty. All randomness
    /// must come from `rng` so a run reproduces from its seed.
    fn create_instance(
        &self,
        name: String,
        pipelines: Vec<PipelineRef>,
        metadata: Option<Metadata>,
        rng: &mut StdRng,
    ) -> Self::Result;

    /// Type-specific assertions beyond the baseline comparison.
    ///
    /// Default is a no-op: baseline structural equivalence is sufficient
    /// unless a type overrides it.
    fn assert_parsed(
        &self,
        original: &Self::Result,
        parsed: &ParsedResult,
    ) -> Result<(), RoundTripError> {
        let _ = (original, parsed);
        Ok(())
    }
}
