// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for the spec modules.

use tk_core::ParserRegistry;
use tk_verify::Verifier;

/// Verifier over every type tk-aggs contributes.
pub fn full_verifier() -> Verifier {
    Verifier::new(tk_aggs::registry().unwrap())
}

/// Verifier that only knows cardinality, for unknown-type specs.
pub fn cardinality_only_verifier() -> Verifier {
    let registry = ParserRegistry::new(vec![tk_aggs::cardinality::parser_entry()]).unwrap();
    Verifier::new(registry)
}
