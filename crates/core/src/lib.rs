// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tk-core: Core library for the typekey round-trip toolkit

pub mod document;
pub mod equivalence;
pub mod error;
pub mod fixture;
pub mod registry;
pub mod result;
pub mod shuffle;
pub mod typed_key;

pub use document::{value_kind, DocFormat};
pub use equivalence::{structural_diff, structural_eq, Mismatch};
pub use error::RoundTripError;
pub use fixture::ResultFixture;
pub use registry::{ParseFn, ParserEntry, ParserRegistry};
pub use result::{AggResult, Metadata, ParsedResult, PipelineRef, META_FIELD};
pub use shuffle::shuffle_fields;
pub use typed_key::{decode_typed_key, encode_typed_key, TYPED_KEY_DELIMITER};
