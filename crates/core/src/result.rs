// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Result object model: named, typed, optionally annotated with metadata.

use crate::document::value_kind;
use crate::error::RoundTripError;
use crate::typed_key::encode_typed_key;
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Field name under which metadata serializes inside a result body.
pub const META_FIELD: &str = "meta";

/// Caller-attached metadata carried alongside a result.
///
/// Insertion-ordered for serialization; equality ignores order. An absent
/// mapping (`None`) is distinct from a present-but-empty one, and the two
/// must never compare equal.
pub type Metadata = IndexMap<String, Value>;

/// Reference to a pipeline stage attached to a result.
///
/// Reserved: generators currently always pass an empty list.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PipelineRef {
    pub name: String,
}

/// A named, typed result object that can serialize itself into a
/// single-field structured document.
pub trait AggResult {
    /// Instance name. Non-empty and delimiter-free.
    fn name(&self) -> &str;

    /// Type identifier used for parser dispatch.
    fn type_id(&self) -> &str;

    /// Caller metadata, if any.
    fn metadata(&self) -> Option<&Metadata>;

    /// Type-specific body fields, excluding the metadata field.
    fn body(&self) -> Result<Map<String, Value>, RoundTripError>;

    /// Serialize to `{ "type#name": { ...body, "meta"?: { ... } } }`.
    fn to_document(&self) -> Result<Value, RoundTripError> {
        let key = encode_typed_key(self.type_id(), self.name())?;
        let mut fields = self.body()?;
        if let Some(metadata) = self.metadata() {
            fields.insert(META_FIELD.to_string(), serde_json::to_value(metadata)?);
        }
        let mut doc = Map::new();
        doc.insert(key, Value::Object(fields));
        Ok(Value::Object(doc))
    }
}

/// The normalized form produced by parsing a serialized result back.
///
/// Structurally lossier than the object it came from (numeric subtypes are
/// whatever the text encoding produced) but carries everything the
/// comparison step needs: identity, metadata, and the full body for
/// re-serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedResult {
    type_id: String,
    name: String,
    metadata: Option<Metadata>,
    body: Map<String, Value>,
}

impl ParsedResult {
    /// Build from a decoded body, splitting out the metadata field.
    ///
    /// The `meta` field, when present, must be an object; anything else is
    /// a schema violation. The remaining fields are kept verbatim so the
    /// parsed form re-serializes to an equivalent document.
    pub fn from_body(
        type_id: impl Into<String>,
        name: impl Into<String>,
        body: &Map<String, Value>,
    ) -> Result<Self, RoundTripError> {
        let mut fields = body.clone();
        let metadata = match fields.remove(META_FIELD) {
            Some(Value::Object(meta)) => Some(meta.into_iter().collect::<Metadata>()),
            Some(other) => {
                return Err(RoundTripError::malformed(
                    META_FIELD,
                    format!("expected an object, got {}", value_kind(&other)),
                ))
            }
            None => None,
        };
        Ok(Self {
            type_id: type_id.into(),
            name: name.into(),
            metadata,
            body: fields,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_id(&self) -> &str {
        &self.type_id
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    /// Body fields as parsed, metadata excluded.
    pub fn body(&self) -> &Map<String, Value> {
        &self.body
    }
}

// A parsed result re-serializes through the same path as a first-class
// result, so the comparison step can hold both to one document shape.
impl AggResult for ParsedResult {
    fn name(&self) -> &str {
        &self.name
    }

    fn type_id(&self) -> &str {
        &self.type_id
    }

    fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    fn body(&self) -> Result<Map<String, Value>, RoundTripError> {
        Ok(self.body.clone())
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
