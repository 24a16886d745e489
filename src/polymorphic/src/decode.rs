// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Decode polymorphic values from JSON.
//!
//! All the functions in this module are pure: their result depends only on
//! the input and on the (immutable) registry of the family. They are safe to
//! call concurrently from any number of threads.
//!
//! A JSON `null` decodes to `None`. An object whose discriminator is missing
//! or unknown decodes to the family's fallback. Neither case is an error.

use crate::envelope::Envelope;
use crate::error::{Error, Position, ShapeMismatch, json_kind};
use crate::family::Family;
use serde_json::Value;
use std::collections::BTreeMap;

/// Decodes a single polymorphic value from raw JSON bytes.
///
/// # Example
/// ```
/// # use sdk_polymorphic::{Envelope, Error, Family, Map, Registry, RegistryError};
/// # use std::sync::LazyLock;
/// # #[derive(Debug)]
/// # enum Stage { Unknown(Envelope) }
/// # impl Family for Stage {
/// #     const NAME: &'static str = "Stage";
/// #     const DISCRIMINATOR: &'static str = "buildPipelineStageType";
/// #     fn registry() -> &'static Result<Registry<Self>, RegistryError> {
/// #         static REGISTRY: LazyLock<Result<Registry<Stage>, RegistryError>> =
/// #             LazyLock::new(|| Registry::for_family().build());
/// #         &REGISTRY
/// #     }
/// #     fn from_envelope(envelope: Envelope) -> Self { Stage::Unknown(envelope) }
/// #     fn to_object(&self) -> Result<Map, Error> {
/// #         match self { Stage::Unknown(e) => sdk_polymorphic::encode::encode_envelope::<Self>(e) }
/// #     }
/// # }
/// use sdk_polymorphic::decode;
/// let stage = decode::decode::<Stage>(br#"{"buildPipelineStageType": "NEW", "id": "x"}"#)?;
/// assert!(matches!(stage, Some(Stage::Unknown(_))));
/// assert!(decode::decode::<Stage>(b"null")?.is_none());
/// # Ok::<(), Error>(())
/// ```
pub fn decode<F: Family>(raw: &[u8]) -> Result<Option<F>, Error> {
    let value = parse::<F>(raw)?;
    decode_value::<F>(value).map_err(|e| e.with_excerpt(raw))
}

/// Decodes a single polymorphic value from a JSON string.
pub fn decode_str<F: Family>(raw: &str) -> Result<Option<F>, Error> {
    decode::<F>(raw.as_bytes())
}

/// Decodes a single polymorphic value from an already parsed JSON value.
///
/// This is the entry point for callers that extracted the field from a larger
/// response. Errors do not carry an excerpt of the input.
pub fn decode_value<F: Family>(value: Value) -> Result<Option<F>, Error> {
    if value.is_null() {
        return Ok(None);
    }
    let registry = crate::family::registry_of::<F>()?;
    let envelope = Envelope::peek(registry.family(), registry.field(), value)?;
    let Some(constructor) = envelope.discriminator().and_then(|d| registry.lookup(d)) else {
        tracing::debug!(
            family = registry.family(),
            field = registry.field(),
            discriminator = envelope.discriminator().unwrap_or_default(),
            "no registered variant for discriminator, using the generic fallback"
        );
        return Ok(Some(F::from_envelope(envelope)));
    };
    constructor(envelope.into_variant_fields())
        .map(Some)
        .map_err(|e| Error::from_json(registry.family(), e))
}

/// Decodes a JSON array of polymorphic values.
///
/// Stops at the first element that fails, the error reports its
/// [position][Error::position]. Elements with unknown discriminators are not
/// failures.
pub fn decode_array<F: Family>(raw: &[u8]) -> Result<Vec<Option<F>>, Error> {
    decode_array_each::<F>(raw)?.into_iter().collect()
}

/// Decodes a JSON array of polymorphic values, one result per element.
///
/// Use this function when a failure in one element should not prevent
/// decoding the others. The outer result fails if the input is not valid JSON
/// or not an array, as no element can be decoded in that case.
pub fn decode_array_each<F: Family>(raw: &[u8]) -> Result<Vec<Result<Option<F>, Error>>, Error> {
    let elements = match parse::<F>(raw)? {
        Value::Array(elements) => elements,
        other => {
            return Err(
                Error::shape(F::NAME, ShapeMismatch::NotAnArray(json_kind(&other)))
                    .with_excerpt(raw),
            );
        }
    };
    let results = elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| {
            decode_value::<F>(element)
                .map_err(|e| e.at(Position::Index(index)).with_excerpt(raw))
        })
        .collect();
    Ok(results)
}

/// Decodes a JSON object whose values are polymorphic.
///
/// Stops at the first entry that fails, the error reports its
/// [position][Error::position].
pub fn decode_map<F: Family>(raw: &[u8]) -> Result<BTreeMap<String, Option<F>>, Error> {
    decode_map_each::<F>(raw)?
        .into_iter()
        .map(|(key, result)| result.map(|v| (key, v)))
        .collect()
}

/// Decodes a JSON object whose values are polymorphic, one result per entry.
pub fn decode_map_each<F: Family>(
    raw: &[u8],
) -> Result<BTreeMap<String, Result<Option<F>, Error>>, Error> {
    let entries = match parse::<F>(raw)? {
        Value::Object(entries) => entries,
        other => {
            return Err(
                Error::shape(F::NAME, ShapeMismatch::NotAnObject(json_kind(&other)))
                    .with_excerpt(raw),
            );
        }
    };
    let results = entries
        .into_iter()
        .map(|(key, value)| {
            let result = decode_value::<F>(value)
                .map_err(|e| e.at(Position::Key(key.clone())).with_excerpt(raw));
            (key, result)
        })
        .collect();
    Ok(results)
}

fn parse<F: Family>(raw: &[u8]) -> Result<Value, Error> {
    serde_json::from_slice::<Value>(raw).map_err(|e| Error::from_json(F::NAME, e).with_excerpt(raw))
}
