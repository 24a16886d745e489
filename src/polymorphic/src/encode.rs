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

//! Encode polymorphic values as JSON.
//!
//! The discriminator is implied by the variant, applications never need to
//! set it. The encoder always writes the variant's discriminator value, even
//! if the serialized variant contains a field with the same name.

use crate::envelope::Envelope;
use crate::error::{Error, ShapeMismatch, json_kind};
use crate::family::{Family, Map, Variant, registry_of};
use serde_json::Value;

/// Encodes a polymorphic value as JSON bytes.
pub fn encode<F: Family>(value: &F) -> Result<Vec<u8>, Error> {
    let map = value.to_object()?;
    serde_json::to_vec(&map).map_err(|e| Error::ser(F::NAME, e))
}

/// Encodes a polymorphic value as a [serde_json::Value].
pub fn to_value<F: Family>(value: &F) -> Result<Value, Error> {
    value.to_object().map(Value::Object)
}

/// Serializes a variant of the family `F` into a JSON object.
///
/// Implementations of [Family::to_object] call this function for each
/// registered variant. The discriminator field of `F` is set to
/// [V::discriminator_value()][Variant::discriminator_value], overwriting any
/// existing value.
///
/// Fails if `V` does not serialize as a JSON object.
pub fn encode_variant<F, V>(variant: &V) -> Result<Map, Error>
where
    F: Family,
    V: Variant,
{
    let value = serde_json::to_value(variant).map_err(|e| Error::ser(F::NAME, e))?;
    match value {
        Value::Object(mut map) => {
            map.insert(
                F::DISCRIMINATOR.to_string(),
                Value::String(V::discriminator_value().to_string()),
            );
            Ok(map)
        }
        other => Err(Error::ser(
            F::NAME,
            ShapeMismatch::NotAnObject(json_kind(&other)),
        )),
    }
}

/// Serializes the fallback of the family `F` into a JSON object.
///
/// Implementations of [Family::to_object] call this function for the
/// fallback arm. The object is the envelope's fields, unchanged.
///
/// Fails if the envelope belongs to a different discriminator field, or if
/// its discriminator selects a registered variant. In both cases decoding the
/// result would not produce the same value.
pub fn encode_envelope<F: Family>(envelope: &Envelope) -> Result<Map, Error> {
    if envelope.field() != F::DISCRIMINATOR {
        return Err(Error::ser(
            F::NAME,
            ShapeMismatch::FieldMismatch {
                expected: F::DISCRIMINATOR,
                found: envelope.field(),
            },
        ));
    }
    match envelope.discriminator() {
        Some(d) if registry_of::<F>()?.contains(d) => Err(Error::ser(
            F::NAME,
            ShapeMismatch::RegisteredDiscriminator(d.to_string()),
        )),
        _ => Ok(envelope.to_object()),
    }
}
