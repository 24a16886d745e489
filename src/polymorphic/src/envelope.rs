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

use crate::error::{Error, ShapeMismatch, json_kind};
use crate::family::{Map, Variant};
use serde_json::Value;

/// A JSON object together with its extracted discriminator.
///
/// The decoder creates an `Envelope` for each polymorphic value. If the
/// discriminator selects a registered variant the envelope is consumed to
/// build that variant. Otherwise the envelope itself is the decoded value: the
/// generic fallback for discriminators that are missing, or that were
/// introduced by the service after the client library was generated.
///
/// The envelope preserves every field of the original object, serializing it
/// produces the same object that was received.
///
/// # Example
/// ```
/// # use sdk_polymorphic::Envelope;
/// let value = serde_json::json!({"buildPipelineStageType": "NEW_STAGE", "id": "x"});
/// let envelope = Envelope::peek("Stage", "buildPipelineStageType", value)?;
/// assert_eq!(envelope.discriminator(), Some("NEW_STAGE"));
/// assert_eq!(envelope.fields().get("id"), Some(&serde_json::json!("x")));
/// # Ok::<(), sdk_polymorphic::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Envelope {
    family: &'static str,
    field: &'static str,
    discriminator: Option<String>,
    fields: Map,
}

impl Envelope {
    /// Extracts the discriminator named `field` from `value`.
    ///
    /// Fails with a shape error if `value` is not an object, or if the
    /// discriminator is present but not a string. A `null` discriminator is
    /// treated as missing.
    pub fn peek(family: &'static str, field: &'static str, value: Value) -> Result<Self, Error> {
        let fields = match value {
            Value::Object(map) => map,
            other => {
                return Err(Error::shape(
                    family,
                    ShapeMismatch::NotAnObject(json_kind(&other)),
                ));
            }
        };
        let discriminator = match fields.get(field) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                return Err(Error::shape(
                    family,
                    ShapeMismatch::DiscriminatorNotString {
                        field,
                        found: json_kind(other),
                    },
                ));
            }
        };
        Ok(Self {
            family,
            field,
            discriminator,
            fields,
        })
    }

    /// The name of the family this value belongs to.
    pub fn family(&self) -> &'static str {
        self.family
    }

    /// The name of the discriminator field.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// The discriminator value, if the object had one.
    pub fn discriminator(&self) -> Option<&str> {
        self.discriminator.as_deref()
    }

    /// All the fields in the object, including the discriminator.
    pub fn fields(&self) -> &Map {
        &self.fields
    }

    /// Consumes the envelope and returns all the fields in the object.
    pub fn into_fields(self) -> Map {
        self.fields
    }

    /// Serializes the envelope back into the object it was created from.
    pub fn to_object(&self) -> Map {
        self.fields.clone()
    }

    /// Extracts (if possible) a `V` value from the envelope.
    ///
    /// This is useful when an application knows about a variant that the
    /// client library does not, or wants to inspect a fallback value using a
    /// locally defined type. The discriminator must match
    /// [V::discriminator_value()][Variant::discriminator_value].
    pub fn try_into_variant<V>(&self) -> Result<V, Error>
    where
        V: Variant,
    {
        let expected = V::discriminator_value();
        if self.discriminator() != Some(expected) {
            return Err(Error::shape(
                self.family,
                ShapeMismatch::DiscriminatorMismatch {
                    expected,
                    found: self.discriminator.clone(),
                },
            ));
        }
        let map = self
            .fields
            .iter()
            .filter(|(k, _)| k.as_str() != self.field)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        serde_json::from_value::<V>(Value::Object(map)).map_err(|e| Error::from_json(self.family, e))
    }

    /// The fields handed to a variant constructor: everything except the
    /// discriminator.
    pub(crate) fn into_variant_fields(self) -> Map {
        let mut fields = self.fields;
        fields.remove(self.field);
        fields
    }
}

/// Implement [`serde`](::serde) serialization for [Envelope].
impl serde::ser::Serialize for Envelope {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        self.fields.serialize(serializer)
    }
}
