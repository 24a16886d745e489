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

//! Define the traits required of polymorphic families and their variants.

use crate::envelope::Envelope;
use crate::error::{Error, Position, RegistryError, ShapeMismatch};
use crate::registry::Registry;
use std::collections::HashMap;

/// The JSON object representation shared by all variants.
pub type Map = serde_json::Map<String, serde_json::Value>;

/// A trait that must be implemented by each concrete variant of a family.
///
/// The variant does not model the discriminator field. The decoder removes it
/// before deserializing the variant, and the encoder injects
/// [discriminator_value()][Variant::discriminator_value] when serializing it.
pub trait Variant: serde::ser::Serialize + serde::de::DeserializeOwned {
    /// The discriminator value identifying this variant.
    fn discriminator_value() -> &'static str;
}

/// A trait that must be implemented by the common type of a family.
///
/// A family is typically a `#[non_exhaustive]` enum with one branch per
/// variant, plus a branch holding an [Envelope] for discriminator values that
/// were unknown when the client library was generated.
pub trait Family: Sized + 'static {
    /// The name of the family, used in error messages and logs.
    const NAME: &'static str;

    /// The name of the discriminator field, for example `"type"` or
    /// `"buildPipelineStageType"`.
    const DISCRIMINATOR: &'static str;

    /// The variant registry for this family.
    ///
    /// Implementations should initialize the registry once, before the first
    /// decode, and return the same value on every call.
    fn registry() -> &'static Result<Registry<Self>, RegistryError>;

    /// Wraps a value whose discriminator is missing or unknown.
    ///
    /// The decoder never calls this function with a registered
    /// discriminator. Applications that build the fallback directly must
    /// respect the same rule, [encode_envelope][crate::encode::encode_envelope]
    /// rejects envelopes that would decode as a registered variant.
    fn from_envelope(envelope: Envelope) -> Self;

    /// Serializes the value into a JSON object, including the discriminator.
    fn to_object(&self) -> Result<Map, Error>;
}

/// Consumes the discriminator field in variant structs.
///
/// Variants do not model their discriminator. A variant deserialized directly,
/// without going through the decoder, may still receive it, and a variant that
/// keeps unknown fields would capture it. Declare a field of this type, renamed
/// to the family's discriminator, to discard the value instead. All values
/// compare equal.
///
/// # Example
/// ```
/// #[derive(Default, PartialEq, serde::Deserialize, serde::Serialize)]
/// #[serde(default, rename_all = "camelCase")]
/// struct BuildStage {
///     id: String,
///     #[serde(rename = "buildPipelineStageType", skip_serializing)]
///     _discriminator: sdk_polymorphic::DiscriminatorField,
///     #[serde(flatten)]
///     _unknown_fields: serde_json::Map<String, serde_json::Value>,
/// }
/// let input = serde_json::json!({"buildPipelineStageType": "WAIT", "id": "x"});
/// let stage = serde_json::from_value::<BuildStage>(input)?;
/// assert!(stage._unknown_fields.is_empty());
/// assert_eq!(serde_json::to_value(&stage)?, serde_json::json!({"id": "x"}));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DiscriminatorField;

impl<'de> serde::de::Deserialize<'de> for DiscriminatorField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        <serde::de::IgnoredAny as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self)
    }
}

/// Returns the registry of `F`, checking that it is valid and that it uses the
/// family's discriminator field.
pub(crate) fn registry_of<F: Family>() -> Result<&'static Registry<F>, Error> {
    let registry = F::registry()
        .as_ref()
        .map_err(|e| Error::registry(F::NAME, e.clone()))?;
    if registry.field() != F::DISCRIMINATOR {
        return Err(Error::registry(
            F::NAME,
            RegistryError::FieldMismatch {
                family: F::NAME,
                expected: F::DISCRIMINATOR,
                found: registry.field(),
            },
        ));
    }
    Ok(registry)
}

/// Implements [serde::Serialize] for a family type.
///
/// Generated code uses this function as:
/// ```ignore
/// impl serde::ser::Serialize for Stage {
///     fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
///     where
///         S: serde::ser::Serializer,
///     {
///         sdk_polymorphic::serialize(self, serializer)
///     }
/// }
/// ```
#[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
pub fn serialize<F, S>(value: &F, serializer: S) -> Result<S::Ok, S::Error>
where
    F: Family,
    S: serde::ser::Serializer,
{
    use serde::ser::{Error as _, Serialize as _};
    let map = value.to_object().map_err(S::Error::custom)?;
    map.serialize(serializer)
}

/// Implements [serde::Deserialize] for a family type.
///
/// JSON `null` is rejected here, wrap the family in an `Option` to accept it.
///
/// Errors do not identify the element of an enclosing array or map, serde
/// does not provide that context. Use [deserialize_array] and
/// [deserialize_map] for fields holding collections of the family.
#[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
pub fn deserialize<'de, F, D>(deserializer: D) -> Result<F, D::Error>
where
    F: Family,
    D: serde::de::Deserializer<'de>,
{
    use serde::de::{Deserialize as _, Error as _};
    let value = serde_json::Value::deserialize(deserializer)?;
    match crate::decode::decode_value::<F>(value) {
        Ok(Some(v)) => Ok(v),
        Ok(None) => Err(D::Error::invalid_type(
            serde::de::Unexpected::Unit,
            &"a JSON object",
        )),
        Err(e) => Err(D::Error::custom(e)),
    }
}

/// Deserializes an array of family values, reporting the failed element.
///
/// Generated code uses this function as:
/// ```ignore
/// #[serde(deserialize_with = "sdk_polymorphic::deserialize_array")]
/// pub items: Vec<Stage>,
/// ```
#[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
pub fn deserialize_array<'de, F, D>(deserializer: D) -> Result<Vec<F>, D::Error>
where
    F: Family,
    D: serde::de::Deserializer<'de>,
{
    use serde::de::{Deserialize as _, Error as _};
    let values = Vec::<serde_json::Value>::deserialize(deserializer)?;
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            required::<F>(value).map_err(|e| D::Error::custom(e.at(Position::Index(index))))
        })
        .collect()
}

/// Deserializes a map of family values, reporting the failed entry.
#[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
pub fn deserialize_map<'de, F, D>(deserializer: D) -> Result<HashMap<String, F>, D::Error>
where
    F: Family,
    D: serde::de::Deserializer<'de>,
{
    use serde::de::{Deserialize as _, Error as _};
    let values = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
    values
        .into_iter()
        .map(|(key, value)| match required::<F>(value) {
            Ok(v) => Ok((key, v)),
            Err(e) => Err(D::Error::custom(e.at(Position::Key(key)))),
        })
        .collect()
}

fn required<F: Family>(value: serde_json::Value) -> Result<F, Error> {
    match crate::decode::decode_value::<F>(value)? {
        Some(v) => Ok(v),
        None => Err(Error::shape(F::NAME, ShapeMismatch::NotAnObject("null"))),
    }
}
