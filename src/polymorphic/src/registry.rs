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

use crate::error::RegistryError;
use crate::family::{Family, Map, Variant};
use std::collections::HashMap;

/// Creates a value of the family `F` from a JSON object.
///
/// The object never contains the discriminator field.
pub type Constructor<F> = Box<dyn Fn(Map) -> Result<F, serde_json::Error> + Send + Sync>;

/// Maps the discriminator values of a family to the constructor for each
/// variant.
///
/// A registry is built once, typically inside a [std::sync::LazyLock], and
/// never changes afterwards. Lookups require no synchronization.
///
/// # Example
/// ```
/// # use sdk_polymorphic::{Registry, RegistryError};
/// # #[derive(Debug)]
/// # enum Stage { Build(String) }
/// let registry = Registry::<Stage>::builder("Stage", "buildPipelineStageType")
///     .register("BUILD", |map| {
///         let id = map.get("id").and_then(|v| v.as_str()).unwrap_or_default();
///         Ok(Stage::Build(id.to_string()))
///     })
///     .build()?;
/// assert!(registry.contains("BUILD"));
/// assert!(!registry.contains("WAIT"));
/// # Ok::<(), RegistryError>(())
/// ```
pub struct Registry<F> {
    family: &'static str,
    field: &'static str,
    constructors: HashMap<String, Constructor<F>>,
}

impl<F> Registry<F> {
    /// Starts building the registry for `family`, discriminated by `field`.
    pub fn builder(family: &'static str, field: &'static str) -> RegistryBuilder<F> {
        RegistryBuilder::new(family, field)
    }

    /// The name of the family.
    pub fn family(&self) -> &'static str {
        self.family
    }

    /// The name of the discriminator field.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Finds the constructor for a discriminator value.
    pub fn lookup(&self, discriminator: &str) -> Option<&Constructor<F>> {
        self.constructors.get(discriminator)
    }

    /// Returns true if `discriminator` selects a known variant.
    pub fn contains(&self, discriminator: &str) -> bool {
        self.constructors.contains_key(discriminator)
    }

    /// The registered discriminator values, in sorted order.
    pub fn discriminators(&self) -> Vec<&str> {
        let mut values: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        values.sort_unstable();
        values
    }
}

impl<F: Family> Registry<F> {
    /// Starts building the registry for `F`.
    ///
    /// The family name and the discriminator field come from the [Family]
    /// implementation, so the registry cannot disagree with the encoder.
    pub fn for_family() -> RegistryBuilder<F> {
        RegistryBuilder::new(F::NAME, F::DISCRIMINATOR)
    }
}

impl<F> std::fmt::Debug for Registry<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("family", &self.family)
            .field("field", &self.field)
            .field("discriminators", &self.discriminators())
            .finish()
    }
}

/// Collects the variants of a family before publishing the [Registry].
pub struct RegistryBuilder<F> {
    family: &'static str,
    field: &'static str,
    entries: Vec<(String, Constructor<F>)>,
}

impl<F> RegistryBuilder<F> {
    /// Creates an empty builder for `family`, discriminated by `field`.
    pub fn new(family: &'static str, field: &'static str) -> Self {
        Self {
            family,
            field,
            entries: Vec::new(),
        }
    }

    /// Associates `discriminator` with `constructor`.
    ///
    /// Problems, such as registering the same value twice, are reported by
    /// [build()][RegistryBuilder::build].
    pub fn register<V, C>(mut self, discriminator: V, constructor: C) -> Self
    where
        V: Into<String>,
        C: Fn(Map) -> Result<F, serde_json::Error> + Send + Sync + 'static,
    {
        self.entries
            .push((discriminator.into(), Box::new(constructor)));
        self
    }

    /// Registers the variant `V` under its own discriminator value.
    ///
    /// The object is deserialized into `V` and then converted into the family
    /// type using `wrap`.
    pub fn register_variant<V>(self, wrap: fn(V) -> F) -> Self
    where
        V: Variant + 'static,
        F: 'static,
    {
        self.register(V::discriminator_value(), move |map: Map| {
            serde_json::from_value::<V>(serde_json::Value::Object(map)).map(wrap)
        })
    }

    /// Validates the registrations and publishes the registry.
    pub fn build(self) -> Result<Registry<F>, RegistryError> {
        let family = self.family;
        self.validate().inspect_err(|e| {
            tracing::warn!(
                family,
                error = %e,
                "invalid variant registry, decoding this family will fail"
            );
        })
    }

    fn validate(self) -> Result<Registry<F>, RegistryError> {
        let family = self.family;
        if self.field.is_empty() {
            return Err(RegistryError::EmptyField { family });
        }
        let mut constructors = HashMap::with_capacity(self.entries.len());
        for (value, constructor) in self.entries {
            if value.is_empty() {
                return Err(RegistryError::EmptyValue { family });
            }
            if constructors.contains_key(&value) {
                return Err(RegistryError::Duplicate { family, value });
            }
            constructors.insert(value, constructor);
        }
        Ok(Registry {
            family,
            field: self.field,
            constructors,
        })
    }
}
