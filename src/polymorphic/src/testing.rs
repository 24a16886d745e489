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

//! A small family used by the unit tests.

use crate::encode::{encode_envelope, encode_variant};
use crate::{Envelope, Error, Family, Map, Registry, RegistryError, Variant};
use std::sync::LazyLock;

#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
    Unknown(Envelope),
}

static SHAPE_REGISTRY: LazyLock<Result<Registry<Shape>, RegistryError>> = LazyLock::new(|| {
    Registry::for_family()
        .register_variant::<Circle>(Shape::Circle)
        .register_variant::<Rectangle>(Shape::Rectangle)
        .build()
});

impl Family for Shape {
    const NAME: &'static str = "Shape";
    const DISCRIMINATOR: &'static str = "shapeType";

    fn registry() -> &'static Result<Registry<Self>, RegistryError> {
        &SHAPE_REGISTRY
    }

    fn from_envelope(envelope: Envelope) -> Self {
        Self::Unknown(envelope)
    }

    fn to_object(&self) -> Result<Map, Error> {
        match self {
            Self::Circle(v) => encode_variant::<Self, _>(v),
            Self::Rectangle(v) => encode_variant::<Self, _>(v),
            Self::Unknown(e) => encode_envelope::<Self>(e),
        }
    }
}

impl serde::ser::Serialize for Shape {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        crate::serialize(self, serializer)
    }
}

impl<'de> serde::de::Deserialize<'de> for Shape {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        crate::deserialize(deserializer)
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Circle {
    pub radius: f64,

    #[serde(rename = "shapeType", skip_serializing)]
    _discriminator: crate::DiscriminatorField,

    #[serde(flatten)]
    _unknown_fields: Map,
}

impl Circle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_radius<T: Into<f64>>(mut self, v: T) -> Self {
        self.radius = v.into();
        self
    }

    pub fn unknown_fields(&self) -> &Map {
        &self._unknown_fields
    }
}

impl Variant for Circle {
    fn discriminator_value() -> &'static str {
        "CIRCLE"
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,

    #[serde(rename = "shapeType", skip_serializing)]
    _discriminator: crate::DiscriminatorField,
}

impl Rectangle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_width<T: Into<f64>>(mut self, v: T) -> Self {
        self.width = v.into();
        self
    }

    pub fn set_height<T: Into<f64>>(mut self, v: T) -> Self {
        self.height = v.into();
        self
    }
}

impl Variant for Rectangle {
    fn discriminator_value() -> &'static str {
        "RECTANGLE"
    }
}
