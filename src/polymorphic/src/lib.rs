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

//! Polymorphic JSON decoding for generated client libraries.
//!
//! Many REST resources contain fields whose concrete type is selected by a
//! string discriminator, for example:
//!
//! ```norust
//!     {
//!       "buildPipelineStageType": "BUILD",
//!       "id": "ocid1.stage.x",
//!       "image": "OL7_X86_64_STANDARD_10"
//!     }
//! ```
//!
//! Each set of types sharing one discriminator field is a [Family]. The
//! concrete types are [Variant]s, registered once per family in an immutable
//! [Registry]. Decoding looks up the discriminator and deserializes the
//! object into the matching variant. Objects with a missing or unknown
//! discriminator are *not* errors: they decode into a fallback holding the
//! [Envelope], so client libraries keep working when services introduce new
//! variants.
//!
//! Encoding is symmetric, the discriminator is injected from the variant type
//! and applications never set it.

mod envelope;
pub use envelope::Envelope;
mod error;
pub use error::{Error, Position, RegistryError};
mod family;
pub use family::{
    DiscriminatorField, Family, Map, Variant, deserialize, deserialize_array, deserialize_map,
    serialize,
};
mod registry;
pub use registry::{Constructor, Registry, RegistryBuilder};
pub mod decode;
pub mod encode;

#[cfg(test)]
mod testing;
