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

//! DevOps build pipeline types.
//!
//! **WARNING:** this crate is under active development. We expect multiple
//! breaking changes in the upcoming releases.
//!
//! This crate contains the resources used to describe build pipelines. Several
//! of them are polymorphic: the concrete type of a build pipeline stage, a wait
//! criteria, or a deploy artifact source is selected by a discriminator field
//! in the JSON representation. Values with discriminators that this version of
//! the crate does not know about are preserved in an `Unknown` branch.
//!
//! # Example
//! ```
//! use sdk_devops_v1::model::{BuildPipelineStage, BuildPipelineStageCollection};
//! let body = r#"{"items": [
//!     {"buildPipelineStageType": "BUILD", "id": "stage-1", "image": "OL7_X86_64_STANDARD_10"},
//!     {"buildPipelineStageType": "MANUAL_APPROVAL", "id": "stage-2"}
//! ]}"#;
//! let response = serde_json::from_str::<BuildPipelineStageCollection>(body)?;
//! assert!(matches!(response.items[0], BuildPipelineStage::Build(_)));
//! assert!(response.items[1].is_unknown());
//! # Ok::<(), serde_json::Error>(())
//! ```

/// The messages and enums that are part of this client library.
pub mod model;
