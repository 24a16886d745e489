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

#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]

mod debug;
mod families;

/// A single stage in a build pipeline.
///
/// The concrete stage is selected by the `buildPipelineStageType` field.
#[derive(Clone, PartialEq)]
#[non_exhaustive]
pub enum BuildPipelineStage {
    /// Runs a build specification.
    Build(std::boxed::Box<crate::model::BuildStage>),
    /// Pauses the pipeline.
    Wait(std::boxed::Box<crate::model::WaitStage>),
    /// Delivers the build outputs to artifact repositories.
    DeliverArtifact(std::boxed::Box<crate::model::DeliverArtifactStage>),
    /// Triggers a deployment pipeline.
    TriggerDeployment(std::boxed::Box<crate::model::TriggerDeploymentStage>),
    /// A stage type this version of the client library does not recognize.
    ///
    /// All the fields received from the service are preserved, and the value
    /// serializes back to the same JSON object.
    Unknown(polymorphic::Envelope),
}

impl BuildPipelineStage {
    /// The value of `buildPipelineStageType` for this stage, if any.
    pub fn stage_type(&self) -> std::option::Option<&str> {
        use polymorphic::Variant;
        match self {
            Self::Build(_) => std::option::Option::Some(crate::model::BuildStage::discriminator_value()),
            Self::Wait(_) => std::option::Option::Some(crate::model::WaitStage::discriminator_value()),
            Self::DeliverArtifact(_) => {
                std::option::Option::Some(crate::model::DeliverArtifactStage::discriminator_value())
            }
            Self::TriggerDeployment(_) => std::option::Option::Some(
                crate::model::TriggerDeploymentStage::discriminator_value(),
            ),
            Self::Unknown(e) => e.discriminator(),
        }
    }

    /// Returns true if the stage type is not known to this client library.
    pub fn is_unknown(&self) -> bool {
        std::matches!(self, Self::Unknown(_))
    }

    /// The value of the stage if it holds a `Build`, `None` otherwise.
    pub fn build(&self) -> std::option::Option<&std::boxed::Box<crate::model::BuildStage>> {
        match self {
            Self::Build(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        }
    }

    /// The value of the stage if it holds a `Wait`, `None` otherwise.
    pub fn wait(&self) -> std::option::Option<&std::boxed::Box<crate::model::WaitStage>> {
        match self {
            Self::Wait(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        }
    }

    /// The value of the stage if it holds a `DeliverArtifact`, `None` otherwise.
    pub fn deliver_artifact(
        &self,
    ) -> std::option::Option<&std::boxed::Box<crate::model::DeliverArtifactStage>> {
        match self {
            Self::DeliverArtifact(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        }
    }

    /// The value of the stage if it holds a `TriggerDeployment`, `None` otherwise.
    pub fn trigger_deployment(
        &self,
    ) -> std::option::Option<&std::boxed::Box<crate::model::TriggerDeploymentStage>> {
        match self {
            Self::TriggerDeployment(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        }
    }

    /// The fields of a stage with an unknown type, `None` for known types.
    pub fn unknown(&self) -> std::option::Option<&polymorphic::Envelope> {
        match self {
            Self::Unknown(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        }
    }
}

impl std::convert::From<crate::model::BuildStage> for BuildPipelineStage {
    fn from(value: crate::model::BuildStage) -> Self {
        Self::Build(std::boxed::Box::new(value))
    }
}

impl std::convert::From<crate::model::WaitStage> for BuildPipelineStage {
    fn from(value: crate::model::WaitStage) -> Self {
        Self::Wait(std::boxed::Box::new(value))
    }
}

impl std::convert::From<crate::model::DeliverArtifactStage> for BuildPipelineStage {
    fn from(value: crate::model::DeliverArtifactStage) -> Self {
        Self::DeliverArtifact(std::boxed::Box::new(value))
    }
}

impl std::convert::From<crate::model::TriggerDeploymentStage> for BuildPipelineStage {
    fn from(value: crate::model::TriggerDeploymentStage) -> Self {
        Self::TriggerDeployment(std::boxed::Box::new(value))
    }
}

/// Runs a build specification on a managed build runner.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BuildStage {
    /// Unique identifier of the stage.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub id: std::string::String,

    /// Stage display name.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    /// Optional description about the stage.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    /// The identifier of the build pipeline containing this stage.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub build_pipeline_id: std::string::String,

    /// Image name for the build environment.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub image: std::string::String,

    /// The path to the build specification file for this environment.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub build_spec_file: std::option::Option<std::string::String>,

    /// Timeout for the build stage execution.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub stage_execution_timeout_in_seconds: std::option::Option<i32>,

    /// Name of the build source where the build specification file is
    /// located.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub primary_build_source: std::option::Option<std::string::String>,

    /// Simple key-value pairs applied without any predefined name, type or
    /// scope.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(rename = "buildPipelineStageType", skip_serializing)]
    _discriminator: polymorphic::DiscriminatorField,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl BuildStage {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::BuildStage::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [display_name][crate::model::BuildStage::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [display_name][crate::model::BuildStage::display_name].
    pub fn set_or_clear_display_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.display_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][crate::model::BuildStage::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [build_pipeline_id][crate::model::BuildStage::build_pipeline_id].
    pub fn set_build_pipeline_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.build_pipeline_id = v.into();
        self
    }

    /// Sets the value of [image][crate::model::BuildStage::image].
    pub fn set_image<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.image = v.into();
        self
    }

    /// Sets the value of [build_spec_file][crate::model::BuildStage::build_spec_file].
    pub fn set_build_spec_file<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.build_spec_file = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [stage_execution_timeout_in_seconds][crate::model::BuildStage::stage_execution_timeout_in_seconds].
    pub fn set_stage_execution_timeout_in_seconds<T: std::convert::Into<i32>>(
        mut self,
        v: T,
    ) -> Self {
        self.stage_execution_timeout_in_seconds = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [primary_build_source][crate::model::BuildStage::primary_build_source].
    pub fn set_primary_build_source<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.primary_build_source = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::BuildStage::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// Pauses a build pipeline.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct WaitStage {
    /// Unique identifier of the stage.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub id: std::string::String,

    /// Stage display name.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    /// The identifier of the build pipeline containing this stage.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub build_pipeline_id: std::string::String,

    /// Specifies how long the pipeline waits.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub wait_criteria: std::option::Option<crate::model::WaitCriteria>,

    #[serde(rename = "buildPipelineStageType", skip_serializing)]
    _discriminator: polymorphic::DiscriminatorField,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl WaitStage {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::WaitStage::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [display_name][crate::model::WaitStage::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [build_pipeline_id][crate::model::WaitStage::build_pipeline_id].
    pub fn set_build_pipeline_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.build_pipeline_id = v.into();
        self
    }

    /// Sets the value of [wait_criteria][crate::model::WaitStage::wait_criteria].
    pub fn set_wait_criteria<T: std::convert::Into<crate::model::WaitCriteria>>(
        mut self,
        v: T,
    ) -> Self {
        self.wait_criteria = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [wait_criteria][crate::model::WaitStage::wait_criteria].
    pub fn set_or_clear_wait_criteria<T: std::convert::Into<crate::model::WaitCriteria>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.wait_criteria = v.map(|x| x.into());
        self
    }
}

/// Delivers the outputs of previous stages to artifact repositories.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeliverArtifactStage {
    /// Unique identifier of the stage.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub id: std::string::String,

    /// Stage display name.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    /// The identifier of the build pipeline containing this stage.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub build_pipeline_id: std::string::String,

    /// The artifacts delivered by this stage.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub deliver_artifact_collection: std::option::Option<crate::model::DeliverArtifactCollection>,

    #[serde(rename = "buildPipelineStageType", skip_serializing)]
    _discriminator: polymorphic::DiscriminatorField,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeliverArtifactStage {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::DeliverArtifactStage::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [display_name][crate::model::DeliverArtifactStage::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [build_pipeline_id][crate::model::DeliverArtifactStage::build_pipeline_id].
    pub fn set_build_pipeline_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.build_pipeline_id = v.into();
        self
    }

    /// Sets the value of [deliver_artifact_collection][crate::model::DeliverArtifactStage::deliver_artifact_collection].
    pub fn set_deliver_artifact_collection<
        T: std::convert::Into<crate::model::DeliverArtifactCollection>,
    >(
        mut self,
        v: T,
    ) -> Self {
        self.deliver_artifact_collection = std::option::Option::Some(v.into());
        self
    }
}

/// The artifacts delivered by a [DeliverArtifactStage].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeliverArtifactCollection {
    /// The artifacts.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::DeliverArtifact>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeliverArtifactCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::DeliverArtifactCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::DeliverArtifact>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Maps a build output to the artifact where it is delivered.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeliverArtifact {
    /// Name of the artifact specified in the build specification file.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub artifact_name: std::string::String,

    /// Artifact identifier that contains the artifact definition.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub artifact_id: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeliverArtifact {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [artifact_name][crate::model::DeliverArtifact::artifact_name].
    pub fn set_artifact_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.artifact_name = v.into();
        self
    }

    /// Sets the value of [artifact_id][crate::model::DeliverArtifact::artifact_id].
    pub fn set_artifact_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.artifact_id = v.into();
        self
    }
}

/// Triggers a deployment pipeline after the build completes.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TriggerDeploymentStage {
    /// Unique identifier of the stage.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub id: std::string::String,

    /// Stage display name.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    /// The identifier of the build pipeline containing this stage.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub build_pipeline_id: std::string::String,

    /// A target deployment pipeline identifier that will run in this stage.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub deploy_pipeline_id: std::string::String,

    /// If set to true, all parameters from the build pipeline are passed to
    /// the deployment pipeline.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_pass_all_parameters_enabled: std::option::Option<bool>,

    #[serde(rename = "buildPipelineStageType", skip_serializing)]
    _discriminator: polymorphic::DiscriminatorField,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl TriggerDeploymentStage {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::TriggerDeploymentStage::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [display_name][crate::model::TriggerDeploymentStage::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [build_pipeline_id][crate::model::TriggerDeploymentStage::build_pipeline_id].
    pub fn set_build_pipeline_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.build_pipeline_id = v.into();
        self
    }

    /// Sets the value of [deploy_pipeline_id][crate::model::TriggerDeploymentStage::deploy_pipeline_id].
    pub fn set_deploy_pipeline_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.deploy_pipeline_id = v.into();
        self
    }

    /// Sets the value of [is_pass_all_parameters_enabled][crate::model::TriggerDeploymentStage::is_pass_all_parameters_enabled].
    pub fn set_is_pass_all_parameters_enabled<T: std::convert::Into<bool>>(
        mut self,
        v: T,
    ) -> Self {
        self.is_pass_all_parameters_enabled = std::option::Option::Some(v.into());
        self
    }
}

/// Specifies how long a [WaitStage] pauses the pipeline.
///
/// The concrete criteria is selected by the `waitType` field.
#[derive(Clone, PartialEq)]
#[non_exhaustive]
pub enum WaitCriteria {
    /// Waits for a fixed amount of time.
    AbsoluteWait(std::boxed::Box<crate::model::AbsoluteWaitCriteria>),
    /// A wait type this version of the client library does not recognize.
    Unknown(polymorphic::Envelope),
}

impl WaitCriteria {
    /// Returns true if the wait type is not known to this client library.
    pub fn is_unknown(&self) -> bool {
        std::matches!(self, Self::Unknown(_))
    }

    /// The value of the criteria if it holds an `AbsoluteWait`, `None` otherwise.
    pub fn absolute_wait(
        &self,
    ) -> std::option::Option<&std::boxed::Box<crate::model::AbsoluteWaitCriteria>> {
        match self {
            Self::AbsoluteWait(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        }
    }
}

impl std::convert::From<crate::model::AbsoluteWaitCriteria> for WaitCriteria {
    fn from(value: crate::model::AbsoluteWaitCriteria) -> Self {
        Self::AbsoluteWait(std::boxed::Box::new(value))
    }
}

/// Waits for a fixed amount of time.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AbsoluteWaitCriteria {
    /// The absolute wait duration, in ISO 8601 format. The minimum is 5
    /// seconds, the maximum is 2 days.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub wait_duration: std::string::String,

    #[serde(rename = "waitType", skip_serializing)]
    _discriminator: polymorphic::DiscriminatorField,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl AbsoluteWaitCriteria {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [wait_duration][crate::model::AbsoluteWaitCriteria::wait_duration].
    pub fn set_wait_duration<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.wait_duration = v.into();
        self
    }
}

/// Where the contents of a [DeployArtifact] come from.
///
/// The concrete source is selected by the `deployArtifactSourceType` field.
#[derive(Clone, PartialEq)]
#[non_exhaustive]
pub enum DeployArtifactSource {
    /// The contents are embedded in the artifact.
    Inline(std::boxed::Box<crate::model::InlineDeployArtifactSource>),
    /// The contents are stored in a generic artifact repository.
    GenericArtifact(std::boxed::Box<crate::model::GenericDeployArtifactSource>),
    /// The contents are a container image in a registry.
    Ocir(std::boxed::Box<crate::model::OcirDeployArtifactSource>),
    /// A source type this version of the client library does not recognize.
    Unknown(polymorphic::Envelope),
}

impl DeployArtifactSource {
    /// Returns true if the source type is not known to this client library.
    pub fn is_unknown(&self) -> bool {
        std::matches!(self, Self::Unknown(_))
    }

    /// The value of the source if it holds an `Inline`, `None` otherwise.
    pub fn inline(
        &self,
    ) -> std::option::Option<&std::boxed::Box<crate::model::InlineDeployArtifactSource>> {
        match self {
            Self::Inline(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        }
    }

    /// The value of the source if it holds a `GenericArtifact`, `None` otherwise.
    pub fn generic_artifact(
        &self,
    ) -> std::option::Option<&std::boxed::Box<crate::model::GenericDeployArtifactSource>> {
        match self {
            Self::GenericArtifact(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        }
    }

    /// The value of the source if it holds an `Ocir`, `None` otherwise.
    pub fn ocir(
        &self,
    ) -> std::option::Option<&std::boxed::Box<crate::model::OcirDeployArtifactSource>> {
        match self {
            Self::Ocir(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        }
    }
}

impl std::convert::From<crate::model::InlineDeployArtifactSource> for DeployArtifactSource {
    fn from(value: crate::model::InlineDeployArtifactSource) -> Self {
        Self::Inline(std::boxed::Box::new(value))
    }
}

impl std::convert::From<crate::model::GenericDeployArtifactSource> for DeployArtifactSource {
    fn from(value: crate::model::GenericDeployArtifactSource) -> Self {
        Self::GenericArtifact(std::boxed::Box::new(value))
    }
}

impl std::convert::From<crate::model::OcirDeployArtifactSource> for DeployArtifactSource {
    fn from(value: crate::model::OcirDeployArtifactSource) -> Self {
        Self::Ocir(std::boxed::Box::new(value))
    }
}

/// The contents of the artifact are embedded in the resource.
#[serde_with::serde_as]
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InlineDeployArtifactSource {
    /// The artifact contents.
    #[serde(skip_serializing_if = "bytes::Bytes::is_empty")]
    #[serde_as(as = "serde_with::base64::Base64")]
    pub base64_encoded_content: bytes::Bytes,

    #[serde(rename = "deployArtifactSourceType", skip_serializing)]
    _discriminator: polymorphic::DiscriminatorField,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl InlineDeployArtifactSource {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [base64_encoded_content][crate::model::InlineDeployArtifactSource::base64_encoded_content].
    pub fn set_base64_encoded_content<T: std::convert::Into<bytes::Bytes>>(
        mut self,
        v: T,
    ) -> Self {
        self.base64_encoded_content = v.into();
        self
    }
}

/// The contents of the artifact are stored in a generic artifact repository.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GenericDeployArtifactSource {
    /// The repository identifier.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub repository_id: std::string::String,

    /// Path of the artifact within the repository.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub deploy_artifact_path: std::string::String,

    /// Version of the artifact.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub deploy_artifact_version: std::string::String,

    #[serde(rename = "deployArtifactSourceType", skip_serializing)]
    _discriminator: polymorphic::DiscriminatorField,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl GenericDeployArtifactSource {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [repository_id][crate::model::GenericDeployArtifactSource::repository_id].
    pub fn set_repository_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.repository_id = v.into();
        self
    }

    /// Sets the value of [deploy_artifact_path][crate::model::GenericDeployArtifactSource::deploy_artifact_path].
    pub fn set_deploy_artifact_path<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.deploy_artifact_path = v.into();
        self
    }

    /// Sets the value of [deploy_artifact_version][crate::model::GenericDeployArtifactSource::deploy_artifact_version].
    pub fn set_deploy_artifact_version<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.deploy_artifact_version = v.into();
        self
    }
}

/// The contents of the artifact are a container image.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct OcirDeployArtifactSource {
    /// Specifies the image URI.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub image_uri: std::string::String,

    /// Specifies the image digest, if the image is pinned.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_digest: std::option::Option<std::string::String>,

    #[serde(rename = "deployArtifactSourceType", skip_serializing)]
    _discriminator: polymorphic::DiscriminatorField,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl OcirDeployArtifactSource {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [image_uri][crate::model::OcirDeployArtifactSource::image_uri].
    pub fn set_image_uri<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.image_uri = v.into();
        self
    }

    /// Sets the value of [image_digest][crate::model::OcirDeployArtifactSource::image_digest].
    pub fn set_image_digest<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.image_digest = std::option::Option::Some(v.into());
        self
    }
}

/// An artifact that can be deployed by a deployment pipeline.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeployArtifact {
    /// Unique identifier of the artifact.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub id: std::string::String,

    /// Artifact display name.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    /// The identifier of the project containing the artifact.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub project_id: std::string::String,

    /// Type of the deployment artifact, for example `DOCKER_IMAGE`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub deploy_artifact_type: std::string::String,

    /// Where the artifact contents come from.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub deploy_artifact_source: std::option::Option<crate::model::DeployArtifactSource>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeployArtifact {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::DeployArtifact::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [display_name][crate::model::DeployArtifact::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [project_id][crate::model::DeployArtifact::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [deploy_artifact_type][crate::model::DeployArtifact::deploy_artifact_type].
    pub fn set_deploy_artifact_type<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.deploy_artifact_type = v.into();
        self
    }

    /// Sets the value of [deploy_artifact_source][crate::model::DeployArtifact::deploy_artifact_source].
    pub fn set_deploy_artifact_source<T: std::convert::Into<crate::model::DeployArtifactSource>>(
        mut self,
        v: T,
    ) -> Self {
        self.deploy_artifact_source = std::option::Option::Some(v.into());
        self
    }
}

/// The result of listing the stages of a build pipeline.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BuildPipelineStageCollection {
    /// The stages. Stages with an unknown type are preserved.
    #[serde(
        skip_serializing_if = "std::vec::Vec::is_empty",
        deserialize_with = "polymorphic::deserialize_array"
    )]
    pub items: std::vec::Vec<crate::model::BuildPipelineStage>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl BuildPipelineStageCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::BuildPipelineStageCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::BuildPipelineStage>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A build pipeline.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BuildPipeline {
    /// Unique identifier of the build pipeline.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub id: std::string::String,

    /// Build pipeline display name.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    /// The stages of the pipeline, keyed by stage name.
    #[serde(
        skip_serializing_if = "std::collections::HashMap::is_empty",
        deserialize_with = "polymorphic::deserialize_map"
    )]
    pub stages: std::collections::HashMap<std::string::String, crate::model::BuildPipelineStage>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl BuildPipeline {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::BuildPipeline::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [display_name][crate::model::BuildPipeline::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [stages][crate::model::BuildPipeline::stages].
    pub fn set_stages<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<crate::model::BuildPipelineStage>,
    {
        self.stages = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}
