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

use polymorphic::encode::{encode_envelope, encode_variant};
use polymorphic::{Envelope, Error, Family, Map, Registry, RegistryError, Variant};
use std::sync::LazyLock;

static BUILD_PIPELINE_STAGE: LazyLock<
    Result<Registry<crate::model::BuildPipelineStage>, RegistryError>,
> = LazyLock::new(|| {
    use crate::model::BuildPipelineStage as F;
    Registry::for_family()
        .register_variant::<crate::model::BuildStage>(|v| F::Build(Box::new(v)))
        .register_variant::<crate::model::WaitStage>(|v| F::Wait(Box::new(v)))
        .register_variant::<crate::model::DeliverArtifactStage>(|v| {
            F::DeliverArtifact(Box::new(v))
        })
        .register_variant::<crate::model::TriggerDeploymentStage>(|v| {
            F::TriggerDeployment(Box::new(v))
        })
        .build()
});

impl Family for crate::model::BuildPipelineStage {
    const NAME: &'static str = "BuildPipelineStage";
    const DISCRIMINATOR: &'static str = "buildPipelineStageType";

    fn registry() -> &'static Result<Registry<Self>, RegistryError> {
        &BUILD_PIPELINE_STAGE
    }

    fn from_envelope(envelope: Envelope) -> Self {
        Self::Unknown(envelope)
    }

    fn to_object(&self) -> Result<Map, Error> {
        match self {
            Self::Build(v) => encode_variant::<Self, _>(v.as_ref()),
            Self::Wait(v) => encode_variant::<Self, _>(v.as_ref()),
            Self::DeliverArtifact(v) => encode_variant::<Self, _>(v.as_ref()),
            Self::TriggerDeployment(v) => encode_variant::<Self, _>(v.as_ref()),
            Self::Unknown(e) => encode_envelope::<Self>(e),
        }
    }
}

impl Variant for crate::model::BuildStage {
    fn discriminator_value() -> &'static str {
        "BUILD"
    }
}

impl Variant for crate::model::WaitStage {
    fn discriminator_value() -> &'static str {
        "WAIT"
    }
}

impl Variant for crate::model::DeliverArtifactStage {
    fn discriminator_value() -> &'static str {
        "DELIVER_ARTIFACT"
    }
}

impl Variant for crate::model::TriggerDeploymentStage {
    fn discriminator_value() -> &'static str {
        "TRIGGER_DEPLOYMENT_PIPELINE"
    }
}

static WAIT_CRITERIA: LazyLock<Result<Registry<crate::model::WaitCriteria>, RegistryError>> =
    LazyLock::new(|| {
        use crate::model::WaitCriteria as F;
        Registry::for_family()
            .register_variant::<crate::model::AbsoluteWaitCriteria>(|v| {
                F::AbsoluteWait(Box::new(v))
            })
            .build()
    });

impl Family for crate::model::WaitCriteria {
    const NAME: &'static str = "WaitCriteria";
    const DISCRIMINATOR: &'static str = "waitType";

    fn registry() -> &'static Result<Registry<Self>, RegistryError> {
        &WAIT_CRITERIA
    }

    fn from_envelope(envelope: Envelope) -> Self {
        Self::Unknown(envelope)
    }

    fn to_object(&self) -> Result<Map, Error> {
        match self {
            Self::AbsoluteWait(v) => encode_variant::<Self, _>(v.as_ref()),
            Self::Unknown(e) => encode_envelope::<Self>(e),
        }
    }
}

impl Variant for crate::model::AbsoluteWaitCriteria {
    fn discriminator_value() -> &'static str {
        "ABSOLUTE_WAIT"
    }
}

static DEPLOY_ARTIFACT_SOURCE: LazyLock<
    Result<Registry<crate::model::DeployArtifactSource>, RegistryError>,
> = LazyLock::new(|| {
    use crate::model::DeployArtifactSource as F;
    Registry::for_family()
        .register_variant::<crate::model::InlineDeployArtifactSource>(|v| F::Inline(Box::new(v)))
        .register_variant::<crate::model::GenericDeployArtifactSource>(|v| {
            F::GenericArtifact(Box::new(v))
        })
        .register_variant::<crate::model::OcirDeployArtifactSource>(|v| F::Ocir(Box::new(v)))
        .build()
});

impl Family for crate::model::DeployArtifactSource {
    const NAME: &'static str = "DeployArtifactSource";
    const DISCRIMINATOR: &'static str = "deployArtifactSourceType";

    fn registry() -> &'static Result<Registry<Self>, RegistryError> {
        &DEPLOY_ARTIFACT_SOURCE
    }

    fn from_envelope(envelope: Envelope) -> Self {
        Self::Unknown(envelope)
    }

    fn to_object(&self) -> Result<Map, Error> {
        match self {
            Self::Inline(v) => encode_variant::<Self, _>(v.as_ref()),
            Self::GenericArtifact(v) => encode_variant::<Self, _>(v.as_ref()),
            Self::Ocir(v) => encode_variant::<Self, _>(v.as_ref()),
            Self::Unknown(e) => encode_envelope::<Self>(e),
        }
    }
}

impl Variant for crate::model::InlineDeployArtifactSource {
    fn discriminator_value() -> &'static str {
        "INLINE"
    }
}

impl Variant for crate::model::GenericDeployArtifactSource {
    fn discriminator_value() -> &'static str {
        "GENERIC_ARTIFACT"
    }
}

impl Variant for crate::model::OcirDeployArtifactSource {
    fn discriminator_value() -> &'static str {
        "OCIR"
    }
}

macro_rules! family_serde {
    ($($family:ty),*) => {
        $(
            impl serde::ser::Serialize for $family {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: serde::ser::Serializer,
                {
                    polymorphic::serialize(self, serializer)
                }
            }

            impl<'de> serde::de::Deserialize<'de> for $family {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: serde::de::Deserializer<'de>,
                {
                    polymorphic::deserialize(deserializer)
                }
            }
        )*
    };
}

family_serde!(
    crate::model::BuildPipelineStage,
    crate::model::WaitCriteria,
    crate::model::DeployArtifactSource
);
