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

//! Decode build pipeline stages, including stage types unknown to this crate.

#[cfg(test)]
mod test {
    use polymorphic::decode::{decode, decode_str, decode_value};
    use pretty_assertions::assert_eq;
    use sdk_devops_v1::model::*;
    use serde_json::{Value, json};
    use test_case::test_case;

    type Result = anyhow::Result<()>;

    #[test]
    fn build() -> Result {
        let got = decode_str::<BuildPipelineStage>(r#"{"buildPipelineStageType":"BUILD","id":"x"}"#)?;
        let want = BuildPipelineStage::from(BuildStage::new().set_id("x"));
        assert_eq!(got, Some(want));
        Ok(())
    }

    #[test]
    fn build_all_fields() -> Result {
        let input = json!({
            "buildPipelineStageType": "BUILD",
            "id": "ocid1.stage.1",
            "displayName": "compile",
            "description": "compile all the things",
            "buildPipelineId": "ocid1.pipeline.1",
            "image": "OL7_X86_64_STANDARD_10",
            "buildSpecFile": "build_spec.yaml",
            "stageExecutionTimeoutInSeconds": 3600,
            "primaryBuildSource": "main",
            "freeformTags": {"team": "ci"},
        });
        let got = decode_value::<BuildPipelineStage>(input)?;
        let want = BuildStage::new()
            .set_id("ocid1.stage.1")
            .set_display_name("compile")
            .set_description("compile all the things")
            .set_build_pipeline_id("ocid1.pipeline.1")
            .set_image("OL7_X86_64_STANDARD_10")
            .set_build_spec_file("build_spec.yaml")
            .set_stage_execution_timeout_in_seconds(3600)
            .set_primary_build_source("main")
            .set_freeform_tags([("team", "ci")]);
        let got = got.as_ref().and_then(BuildPipelineStage::build);
        assert_eq!(got.map(|b| b.as_ref()), Some(&want));
        Ok(())
    }

    #[test]
    fn wait() -> Result {
        let input = json!({
            "buildPipelineStageType": "WAIT",
            "id": "x",
            "waitCriteria": {"waitType": "ABSOLUTE_WAIT", "waitDuration": "PT30S"},
        });
        let got = decode_value::<BuildPipelineStage>(input)?;
        let want = WaitStage::new()
            .set_id("x")
            .set_wait_criteria(AbsoluteWaitCriteria::new().set_wait_duration("PT30S"));
        assert_eq!(got, Some(BuildPipelineStage::from(want)));
        Ok(())
    }

    #[test]
    fn trigger_deployment() -> Result {
        let input = json!({
            "buildPipelineStageType": "TRIGGER_DEPLOYMENT_PIPELINE",
            "deployPipelineId": "ocid1.deploy.1",
            "isPassAllParametersEnabled": true,
        });
        let got = decode_value::<BuildPipelineStage>(input)?;
        let want = TriggerDeploymentStage::new()
            .set_deploy_pipeline_id("ocid1.deploy.1")
            .set_is_pass_all_parameters_enabled(true);
        assert_eq!(got, Some(BuildPipelineStage::from(want)));
        Ok(())
    }

    #[test]
    fn deliver_artifact() -> Result {
        let input = json!({
            "buildPipelineStageType": "DELIVER_ARTIFACT",
            "deliverArtifactCollection": {"items": [
                {"artifactName": "app", "artifactId": "ocid1.artifact.1"},
            ]},
        });
        let got = decode_value::<BuildPipelineStage>(input)?;
        let want = DeliverArtifactStage::new().set_deliver_artifact_collection(
            DeliverArtifactCollection::new().set_items([DeliverArtifact::new()
                .set_artifact_name("app")
                .set_artifact_id("ocid1.artifact.1")]),
        );
        assert_eq!(got, Some(BuildPipelineStage::from(want)));
        Ok(())
    }

    #[test_case(json!({"buildPipelineStageType": "UNKNOWN", "id": "x"}), Some("UNKNOWN"); "unknown")]
    #[test_case(json!({"buildPipelineStageType": "build", "id": "x"}), Some("build"); "case sensitive")]
    #[test_case(json!({"buildPipelineStageType": "", "id": "x"}), Some(""); "empty")]
    #[test_case(json!({"id": "x"}), None; "missing")]
    #[test_case(json!({"buildPipelineStageType": null, "id": "x"}), None; "null")]
    fn fallback(input: Value, discriminator: Option<&str>) -> Result {
        let got = decode_value::<BuildPipelineStage>(input.clone())?;
        let Some(BuildPipelineStage::Unknown(envelope)) = &got else {
            panic!("expected fallback, got {got:?}");
        };
        assert_eq!(envelope.discriminator(), discriminator);
        assert_eq!(envelope.family(), "BuildPipelineStage");
        assert_eq!(envelope.field(), "buildPipelineStageType");
        assert_eq!(envelope.fields().get("id"), Some(&json!("x")));
        let got = got.as_ref().and_then(BuildPipelineStage::stage_type);
        assert_eq!(got, discriminator);
        Ok(())
    }

    #[test]
    fn fallback_try_into_variant() -> Result {
        let input = json!({"buildPipelineStageType": "UNKNOWN", "id": "x"});
        let Some(BuildPipelineStage::Unknown(envelope)) = decode_value::<BuildPipelineStage>(input)? else {
            panic!("expected fallback");
        };
        let err = envelope.try_into_variant::<BuildStage>().unwrap_err();
        assert!(err.is_shape(), "{err:?}");

        let input = json!({"buildPipelineStageType": "BUILD", "image": "img"});
        let envelope = polymorphic::Envelope::peek(
            "BuildPipelineStage",
            "buildPipelineStageType",
            input,
        )?;
        let got = envelope.try_into_variant::<BuildStage>()?;
        assert_eq!(got, BuildStage::new().set_image("img"));
        Ok(())
    }

    #[test]
    fn null_is_absent() -> Result {
        assert_eq!(decode::<BuildPipelineStage>(b"null")?, None);
        assert_eq!(decode::<WaitCriteria>(b" null ")?, None);
        assert_eq!(decode::<DeployArtifactSource>(b"null")?, None);
        Ok(())
    }

    #[test_case(r#"{"buildPipelineStageType": "BUILD""#; "truncated")]
    #[test_case(r#"{"buildPipelineStageType": BUILD}"#; "bare word")]
    #[test_case(""; "empty")]
    #[test_case(r#"{"id": "x"} trailing"#; "trailing")]
    fn parse_errors(input: &str) {
        let err = decode_str::<BuildPipelineStage>(input).unwrap_err();
        assert!(err.is_parse(), "{err:?}");
        assert_eq!(err.family(), "BuildPipelineStage");
        let fmt = err.to_string();
        assert!(fmt.contains("BuildPipelineStage"), "{fmt}");
    }

    #[test_case(r#"42"#; "number")]
    #[test_case(r#""BUILD""#; "string")]
    #[test_case(r#"[{"buildPipelineStageType": "BUILD"}]"#; "array")]
    #[test_case(r#"{"buildPipelineStageType": 1}"#; "numeric discriminator")]
    #[test_case(r#"{"buildPipelineStageType": ["BUILD"]}"#; "array discriminator")]
    #[test_case(r#"{"buildPipelineStageType": {"v": "BUILD"}}"#; "object discriminator")]
    fn shape_errors(input: &str) {
        let err = decode_str::<BuildPipelineStage>(input).unwrap_err();
        assert!(err.is_shape(), "{err:?}");
        assert_eq!(err.excerpt(), Some(input));
    }

    #[test_case(json!({"buildPipelineStageType": "BUILD", "id": 7}); "wrong field type")]
    #[test_case(json!({"buildPipelineStageType": "WAIT", "waitCriteria": 7}); "nested not an object")]
    #[test_case(json!({"buildPipelineStageType": "WAIT", "waitCriteria": {"waitType": true}}); "nested discriminator")]
    fn variant_errors(input: Value) {
        let err = decode_value::<BuildPipelineStage>(input).unwrap_err();
        assert!(err.is_shape(), "{err:?}");
        assert_eq!(err.excerpt(), None);
    }

    #[test]
    fn embedded_in_collection() -> Result {
        let body = json!({"items": [
            {"buildPipelineStageType": "BUILD", "id": "a"},
            {"buildPipelineStageType": "MANUAL_APPROVAL", "id": "b"},
            {"id": "c"},
        ]});
        let got = serde_json::from_value::<BuildPipelineStageCollection>(body)?;
        assert_eq!(got.items.len(), 3);
        assert_eq!(got.items[0], BuildPipelineStage::from(BuildStage::new().set_id("a")));
        assert_eq!(got.items[1].stage_type(), Some("MANUAL_APPROVAL"));
        assert!(got.items[1].is_unknown());
        assert!(got.items[2].is_unknown());
        assert_eq!(got.items[2].stage_type(), None);
        Ok(())
    }

    #[test]
    fn embedded_errors_are_data_errors() {
        let body = json!({"items": [{"buildPipelineStageType": 1}]});
        let err = serde_json::from_value::<BuildPipelineStageCollection>(body).unwrap_err();
        assert!(err.is_data(), "{err:?}");
        let fmt = err.to_string();
        assert!(fmt.contains("BuildPipelineStage"), "{fmt}");
    }

    #[test]
    fn embedded_errors_report_index() {
        let body = json!({"items": [
            {"buildPipelineStageType": "BUILD", "id": "a"},
            {"buildPipelineStageType": "NEW_STAGE", "id": "b"},
            {"buildPipelineStageType": "WAIT", "waitCriteria": 42},
        ]});
        let err = serde_json::from_value::<BuildPipelineStageCollection>(body).unwrap_err();
        assert!(err.is_data(), "{err:?}");
        let fmt = err.to_string();
        assert!(fmt.contains("at element [2]"), "{fmt}");
        assert!(fmt.contains("BuildPipelineStage"), "{fmt}");
    }

    #[test]
    fn embedded_errors_report_key() {
        let body = json!({"id": "p", "stages": {
            "compile": {"buildPipelineStageType": "BUILD", "id": "a"},
            "approve": {"buildPipelineStageType": true},
        }});
        let err = serde_json::from_value::<BuildPipeline>(body).unwrap_err();
        assert!(err.is_data(), "{err:?}");
        let fmt = err.to_string();
        assert!(fmt.contains(r#"at element ["approve"]"#), "{fmt}");
    }

    #[test]
    fn embedded_null_element() {
        let body = json!({"items": [{"buildPipelineStageType": "BUILD"}, null]});
        let err = serde_json::from_value::<BuildPipelineStageCollection>(body).unwrap_err();
        let fmt = err.to_string();
        assert!(fmt.contains("at element [1]"), "{fmt}");
    }
}
