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

//! Decode arrays and maps of build pipeline stages.

#[cfg(test)]
mod test {
    use polymorphic::Position;
    use polymorphic::decode::{decode_array, decode_array_each, decode_map, decode_map_each};
    use pretty_assertions::assert_eq;
    use sdk_devops_v1::model::*;
    use test_case::test_case;

    type Result = anyhow::Result<()>;

    const STAGES: &str = r#"[
        {"buildPipelineStageType": "BUILD", "id": "a"},
        {"buildPipelineStageType": "NOT_YET_INVENTED", "id": "b"},
        null,
        {"buildPipelineStageType": "WAIT", "id": "d"}
    ]"#;

    #[test]
    fn array() -> Result {
        let got = decode_array::<BuildPipelineStage>(STAGES.as_bytes())?;
        assert_eq!(got.len(), 4);
        assert_eq!(got[0], Some(BuildStage::new().set_id("a").into()));
        assert!(got[1].as_ref().is_some_and(BuildPipelineStage::is_unknown), "{got:?}");
        assert_eq!(got[2], None);
        assert_eq!(got[3], Some(WaitStage::new().set_id("d").into()));
        Ok(())
    }

    #[test]
    fn array_empty() -> Result {
        let got = decode_array::<BuildPipelineStage>(b"[]")?;
        assert!(got.is_empty(), "{got:?}");
        Ok(())
    }

    #[test_case(r#"[{"buildPipelineStageType": 1}]"#, 0; "first")]
    #[test_case(r#"[{"id": "a"}, {"id": "b"}, 7]"#, 2; "not an object")]
    #[test_case(r#"[{"id": "a"}, {"buildPipelineStageType": "BUILD", "id": []}, {"id": 1}]"#, 1; "bad field")]
    fn array_fails_fast(input: &str, index: usize) {
        let err = decode_array::<BuildPipelineStage>(input.as_bytes()).unwrap_err();
        assert!(err.is_shape(), "{err:?}");
        assert_eq!(err.position(), Some(&Position::Index(index)));
        let fmt = err.to_string();
        assert!(fmt.contains(&format!("[{index}]")), "{fmt}");
    }

    #[test_case(r#"{"buildPipelineStageType": "BUILD"}"#; "object")]
    #[test_case(r#""BUILD""#; "string")]
    #[test_case("null"; "null")]
    fn array_not_an_array(input: &str) {
        let err = decode_array::<BuildPipelineStage>(input.as_bytes()).unwrap_err();
        assert!(err.is_shape(), "{err:?}");
        assert_eq!(err.position(), None);
    }

    #[test]
    fn array_malformed() {
        let err = decode_array::<BuildPipelineStage>(br#"[{"id": "a"}, {"id""#).unwrap_err();
        assert!(err.is_parse(), "{err:?}");
        assert_eq!(err.position(), None);
    }

    #[test]
    fn array_each() -> Result {
        let input = r#"[
            {"buildPipelineStageType": "BUILD", "id": "a"},
            {"buildPipelineStageType": 42},
            {"buildPipelineStageType": "SOMETHING_NEW"}
        ]"#;
        let got = decode_array_each::<BuildPipelineStage>(input.as_bytes())?;
        assert_eq!(got.len(), 3);
        assert!(matches!(&got[0], Ok(Some(BuildPipelineStage::Build(_)))), "{got:?}");
        let err = got[1].as_ref().unwrap_err();
        assert!(err.is_shape(), "{err:?}");
        assert_eq!(err.position(), Some(&Position::Index(1)));
        assert!(matches!(&got[2], Ok(Some(s)) if s.is_unknown()), "{got:?}");
        Ok(())
    }

    #[test]
    fn map() -> Result {
        let input = r#"{
            "compile": {"buildPipelineStageType": "BUILD", "image": "img"},
            "approve": {"buildPipelineStageType": "MANUAL_APPROVAL"},
            "skipped": null
        }"#;
        let got = decode_map::<BuildPipelineStage>(input.as_bytes())?;
        assert_eq!(
            got.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["approve", "compile", "skipped"]
        );
        assert_eq!(
            got.get("compile"),
            Some(&Some(BuildStage::new().set_image("img").into()))
        );
        assert!(got["approve"].as_ref().is_some_and(BuildPipelineStage::is_unknown));
        assert_eq!(got.get("skipped"), Some(&None));
        Ok(())
    }

    #[test]
    fn map_fails_fast() {
        let input = r#"{"good": {"id": "a"}, "bad": {"buildPipelineStageType": false}}"#;
        let err = decode_map::<BuildPipelineStage>(input.as_bytes()).unwrap_err();
        assert!(err.is_shape(), "{err:?}");
        assert_eq!(err.position(), Some(&Position::Key("bad".into())));
        let fmt = err.to_string();
        assert!(fmt.contains(r#"["bad"]"#), "{fmt}");
    }

    #[test]
    fn map_not_an_object() {
        let err = decode_map::<BuildPipelineStage>(b"[]").unwrap_err();
        assert!(err.is_shape(), "{err:?}");
    }

    #[test]
    fn map_each() -> Result {
        let input = r#"{"good": {"id": "a"}, "bad": {"buildPipelineStageType": false}}"#;
        let got = decode_map_each::<BuildPipelineStage>(input.as_bytes())?;
        assert!(matches!(got.get("good"), Some(Ok(Some(s))) if s.is_unknown()), "{got:?}");
        let err = got["bad"].as_ref().unwrap_err();
        assert_eq!(err.position(), Some(&Position::Key("bad".into())));
        Ok(())
    }

    #[test]
    fn nested_error_reports_element() {
        let input = r#"[{"id": "a"}, {"buildPipelineStageType": "WAIT", "waitCriteria": []}]"#;
        let err = decode_array::<BuildPipelineStage>(input.as_bytes()).unwrap_err();
        assert_eq!(err.position(), Some(&Position::Index(1)));
        assert!(err.excerpt().is_some_and(|e| e.starts_with("[{")), "{err:?}");
    }
}
