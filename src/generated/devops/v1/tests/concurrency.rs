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

//! Decode from many threads sharing the same registries.

#[cfg(test)]
mod test {
    use polymorphic::decode::decode_array;
    use polymorphic::encode::to_value;
    use sdk_devops_v1::model::*;
    use static_assertions::assert_impl_all;
    use std::sync::Arc;

    assert_impl_all!(BuildPipelineStage: Clone, Send, Sync, std::fmt::Debug);
    assert_impl_all!(WaitCriteria: Clone, Send, Sync, std::fmt::Debug);
    assert_impl_all!(DeployArtifactSource: Clone, Send, Sync, std::fmt::Debug);
    assert_impl_all!(polymorphic::Registry<BuildPipelineStage>: Send, Sync);
    assert_impl_all!(polymorphic::Error: Send, Sync, std::error::Error);

    const THREADS: usize = 16;
    const ITERATIONS: usize = 50;

    #[test]
    fn concurrent_decode() -> anyhow::Result<()> {
        let input: Arc<[u8]> = Arc::from(
            br#"[
                {"buildPipelineStageType": "BUILD", "id": "a"},
                {"buildPipelineStageType": "WAIT", "waitCriteria": {"waitType": "ABSOLUTE_WAIT", "waitDuration": "PT1S"}},
                {"buildPipelineStageType": "TRIGGER_DEPLOYMENT_PIPELINE", "deployPipelineId": "d"},
                {"buildPipelineStageType": "FUTURE", "id": "f"}
            ]"#
            .as_slice(),
        );
        let want = decode_array::<BuildPipelineStage>(&input)?;

        // The registries are initialized lazily, the threads race to be the
        // first reader.
        let handles = (0..THREADS)
            .map(|_| {
                let input = input.clone();
                std::thread::spawn(move || {
                    (0..ITERATIONS)
                        .map(|_| decode_array::<BuildPipelineStage>(&input))
                        .collect::<Result<Vec<_>, _>>()
                })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            let results = handle.join().expect("thread panicked")?;
            assert_eq!(results.len(), ITERATIONS);
            for got in results {
                assert_eq!(got, want);
            }
        }
        Ok(())
    }

    #[test]
    fn concurrent_encode() -> anyhow::Result<()> {
        let stage = BuildPipelineStage::from(
            WaitStage::new()
                .set_id("w")
                .set_wait_criteria(AbsoluteWaitCriteria::new().set_wait_duration("PT1S")),
        );
        let want = to_value(&stage)?;
        let handles = (0..THREADS)
            .map(|_| {
                let stage = stage.clone();
                std::thread::spawn(move || to_value(&stage))
            })
            .collect::<Vec<_>>();
        for handle in handles {
            let got = handle.join().expect("thread panicked")?;
            assert_eq!(got, want);
        }
        Ok(())
    }
}
