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

/// A generic empty message.
///
/// Returned by RPCs that have no meaningful result, such as deletes. Its JSON
/// representation is `{}`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct Empty {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json() -> anyhow::Result<()> {
        assert_eq!(serde_json::to_value(Empty::default())?, serde_json::json!({}));
        let got: Empty = serde_json::from_value(serde_json::json!({"ignored": 1}))?;
        assert_eq!(got, Empty::default());
        Ok(())
    }
}
