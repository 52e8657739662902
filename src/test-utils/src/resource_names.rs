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

//! Helper functions to generate random resource ids.

use rand::{
    Rng,
    distr::{Distribution, Uniform},
};

/// A common prefix for resource ids.
///
/// Where possible, we use this prefix for randomly generated resource ids.
pub const PREFIX: &str = "gapic-rust-testing-";

/// The length of generated sink ids, the service accepts up to 100.
const SINK_ID_LENGTH: usize = 48;

/// The length of generated log ids, the service accepts up to 512.
const LOG_ID_LENGTH: usize = 48;

const METRIC_ID_LENGTH: usize = 64;

/// Generate a random sink id.
///
/// Sink ids accept letters, digits, `_`, `-` and `.`.
pub fn random_sink_id() -> String {
    random_id(SINK_ID_LENGTH)
}

/// Generate a random log id.
pub fn random_log_id() -> String {
    random_id(LOG_ID_LENGTH)
}

/// Generate a random metric id.
pub fn random_metric_id() -> String {
    random_id(METRIC_ID_LENGTH)
}

fn random_id(len: usize) -> String {
    let id = LowercaseAlphanumeric.random_string(len - PREFIX.len());
    format!("{PREFIX}{id}")
}

const LOWERCASE_ALPHANUMERIC_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Sample a `u8`, uniformly distributed over ASCII lowercase letters and numbers: a-z and 0-9.
///
/// # Example
/// ```
/// use gapic_test_utils::resource_names::LowercaseAlphanumeric;
/// let got: String = LowercaseAlphanumeric.random_string(32);
/// assert_eq!(got.len(), 32);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseAlphanumeric;

impl LowercaseAlphanumeric {
    /// Create a string with `n` characters from the character set.
    pub fn random_string(&self, n: usize) -> String {
        rand::rng()
            .sample_iter(self)
            .take(n)
            .map(char::from)
            .collect()
    }
}

impl Distribution<u8> for LowercaseAlphanumeric {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        let u = Uniform::new(0, LOWERCASE_ALPHANUMERIC_CHARSET.len())
            .expect("hard-coded uniform distribution is initialized successfully")
            .sample(rng);
        LOWERCASE_ALPHANUMERIC_CHARSET[u]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(random_sink_id(), SINK_ID_LENGTH; "sink")]
    #[test_case(random_log_id(), LOG_ID_LENGTH; "log")]
    #[test_case(random_metric_id(), METRIC_ID_LENGTH; "metric")]
    fn ids(got: String, max: usize) {
        assert_eq!(got.len(), max, "{got}");
        let suffix = got.strip_prefix(PREFIX);
        assert!(suffix.is_some(), "{got} should start with {PREFIX}");
        assert!(
            suffix.is_some_and(|s| s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())),
            "{got}"
        );
    }

    #[test]
    fn ids_differ() {
        assert_ne!(random_sink_id(), random_sink_id());
    }

    #[test]
    fn lowercase_string() {
        let got = LowercaseAlphanumeric.random_string(32);
        assert_eq!(got.len(), 32, "{got:?}");
        assert!(got.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()), "{got}");
    }
}
