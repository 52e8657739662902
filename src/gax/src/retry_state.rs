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

//! Defines types to query retry policies.

use tokio::time::Instant;

/// The input into a retry policy query.
///
/// On an error, the retry loop queries the retry policy as to whether it
/// should make a new attempt. The retry loop provides an instance of this
/// type to the retry policy.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct RetryState {
    /// The start time for this retry loop.
    pub start: Instant,

    /// The number of times the request has been attempted.
    pub attempt_count: u32,
}

impl RetryState {
    /// Create a new instance, starting now.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the start time, useful in mocks.
    pub fn set_start<T: Into<Instant>>(mut self, v: T) -> Self {
        self.start = v.into();
        self
    }

    /// Update the attempt count, useful in mocks.
    pub fn set_attempt_count<T: Into<u32>>(mut self, v: T) -> Self {
        self.attempt_count = v.into();
        self
    }

    /// The time elapsed since the loop started.
    pub fn elapsed(&self) -> std::time::Duration {
        self.start.elapsed()
    }
}

impl Default for RetryState {
    fn default() -> Self {
        Self {
            start: Instant::now(),
            attempt_count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn setters() {
        let start = Instant::now() - Duration::from_secs(5);
        let state = RetryState::new().set_start(start).set_attempt_count(3_u32);
        assert_eq!(state.start, start);
        assert_eq!(state.attempt_count, 3);
        assert!(state.elapsed() >= Duration::from_secs(5), "{state:?}");
    }

    #[test]
    fn default() {
        let state = RetryState::default();
        assert_eq!(state.attempt_count, 0);
        assert!(state.elapsed() < Duration::from_secs(60), "{state:?}");
    }
}
