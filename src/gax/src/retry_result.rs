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

//! Retry loop control types.
//!
//! Applications only need to use these types when implementing their own
//! retry policies.

use crate::error::Error;

/// The result of a retry policy decision.
///
/// Each variant carries the error that triggered the decision.
#[derive(Debug)]
pub enum RetryResult {
    /// The error is not retryable, stop the loop.
    Permanent(Error),

    /// The error is retryable, but the policy is exhausted.
    ///
    /// For example, the policy may limit the total time or the number of
    /// attempts.
    Exhausted(Error),

    /// The error is retryable, make another attempt.
    Continue(Error),
}

impl RetryResult {
    /// Returns true if the result is [RetryResult::Permanent].
    pub fn is_permanent(&self) -> bool {
        matches!(self, Self::Permanent(_))
    }

    /// Returns true if the result is [RetryResult::Exhausted].
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted(_))
    }

    /// Returns true if the result is [RetryResult::Continue].
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }

    /// The error that triggered the decision.
    pub fn into_error(self) -> Error {
        match self {
            Self::Permanent(e) | Self::Exhausted(e) | Self::Continue(e) => e,
        }
    }
}
