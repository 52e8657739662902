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

//! Defines traits for retry policies and some common implementations.
//!
//! The client libraries automatically retry RPCs when they fail with one of
//! the status codes configured as retryable for the method. The configuration
//! for each method is loaded from the client configuration, see
//! [CallSettings][crate::call_settings::CallSettings].
//!
//! Applications may override the default behavior. This module defines the
//! trait for retry policies and some common implementations.
//!
//! # Example
//! ```
//! # use gapic_gax::retry_policy::*;
//! # use gapic_gax::error::rpc::Code;
//! use std::time::Duration;
//! let policy = RetryableCodes::new([Code::Unavailable, Code::DeadlineExceeded])
//!     .with_time_limit(Duration::from_secs(60))
//!     .with_attempt_limit(5);
//! ```

use crate::error::Error;
use crate::error::rpc::Code;
use crate::retry_result::RetryResult;
use crate::retry_state::RetryState;
use std::collections::BTreeSet;
use std::time::Duration;

/// Determines how errors are handled in the retry loop.
///
/// Implementations of this trait determine if errors are retryable, and for
/// how long the retry loop may continue.
pub trait RetryPolicy: Send + Sync + std::fmt::Debug {
    /// Query the retry policy after an error.
    ///
    /// # Parameters
    /// * `state` - the start time of the retry loop, and the number of
    ///   attempts so far, including the attempt that just failed.
    /// * `error` - the last error when attempting the request.
    fn on_error(&self, state: &RetryState, error: Error) -> RetryResult;

    /// The remaining time in the retry policy.
    ///
    /// For policies based on time, this returns the remaining time in the
    /// policy. The retry loop uses this value to adjust the next attempt
    /// timeout. For policies that are not time based this returns `None`.
    fn remaining_time(&self, _state: &RetryState) -> Option<Duration> {
        None
    }
}

/// Extension trait for [RetryPolicy].
pub trait RetryPolicyExt: RetryPolicy + Sized {
    /// Decorate a [RetryPolicy] to limit the total elapsed time in the retry
    /// loop.
    ///
    /// The retry loop also uses the remaining time to cap the timeout of each
    /// attempt.
    fn with_time_limit(self, maximum_duration: Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::custom(self, maximum_duration)
    }

    /// Decorate a [RetryPolicy] to limit the number of attempts.
    fn with_attempt_limit(self, maximum_attempts: u32) -> LimitedAttemptCount<Self> {
        LimitedAttemptCount::custom(self, maximum_attempts)
    }
}

impl<T: RetryPolicy> RetryPolicyExt for T {}

/// Retries errors whose status code is in a configured set.
///
/// Errors without a status code, such as serialization or authentication
/// errors, are never retried. See [Error::code] for how transport errors and
/// attempt timeouts are classified.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RetryableCodes {
    codes: BTreeSet<Code>,
}

impl RetryableCodes {
    /// Creates a policy retrying the given codes.
    pub fn new<I: IntoIterator<Item = Code>>(codes: I) -> Self {
        Self {
            codes: codes.into_iter().collect(),
        }
    }

    /// The retryable codes.
    pub fn codes(&self) -> &BTreeSet<Code> {
        &self.codes
    }

    /// Returns true if `error` has a status code in the retryable set.
    pub fn is_retryable(&self, error: &Error) -> bool {
        error.code().is_some_and(|c| self.codes.contains(&c))
    }
}

impl RetryPolicy for RetryableCodes {
    fn on_error(&self, _state: &RetryState, error: Error) -> RetryResult {
        if self.is_retryable(&error) {
            RetryResult::Continue(error)
        } else {
            RetryResult::Permanent(error)
        }
    }
}

/// A retry policy decorator that limits the total time in the retry loop.
///
/// Once the time limit expires, all errors are treated as exhausted.
#[derive(Clone, Debug)]
pub struct LimitedElapsedTime<P> {
    inner: P,
    maximum_duration: Duration,
}

impl<P> LimitedElapsedTime<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance, with a custom inner policy.
    pub fn custom(inner: P, maximum_duration: Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }

    fn error_if_exhausted(&self, state: &RetryState, error: Error) -> RetryResult {
        if state.elapsed() >= self.maximum_duration {
            RetryResult::Exhausted(error)
        } else {
            RetryResult::Continue(error)
        }
    }
}

impl<P> RetryPolicy for LimitedElapsedTime<P>
where
    P: RetryPolicy + 'static,
{
    fn on_error(&self, state: &RetryState, error: Error) -> RetryResult {
        match self.inner.on_error(state, error) {
            RetryResult::Continue(e) => self.error_if_exhausted(state, e),
            result => result,
        }
    }

    fn remaining_time(&self, state: &RetryState) -> Option<Duration> {
        let remaining = self.maximum_duration.saturating_sub(state.elapsed());
        match self.inner.remaining_time(state) {
            Some(inner) => Some(std::cmp::min(remaining, inner)),
            None => Some(remaining),
        }
    }
}

/// A retry policy decorator that limits the number of attempts.
#[derive(Clone, Debug)]
pub struct LimitedAttemptCount<P> {
    inner: P,
    maximum_attempts: u32,
}

impl<P> LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance, with a custom inner policy.
    pub fn custom(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }
}

impl<P> RetryPolicy for LimitedAttemptCount<P>
where
    P: RetryPolicy + 'static,
{
    fn on_error(&self, state: &RetryState, error: Error) -> RetryResult {
        match self.inner.on_error(state, error) {
            RetryResult::Continue(e) if state.attempt_count >= self.maximum_attempts => {
                RetryResult::Exhausted(e)
            }
            result => result,
        }
    }

    fn remaining_time(&self, state: &RetryState) -> Option<Duration> {
        self.inner.remaining_time(state)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::rpc::Status;
    use test_case::test_case;
    use tokio::time::Instant;

    mockall::mock! {
        #[derive(Debug)]
        pub Policy {}
        impl RetryPolicy for Policy {
            fn on_error(&self, state: &RetryState, error: Error) -> RetryResult;
            fn remaining_time(&self, state: &RetryState) -> Option<Duration>;
        }
    }

    fn from_code(code: Code) -> Error {
        Error::service(Status::default().set_code(code).set_message("test-only"))
    }

    #[test_case(from_code(Code::DeadlineExceeded), true; "listed code")]
    #[test_case(from_code(Code::Unknown), true; "another listed code")]
    #[test_case(from_code(Code::PermissionDenied), false; "unlisted code")]
    #[test_case(from_code(Code::Unavailable), false; "unlisted unavailable")]
    #[test_case(Error::timeout("attempt timeout"), true; "timeout counts as deadline exceeded")]
    #[test_case(Error::io("connection refused"), false; "io counts as unavailable")]
    #[test_case(Error::ser("bad request"), false; "serialization")]
    #[test_case(Error::authentication("no token"), false; "authentication")]
    fn retryable_codes(error: Error, want: bool) {
        let policy = RetryableCodes::new([Code::DeadlineExceeded, Code::Unknown]);
        let got = policy.on_error(&RetryState::new(), error);
        assert_eq!(got.is_continue(), want, "{got:?}");
        assert_eq!(got.is_permanent(), !want, "{got:?}");
        assert!(policy.remaining_time(&RetryState::new()).is_none());
    }

    #[test]
    fn retryable_codes_io() {
        let policy = RetryableCodes::new([Code::Unavailable]);
        let got = policy.on_error(&RetryState::new(), Error::io("connection refused"));
        assert!(got.is_continue(), "{got:?}");
        assert_eq!(policy.codes().len(), 1);
    }

    #[test]
    fn empty_retryable_codes() {
        let policy = RetryableCodes::default();
        let got = policy.on_error(&RetryState::new(), from_code(Code::Unavailable));
        assert!(got.is_permanent(), "{got:?}");
    }

    #[test]
    fn limited_time_forwards() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(1)
            .returning(|_, e| RetryResult::Continue(e));
        mock.expect_remaining_time().times(1).returning(|_| None);

        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(60));
        let got = policy.on_error(&RetryState::new(), from_code(Code::Unavailable));
        assert!(got.is_continue(), "{got:?}");
        let remaining = policy.remaining_time(&RetryState::new());
        assert!(
            remaining.is_some_and(|d| d <= Duration::from_secs(60)),
            "{remaining:?}"
        );
    }

    #[test]
    fn limited_time_expired() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(1)
            .returning(|_, e| RetryResult::Continue(e));
        mock.expect_remaining_time().times(1).returning(|_| None);

        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(60));
        let state = RetryState::new().set_start(Instant::now() - Duration::from_secs(70));
        let got = policy.on_error(&state, from_code(Code::Unavailable));
        assert!(got.is_exhausted(), "{got:?}");
        assert_eq!(policy.remaining_time(&state), Some(Duration::ZERO));
    }

    #[test]
    fn limited_time_inner_permanent() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(1)
            .returning(|_, e| RetryResult::Permanent(e));
        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(60));
        let state = RetryState::new().set_start(Instant::now() - Duration::from_secs(70));
        let got = policy.on_error(&state, from_code(Code::PermissionDenied));
        assert!(got.is_permanent(), "{got:?}");
    }

    #[test]
    fn limited_time_inner_exhausted() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(1)
            .returning(|_, e| RetryResult::Exhausted(e));
        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(60));
        let got = policy.on_error(&RetryState::new(), from_code(Code::Unavailable));
        assert!(got.is_exhausted(), "{got:?}");
    }

    #[test_case(Some(Duration::from_secs(5)), Duration::from_secs(5); "inner shorter")]
    #[test_case(Some(Duration::from_secs(50)), Duration::from_secs(10); "inner longer")]
    #[test_case(None, Duration::from_secs(10); "inner none")]
    #[tokio::test(start_paused = true)]
    async fn limited_time_remaining(inner: Option<Duration>, want: Duration) {
        let mut mock = MockPolicy::new();
        mock.expect_remaining_time()
            .times(1)
            .returning(move |_| inner);
        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(60));
        let state = RetryState::new();
        tokio::time::advance(Duration::from_secs(50)).await;
        assert_eq!(policy.remaining_time(&state), Some(want));
    }

    #[test]
    fn limited_attempt_count() {
        let policy = RetryableCodes::new([Code::Unavailable]).with_attempt_limit(3);
        for attempt in 1..3_u32 {
            let state = RetryState::new().set_attempt_count(attempt);
            let got = policy.on_error(&state, from_code(Code::Unavailable));
            assert!(got.is_continue(), "{attempt} {got:?}");
        }
        let state = RetryState::new().set_attempt_count(3_u32);
        let got = policy.on_error(&state, from_code(Code::Unavailable));
        assert!(got.is_exhausted(), "{got:?}");
    }

    #[test]
    fn limited_attempt_count_permanent() {
        let policy = RetryableCodes::new([Code::Unavailable]).with_attempt_limit(3);
        let state = RetryState::new().set_attempt_count(5_u32);
        let got = policy.on_error(&state, from_code(Code::PermissionDenied));
        assert!(got.is_permanent(), "{got:?}");
    }

    #[test]
    fn limited_attempt_count_remaining() {
        let mut mock = MockPolicy::new();
        mock.expect_remaining_time()
            .times(1)
            .returning(|_| Some(Duration::from_secs(123)));
        let policy = LimitedAttemptCount::custom(mock, 3);
        assert_eq!(
            policy.remaining_time(&RetryState::new()),
            Some(Duration::from_secs(123))
        );
    }
}
