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

use super::Result;
use super::backoff_policy::BackoffPolicy;
use super::error::Error;
use super::retry_policy::RetryPolicy;
use super::retry_result::RetryResult;
use super::retry_state::RetryState;
use std::sync::Arc;
use std::time::Duration;

enum RetryLoopAttempt {
    // The first attempt
    Initial,
    // (Attempt count, backoff delay, previous error)
    Retry(u32, Duration, Error),
}

impl RetryLoopAttempt {
    fn count(&self) -> u32 {
        match self {
            RetryLoopAttempt::Initial => 0,
            RetryLoopAttempt::Retry(count, _, _) => *count,
        }
    }
}

/// Runs the retry loop for a given function.
///
/// This function calls `inner` until (1) it returns a successful response,
/// (2) the retry policy rejects the error, or (3) the next backoff delay
/// would exceed the time remaining in the retry policy.
///
/// Each attempt receives its timeout: the value returned by `attempt_timeout`
/// for that attempt, capped at the remaining time in the retry policy.
///
/// In between calls the function waits the amount of time prescribed by the
/// backoff policy, using `sleep` to implement any sleep. The `on_retry`
/// callback is called before sleeping, with the attempt count, the error, and
/// the delay.
///
/// The futures returned by `inner` and `sleep` must own their state, the
/// loop future is `Send` whenever they are.
pub async fn retry_loop<F, Fut, S, SleepFut, T, OnRetry, Response>(
    mut inner: F,
    sleep: S,
    retry_policy: Arc<dyn RetryPolicy>,
    backoff_policy: Arc<dyn BackoffPolicy>,
    attempt_timeout: T,
    mut on_retry: OnRetry,
) -> Result<Response>
where
    F: FnMut(Option<Duration>) -> Fut + Send,
    Fut: Future<Output = Result<Response>> + Send,
    S: Fn(Duration) -> SleepFut + Send,
    SleepFut: Future<Output = ()> + Send,
    T: Fn(u32) -> Option<Duration> + Send,
    OnRetry: FnMut(u32, &Error, Duration) + Send,
{
    let loop_start = tokio::time::Instant::now();
    let mut attempt_state = RetryLoopAttempt::Initial;
    loop {
        let mut attempt_count = attempt_state.count();
        let state = RetryState::new()
            .set_start(loop_start)
            .set_attempt_count(attempt_count);
        let mut remaining_time = retry_policy.remaining_time(&state);

        if let RetryLoopAttempt::Retry(attempt_count, delay, prev_error) = attempt_state {
            if remaining_time.is_some_and(|remaining| remaining < delay) {
                return Err(Error::exhausted(prev_error));
            }
            on_retry(attempt_count, &prev_error, delay);
            sleep(delay).await;
            remaining_time = remaining_time.map(|r| r.saturating_sub(delay));
        }
        attempt_count += 1;
        let timeout = effective_timeout(attempt_timeout(attempt_count), remaining_time);
        match inner(timeout).await {
            Ok(r) => return Ok(r),
            Err(e) => {
                let state = RetryState::new()
                    .set_start(loop_start)
                    .set_attempt_count(attempt_count);
                match retry_policy.on_error(&state, e) {
                    RetryResult::Permanent(e) => return Err(e),
                    RetryResult::Exhausted(e) => return Err(Error::exhausted(e)),
                    RetryResult::Continue(e) => {
                        let delay = backoff_policy.on_failure(loop_start, attempt_count);
                        attempt_state = RetryLoopAttempt::Retry(attempt_count, delay, e);
                    }
                }
            }
        };
    }
}

/// A helper to compute the timeout for an attempt, given the attempt timeout
/// and the time remaining in the retry loop.
pub fn effective_timeout(
    attempt_timeout: Option<Duration>,
    remaining_time: Option<Duration>,
) -> Option<Duration> {
    match (attempt_timeout, remaining_time) {
        (None, None) => None,
        (None, Some(t)) => Some(t),
        (Some(t), None) => Some(t),
        (Some(a), Some(r)) => Some(std::cmp::min(a, r)),
    }
}
