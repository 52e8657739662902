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

//! Per-method call settings: timeouts and retry configuration.
//!
//! Each client loads one [CallSettings] per method from its client
//! configuration (see [client_config][crate::client_config]) when it is
//! constructed. The settings are immutable for the lifetime of the client.
//! Each call may override them via [CallOptions]; the merge produces a
//! new, ephemeral, [CallSettings] used only for that call.
//!
//! # Example
//! ```
//! # use gapic_gax::call_settings::*;
//! # use gapic_gax::options::CallOptions;
//! use std::time::Duration;
//! let settings = CallSettings::new(Duration::from_secs(30));
//! let mut options = CallOptions::default();
//! options.set_timeout(Duration::from_secs(5));
//! let merged = settings.merge(&options);
//! assert_eq!(merged.timeout(), Duration::from_secs(5));
//! ```

use crate::error::rpc::Code;
use crate::exponential_backoff::{self, ExponentialBackoff, ExponentialBackoffBuilder};
use crate::options::CallOptions;
use crate::retry_policy::{RetryPolicy, RetryPolicyExt, RetryableCodes};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

/// The settings used to invoke a method.
#[derive(Clone, Debug, PartialEq)]
pub struct CallSettings {
    timeout: Duration,
    retry: Option<RetrySettings>,
}

impl CallSettings {
    /// Settings with the given timeout and no retries.
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            retry: None,
        }
    }

    /// Enables retries with the given settings.
    pub fn with_retry(mut self, retry: RetrySettings) -> Self {
        self.retry = Some(retry);
        self
    }

    /// The timeout for a call without retries.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The retry settings, `None` if retries are disabled.
    pub fn retry(&self) -> Option<&RetrySettings> {
        self.retry.as_ref()
    }

    /// The maximum time spent in a call, including all retries.
    pub fn total_timeout(&self) -> Duration {
        match &self.retry {
            Some(r) => r.backoff.total_timeout,
            None => self.timeout,
        }
    }

    /// Returns the result of overriding `self` with the fields set in
    /// `options`.
    ///
    /// * A timeout in `options` replaces the timeout. If the retry settings are
    ///   inherited the timeout also bounds the total time spent retrying.
    /// * [RetryOverride::Disable] disables retries, regardless of the loaded
    ///   configuration. The timeout is not changed.
    /// * [RetryOverride::Replace] replaces the retry settings.
    ///
    /// Merging with [CallOptions::default()] returns a copy of `self`.
    pub fn merge(&self, options: &CallOptions) -> CallSettings {
        let timeout = options.timeout().unwrap_or(self.timeout);
        let retry = match options.retry() {
            RetryOverride::Inherit => self.retry.clone().map(|mut r| {
                if let Some(t) = options.timeout() {
                    r.backoff.total_timeout = t;
                }
                r
            }),
            RetryOverride::Disable => None,
            RetryOverride::Replace(r) => Some(r.clone()),
        };
        CallSettings { timeout, retry }
    }
}

/// How a per-call or per-client override changes the retry settings.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RetryOverride {
    /// Keep the configured retry settings.
    #[default]
    Inherit,
    /// Disable retries.
    Disable,
    /// Replace the retry settings.
    Replace(RetrySettings),
}

impl From<RetrySettings> for RetryOverride {
    fn from(value: RetrySettings) -> Self {
        RetryOverride::Replace(value)
    }
}

impl From<Option<RetrySettings>> for RetryOverride {
    fn from(value: Option<RetrySettings>) -> Self {
        match value {
            Some(r) => RetryOverride::Replace(r),
            None => RetryOverride::Disable,
        }
    }
}

/// The retryable codes and backoff parameters of a method.
#[derive(Clone, Debug, PartialEq)]
pub struct RetrySettings {
    retryable_codes: BTreeSet<Code>,
    backoff: BackoffSettings,
    max_attempts: Option<u32>,
}

impl RetrySettings {
    /// Creates new retry settings.
    pub fn new<I>(retryable_codes: I, backoff: BackoffSettings) -> Self
    where
        I: IntoIterator<Item = Code>,
    {
        Self {
            retryable_codes: retryable_codes.into_iter().collect(),
            backoff,
            max_attempts: None,
        }
    }

    /// Limits the number of attempts, including the first one.
    ///
    /// The total timeout still applies. Without a limit only the total
    /// timeout bounds the retry loop.
    pub fn with_max_attempts(mut self, v: u32) -> Self {
        self.max_attempts = Some(v);
        self
    }

    /// The maximum number of attempts, if limited.
    pub fn max_attempts(&self) -> Option<u32> {
        self.max_attempts
    }

    /// The status codes that trigger a retry.
    pub fn retryable_codes(&self) -> &BTreeSet<Code> {
        &self.retryable_codes
    }

    /// The backoff parameters.
    pub fn backoff(&self) -> &BackoffSettings {
        &self.backoff
    }

    /// The retry policy for these settings.
    pub fn retry_policy(&self) -> Arc<dyn RetryPolicy> {
        let policy = RetryableCodes::new(self.retryable_codes.iter().copied())
            .with_time_limit(self.backoff.total_timeout);
        match self.max_attempts {
            Some(n) => Arc::new(policy.with_attempt_limit(n)),
            None => Arc::new(policy),
        }
    }

    /// The backoff policy for these settings.
    pub fn backoff_policy(&self) -> ExponentialBackoff {
        self.backoff.retry_backoff()
    }
}

/// The parameters controlling delays and timeouts in the retry loop.
#[derive(Clone, Debug, PartialEq)]
pub struct BackoffSettings {
    /// The delay before the first retry.
    pub initial_retry_delay: Duration,
    /// The factor applied to the delay after each retry.
    pub retry_delay_multiplier: f64,
    /// The maximum delay between retries.
    pub max_retry_delay: Duration,
    /// The timeout for the first attempt.
    pub initial_rpc_timeout: Duration,
    /// The factor applied to the attempt timeout after each retry.
    pub rpc_timeout_multiplier: f64,
    /// The maximum timeout for any attempt.
    pub max_rpc_timeout: Duration,
    /// The maximum time spent in the call, including all retries.
    pub total_timeout: Duration,
}

impl BackoffSettings {
    /// Checks the parameters are consistent.
    pub fn validate(&self) -> Result<(), exponential_backoff::Error> {
        self.retry_backoff_builder().build()?;
        ExponentialBackoffBuilder::new()
            .with_initial_delay(self.initial_rpc_timeout)
            .with_maximum_delay(self.max_rpc_timeout)
            .with_scaling(self.rpc_timeout_multiplier)
            .build()?;
        Ok(())
    }

    /// The timeout for the `attempt_count`-th attempt, counting from 1.
    ///
    /// This is `initial_rpc_timeout * rpc_timeout_multiplier^(n-1)`, capped
    /// at `max_rpc_timeout`. The retry loop further caps it at the remaining
    /// total time.
    pub fn attempt_timeout(&self, attempt_count: u32) -> Duration {
        ExponentialBackoffBuilder::new()
            .with_initial_delay(self.initial_rpc_timeout)
            .with_maximum_delay(self.max_rpc_timeout)
            .with_scaling(self.rpc_timeout_multiplier)
            .clamp()
            .delay(attempt_count)
    }

    fn retry_backoff_builder(&self) -> ExponentialBackoffBuilder {
        ExponentialBackoffBuilder::new()
            .with_initial_delay(self.initial_retry_delay)
            .with_maximum_delay(self.max_retry_delay)
            .with_scaling(self.retry_delay_multiplier)
    }

    fn retry_backoff(&self) -> ExponentialBackoff {
        self.retry_backoff_builder().clamp()
    }
}

impl Default for BackoffSettings {
    fn default() -> Self {
        Self {
            initial_retry_delay: Duration::from_millis(100),
            retry_delay_multiplier: 1.3,
            max_retry_delay: Duration::from_secs(60),
            initial_rpc_timeout: Duration::from_secs(20),
            rpc_timeout_multiplier: 1.0,
            max_rpc_timeout: Duration::from_secs(20),
            total_timeout: Duration::from_secs(600),
        }
    }
}
