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

//! Per call options.
//!
//! The defaults loaded from the client configuration work for most
//! applications. Sometimes an application needs to change the timeout for a
//! specific call, disable retries, or cancel the call from another task. The
//! `*Builder` returned by each client method implements the
//! [CallOptionsBuilder] trait where applications can override these defaults.

use crate::call_settings::{RetryOverride, RetrySettings};
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// A set of options configuring a single call.
///
/// Applications only use this type directly in mocks, where they may want to
/// verify their application has configured all the right options.
///
/// All other code uses this type indirectly, via the per-call builders.
#[derive(Clone, Debug, Default)]
pub struct CallOptions {
    timeout: Option<Duration>,
    retry: RetryOverride,
    deadline: Option<Instant>,
    cancellation: Option<CancellationToken>,
}

impl CallOptions {
    /// Gets the current timeout override.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Sets the timeout for the call.
    ///
    /// Without retries this bounds the single attempt. With retries this
    /// bounds the total time spent in the call, including all retries.
    pub fn set_timeout<V: Into<Duration>>(&mut self, v: V) {
        self.timeout = Some(v.into());
    }

    /// Gets the current retry override.
    pub fn retry(&self) -> &RetryOverride {
        &self.retry
    }

    /// Replaces the retry settings for the call.
    pub fn set_retry<V: Into<RetrySettings>>(&mut self, v: V) {
        self.retry = RetryOverride::Replace(v.into());
    }

    /// Disables retries for the call.
    pub fn disable_retry(&mut self) {
        self.retry = RetryOverride::Disable;
    }

    /// Gets the caller deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Sets a deadline for the call.
    ///
    /// Unlike the timeout, reaching the deadline cancels the call: it fails
    /// with a cancellation error even if a retry is pending.
    pub fn set_deadline(&mut self, v: Instant) {
        self.deadline = Some(v);
    }

    /// Gets the cancellation token, if any.
    pub fn cancellation(&self) -> Option<&CancellationToken> {
        self.cancellation.as_ref()
    }

    /// Sets a cancellation token for the call.
    pub fn set_cancellation(&mut self, v: CancellationToken) {
        self.cancellation = Some(v);
    }
}

/// Implementations of this trait provide setters to configure call options.
///
/// The client libraries provide a builder for each RPC. These builders can be
/// used to set the request parameters, e.g., the name of the resource targeted
/// by the RPC, as well as any options affecting the call, such as timeouts.
pub trait CallOptionsBuilder: internal::RequestBuilder {
    /// Sets the timeout for the call.
    fn with_timeout<V: Into<Duration>>(self, v: V) -> Self;

    /// Replaces the retry settings for the call.
    fn with_retry<V: Into<RetrySettings>>(self, v: V) -> Self;

    /// Disables retries for the call.
    fn without_retry(self) -> Self;

    /// Sets a deadline for the call.
    fn with_deadline(self, v: Instant) -> Self;

    /// Sets a cancellation token for the call.
    fn with_cancellation(self, v: CancellationToken) -> Self;
}

#[doc(hidden)]
pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or removed
    //! without warnings. Applications should not use any types contained
    //! within.
    use super::CallOptions;

    /// Simplify implementation of the [super::CallOptionsBuilder] trait in
    /// generated code.
    pub trait RequestBuilder {
        fn call_options(&mut self) -> &mut CallOptions;
    }
}

/// Implements the sealed [CallOptionsBuilder] trait.
impl<T> CallOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.call_options().set_timeout(v);
        self
    }

    fn with_retry<V: Into<RetrySettings>>(mut self, v: V) -> Self {
        self.call_options().set_retry(v);
        self
    }

    fn without_retry(mut self) -> Self {
        self.call_options().disable_retry();
        self
    }

    fn with_deadline(mut self, v: Instant) -> Self {
        self.call_options().set_deadline(v);
        self
    }

    fn with_cancellation(mut self, v: CancellationToken) -> Self {
        self.call_options().set_cancellation(v);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::internal::*;
    use super::*;
    use crate::call_settings::BackoffSettings;
    use crate::error::rpc::Code;

    #[derive(Debug, Default)]
    struct TestBuilder {
        call_options: CallOptions,
    }
    impl RequestBuilder for TestBuilder {
        fn call_options(&mut self) -> &mut CallOptions {
            &mut self.call_options
        }
    }

    #[test]
    fn call_options() {
        let mut opts = CallOptions::default();
        assert_eq!(opts.timeout(), None);
        assert_eq!(opts.retry(), &RetryOverride::Inherit);
        assert!(opts.deadline().is_none(), "{opts:?}");
        assert!(opts.cancellation().is_none(), "{opts:?}");

        let d = Duration::from_secs(123);
        opts.set_timeout(d);
        assert_eq!(opts.timeout(), Some(d));

        opts.disable_retry();
        assert_eq!(opts.retry(), &RetryOverride::Disable);

        let retry = RetrySettings::new([Code::Unavailable], BackoffSettings::default());
        opts.set_retry(retry.clone());
        assert_eq!(opts.retry(), &RetryOverride::Replace(retry));

        let deadline = Instant::now() + d;
        opts.set_deadline(deadline);
        assert_eq!(opts.deadline(), Some(deadline));

        let token = CancellationToken::new();
        opts.set_cancellation(token.clone());
        token.cancel();
        assert!(opts.cancellation().is_some_and(|t| t.is_cancelled()));
    }

    #[test]
    fn call_options_builder() {
        let d = Duration::from_secs(7);
        let builder = TestBuilder::default().with_timeout(d).without_retry();
        assert_eq!(builder.call_options.timeout(), Some(d));
        assert_eq!(builder.call_options.retry(), &RetryOverride::Disable);

        let retry = RetrySettings::new([Code::Aborted], BackoffSettings::default());
        let deadline = Instant::now() + d;
        let builder = TestBuilder::default()
            .with_retry(retry.clone())
            .with_deadline(deadline)
            .with_cancellation(CancellationToken::new());
        assert_eq!(builder.call_options.retry(), &RetryOverride::Replace(retry));
        assert_eq!(builder.call_options.deadline(), Some(deadline));
        assert!(builder.call_options.cancellation().is_some());
    }
}
