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

//! Truncated [exponential backoff] with full jitter.
//!
//! The nominal delay after the n-th attempt is
//! `initial_delay * scaling^(n-1)`, truncated at `maximum_delay`. The actual
//! delay is chosen uniformly from `[0, nominal]`.
//!
//! [exponential backoff]: https://en.wikipedia.org/wiki/Exponential_backoff

use std::time::Duration;
use tokio::time::Instant;

/// Errors building an [ExponentialBackoff].
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("the scaling value ({0}) should be >= 1.0")]
    InvalidScalingFactor(f64),
    #[error("the initial delay ({0:?}) should be greater than zero")]
    InvalidInitialDelay(Duration),
    #[error(
        "the maximum delay ({maximum:?}) should be greater than or equal to the initial delay ({initial:?})"
    )]
    EmptyRange {
        maximum: Duration,
        initial: Duration,
    },
}

/// Builds [ExponentialBackoff] policies.
#[derive(Clone, Debug)]
pub struct ExponentialBackoffBuilder {
    initial_delay: Duration,
    maximum_delay: Duration,
    scaling: f64,
}

impl ExponentialBackoffBuilder {
    /// Creates a builder with the default parameters.
    pub fn new() -> Self {
        Self {
            initial_delay: Duration::from_secs(1),
            maximum_delay: Duration::from_secs(60),
            scaling: 2.0,
        }
    }

    /// Change the initial delay.
    pub fn with_initial_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.initial_delay = v.into();
        self
    }

    /// Change the maximum delay.
    pub fn with_maximum_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.maximum_delay = v.into();
        self
    }

    /// Change the scaling factor.
    pub fn with_scaling<V: Into<f64>>(mut self, v: V) -> Self {
        self.scaling = v.into();
        self
    }

    /// Creates a new policy, or returns an error if the parameters are invalid.
    pub fn build(self) -> Result<ExponentialBackoff, Error> {
        if self.scaling.is_nan() || self.scaling < 1.0 {
            return Err(Error::InvalidScalingFactor(self.scaling));
        }
        if self.initial_delay.is_zero() {
            return Err(Error::InvalidInitialDelay(self.initial_delay));
        }
        if self.maximum_delay < self.initial_delay {
            return Err(Error::EmptyRange {
                maximum: self.maximum_delay,
                initial: self.initial_delay,
            });
        }
        Ok(ExponentialBackoff {
            initial_delay: self.initial_delay,
            maximum_delay: self.maximum_delay,
            scaling: self.scaling,
        })
    }

    /// Creates a new policy, clamping the parameters to valid ranges.
    pub fn clamp(self) -> ExponentialBackoff {
        let scaling = if self.scaling.is_nan() {
            1.0
        } else {
            self.scaling.clamp(1.0, 32.0)
        };
        let maximum_delay = self
            .maximum_delay
            .clamp(Duration::from_millis(1), Duration::from_secs(24 * 60 * 60));
        let initial_delay = self
            .initial_delay
            .clamp(Duration::from_millis(1), maximum_delay);
        ExponentialBackoff {
            initial_delay,
            maximum_delay,
            scaling,
        }
    }
}

impl Default for ExponentialBackoffBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Implements truncated exponential backoff with full jitter.
#[derive(Clone, Debug, PartialEq)]
pub struct ExponentialBackoff {
    initial_delay: Duration,
    maximum_delay: Duration,
    scaling: f64,
}

impl ExponentialBackoff {
    /// The nominal delay after `attempt_count` attempts, before jitter.
    pub fn delay(&self, attempt_count: u32) -> Duration {
        let exp = std::cmp::min(i32::MAX as u32, attempt_count) as i32;
        let exp = exp.saturating_sub(1).max(0);
        let scaling = self.scaling.powi(exp);
        if scaling >= self.maximum_delay.div_duration_f64(self.initial_delay) {
            self.maximum_delay
        } else {
            // Cannot panic: scaling >= 1.0 and initial_delay * scaling < maximum_delay.
            self.initial_delay.mul_f64(scaling)
        }
    }

    fn delay_with_jitter(&self, attempt_count: u32, rng: &mut impl rand::Rng) -> Duration {
        let delay = self.delay(attempt_count);
        rng.random_range(Duration::ZERO..=delay)
    }
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        ExponentialBackoffBuilder::new().clamp()
    }
}

impl crate::backoff_policy::BackoffPolicy for ExponentialBackoff {
    fn on_failure(&self, _loop_start: Instant, attempt_count: u32) -> Duration {
        self.delay_with_jitter(attempt_count, &mut rand::rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backoff_policy::BackoffPolicy;
    use test_case::test_case;

    #[test]
    fn build_errors() {
        let b = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::ZERO)
            .with_maximum_delay(Duration::from_secs(5))
            .build();
        assert!(matches!(b, Err(Error::InvalidInitialDelay(_))), "{b:?}");

        let b = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_secs(10))
            .with_maximum_delay(Duration::from_secs(5))
            .build();
        assert!(matches!(b, Err(Error::EmptyRange { .. })), "{b:?}");

        let b = ExponentialBackoffBuilder::new()
            .with_scaling(0.5)
            .build();
        assert!(matches!(b, Err(Error::InvalidScalingFactor(_))), "{b:?}");

        let b = ExponentialBackoffBuilder::new()
            .with_scaling(f64::NAN)
            .build();
        assert!(matches!(b, Err(Error::InvalidScalingFactor(_))), "{b:?}");
    }

    #[test_case(0, Duration::from_millis(100); "before first attempt")]
    #[test_case(1, Duration::from_millis(100); "first attempt")]
    #[test_case(2, Duration::from_millis(200); "second attempt")]
    #[test_case(3, Duration::from_millis(400); "third attempt")]
    #[test_case(4, Duration::from_millis(800); "fourth attempt")]
    #[test_case(5, Duration::from_millis(1000); "truncated")]
    #[test_case(u32::MAX, Duration::from_millis(1000); "saturated")]
    fn delay(attempt_count: u32, want: Duration) -> anyhow::Result<()> {
        let policy = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_millis(100))
            .with_maximum_delay(Duration::from_secs(1))
            .with_scaling(2.0)
            .build()?;
        assert_eq!(policy.delay(attempt_count), want);
        Ok(())
    }

    #[test]
    fn jitter_in_range() -> anyhow::Result<()> {
        let policy = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_millis(100))
            .with_maximum_delay(Duration::from_secs(1))
            .with_scaling(1.3)
            .build()?;
        let start = Instant::now();
        for attempt in 1..20 {
            let got = policy.on_failure(start, attempt);
            assert!(got <= policy.delay(attempt), "{attempt} {got:?}");
        }
        Ok(())
    }

    #[test]
    fn clamp() {
        let policy = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::ZERO)
            .with_maximum_delay(Duration::from_secs(7 * 24 * 60 * 60))
            .with_scaling(100.0)
            .clamp();
        assert_eq!(policy.initial_delay, Duration::from_millis(1));
        assert_eq!(policy.maximum_delay, Duration::from_secs(24 * 60 * 60));
        assert_eq!(policy.scaling, 32.0);

        let policy = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_secs(10))
            .with_maximum_delay(Duration::from_secs(5))
            .with_scaling(0.0)
            .clamp();
        assert_eq!(policy.initial_delay, Duration::from_secs(5));
        assert_eq!(policy.scaling, 1.0);
    }

    #[test]
    fn default() {
        let policy = ExponentialBackoff::default();
        assert_eq!(policy.delay(1), Duration::from_secs(1));
        assert_eq!(policy.delay(100), Duration::from_secs(60));
    }
}
