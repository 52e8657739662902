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

//! Authentication headers for each call attempt.
//!
//! Obtaining and refreshing tokens is out of scope for these libraries. The
//! client libraries only need something that produces the authentication
//! headers for each attempt. Applications provide this via [Credentials],
//! which wraps any [CredentialsProvider].
//!
//! # Example
//! ```
//! # use gapic_gax::credentials::Credentials;
//! # tokio_test::block_on(async {
//! let credentials = Credentials::from_access_token("ya29.test-only");
//! let headers = credentials.headers().await?;
//! assert_eq!(
//!     headers.get(http::header::AUTHORIZATION).and_then(|v| v.to_str().ok()),
//!     Some("Bearer ya29.test-only")
//! );
//! # gapic_gax::Result::<()>::Ok(()) });
//! ```

use crate::Result;
use crate::error::Error;
use http::HeaderMap;
use http::header::{AUTHORIZATION, HeaderValue};
use std::future::Future;
use std::sync::Arc;

/// Produces the authentication headers for a call attempt.
///
/// The client libraries call [headers()][CredentialsProvider::headers] once
/// per attempt. Implementations that cache tokens must refresh them as
/// needed. The headers are never stored in the call settings.
pub trait CredentialsProvider: std::fmt::Debug {
    /// Asynchronously constructs the authentication headers.
    fn headers(&self) -> impl Future<Output = Result<HeaderMap>> + Send;
}

pub mod dynamic {
    use super::{HeaderMap, Result};

    /// A dyn-compatible, crate-private version of `CredentialsProvider`.
    #[async_trait::async_trait]
    pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
        /// Asynchronously constructs the authentication headers.
        async fn headers(&self) -> Result<HeaderMap>;
    }

    /// The public CredentialsProvider implements the dyn-compatible
    /// CredentialsProvider.
    #[async_trait::async_trait]
    impl<T> CredentialsProvider for T
    where
        T: super::CredentialsProvider + Send + Sync,
    {
        async fn headers(&self) -> Result<HeaderMap> {
            T::headers(self).await
        }
    }
}

/// The credentials used by a client.
///
/// Cloning is cheap, all clones share the same provider.
#[derive(Clone, Debug)]
pub struct Credentials {
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> From<T> for Credentials
where
    T: CredentialsProvider + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Credentials that add no headers.
    ///
    /// Useful with emulators and in tests.
    pub fn anonymous() -> Self {
        Self::from(Anonymous)
    }

    /// Credentials that always send the given access token.
    pub fn from_access_token<T: Into<String>>(token: T) -> Self {
        Self::from(AccessToken(token.into()))
    }

    /// Credentials that call `f` for each attempt.
    ///
    /// The closure may return any error, the client library reports it as an
    /// authentication error.
    pub fn from_fn<F, Fut, E>(f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = std::result::Result<HeaderMap, E>> + Send + 'static,
        E: Into<Box<dyn std::error::Error + Send + Sync>> + 'static,
    {
        let callback = Callback {
            f: Arc::new(move || {
                let fut = f();
                Box::pin(async move { fut.await.map_err(Error::authentication) })
                    as futures::future::BoxFuture<'static, Result<HeaderMap>>
            }),
        };
        Self::from(callback)
    }

    /// Returns the headers for the next attempt.
    pub async fn headers(&self) -> Result<HeaderMap> {
        self.inner.headers().await
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::anonymous()
    }
}

#[derive(Debug)]
struct Anonymous;

impl CredentialsProvider for Anonymous {
    async fn headers(&self) -> Result<HeaderMap> {
        Ok(HeaderMap::new())
    }
}

struct AccessToken(String);

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AccessToken").field(&"[censored]").finish()
    }
}

impl CredentialsProvider for AccessToken {
    async fn headers(&self) -> Result<HeaderMap> {
        let mut value =
            HeaderValue::from_str(&format!("Bearer {}", self.0)).map_err(Error::authentication)?;
        value.set_sensitive(true);
        Ok(HeaderMap::from_iter([(AUTHORIZATION, value)]))
    }
}

type CallbackFn = dyn Fn() -> futures::future::BoxFuture<'static, Result<HeaderMap>> + Send + Sync;

struct Callback {
    f: Arc<CallbackFn>,
}

impl std::fmt::Debug for Callback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callback").finish_non_exhaustive()
    }
}

impl CredentialsProvider for Callback {
    fn headers(&self) -> impl Future<Output = Result<HeaderMap>> + Send {
        (self.f)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Debug)]
    struct Fixed;
    impl CredentialsProvider for Fixed {
        async fn headers(&self) -> Result<HeaderMap> {
            Ok(HeaderMap::from_iter([(
                http::header::HeaderName::from_static("x-test-only"),
                HeaderValue::from_static("fixed"),
            )]))
        }
    }

    #[tokio::test]
    async fn anonymous() -> anyhow::Result<()> {
        let headers = Credentials::anonymous().headers().await?;
        assert!(headers.is_empty(), "{headers:?}");
        let headers = Credentials::default().headers().await?;
        assert!(headers.is_empty(), "{headers:?}");
        Ok(())
    }

    #[tokio::test]
    async fn access_token() -> anyhow::Result<()> {
        let credentials = Credentials::from_access_token("test-token");
        let headers = credentials.headers().await?;
        let value = headers.get(AUTHORIZATION);
        assert_eq!(value.and_then(|v| v.to_str().ok()), Some("Bearer test-token"));
        assert!(value.is_some_and(|v| v.is_sensitive()), "{value:?}");
        let fmt = format!("{credentials:?}");
        assert!(!fmt.contains("test-token"), "{fmt}");
        Ok(())
    }

    #[tokio::test]
    async fn access_token_invalid() {
        let credentials = Credentials::from_access_token("bad\ntoken");
        let err = credentials.headers().await.unwrap_err();
        assert!(err.is_authentication(), "{err:?}");
    }

    #[tokio::test]
    async fn custom_provider() -> anyhow::Result<()> {
        let credentials = Credentials::from(Fixed);
        let headers = credentials.headers().await?;
        assert_eq!(
            headers.get("x-test-only").and_then(|v| v.to_str().ok()),
            Some("fixed")
        );
        Ok(())
    }

    #[tokio::test]
    async fn callback_called_per_attempt() -> anyhow::Result<()> {
        let count = Arc::new(AtomicU32::new(0));
        let credentials = Credentials::from_fn({
            let count = count.clone();
            move || {
                let n = count.fetch_add(1, Ordering::SeqCst);
                async move {
                    let value = HeaderValue::from_str(&format!("Bearer token-{n}"))?;
                    Ok::<_, http::header::InvalidHeaderValue>(HeaderMap::from_iter([(
                        AUTHORIZATION,
                        value,
                    )]))
                }
            }
        });
        for want in ["Bearer token-0", "Bearer token-1"] {
            let headers = credentials.headers().await?;
            assert_eq!(
                headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()),
                Some(want)
            );
        }
        assert_eq!(count.load(Ordering::SeqCst), 2);
        Ok(())
    }

    #[tokio::test]
    async fn callback_error() {
        let credentials = Credentials::from_fn(|| async {
            Err::<HeaderMap, _>("token service unavailable")
        });
        let err = credentials.headers().await.unwrap_err();
        assert!(err.is_authentication(), "{err:?}");
        assert!(err.to_string().contains("token service unavailable"), "{err}");
    }
}
