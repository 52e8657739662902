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

//! Binds an RPC to its call settings.
//!
//! Generated clients create one [ApiCallable] per method when the client is
//! built, see [create_api_call]. Each invocation merges the per-call options
//! with the method settings, fetches the authentication headers for each
//! attempt, and runs the retry loop if the method is retryable.

use crate::Result;
use crate::api_header::X_GOOG_API_CLIENT;
use crate::call_settings::CallSettings;
use crate::credentials::Credentials;
use crate::error::Error;
use crate::options::CallOptions;
use crate::retry_loop_internal::retry_loop;
use crate::transport::{AttemptContext, MethodDescriptor, Transport};
use http::HeaderValue;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Notify;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

/// The call-scoped context of an invocation.
#[derive(Clone, Debug, Default)]
pub struct CallContext {
    /// The per-call overrides.
    pub options: CallOptions,
    /// The credentials used to create the authentication headers of each
    /// attempt.
    pub credentials: Credentials,
}

impl CallContext {
    pub fn new(options: CallOptions, credentials: Credentials) -> Self {
        Self {
            options,
            credentials,
        }
    }
}

/// Tracks whether a client is closed and how many calls are in flight.
///
/// All the callables of a client share one instance.
#[derive(Debug, Default)]
pub struct ClientState {
    closed: AtomicBool,
    in_flight: AtomicUsize,
    idle: Notify,
}

impl ClientState {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Returns true once [close()][Self::close] has been called.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// The number of calls currently in flight.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Rejects new calls, then waits until all in-flight calls complete.
    pub async fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        loop {
            let idle = self.idle.notified();
            if self.in_flight() == 0 {
                return;
            }
            idle.await;
        }
    }

    fn admit(self: &Arc<Self>) -> Result<InFlight> {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        let guard = InFlight(self.clone());
        if self.is_closed() {
            return Err(Error::closed());
        }
        Ok(guard)
    }
}

struct InFlight(Arc<ClientState>);

impl Drop for InFlight {
    fn drop(&mut self) {
        if self.0.in_flight.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.0.idle.notify_waiters();
        }
    }
}

/// The client-wide values shared by all the callables of a client.
#[derive(Clone, Debug)]
pub struct CallDescriptors {
    /// The `x-goog-api-client` header value.
    pub api_client_header: HeaderValue,
    /// The closed flag and in-flight count.
    pub state: Arc<ClientState>,
    /// If true, each call runs in a tracing span.
    pub tracing: bool,
}

/// Creates the callable for `method`.
pub fn create_api_call<Req, Resp>(
    transport: Arc<dyn Transport>,
    method: &'static MethodDescriptor,
    settings: CallSettings,
    descriptors: CallDescriptors,
) -> ApiCallable<Req, Resp> {
    ApiCallable {
        transport,
        method,
        settings,
        descriptors,
        _phantom: PhantomData,
    }
}

/// An RPC bound to its call settings.
pub struct ApiCallable<Req, Resp> {
    transport: Arc<dyn Transport>,
    method: &'static MethodDescriptor,
    settings: CallSettings,
    descriptors: CallDescriptors,
    _phantom: PhantomData<fn(Req) -> Resp>,
}

impl<Req, Resp> std::fmt::Debug for ApiCallable<Req, Resp> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCallable")
            .field("transport", &self.transport)
            .field("method", &self.method.full_name())
            .field("settings", &self.settings)
            .field("descriptors", &self.descriptors)
            .finish()
    }
}

impl<Req, Resp> ApiCallable<Req, Resp>
where
    Req: Serialize,
    Resp: DeserializeOwned,
{
    /// The settings loaded for this method.
    pub fn settings(&self) -> &CallSettings {
        &self.settings
    }

    /// Invokes the RPC.
    ///
    /// Errors carry the method name, the number of attempts and the time
    /// spent in the call. The returned future does not borrow `self` or
    /// `request`.
    pub fn call(
        &self,
        request: &Req,
        context: CallContext,
    ) -> impl Future<Output = Result<Resp>> + Send + use<Req, Resp> {
        let start = Instant::now();
        let method = self.method;
        let admitted = self.descriptors.state.admit();
        let request = serde_json::to_value(request).map_err(Error::ser);
        let settings = self.settings.merge(&context.options);
        let cancellation = context.options.cancellation().cloned();
        let deadline = context.options.deadline();
        let invocation = Invocation {
            transport: self.transport.clone(),
            method,
            api_client_header: self.descriptors.api_client_header.clone(),
            credentials: context.credentials,
            attempts: Arc::new(AtomicU32::new(0)),
        };
        let attempts = invocation.attempts.clone();
        let span = self.descriptors.tracing.then(|| {
            tracing::info_span!(
                "gapic_call",
                rpc.service = method.service,
                rpc.method = method.name
            )
        });
        let call = async move {
            let _guard = admitted?;
            let request = request?;
            let response =
                with_cancellation(invocation.invoke(request, settings), cancellation, deadline)
                    .await?;
            serde_json::from_value::<Resp>(response).map_err(Error::deser)
        };
        async move {
            let result = match span {
                Some(span) => call.instrument(span).await,
                None => call.await,
            };
            result.map_err(|e| {
                e.with_call_info(
                    method.full_name(),
                    attempts.load(Ordering::SeqCst),
                    start.elapsed(),
                )
            })
        }
    }
}

/// Races `call` against the caller's cancellation token and deadline.
async fn with_cancellation<F>(
    call: F,
    cancellation: Option<CancellationToken>,
    deadline: Option<Instant>,
) -> Result<serde_json::Value>
where
    F: Future<Output = Result<serde_json::Value>> + Send,
{
    let cancelled = async move {
        match cancellation {
            Some(token) => token.cancelled_owned().await,
            None => std::future::pending().await,
        }
    };
    let deadline = async move {
        match deadline {
            Some(d) => tokio::time::sleep_until(d).await,
            None => std::future::pending().await,
        }
    };
    tokio::select! {
        biased;
        _ = cancelled => Err(Error::cancelled("the call was cancelled by the caller")),
        _ = deadline => Err(Error::cancelled("the caller deadline expired")),
        r = call => r,
    }
}

/// The owned state of one call, cloned into each attempt.
#[derive(Clone, Debug)]
struct Invocation {
    transport: Arc<dyn Transport>,
    method: &'static MethodDescriptor,
    api_client_header: HeaderValue,
    credentials: Credentials,
    attempts: Arc<AtomicU32>,
}

impl Invocation {
    async fn invoke(
        self,
        request: serde_json::Value,
        settings: CallSettings,
    ) -> Result<serde_json::Value> {
        let Some(retry) = settings.retry() else {
            return self.attempt(request, Some(settings.timeout())).await;
        };
        let backoff = retry.backoff().clone();
        let retry_policy = retry.retry_policy();
        let backoff_policy = Arc::new(retry.backoff_policy());
        let method = self.method;
        let attempts = self.attempts.clone();
        let inner = move |timeout: Option<Duration>| {
            self.clone().attempt(request.clone(), timeout)
        };
        let on_retry = move |attempt: u32, error: &Error, delay: Duration| {
            tracing::debug!(
                rpc.method = method.name,
                attempt,
                ?delay,
                "retrying after error: {error}"
            );
        };
        let result = retry_loop(
            inner,
            tokio::time::sleep,
            retry_policy,
            backoff_policy,
            move |n| Some(backoff.attempt_timeout(n)),
            on_retry,
        )
        .await;
        if let Err(e) = &result {
            if e.is_exhausted() {
                tracing::warn!(
                    rpc.method = method.name,
                    attempts = attempts.load(Ordering::SeqCst),
                    "retry attempts exhausted: {e}"
                );
            }
        }
        result
    }

    async fn attempt(
        self,
        request: serde_json::Value,
        timeout: Option<Duration>,
    ) -> Result<serde_json::Value> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        let mut headers = self.credentials.headers().await?;
        headers.insert(X_GOOG_API_CLIENT, self.api_client_header.clone());
        let context = AttemptContext {
            headers,
            timeout,
            attempt,
        };
        let invoke = self.transport.invoke(self.method, request, context);
        match timeout {
            Some(t) => tokio::time::timeout(t, invoke)
                .await
                .map_err(Error::timeout)?,
            None => invoke.await,
        }
    }
}
