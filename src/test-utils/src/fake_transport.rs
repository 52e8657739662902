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

//! An in-memory [Transport] for the client library tests.
//!
//! The fake records every attempt and replays a queue of responses. Once the
//! queue is empty it returns the fallback result, by default an `UNIMPLEMENTED`
//! error.
//!
//! # Example
//! ```
//! # use gapic_test_utils::fake_transport::FakeTransport;
//! # use gax::error::rpc::Code;
//! let fake = FakeTransport::new();
//! fake.push_status(Code::Unavailable, "try-again");
//! fake.push_response(serde_json::json!({"name": "projects/p/sinks/s"}));
//! ```

use gax::error::Error;
use gax::error::rpc::{Code, Status};
use gax::transport::{AttemptContext, MethodDescriptor, Transport};
use http::HeaderMap;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One attempt received by the fake.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    /// The fully qualified method name.
    pub method: String,
    /// The JSON encoding of the request.
    pub request: Value,
    /// The headers sent with the attempt.
    pub headers: HeaderMap,
    /// The attempt timeout.
    pub timeout: Option<Duration>,
    /// The attempt number, starting at 1.
    pub attempt: u32,
}

#[derive(Debug)]
struct Scripted {
    delay: Duration,
    result: gax::Result<Value>,
}

#[derive(Debug)]
struct State {
    responses: VecDeque<Scripted>,
    fallback: Option<Code>,
    requests: Vec<RecordedRequest>,
}

/// A [Transport] replaying scripted responses.
///
/// Clones share the same script and the same record of requests.
#[derive(Clone, Debug)]
pub struct FakeTransport {
    state: Arc<Mutex<State>>,
}

impl Default for FakeTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeTransport {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                responses: VecDeque::new(),
                fallback: None,
                requests: Vec::new(),
            })),
        }
    }

    /// Queues a successful response.
    pub fn push_response(&self, response: Value) {
        self.push(Duration::ZERO, Ok(response));
    }

    /// Queues a service error with the given code.
    pub fn push_status<M: Into<String>>(&self, code: Code, message: M) {
        self.push(Duration::ZERO, Err(status_error(code, message)));
    }

    /// Queues an arbitrary error.
    pub fn push_error(&self, error: Error) {
        self.push(Duration::ZERO, Err(error));
    }

    /// Queues a result returned after `delay`.
    ///
    /// The delay uses the tokio clock, tests can pause and advance it.
    pub fn push_delayed(&self, delay: Duration, result: gax::Result<Value>) {
        self.push(delay, result);
    }

    /// Returns a service error with `code` once the queue is exhausted.
    pub fn set_fallback(&self, code: Code) {
        self.lock().fallback = Some(code);
    }

    /// The attempts received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    /// The number of attempts received so far.
    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }

    /// The number of queued responses not yet consumed.
    pub fn pending(&self) -> usize {
        self.lock().responses.len()
    }

    fn push(&self, delay: Duration, result: gax::Result<Value>) {
        self.lock().responses.push_back(Scripted { delay, result });
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        // A panic while holding the lock already fails the test.
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

fn status_error<M: Into<String>>(code: Code, message: M) -> Error {
    Error::service(Status::default().set_code(code).set_message(message))
}

#[async_trait::async_trait]
impl Transport for FakeTransport {
    async fn invoke(
        &self,
        method: &'static MethodDescriptor,
        request: Value,
        context: AttemptContext,
    ) -> gax::Result<Value> {
        let next = {
            let mut state = self.lock();
            state.requests.push(RecordedRequest {
                method: method.full_name(),
                request,
                headers: context.headers,
                timeout: context.timeout,
                attempt: context.attempt,
            });
            match state.responses.pop_front() {
                Some(s) => s,
                None => Scripted {
                    delay: Duration::ZERO,
                    result: Err(status_error(
                        state.fallback.unwrap_or(Code::Unimplemented),
                        format!("no response queued for {}", method.full_name()),
                    )),
                },
            }
        };
        if !next.delay.is_zero() {
            tokio::time::sleep(next.delay).await;
        }
        tracing::debug!(method = method.name, ok = next.result.is_ok(), "fake response");
        next.result
    }
}
