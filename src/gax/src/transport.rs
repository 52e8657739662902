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

//! The boundary between the client libraries and the network.
//!
//! Generated clients describe each RPC with a static [MethodDescriptor] and
//! send JSON-encoded requests through a [Transport]. The
//! [HttpTransport][crate::http_client::HttpTransport] maps each RPC to its REST
//! binding; tests use an in-memory fake.

use crate::Result;
use http::HeaderMap;
use std::time::Duration;

/// The REST binding of an RPC.
#[derive(Clone, Debug)]
pub struct HttpRule {
    /// The HTTP verb.
    pub verb: http::Method,
    /// The path template, with variables bound from request fields, e.g.
    /// `/v2/{sink_name=projects/*/sinks/*}`.
    pub path: &'static str,
    /// The request field sent as the body, `*` for all the fields not bound
    /// in the path. `None` if the request has no body.
    pub body: Option<&'static str>,
}

/// Describes one RPC.
#[derive(Clone, Debug)]
pub struct MethodDescriptor {
    /// The fully qualified service name, e.g. `google.logging.v2.LoggingServiceV2`.
    pub service: &'static str,
    /// The RPC name, e.g. `WriteLogEntries`.
    pub name: &'static str,
    /// The REST binding.
    pub http: HttpRule,
}

impl MethodDescriptor {
    /// The fully qualified method name, e.g.
    /// `google.logging.v2.LoggingServiceV2/WriteLogEntries`.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.service, self.name)
    }
}

/// The per-attempt context handed to the transport.
#[derive(Clone, Debug, Default)]
pub struct AttemptContext {
    /// The headers to send: authentication and agent headers.
    pub headers: HeaderMap,
    /// The timeout for this attempt, if any.
    pub timeout: Option<Duration>,
    /// The attempt number, starting at 1.
    pub attempt: u32,
}

/// Sends a request and returns its response.
///
/// Implementations must be safe to share between concurrent calls.
#[async_trait::async_trait]
pub trait Transport: std::fmt::Debug + Send + Sync {
    /// Sends one attempt of `method`.
    ///
    /// `request` is the JSON encoding of the request message. The result is
    /// the JSON encoding of the response message, or an error. Errors that
    /// happen before a response is received should use
    /// [Error::io][crate::error::Error::io], responses with an error status
    /// should use [Error::service][crate::error::Error::service].
    async fn invoke(
        &self,
        method: &'static MethodDescriptor,
        request: serde_json::Value,
        context: AttemptContext,
    ) -> Result<serde_json::Value>;
}
