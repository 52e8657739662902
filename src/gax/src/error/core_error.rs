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

use super::rpc::{Code, Status};
use http::HeaderMap;
use std::error::Error as StdError;
use std::time::Duration;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all client libraries.
///
/// The client libraries report errors from multiple sources. For example, the
/// service may return an error, the transport may be unable to create the
/// necessary connection, or the request may time out before a response is
/// received.
///
/// Applications can use the predicates (`is_*()`) to classify the error, and
/// [status()][Error::status] to examine the error reported by the service.
///
/// Errors returned from an RPC also carry the name of the method, the number
/// of attempts made, and the time spent in the call.
///
/// # Example
/// ```
/// use gapic_gax::error::Error;
/// use gapic_gax::error::rpc::{Code, Status};
/// let error = Error::service(Status::default().set_code(Code::NotFound));
/// assert_eq!(error.status().map(|s| s.code()), Some(Code::NotFound));
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
    call: Option<Box<CallInfo>>,
}

impl Error {
    /// Creates an error with the information returned by Google Cloud services.
    pub fn service(status: Status) -> Self {
        Self::new(ErrorKind::Service(Box::new(ServiceDetails {
            status,
            status_code: None,
            headers: None,
        })))
    }

    /// Creates an error representing a failed request with HTTP metadata.
    pub fn service_with_http_metadata(
        status: Status,
        status_code: Option<u16>,
        headers: Option<HeaderMap>,
    ) -> Self {
        Self::new(ErrorKind::Service(Box::new(ServiceDetails {
            status,
            status_code,
            headers,
        })))
    }

    /// The request could not be completed before its timeout expired.
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Timeout, source)
    }

    /// The request could not complete before the retry policy expired.
    pub fn exhausted<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Exhausted, source)
    }

    /// The caller cancelled the request, or the caller's deadline expired.
    pub fn cancelled<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Cancelled, source)
    }

    /// The client was closed before the request was started.
    pub fn closed() -> Self {
        Self::new(ErrorKind::Closed)
    }

    /// A request field does not match the template required by the method.
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Binding, source)
    }

    /// The request could not be serialized.
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Serialization, source)
    }

    /// The response could not be deserialized.
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Deserialization, source)
    }

    /// The credentials could not produce the authentication headers.
    pub fn authentication<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Authentication, source)
    }

    /// The transport failed to send the request or receive a response.
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Transport(Box::default()), source)
    }

    /// The transport received an HTTP error that is not a service error.
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        Self::new(ErrorKind::Transport(Box::new(TransportDetails {
            status_code: Some(status_code),
            headers: Some(headers),
            payload: Some(payload),
        })))
    }

    /// Attaches the call context.
    ///
    /// The client libraries use this function to record which method failed,
    /// how many attempts it made, and how long the call took.
    pub fn with_call_info<M: Into<String>>(
        mut self,
        method: M,
        attempt_count: u32,
        elapsed: Duration,
    ) -> Self {
        self.call = Some(Box::new(CallInfo {
            method: method.into(),
            attempt_count,
            elapsed,
        }));
        self
    }

    pub fn is_service(&self) -> bool {
        matches!(self.kind, ErrorKind::Service(_))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self.kind, ErrorKind::Exhausted)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self.kind, ErrorKind::Cancelled)
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.kind, ErrorKind::Closed)
    }

    pub fn is_binding(&self) -> bool {
        matches!(self.kind, ErrorKind::Binding)
    }

    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport(_))
    }

    /// The transport could not send the request, or never got a response.
    pub fn is_io(&self) -> bool {
        matches!(&self.kind, ErrorKind::Transport(d) if d.status_code.is_none())
    }

    /// The error returned by the service, if any.
    pub fn status(&self) -> Option<&Status> {
        match &self.kind {
            ErrorKind::Service(d) => Some(&d.status),
            _ => None,
        }
    }

    /// The status code used to decide if the error can be retried.
    ///
    /// Service errors report their own code. Attempts that time out count as
    /// [Code::DeadlineExceeded], and transport failures before any response
    /// count as [Code::Unavailable]. An HTTP error without a service payload
    /// is classified from its HTTP status code.
    pub fn code(&self) -> Option<Code> {
        match &self.kind {
            ErrorKind::Service(d) => Some(d.status.code()),
            ErrorKind::Timeout => Some(Code::DeadlineExceeded),
            ErrorKind::Transport(d) => match d.status_code {
                None => Some(Code::Unavailable),
                Some(s) => Some(Code::from_http_status(s)),
            },
            _ => None,
        }
    }

    /// The HTTP status code, if any, associated with this error.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Transport(d) => d.status_code,
            ErrorKind::Service(d) => d.status_code,
            _ => None,
        }
    }

    /// The headers, if any, associated with this error.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        match &self.kind {
            ErrorKind::Transport(d) => d.headers.as_ref(),
            ErrorKind::Service(d) => d.headers.as_ref(),
            _ => None,
        }
    }

    /// The payload, if any, associated with this error.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Transport(d) => d.payload.as_ref(),
            _ => None,
        }
    }

    /// The name of the method that failed, if known.
    pub fn method(&self) -> Option<&str> {
        self.call.as_ref().map(|c| c.method.as_str())
    }

    /// The number of attempts made before the call failed, if known.
    pub fn attempt_count(&self) -> Option<u32> {
        self.call.as_ref().map(|c| c.attempt_count)
    }

    /// The time spent in the call before it failed, if known.
    pub fn elapsed(&self) -> Option<Duration> {
        self.call.as_ref().map(|c| c.elapsed)
    }

    fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            source: None,
            call: None,
        }
    }

    fn with_source<T: Into<BoxError>>(kind: ErrorKind, source: T) -> Self {
        Self {
            kind,
            source: Some(source.into()),
            call: None,
        }
    }

    fn fmt_kind(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Binding, Some(e)) => {
                write!(f, "cannot find a matching binding to send the request: {e}")
            }
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request: {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response: {e}")
            }
            (ErrorKind::Authentication, Some(e)) => {
                write!(f, "cannot create the authentication headers: {e}")
            }
            (ErrorKind::Timeout, Some(e)) => {
                write!(f, "the request exceeded the request deadline: {e}")
            }
            (ErrorKind::Exhausted, Some(e)) => write!(f, "retry policy exhausted: {e}"),
            (ErrorKind::Cancelled, Some(e)) => write!(f, "the request was cancelled: {e}"),
            (ErrorKind::Closed, _) => write!(f, "the client is closed"),
            (ErrorKind::Transport(d), source) => d.display(source.as_deref(), f),
            (ErrorKind::Service(d), _) => write!(
                f,
                "the service reports an error with code {} described as: {}",
                d.status.code(),
                d.status.message
            ),
            (_, None) => write!(f, "unclassified error"),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_kind(f)?;
        if let Some(call) = &self.call {
            write!(
                f,
                " [method={}, attempts={}, elapsed={:?}]",
                call.method, call.attempt_count, call.elapsed
            )?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

#[derive(Debug)]
enum ErrorKind {
    Binding,
    Serialization,
    Deserialization,
    Authentication,
    Timeout,
    Exhausted,
    Cancelled,
    Closed,
    Transport(Box<TransportDetails>),
    Service(Box<ServiceDetails>),
}

#[derive(Debug, Default)]
struct TransportDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    payload: Option<bytes::Bytes>,
}

impl TransportDetails {
    fn display(
        &self,
        source: Option<&(dyn StdError + Send + Sync)>,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match (self.status_code, &self.payload, source) {
            (Some(code), Some(p), _) => match std::str::from_utf8(p.as_ref()) {
                Ok(message) => write!(f, "the HTTP transport reports a [{code}] error: {message}"),
                Err(_) => write!(f, "the HTTP transport reports a [{code}] error: {p:?}"),
            },
            (_, _, Some(source)) => write!(f, "the transport reports an error: {source}"),
            _ => write!(f, "the transport reports an unknown error"),
        }
    }
}

#[derive(Debug)]
struct ServiceDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    status: Status,
}

#[derive(Debug)]
struct CallInfo {
    method: String,
    attempt_count: u32,
    elapsed: Duration,
}
