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

//! Runtime support for the GAPIC client libraries.
//!
//! This crate contains the types and functions shared by the generated
//! clients: errors, resource name templates, call settings loaded from the
//! client configuration, the retry loop, credentials, transports and client
//! builders.
//!
//! Applications mostly interact with [error], [options], [credentials] and
//! [client_builder]. The remaining modules are used by the generated code.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping RPCs.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by generated clients.
pub mod error;

/// Binds an RPC to its call settings and runs it.
pub mod api_callable;

/// Implements helpers to create telemetry headers.
#[doc(hidden)]
pub mod api_header;

pub mod backoff_policy;
pub mod call_settings;
pub mod client_builder;

/// Loads call settings from the client configuration JSON.
#[doc(hidden)]
pub mod client_config;

pub mod credentials;

/// Well-known message types.
pub mod empty;

pub mod exponential_backoff;

/// A JSON over HTTP transport.
#[cfg(feature = "http-transport")]
pub mod http_client;

pub mod options;

/// Defines some types and traits to convert and use List RPCs as a Stream.
pub mod paginator;

pub mod path_template;

#[doc(hidden)]
pub mod retry_loop_internal;

pub mod retry_policy;
pub mod retry_result;
pub mod retry_state;
pub mod transport;
