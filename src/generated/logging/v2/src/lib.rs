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

//! Google Client Library for Rust - Cloud Logging API
//!
//! Writes log entries and manages your Cloud Logging configuration.
//!
//! This crate contains clients for three services:
//! * [LoggingServiceV2][client::LoggingServiceV2] writes and lists log entries.
//! * [ConfigServiceV2][client::ConfigServiceV2] manages the sinks exporting
//!   log entries.
//! * [MetricsServiceV2][client::MetricsServiceV2] manages logs-based metrics.
//!
//! # Example
//! ```no_run
//! # tokio_test::block_on(async {
//! use gapic_logging_v2::client::LoggingServiceV2;
//! use gapic_logging_v2::model::{LogEntry, LogSeverity, MonitoredResource};
//! let client = LoggingServiceV2::builder().build().await?;
//! let log_name = LoggingServiceV2::format_log_name("my-project-123", "my-log")?;
//! let entry = LogEntry::default()
//!     .set_severity(LogSeverity::Info)
//!     .set_text_payload("hello world");
//! client
//!     .write_log_entries([entry])
//!     .set_log_name(log_name)
//!     .set_resource(MonitoredResource::default().set_type("global"))
//!     .send()
//!     .await?;
//! # Ok::<(), Box<dyn std::error::Error>>(()) });
//! ```

pub use gax::Result;
pub use gax::error::Error;

/// The messages and enums that are part of this client library.
pub mod model;

/// Request builders.
pub mod builder;

/// Concrete implementations of this client library traits.
pub mod client;

/// Traits to mock the clients in this library.
pub mod stub;

mod path_templates;
mod transport;

/// The default host used by the service.
const DEFAULT_HOST: &str = "https://logging.googleapis.com";

pub(crate) mod info {
    const NAME: &str = env!("CARGO_PKG_NAME");
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub(crate) const X_GOOG_API_CLIENT: gax::api_header::XGoogApiClient =
        gax::api_header::XGoogApiClient {
            name: NAME,
            version: VERSION,
            library_type: gax::api_header::GAPIC,
        };
}
