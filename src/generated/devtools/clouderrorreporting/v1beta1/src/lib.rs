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

//! Google Client Library for Rust - Cloud Error Reporting API
//!
//! Groups and counts similar errors from cloud services and applications,
//! reports new errors, and provides access to error groups and their
//! associated errors.
//!
//! # Example
//! ```no_run
//! # tokio_test::block_on(async {
//! use gapic_errorreporting_v1beta1::client::ReportErrorsService;
//! use gapic_errorreporting_v1beta1::model::{ReportedErrorEvent, ServiceContext};
//! let client = ReportErrorsService::builder().build().await?;
//! let project_name = ReportErrorsService::format_project_name("my-project-123")?;
//! let event = ReportedErrorEvent::default()
//!     .set_service_context(ServiceContext::default().set_service("frontend"))
//!     .set_message("java.lang.IllegalStateException: oops\n\tat Main.main(Main.java:3)");
//! client.report_error_event(project_name, event).send().await?;
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
const DEFAULT_HOST: &str = "https://clouderrorreporting.googleapis.com";

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
