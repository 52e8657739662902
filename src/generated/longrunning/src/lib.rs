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

//! Google Client Library for Rust - Long Running Operations API
//!
//! Manages long-running operations with an API service. When an API method
//! normally takes long time to complete, it can be designed to return an
//! [Operation][model::Operation] to the client, and the client can use this
//! interface to receive the real response asynchronously by polling the
//! operation resource.
//!
//! # Example
//! ```no_run
//! # tokio_test::block_on(async {
//! use gapic_longrunning::client::Operations;
//! let client = Operations::builder().build().await?;
//! let name = Operations::format_operation_path_name("my-operation")?;
//! let operation = client.get_operation(name).send().await?;
//! println!("done = {}", operation.done);
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
const DEFAULT_HOST: &str = "https://longrunning.googleapis.com";

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
