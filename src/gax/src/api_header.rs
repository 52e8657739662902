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

//! The agent and version header sent with each request.

use http::HeaderValue;
use http::header::HeaderName;

/// The name of the agent header.
pub const X_GOOG_API_CLIENT: HeaderName = HeaderName::from_static("x-goog-api-client");

/// Generated libraries create one static instance of this struct and use it
/// to compute the `x-goog-api-client` header value when a client is built.
#[derive(Debug, PartialEq)]
pub struct XGoogApiClient {
    pub name: &'static str,
    pub library_type: &'static str,
    pub version: &'static str,
}

pub const GAPIC: &str = "gapic";

mod build_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/build_env.rs"));

    pub(crate) const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
}

impl XGoogApiClient {
    /// Format the struct as needed for the `x-goog-api-client` header.
    ///
    /// Applications may identify themselves with `app`, a `(name, version)`
    /// pair appended to the value.
    pub fn header_value(&self, app: Option<(&str, &str)>) -> String {
        let rustc_version = build_info::RUSTC_VERSION;
        let rustc_version = rustc_version
            .strip_prefix("rustc ")
            .unwrap_or(build_info::RUSTC_VERSION);
        let gax_version = build_info::PKG_VERSION;

        let value = format!(
            "gl-rust/{rustc_version} gax/{gax_version} {}/{}",
            self.library_type, self.version
        );
        match app {
            Some((name, version)) => format!("{value} {name}/{version}"),
            None => value,
        }
    }

    /// The header value, as a [HeaderValue].
    ///
    /// Returns an error if the application name or version contain characters
    /// not allowed in headers.
    pub fn to_header(
        &self,
        app: Option<(&str, &str)>,
    ) -> Result<HeaderValue, http::header::InvalidHeaderValue> {
        HeaderValue::from_str(&self.header_value(app))
    }
}
