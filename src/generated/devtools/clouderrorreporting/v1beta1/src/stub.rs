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


//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

#![allow(rustdoc::broken_intra_doc_links)]

use crate::Result;
use gax::options::CallOptions;

pub(crate) mod dynamic;

/// Defines the trait used to implement [crate::client::ReportErrorsService].
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. These implementations return an
/// `UNIMPLEMENTED` error.
pub trait ReportErrorsService: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::ReportErrorsService::report_error_event].
    fn report_error_event(
        &self,
        _req: crate::model::ReportErrorEventRequest,
        _options: CallOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::ReportErrorEventResponse>> + Send
    {
        async {
            use gax::error::rpc::{Code, Status};
            Err(gax::error::Error::service(
                Status::default()
                    .set_code(Code::Unimplemented)
                    .set_message("ReportErrorEvent is not implemented by this stub"),
            ))
        }
    }

    /// Implements [crate::client::ReportErrorsService::close].
    fn close(&self) -> impl std::future::Future<Output = ()> + Send {
        async {}
    }
}
