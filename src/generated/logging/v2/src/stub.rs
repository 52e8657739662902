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

/// Defines the trait used to implement [crate::client::LoggingServiceV2].
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. These implementations return an
/// `UNIMPLEMENTED` error.
pub trait LoggingServiceV2: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::LoggingServiceV2::delete_log].
    fn delete_log(
        &self,
        _req: crate::model::DeleteLogRequest,
        _options: CallOptions,
    ) -> impl std::future::Future<Output = Result<gax::empty::Empty>> + Send {
        unimplemented_stub("DeleteLog")
    }

    /// Implements [crate::client::LoggingServiceV2::write_log_entries].
    fn write_log_entries(
        &self,
        _req: crate::model::WriteLogEntriesRequest,
        _options: CallOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::WriteLogEntriesResponse>> + Send {
        unimplemented_stub("WriteLogEntries")
    }

    /// Implements [crate::client::LoggingServiceV2::list_log_entries].
    fn list_log_entries(
        &self,
        _req: crate::model::ListLogEntriesRequest,
        _options: CallOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::ListLogEntriesResponse>> + Send {
        unimplemented_stub("ListLogEntries")
    }

    /// Implements [crate::client::LoggingServiceV2::list_monitored_resource_descriptors].
    fn list_monitored_resource_descriptors(
        &self,
        _req: crate::model::ListMonitoredResourceDescriptorsRequest,
        _options: CallOptions,
    ) -> impl std::future::Future<
        Output = Result<crate::model::ListMonitoredResourceDescriptorsResponse>,
    > + Send {
        unimplemented_stub("ListMonitoredResourceDescriptors")
    }

    /// Implements [crate::client::LoggingServiceV2::close].
    fn close(&self) -> impl std::future::Future<Output = ()> + Send {
        async {}
    }
}

/// Defines the trait used to implement [crate::client::ConfigServiceV2].
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. These implementations return an
/// `UNIMPLEMENTED` error.
pub trait ConfigServiceV2: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::ConfigServiceV2::list_sinks].
    fn list_sinks(
        &self,
        _req: crate::model::ListSinksRequest,
        _options: CallOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::ListSinksResponse>> + Send {
        unimplemented_stub("ListSinks")
    }

    /// Implements [crate::client::ConfigServiceV2::get_sink].
    fn get_sink(
        &self,
        _req: crate::model::GetSinkRequest,
        _options: CallOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::LogSink>> + Send {
        unimplemented_stub("GetSink")
    }

    /// Implements [crate::client::ConfigServiceV2::create_sink].
    fn create_sink(
        &self,
        _req: crate::model::CreateSinkRequest,
        _options: CallOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::LogSink>> + Send {
        unimplemented_stub("CreateSink")
    }

    /// Implements [crate::client::ConfigServiceV2::update_sink].
    fn update_sink(
        &self,
        _req: crate::model::UpdateSinkRequest,
        _options: CallOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::LogSink>> + Send {
        unimplemented_stub("UpdateSink")
    }

    /// Implements [crate::client::ConfigServiceV2::delete_sink].
    fn delete_sink(
        &self,
        _req: crate::model::DeleteSinkRequest,
        _options: CallOptions,
    ) -> impl std::future::Future<Output = Result<gax::empty::Empty>> + Send {
        unimplemented_stub("DeleteSink")
    }

    /// Implements [crate::client::ConfigServiceV2::close].
    fn close(&self) -> impl std::future::Future<Output = ()> + Send {
        async {}
    }
}

/// Defines the trait used to implement [crate::client::MetricsServiceV2].
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. These implementations return an
/// `UNIMPLEMENTED` error.
pub trait MetricsServiceV2: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::MetricsServiceV2::list_log_metrics].
    fn list_log_metrics(
        &self,
        _req: crate::model::ListLogMetricsRequest,
        _options: CallOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::ListLogMetricsResponse>> + Send {
        unimplemented_stub("ListLogMetrics")
    }

    /// Implements [crate::client::MetricsServiceV2::get_log_metric].
    fn get_log_metric(
        &self,
        _req: crate::model::GetLogMetricRequest,
        _options: CallOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::LogMetric>> + Send {
        unimplemented_stub("GetLogMetric")
    }

    /// Implements [crate::client::MetricsServiceV2::create_log_metric].
    fn create_log_metric(
        &self,
        _req: crate::model::CreateLogMetricRequest,
        _options: CallOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::LogMetric>> + Send {
        unimplemented_stub("CreateLogMetric")
    }

    /// Implements [crate::client::MetricsServiceV2::update_log_metric].
    fn update_log_metric(
        &self,
        _req: crate::model::UpdateLogMetricRequest,
        _options: CallOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::LogMetric>> + Send {
        unimplemented_stub("UpdateLogMetric")
    }

    /// Implements [crate::client::MetricsServiceV2::delete_log_metric].
    fn delete_log_metric(
        &self,
        _req: crate::model::DeleteLogMetricRequest,
        _options: CallOptions,
    ) -> impl std::future::Future<Output = Result<gax::empty::Empty>> + Send {
        unimplemented_stub("DeleteLogMetric")
    }

    /// Implements [crate::client::MetricsServiceV2::close].
    fn close(&self) -> impl std::future::Future<Output = ()> + Send {
        async {}
    }
}

async fn unimplemented_stub<T>(method: &'static str) -> Result<T> {
    use gax::error::rpc::{Code, Status};
    Err(gax::error::Error::service(
        Status::default()
            .set_code(Code::Unimplemented)
            .set_message(format!("{method} is not implemented by this stub")),
    ))
}
