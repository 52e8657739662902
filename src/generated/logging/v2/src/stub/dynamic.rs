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

use crate::Result;
use gax::options::CallOptions;

/// A dyn-compatible, crate-private version of [super::LoggingServiceV2].
#[async_trait::async_trait]
pub trait LoggingServiceV2: std::fmt::Debug + Send + Sync {
    async fn delete_log(
        &self,
        req: crate::model::DeleteLogRequest,
        options: CallOptions,
    ) -> Result<gax::empty::Empty>;

    async fn write_log_entries(
        &self,
        req: crate::model::WriteLogEntriesRequest,
        options: CallOptions,
    ) -> Result<crate::model::WriteLogEntriesResponse>;

    async fn list_log_entries(
        &self,
        req: crate::model::ListLogEntriesRequest,
        options: CallOptions,
    ) -> Result<crate::model::ListLogEntriesResponse>;

    async fn list_monitored_resource_descriptors(
        &self,
        req: crate::model::ListMonitoredResourceDescriptorsRequest,
        options: CallOptions,
    ) -> Result<crate::model::ListMonitoredResourceDescriptorsResponse>;

    async fn close(&self);
}

/// All implementations of [super::LoggingServiceV2] also implement [LoggingServiceV2].
#[async_trait::async_trait]
impl<T: super::LoggingServiceV2> LoggingServiceV2 for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn delete_log(
        &self,
        req: crate::model::DeleteLogRequest,
        options: CallOptions,
    ) -> Result<gax::empty::Empty> {
        T::delete_log(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn write_log_entries(
        &self,
        req: crate::model::WriteLogEntriesRequest,
        options: CallOptions,
    ) -> Result<crate::model::WriteLogEntriesResponse> {
        T::write_log_entries(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_log_entries(
        &self,
        req: crate::model::ListLogEntriesRequest,
        options: CallOptions,
    ) -> Result<crate::model::ListLogEntriesResponse> {
        T::list_log_entries(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_monitored_resource_descriptors(
        &self,
        req: crate::model::ListMonitoredResourceDescriptorsRequest,
        options: CallOptions,
    ) -> Result<crate::model::ListMonitoredResourceDescriptorsResponse> {
        T::list_monitored_resource_descriptors(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn close(&self) {
        T::close(self).await
    }
}

/// A dyn-compatible, crate-private version of [super::ConfigServiceV2].
#[async_trait::async_trait]
pub trait ConfigServiceV2: std::fmt::Debug + Send + Sync {
    async fn list_sinks(
        &self,
        req: crate::model::ListSinksRequest,
        options: CallOptions,
    ) -> Result<crate::model::ListSinksResponse>;

    async fn get_sink(
        &self,
        req: crate::model::GetSinkRequest,
        options: CallOptions,
    ) -> Result<crate::model::LogSink>;

    async fn create_sink(
        &self,
        req: crate::model::CreateSinkRequest,
        options: CallOptions,
    ) -> Result<crate::model::LogSink>;

    async fn update_sink(
        &self,
        req: crate::model::UpdateSinkRequest,
        options: CallOptions,
    ) -> Result<crate::model::LogSink>;

    async fn delete_sink(
        &self,
        req: crate::model::DeleteSinkRequest,
        options: CallOptions,
    ) -> Result<gax::empty::Empty>;

    async fn close(&self);
}

/// All implementations of [super::ConfigServiceV2] also implement [ConfigServiceV2].
#[async_trait::async_trait]
impl<T: super::ConfigServiceV2> ConfigServiceV2 for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn list_sinks(
        &self,
        req: crate::model::ListSinksRequest,
        options: CallOptions,
    ) -> Result<crate::model::ListSinksResponse> {
        T::list_sinks(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_sink(
        &self,
        req: crate::model::GetSinkRequest,
        options: CallOptions,
    ) -> Result<crate::model::LogSink> {
        T::get_sink(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_sink(
        &self,
        req: crate::model::CreateSinkRequest,
        options: CallOptions,
    ) -> Result<crate::model::LogSink> {
        T::create_sink(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_sink(
        &self,
        req: crate::model::UpdateSinkRequest,
        options: CallOptions,
    ) -> Result<crate::model::LogSink> {
        T::update_sink(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_sink(
        &self,
        req: crate::model::DeleteSinkRequest,
        options: CallOptions,
    ) -> Result<gax::empty::Empty> {
        T::delete_sink(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn close(&self) {
        T::close(self).await
    }
}

/// A dyn-compatible, crate-private version of [super::MetricsServiceV2].
#[async_trait::async_trait]
pub trait MetricsServiceV2: std::fmt::Debug + Send + Sync {
    async fn list_log_metrics(
        &self,
        req: crate::model::ListLogMetricsRequest,
        options: CallOptions,
    ) -> Result<crate::model::ListLogMetricsResponse>;

    async fn get_log_metric(
        &self,
        req: crate::model::GetLogMetricRequest,
        options: CallOptions,
    ) -> Result<crate::model::LogMetric>;

    async fn create_log_metric(
        &self,
        req: crate::model::CreateLogMetricRequest,
        options: CallOptions,
    ) -> Result<crate::model::LogMetric>;

    async fn update_log_metric(
        &self,
        req: crate::model::UpdateLogMetricRequest,
        options: CallOptions,
    ) -> Result<crate::model::LogMetric>;

    async fn delete_log_metric(
        &self,
        req: crate::model::DeleteLogMetricRequest,
        options: CallOptions,
    ) -> Result<gax::empty::Empty>;

    async fn close(&self);
}

/// All implementations of [super::MetricsServiceV2] also implement [MetricsServiceV2].
#[async_trait::async_trait]
impl<T: super::MetricsServiceV2> MetricsServiceV2 for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn list_log_metrics(
        &self,
        req: crate::model::ListLogMetricsRequest,
        options: CallOptions,
    ) -> Result<crate::model::ListLogMetricsResponse> {
        T::list_log_metrics(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_log_metric(
        &self,
        req: crate::model::GetLogMetricRequest,
        options: CallOptions,
    ) -> Result<crate::model::LogMetric> {
        T::get_log_metric(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_log_metric(
        &self,
        req: crate::model::CreateLogMetricRequest,
        options: CallOptions,
    ) -> Result<crate::model::LogMetric> {
        T::create_log_metric(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_log_metric(
        &self,
        req: crate::model::UpdateLogMetricRequest,
        options: CallOptions,
    ) -> Result<crate::model::LogMetric> {
        T::update_log_metric(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_log_metric(
        &self,
        req: crate::model::DeleteLogMetricRequest,
        options: CallOptions,
    ) -> Result<gax::empty::Empty> {
        T::delete_log_metric(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn close(&self) {
        T::close(self).await
    }
}
