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

use gax::path_template;
use std::sync::Arc;

/// Implements a client for the Cloud Logging API.
///
/// # Service Description
///
/// Service for ingesting and querying logs.
///
/// # Configuration
///
/// To configure `LoggingServiceV2` use the `with_*` methods in the type returned
/// by [builder()][LoggingServiceV2::builder]. The default configuration should
/// work for most applications.
///
/// # Pooling and Cloning
///
/// `LoggingServiceV2` holds a connection pool internally, it is advised to
/// create one and the reuse it. You do not need to wrap `LoggingServiceV2` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an
/// `Arc` internally.
#[derive(Clone, Debug)]
pub struct LoggingServiceV2 {
    inner: Arc<dyn super::stub::dynamic::LoggingServiceV2>,
}

impl LoggingServiceV2 {
    /// Returns a builder for [LoggingServiceV2].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use gapic_logging_v2::client::LoggingServiceV2;
    /// let client = LoggingServiceV2::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::logging_service_v2::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::logging_service_v2::client::Factory,
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::LoggingServiceV2 + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gax::client_builder::internal::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = crate::transport::LoggingServiceV2::new(config)?;
        Ok(Self::from_stub(inner))
    }

    /// Deletes all the log entries in a log.
    ///
    /// The log reappears if it receives new entries. Log entries written shortly
    /// before the delete operation might not be deleted.
    pub fn delete_log(
        &self,
        log_name: impl Into<String>,
    ) -> super::builder::logging_service_v2::DeleteLog {
        super::builder::logging_service_v2::DeleteLog::new(self.inner.clone())
            .set_log_name(log_name)
    }

    /// Writes log entries to Logging.
    ///
    /// Use the request builder to set the default `log_name`, `resource` and
    /// `labels` applied to entries that do not set their own.
    ///
    /// This method is not idempotent, it is not retried by default.
    pub fn write_log_entries(
        &self,
        entries: impl IntoIterator<Item = crate::model::LogEntry>,
    ) -> super::builder::logging_service_v2::WriteLogEntries {
        super::builder::logging_service_v2::WriteLogEntries::new(self.inner.clone())
            .set_entries(entries)
    }

    /// Lists log entries.
    ///
    /// Use this method to retrieve log entries from Logging. Use
    /// [by_page()][super::builder::logging_service_v2::ListLogEntries::by_page] or
    /// [by_item()][super::builder::logging_service_v2::ListLogEntries::by_item] to
    /// iterate over all the results.
    pub fn list_log_entries(
        &self,
        resource_names: impl IntoIterator<Item = impl Into<String>>,
    ) -> super::builder::logging_service_v2::ListLogEntries {
        super::builder::logging_service_v2::ListLogEntries::new(self.inner.clone())
            .set_resource_names(resource_names)
    }

    /// Lists the descriptors for monitored resource types used by Logging.
    pub fn list_monitored_resource_descriptors(
        &self,
    ) -> super::builder::logging_service_v2::ListMonitoredResourceDescriptors {
        super::builder::logging_service_v2::ListMonitoredResourceDescriptors::new(
            self.inner.clone(),
        )
    }

    /// Closes the client.
    ///
    /// Waits for in-flight calls to complete. Any call started after `close()`
    /// fails with [is_closed()][crate::Error::is_closed].
    pub async fn close(&self) {
        self.inner.close().await
    }

    /// Formats a `projects/{project}` resource name.
    pub fn format_project_name(project: &str) -> Result<String, path_template::Error> {
        crate::path_templates::project_name()?.render([("project", project)])
    }

    /// Parses the `project` from a `projects/{project}` resource name.
    pub fn parse_project_from_project_name(
        project_name: &str,
    ) -> Result<String, path_template::Error> {
        crate::path_templates::project_name()?.extract(project_name, "project")
    }

    /// Formats a `projects/{project}/logs/{log}` resource name.
    pub fn format_log_name(project: &str, log: &str) -> Result<String, path_template::Error> {
        crate::path_templates::log_name()?.render([("project", project), ("log", log)])
    }

    /// Parses the `project` from a `projects/{project}/logs/{log}` resource name.
    pub fn parse_project_from_log_name(log_name: &str) -> Result<String, path_template::Error> {
        crate::path_templates::log_name()?.extract(log_name, "project")
    }

    /// Parses the `log` from a `projects/{project}/logs/{log}` resource name.
    pub fn parse_log_from_log_name(log_name: &str) -> Result<String, path_template::Error> {
        crate::path_templates::log_name()?.extract(log_name, "log")
    }
}

/// Implements a client for the Cloud Logging API.
///
/// # Service Description
///
/// Service for configuring sinks used to export log entries outside of Logging.
///
/// # Configuration
///
/// To configure `ConfigServiceV2` use the `with_*` methods in the type returned
/// by [builder()][ConfigServiceV2::builder]. The default configuration should
/// work for most applications.
///
/// # Pooling and Cloning
///
/// `ConfigServiceV2` holds a connection pool internally, it is advised to
/// create one and the reuse it. You do not need to wrap `ConfigServiceV2` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an
/// `Arc` internally.
#[derive(Clone, Debug)]
pub struct ConfigServiceV2 {
    inner: Arc<dyn super::stub::dynamic::ConfigServiceV2>,
}

impl ConfigServiceV2 {
    /// Returns a builder for [ConfigServiceV2].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use gapic_logging_v2::client::ConfigServiceV2;
    /// let client = ConfigServiceV2::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::config_service_v2::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::config_service_v2::client::Factory,
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::ConfigServiceV2 + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gax::client_builder::internal::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = crate::transport::ConfigServiceV2::new(config)?;
        Ok(Self::from_stub(inner))
    }

    /// Lists sinks.
    pub fn list_sinks(
        &self,
        parent: impl Into<String>,
    ) -> super::builder::config_service_v2::ListSinks {
        super::builder::config_service_v2::ListSinks::new(self.inner.clone())
            .set_parent(parent)
    }

    /// Gets a sink.
    pub fn get_sink(
        &self,
        sink_name: impl Into<String>,
    ) -> super::builder::config_service_v2::GetSink {
        super::builder::config_service_v2::GetSink::new(self.inner.clone())
            .set_sink_name(sink_name)
    }

    /// Creates a sink that exports specified log entries to a destination.
    ///
    /// The export of newly-ingested log entries begins immediately, unless the
    /// sink's `writer_identity` is not permitted to write to the destination.
    pub fn create_sink(
        &self,
        parent: impl Into<String>,
        sink: impl Into<crate::model::LogSink>,
    ) -> super::builder::config_service_v2::CreateSink {
        super::builder::config_service_v2::CreateSink::new(self.inner.clone())
            .set_parent(parent)
            .set_sink(sink)
    }

    /// Updates a sink.
    ///
    /// If the named sink doesn't exist, then this method is identical to
    /// [create_sink][Self::create_sink].
    pub fn update_sink(
        &self,
        sink_name: impl Into<String>,
        sink: impl Into<crate::model::LogSink>,
    ) -> super::builder::config_service_v2::UpdateSink {
        super::builder::config_service_v2::UpdateSink::new(self.inner.clone())
            .set_sink_name(sink_name)
            .set_sink(sink)
    }

    /// Deletes a sink.
    pub fn delete_sink(
        &self,
        sink_name: impl Into<String>,
    ) -> super::builder::config_service_v2::DeleteSink {
        super::builder::config_service_v2::DeleteSink::new(self.inner.clone())
            .set_sink_name(sink_name)
    }

    /// Closes the client.
    ///
    /// Waits for in-flight calls to complete. Any call started after `close()`
    /// fails with [is_closed()][crate::Error::is_closed].
    pub async fn close(&self) {
        self.inner.close().await
    }

    /// Formats a `projects/{project}` resource name.
    pub fn format_project_name(project: &str) -> Result<String, path_template::Error> {
        crate::path_templates::project_name()?.render([("project", project)])
    }

    /// Parses the `project` from a `projects/{project}` resource name.
    pub fn parse_project_from_project_name(
        project_name: &str,
    ) -> Result<String, path_template::Error> {
        crate::path_templates::project_name()?.extract(project_name, "project")
    }

    /// Formats a `projects/{project}/sinks/{sink}` resource name.
    pub fn format_sink_name(project: &str, sink: &str) -> Result<String, path_template::Error> {
        crate::path_templates::sink_name()?.render([("project", project), ("sink", sink)])
    }

    /// Parses the `project` from a `projects/{project}/sinks/{sink}` resource name.
    pub fn parse_project_from_sink_name(sink_name: &str) -> Result<String, path_template::Error> {
        crate::path_templates::sink_name()?.extract(sink_name, "project")
    }

    /// Parses the `sink` from a `projects/{project}/sinks/{sink}` resource name.
    pub fn parse_sink_from_sink_name(sink_name: &str) -> Result<String, path_template::Error> {
        crate::path_templates::sink_name()?.extract(sink_name, "sink")
    }
}

/// Implements a client for the Cloud Logging API.
///
/// # Service Description
///
/// Service for configuring logs-based metrics.
///
/// # Configuration
///
/// To configure `MetricsServiceV2` use the `with_*` methods in the type returned
/// by [builder()][MetricsServiceV2::builder]. The default configuration should
/// work for most applications.
///
/// # Pooling and Cloning
///
/// `MetricsServiceV2` holds a connection pool internally, it is advised to
/// create one and the reuse it. You do not need to wrap `MetricsServiceV2` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an
/// `Arc` internally.
#[derive(Clone, Debug)]
pub struct MetricsServiceV2 {
    inner: Arc<dyn super::stub::dynamic::MetricsServiceV2>,
}

impl MetricsServiceV2 {
    /// Returns a builder for [MetricsServiceV2].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use gapic_logging_v2::client::MetricsServiceV2;
    /// let client = MetricsServiceV2::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::metrics_service_v2::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::metrics_service_v2::client::Factory,
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::MetricsServiceV2 + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gax::client_builder::internal::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = crate::transport::MetricsServiceV2::new(config)?;
        Ok(Self::from_stub(inner))
    }

    /// Lists logs-based metrics.
    pub fn list_log_metrics(
        &self,
        parent: impl Into<String>,
    ) -> super::builder::metrics_service_v2::ListLogMetrics {
        super::builder::metrics_service_v2::ListLogMetrics::new(self.inner.clone())
            .set_parent(parent)
    }

    /// Gets a logs-based metric.
    pub fn get_log_metric(
        &self,
        metric_name: impl Into<String>,
    ) -> super::builder::metrics_service_v2::GetLogMetric {
        super::builder::metrics_service_v2::GetLogMetric::new(self.inner.clone())
            .set_metric_name(metric_name)
    }

    /// Creates a logs-based metric.
    pub fn create_log_metric(
        &self,
        parent: impl Into<String>,
        metric: impl Into<crate::model::LogMetric>,
    ) -> super::builder::metrics_service_v2::CreateLogMetric {
        super::builder::metrics_service_v2::CreateLogMetric::new(self.inner.clone())
            .set_parent(parent)
            .set_metric(metric)
    }

    /// Creates or updates a logs-based metric.
    pub fn update_log_metric(
        &self,
        metric_name: impl Into<String>,
        metric: impl Into<crate::model::LogMetric>,
    ) -> super::builder::metrics_service_v2::UpdateLogMetric {
        super::builder::metrics_service_v2::UpdateLogMetric::new(self.inner.clone())
            .set_metric_name(metric_name)
            .set_metric(metric)
    }

    /// Deletes a logs-based metric.
    pub fn delete_log_metric(
        &self,
        metric_name: impl Into<String>,
    ) -> super::builder::metrics_service_v2::DeleteLogMetric {
        super::builder::metrics_service_v2::DeleteLogMetric::new(self.inner.clone())
            .set_metric_name(metric_name)
    }

    /// Closes the client.
    ///
    /// Waits for in-flight calls to complete. Any call started after `close()`
    /// fails with [is_closed()][crate::Error::is_closed].
    pub async fn close(&self) {
        self.inner.close().await
    }

    /// Formats a `projects/{project}` resource name.
    pub fn format_project_name(project: &str) -> Result<String, path_template::Error> {
        crate::path_templates::project_name()?.render([("project", project)])
    }

    /// Parses the `project` from a `projects/{project}` resource name.
    pub fn parse_project_from_project_name(
        project_name: &str,
    ) -> Result<String, path_template::Error> {
        crate::path_templates::project_name()?.extract(project_name, "project")
    }

    /// Formats a `projects/{project}/metrics/{metric}` resource name.
    pub fn format_metric_name(project: &str, metric: &str) -> Result<String, path_template::Error> {
        crate::path_templates::metric_name()?.render([("project", project), ("metric", metric)])
    }

    /// Parses the `project` from a `projects/{project}/metrics/{metric}` resource name.
    pub fn parse_project_from_metric_name(
        metric_name: &str,
    ) -> Result<String, path_template::Error> {
        crate::path_templates::metric_name()?.extract(metric_name, "project")
    }

    /// Parses the `metric` from a `projects/{project}/metrics/{metric}` resource name.
    pub fn parse_metric_from_metric_name(
        metric_name: &str,
    ) -> Result<String, path_template::Error> {
        crate::path_templates::metric_name()?.extract(metric_name, "metric")
    }
}
