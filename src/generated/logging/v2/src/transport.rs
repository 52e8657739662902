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
use crate::model::*;
use gax::api_callable::{ApiCallable, CallContext};
use gax::client_builder::internal::{ClientConfig, ClientRuntime};
use gax::options::CallOptions;
use gax::transport::{HttpRule, MethodDescriptor};
use http::Method;

mod logging_service_v2 {
    use super::*;

    pub(super) const SERVICE: &str = "google.logging.v2.LoggingServiceV2";
    pub(super) const CLIENT_CONFIG: &str =
        include_str!("resources/logging_service_v2_client_config.json");

    pub(super) static DELETE_LOG: MethodDescriptor = MethodDescriptor {
        service: SERVICE,
        name: "DeleteLog",
        http: HttpRule {
            verb: Method::DELETE,
            path: "/v2/{log_name=projects/*/logs/*}",
            body: None,
        },
    };

    pub(super) static WRITE_LOG_ENTRIES: MethodDescriptor = MethodDescriptor {
        service: SERVICE,
        name: "WriteLogEntries",
        http: HttpRule {
            verb: Method::POST,
            path: "/v2/entries:write",
            body: Some("*"),
        },
    };

    pub(super) static LIST_LOG_ENTRIES: MethodDescriptor = MethodDescriptor {
        service: SERVICE,
        name: "ListLogEntries",
        http: HttpRule {
            verb: Method::POST,
            path: "/v2/entries:list",
            body: Some("*"),
        },
    };

    pub(super) static LIST_MONITORED_RESOURCE_DESCRIPTORS: MethodDescriptor = MethodDescriptor {
        service: SERVICE,
        name: "ListMonitoredResourceDescriptors",
        http: HttpRule {
            verb: Method::GET,
            path: "/v2/monitoredResourceDescriptors",
            body: None,
        },
    };
}

mod config_service_v2 {
    use super::*;

    pub(super) const SERVICE: &str = "google.logging.v2.ConfigServiceV2";
    pub(super) const CLIENT_CONFIG: &str =
        include_str!("resources/config_service_v2_client_config.json");

    pub(super) static LIST_SINKS: MethodDescriptor = MethodDescriptor {
        service: SERVICE,
        name: "ListSinks",
        http: HttpRule {
            verb: Method::GET,
            path: "/v2/{parent=projects/*}/sinks",
            body: None,
        },
    };

    pub(super) static GET_SINK: MethodDescriptor = MethodDescriptor {
        service: SERVICE,
        name: "GetSink",
        http: HttpRule {
            verb: Method::GET,
            path: "/v2/{sink_name=projects/*/sinks/*}",
            body: None,
        },
    };

    pub(super) static CREATE_SINK: MethodDescriptor = MethodDescriptor {
        service: SERVICE,
        name: "CreateSink",
        http: HttpRule {
            verb: Method::POST,
            path: "/v2/{parent=projects/*}/sinks",
            body: Some("sink"),
        },
    };

    pub(super) static UPDATE_SINK: MethodDescriptor = MethodDescriptor {
        service: SERVICE,
        name: "UpdateSink",
        http: HttpRule {
            verb: Method::PUT,
            path: "/v2/{sink_name=projects/*/sinks/*}",
            body: Some("sink"),
        },
    };

    pub(super) static DELETE_SINK: MethodDescriptor = MethodDescriptor {
        service: SERVICE,
        name: "DeleteSink",
        http: HttpRule {
            verb: Method::DELETE,
            path: "/v2/{sink_name=projects/*/sinks/*}",
            body: None,
        },
    };
}

mod metrics_service_v2 {
    use super::*;

    pub(super) const SERVICE: &str = "google.logging.v2.MetricsServiceV2";
    pub(super) const CLIENT_CONFIG: &str =
        include_str!("resources/metrics_service_v2_client_config.json");

    pub(super) static LIST_LOG_METRICS: MethodDescriptor = MethodDescriptor {
        service: SERVICE,
        name: "ListLogMetrics",
        http: HttpRule {
            verb: Method::GET,
            path: "/v2/{parent=projects/*}/metrics",
            body: None,
        },
    };

    pub(super) static GET_LOG_METRIC: MethodDescriptor = MethodDescriptor {
        service: SERVICE,
        name: "GetLogMetric",
        http: HttpRule {
            verb: Method::GET,
            path: "/v2/{metric_name=projects/*/metrics/*}",
            body: None,
        },
    };

    pub(super) static CREATE_LOG_METRIC: MethodDescriptor = MethodDescriptor {
        service: SERVICE,
        name: "CreateLogMetric",
        http: HttpRule {
            verb: Method::POST,
            path: "/v2/{parent=projects/*}/metrics",
            body: Some("metric"),
        },
    };

    pub(super) static UPDATE_LOG_METRIC: MethodDescriptor = MethodDescriptor {
        service: SERVICE,
        name: "UpdateLogMetric",
        http: HttpRule {
            verb: Method::PUT,
            path: "/v2/{metric_name=projects/*/metrics/*}",
            body: Some("metric"),
        },
    };

    pub(super) static DELETE_LOG_METRIC: MethodDescriptor = MethodDescriptor {
        service: SERVICE,
        name: "DeleteLogMetric",
        http: HttpRule {
            verb: Method::DELETE,
            path: "/v2/{metric_name=projects/*/metrics/*}",
            body: None,
        },
    };
}

/// Implements [LoggingServiceV2](super::stub::LoggingServiceV2) using the configured
/// [Transport][gax::transport::Transport].
#[derive(Debug)]
pub struct LoggingServiceV2 {
    runtime: ClientRuntime,
    delete_log: ApiCallable<DeleteLogRequest, gax::empty::Empty>,
    write_log_entries: ApiCallable<WriteLogEntriesRequest, WriteLogEntriesResponse>,
    list_log_entries: ApiCallable<ListLogEntriesRequest, ListLogEntriesResponse>,
    list_monitored_resource_descriptors: ApiCallable<
        ListMonitoredResourceDescriptorsRequest,
        ListMonitoredResourceDescriptorsResponse,
    >,
}

impl LoggingServiceV2 {
    pub fn new(config: ClientConfig) -> gax::client_builder::Result<Self> {
        let runtime = ClientRuntime::new(
            config,
            logging_service_v2::SERVICE,
            logging_service_v2::CLIENT_CONFIG,
            crate::DEFAULT_HOST,
            &crate::info::X_GOOG_API_CLIENT,
        )?;
        Ok(Self {
            delete_log: runtime.callable(&logging_service_v2::DELETE_LOG),
            write_log_entries: runtime.callable(&logging_service_v2::WRITE_LOG_ENTRIES),
            list_log_entries: runtime.callable(&logging_service_v2::LIST_LOG_ENTRIES),
            list_monitored_resource_descriptors: runtime
                .callable(&logging_service_v2::LIST_MONITORED_RESOURCE_DESCRIPTORS),
            runtime,
        })
    }

    fn context(&self, options: CallOptions) -> CallContext {
        CallContext::new(options, self.runtime.credentials().clone())
    }
}

impl super::stub::LoggingServiceV2 for LoggingServiceV2 {
    async fn delete_log(
        &self,
        req: DeleteLogRequest,
        options: CallOptions,
    ) -> Result<gax::empty::Empty> {
        self.delete_log.call(&req, self.context(options)).await
    }

    async fn write_log_entries(
        &self,
        req: WriteLogEntriesRequest,
        options: CallOptions,
    ) -> Result<WriteLogEntriesResponse> {
        self.write_log_entries.call(&req, self.context(options)).await
    }

    async fn list_log_entries(
        &self,
        req: ListLogEntriesRequest,
        options: CallOptions,
    ) -> Result<ListLogEntriesResponse> {
        self.list_log_entries.call(&req, self.context(options)).await
    }

    async fn list_monitored_resource_descriptors(
        &self,
        req: ListMonitoredResourceDescriptorsRequest,
        options: CallOptions,
    ) -> Result<ListMonitoredResourceDescriptorsResponse> {
        self.list_monitored_resource_descriptors.call(&req, self.context(options)).await
    }

    async fn close(&self) {
        self.runtime.state().close().await
    }
}

/// Implements [ConfigServiceV2](super::stub::ConfigServiceV2) using the configured
/// [Transport][gax::transport::Transport].
#[derive(Debug)]
pub struct ConfigServiceV2 {
    runtime: ClientRuntime,
    list_sinks: ApiCallable<ListSinksRequest, ListSinksResponse>,
    get_sink: ApiCallable<GetSinkRequest, LogSink>,
    create_sink: ApiCallable<CreateSinkRequest, LogSink>,
    update_sink: ApiCallable<UpdateSinkRequest, LogSink>,
    delete_sink: ApiCallable<DeleteSinkRequest, gax::empty::Empty>,
}

impl ConfigServiceV2 {
    pub fn new(config: ClientConfig) -> gax::client_builder::Result<Self> {
        let runtime = ClientRuntime::new(
            config,
            config_service_v2::SERVICE,
            config_service_v2::CLIENT_CONFIG,
            crate::DEFAULT_HOST,
            &crate::info::X_GOOG_API_CLIENT,
        )?;
        Ok(Self {
            list_sinks: runtime.callable(&config_service_v2::LIST_SINKS),
            get_sink: runtime.callable(&config_service_v2::GET_SINK),
            create_sink: runtime.callable(&config_service_v2::CREATE_SINK),
            update_sink: runtime.callable(&config_service_v2::UPDATE_SINK),
            delete_sink: runtime.callable(&config_service_v2::DELETE_SINK),
            runtime,
        })
    }

    fn context(&self, options: CallOptions) -> CallContext {
        CallContext::new(options, self.runtime.credentials().clone())
    }
}

impl super::stub::ConfigServiceV2 for ConfigServiceV2 {
    async fn list_sinks(
        &self,
        req: ListSinksRequest,
        options: CallOptions,
    ) -> Result<ListSinksResponse> {
        self.list_sinks.call(&req, self.context(options)).await
    }

    async fn get_sink(
        &self,
        req: GetSinkRequest,
        options: CallOptions,
    ) -> Result<LogSink> {
        self.get_sink.call(&req, self.context(options)).await
    }

    async fn create_sink(
        &self,
        req: CreateSinkRequest,
        options: CallOptions,
    ) -> Result<LogSink> {
        self.create_sink.call(&req, self.context(options)).await
    }

    async fn update_sink(
        &self,
        req: UpdateSinkRequest,
        options: CallOptions,
    ) -> Result<LogSink> {
        self.update_sink.call(&req, self.context(options)).await
    }

    async fn delete_sink(
        &self,
        req: DeleteSinkRequest,
        options: CallOptions,
    ) -> Result<gax::empty::Empty> {
        self.delete_sink.call(&req, self.context(options)).await
    }

    async fn close(&self) {
        self.runtime.state().close().await
    }
}

/// Implements [MetricsServiceV2](super::stub::MetricsServiceV2) using the configured
/// [Transport][gax::transport::Transport].
#[derive(Debug)]
pub struct MetricsServiceV2 {
    runtime: ClientRuntime,
    list_log_metrics: ApiCallable<ListLogMetricsRequest, ListLogMetricsResponse>,
    get_log_metric: ApiCallable<GetLogMetricRequest, LogMetric>,
    create_log_metric: ApiCallable<CreateLogMetricRequest, LogMetric>,
    update_log_metric: ApiCallable<UpdateLogMetricRequest, LogMetric>,
    delete_log_metric: ApiCallable<DeleteLogMetricRequest, gax::empty::Empty>,
}

impl MetricsServiceV2 {
    pub fn new(config: ClientConfig) -> gax::client_builder::Result<Self> {
        let runtime = ClientRuntime::new(
            config,
            metrics_service_v2::SERVICE,
            metrics_service_v2::CLIENT_CONFIG,
            crate::DEFAULT_HOST,
            &crate::info::X_GOOG_API_CLIENT,
        )?;
        Ok(Self {
            list_log_metrics: runtime.callable(&metrics_service_v2::LIST_LOG_METRICS),
            get_log_metric: runtime.callable(&metrics_service_v2::GET_LOG_METRIC),
            create_log_metric: runtime.callable(&metrics_service_v2::CREATE_LOG_METRIC),
            update_log_metric: runtime.callable(&metrics_service_v2::UPDATE_LOG_METRIC),
            delete_log_metric: runtime.callable(&metrics_service_v2::DELETE_LOG_METRIC),
            runtime,
        })
    }

    fn context(&self, options: CallOptions) -> CallContext {
        CallContext::new(options, self.runtime.credentials().clone())
    }
}

impl super::stub::MetricsServiceV2 for MetricsServiceV2 {
    async fn list_log_metrics(
        &self,
        req: ListLogMetricsRequest,
        options: CallOptions,
    ) -> Result<ListLogMetricsResponse> {
        self.list_log_metrics.call(&req, self.context(options)).await
    }

    async fn get_log_metric(
        &self,
        req: GetLogMetricRequest,
        options: CallOptions,
    ) -> Result<LogMetric> {
        self.get_log_metric.call(&req, self.context(options)).await
    }

    async fn create_log_metric(
        &self,
        req: CreateLogMetricRequest,
        options: CallOptions,
    ) -> Result<LogMetric> {
        self.create_log_metric.call(&req, self.context(options)).await
    }

    async fn update_log_metric(
        &self,
        req: UpdateLogMetricRequest,
        options: CallOptions,
    ) -> Result<LogMetric> {
        self.update_log_metric.call(&req, self.context(options)).await
    }

    async fn delete_log_metric(
        &self,
        req: DeleteLogMetricRequest,
        options: CallOptions,
    ) -> Result<gax::empty::Empty> {
        self.delete_log_metric.call(&req, self.context(options)).await
    }

    async fn close(&self) {
        self.runtime.state().close().await
    }
}
