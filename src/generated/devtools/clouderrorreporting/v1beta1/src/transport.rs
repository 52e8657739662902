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
use crate::model::{ReportErrorEventRequest, ReportErrorEventResponse};
use gax::api_callable::{ApiCallable, CallContext};
use gax::client_builder::internal::{ClientConfig, ClientRuntime};
use gax::options::CallOptions;
use gax::transport::{HttpRule, MethodDescriptor};

const SERVICE: &str = "google.devtools.clouderrorreporting.v1beta1.ReportErrorsService";
const CLIENT_CONFIG: &str = include_str!("resources/report_errors_service_client_config.json");

static REPORT_ERROR_EVENT: MethodDescriptor = MethodDescriptor {
    service: SERVICE,
    name: "ReportErrorEvent",
    http: HttpRule {
        verb: http::Method::POST,
        path: "/v1beta1/{project_name=projects/*}/events:report",
        body: Some("event"),
    },
};

/// Implements [ReportErrorsService](super::stub::ReportErrorsService) using
/// the configured [Transport][gax::transport::Transport].
#[derive(Debug)]
pub struct ReportErrorsService {
    runtime: ClientRuntime,
    report_error_event: ApiCallable<ReportErrorEventRequest, ReportErrorEventResponse>,
}

impl ReportErrorsService {
    pub fn new(config: ClientConfig) -> gax::client_builder::Result<Self> {
        let runtime = ClientRuntime::new(
            config,
            SERVICE,
            CLIENT_CONFIG,
            crate::DEFAULT_HOST,
            &crate::info::X_GOOG_API_CLIENT,
        )?;
        Ok(Self {
            report_error_event: runtime.callable(&REPORT_ERROR_EVENT),
            runtime,
        })
    }
}

impl super::stub::ReportErrorsService for ReportErrorsService {
    async fn report_error_event(
        &self,
        req: ReportErrorEventRequest,
        options: CallOptions,
    ) -> Result<ReportErrorEventResponse> {
        let context = CallContext::new(options, self.runtime.credentials().clone());
        self.report_error_event.call(&req, context).await
    }

    async fn close(&self) {
        self.runtime.state().close().await
    }
}
