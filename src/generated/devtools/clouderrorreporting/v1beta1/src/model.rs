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

use time::OffsetDateTime;

/// A request for reporting an individual error event.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ReportErrorEventRequest {
    /// The resource name of the Google Cloud Platform project, in the format
    /// `projects/{project}`.
    pub project_name: String,

    /// The error event to be reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<ReportedErrorEvent>,
}

impl ReportErrorEventRequest {
    /// Sets the value of [project_name][ReportErrorEventRequest::project_name].
    pub fn set_project_name<T: Into<String>>(mut self, v: T) -> Self {
        self.project_name = v.into();
        self
    }

    /// Sets the value of [event][ReportErrorEventRequest::event].
    pub fn set_event<T: Into<Option<ReportedErrorEvent>>>(mut self, v: T) -> Self {
        self.event = v.into();
        self
    }
}

/// Response for reporting an individual error event.
///
/// Intentionally empty, the service may add fields in the future.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ReportErrorEventResponse {}

/// An error event which is reported to the Error Reporting system.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ReportedErrorEvent {
    /// The time when the event occurred. If not provided, the time when the
    /// event was received by the service is used.
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub event_time: Option<OffsetDateTime>,

    /// The service context in which this error has occurred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_context: Option<ServiceContext>,

    /// The error message.
    ///
    /// If no `context.report_location` is provided, the message must contain
    /// a header and a stack trace in one of the supported formats.
    pub message: String,

    /// A description of the context in which the error occurred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ErrorContext>,
}

impl ReportedErrorEvent {
    /// Sets the value of [event_time][ReportedErrorEvent::event_time].
    pub fn set_event_time<T: Into<Option<OffsetDateTime>>>(mut self, v: T) -> Self {
        self.event_time = v.into();
        self
    }

    /// Sets the value of [service_context][ReportedErrorEvent::service_context].
    pub fn set_service_context<T: Into<Option<ServiceContext>>>(mut self, v: T) -> Self {
        self.service_context = v.into();
        self
    }

    /// Sets the value of [message][ReportedErrorEvent::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the value of [context][ReportedErrorEvent::context].
    pub fn set_context<T: Into<Option<ErrorContext>>>(mut self, v: T) -> Self {
        self.context = v.into();
        self
    }
}

/// Describes a running service that sends errors.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ServiceContext {
    /// An identifier of the service, such as the name of the executable, job,
    /// or Google App Engine service name.
    pub service: String,

    /// Represents the source code version that the developer provided.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,

    /// Type of the MonitoredResource. Set by the service, not the client.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resource_type: String,
}

impl ServiceContext {
    /// Sets the value of [service][ServiceContext::service].
    pub fn set_service<T: Into<String>>(mut self, v: T) -> Self {
        self.service = v.into();
        self
    }

    /// Sets the value of [version][ServiceContext::version].
    pub fn set_version<T: Into<String>>(mut self, v: T) -> Self {
        self.version = v.into();
        self
    }

    /// Sets the value of [resource_type][ServiceContext::resource_type].
    pub fn set_resource_type<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_type = v.into();
        self
    }
}

/// A description of the context in which an error occurred.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ErrorContext {
    /// The HTTP request which was processed when the error was triggered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_request: Option<HttpRequestContext>,

    /// The user who caused or was affected by the crash.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub user: String,

    /// The location in the source code where the decision was made to
    /// report the error, usually the place where it was logged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_location: Option<SourceLocation>,
}

impl ErrorContext {
    /// Sets the value of [http_request][ErrorContext::http_request].
    pub fn set_http_request<T: Into<Option<HttpRequestContext>>>(mut self, v: T) -> Self {
        self.http_request = v.into();
        self
    }

    /// Sets the value of [user][ErrorContext::user].
    pub fn set_user<T: Into<String>>(mut self, v: T) -> Self {
        self.user = v.into();
        self
    }

    /// Sets the value of [report_location][ErrorContext::report_location].
    pub fn set_report_location<T: Into<Option<SourceLocation>>>(mut self, v: T) -> Self {
        self.report_location = v.into();
        self
    }
}

/// HTTP request data that is related to a reported error.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct HttpRequestContext {
    /// The type of HTTP request, such as `GET`, `POST`, etc.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub method: String,

    /// The URL of the request.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,

    /// The user agent information that is provided with the request.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub user_agent: String,

    /// The referrer information that is provided with the request.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub referrer: String,

    /// The HTTP response status code for the request.
    #[serde(skip_serializing_if = "is_default")]
    pub response_status_code: i32,

    /// The IP address from which the request originated.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub remote_ip: String,
}

impl HttpRequestContext {
    /// Sets the value of [method][HttpRequestContext::method].
    pub fn set_method<T: Into<String>>(mut self, v: T) -> Self {
        self.method = v.into();
        self
    }

    /// Sets the value of [url][HttpRequestContext::url].
    pub fn set_url<T: Into<String>>(mut self, v: T) -> Self {
        self.url = v.into();
        self
    }

    /// Sets the value of [user_agent][HttpRequestContext::user_agent].
    pub fn set_user_agent<T: Into<String>>(mut self, v: T) -> Self {
        self.user_agent = v.into();
        self
    }

    /// Sets the value of [referrer][HttpRequestContext::referrer].
    pub fn set_referrer<T: Into<String>>(mut self, v: T) -> Self {
        self.referrer = v.into();
        self
    }

    /// Sets the value of [response_status_code][HttpRequestContext::response_status_code].
    pub fn set_response_status_code(mut self, v: i32) -> Self {
        self.response_status_code = v;
        self
    }

    /// Sets the value of [remote_ip][HttpRequestContext::remote_ip].
    pub fn set_remote_ip<T: Into<String>>(mut self, v: T) -> Self {
        self.remote_ip = v.into();
        self
    }
}

/// Indicates a location in the source code of the service for which errors
/// are reported.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SourceLocation {
    /// The source code filename, which can include a truncated relative path,
    /// or a full path from a production machine.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub file_path: String,

    /// 1-based. 0 indicates that the line number is unknown.
    #[serde(skip_serializing_if = "is_default")]
    pub line_number: i32,

    /// Human-readable name of a function or method.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub function_name: String,
}

impl SourceLocation {
    /// Sets the value of [file_path][SourceLocation::file_path].
    pub fn set_file_path<T: Into<String>>(mut self, v: T) -> Self {
        self.file_path = v.into();
        self
    }

    /// Sets the value of [line_number][SourceLocation::line_number].
    pub fn set_line_number(mut self, v: i32) -> Self {
        self.line_number = v;
        self
    }

    /// Sets the value of [function_name][SourceLocation::function_name].
    pub fn set_function_name<T: Into<String>>(mut self, v: T) -> Self {
        self.function_name = v.into();
        self
    }
}

fn is_default<T: Default + PartialEq>(v: &T) -> bool {
    v == &T::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use time::macros::datetime;

    #[test]
    fn event_json() -> anyhow::Result<()> {
        let event = ReportedErrorEvent::default()
            .set_event_time(datetime!(2025-01-02 03:04:05 UTC))
            .set_service_context(
                ServiceContext::default()
                    .set_service("frontend")
                    .set_version("v1.2"),
            )
            .set_message("boom")
            .set_context(
                ErrorContext::default()
                    .set_http_request(
                        HttpRequestContext::default()
                            .set_method("GET")
                            .set_response_status_code(500),
                    )
                    .set_report_location(
                        SourceLocation::default()
                            .set_file_path("src/main.rs")
                            .set_line_number(42)
                            .set_function_name("main"),
                    ),
            );
        let value = serde_json::to_value(&event)?;
        assert_eq!(
            value,
            json!({
                "eventTime": "2025-01-02T03:04:05Z",
                "serviceContext": {"service": "frontend", "version": "v1.2"},
                "message": "boom",
                "context": {
                    "httpRequest": {"method": "GET", "responseStatusCode": 500},
                    "reportLocation": {
                        "filePath": "src/main.rs",
                        "lineNumber": 42,
                        "functionName": "main",
                    },
                },
            })
        );
        let got = serde_json::from_value::<ReportedErrorEvent>(value)?;
        assert_eq!(got, event);
        Ok(())
    }

    #[test]
    fn missing_fields_use_defaults() -> anyhow::Result<()> {
        let got = serde_json::from_value::<ReportedErrorEvent>(json!({"message": "m"}))?;
        assert_eq!(got, ReportedErrorEvent::default().set_message("m"));
        let got = serde_json::from_value::<ReportErrorEventResponse>(json!({}))?;
        assert_eq!(got, ReportErrorEventResponse::default());
        Ok(())
    }
}
