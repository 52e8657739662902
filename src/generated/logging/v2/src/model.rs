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

use std::collections::HashMap;
use std::time::Duration;
use time::OffsetDateTime;

/// An object representing a resource that can be used for monitoring,
/// logging, billing, or other purposes.
///
/// For example, a Compute Engine VM instance is `{"type": "gce_instance",
/// "labels": {"instance_id": "12345678901234", "zone": "us-central1-a"}}`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MonitoredResource {
    /// The monitored resource type, which must match the `type` field of a
    /// [MonitoredResourceDescriptor].
    #[serde(rename = "type")]
    pub r#type: String,

    /// Values for all of the labels listed in the associated monitored
    /// resource descriptor.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
}

impl MonitoredResource {
    /// Sets the value of [r#type][MonitoredResource::r#type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }

    /// Sets the value of [labels][MonitoredResource::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// Describes the schema of a [MonitoredResource] using a type name and a set
/// of labels.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MonitoredResourceDescriptor {
    /// The resource name of the monitored resource descriptor.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// The monitored resource type, for example `gce_instance`.
    #[serde(rename = "type")]
    pub r#type: String,

    /// A concise name for the monitored resource type that might be displayed
    /// in user interfaces.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub display_name: String,

    /// A detailed description of the monitored resource type.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// The labels used to describe instances of this monitored resource type.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<LabelDescriptor>,
}

impl MonitoredResourceDescriptor {
    /// Sets the value of [r#type][MonitoredResourceDescriptor::r#type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }

    /// Sets the value of [display_name][MonitoredResourceDescriptor::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [labels][MonitoredResourceDescriptor::labels].
    pub fn set_labels<T: IntoIterator<Item = LabelDescriptor>>(mut self, v: T) -> Self {
        self.labels = v.into_iter().collect();
        self
    }
}

/// A description of a label.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LabelDescriptor {
    /// The label key.
    pub key: String,

    /// The type of data that can be assigned to the label.
    #[serde(skip_serializing_if = "is_default")]
    pub value_type: label_descriptor::ValueType,

    /// A human-readable description for the label.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl LabelDescriptor {
    /// Sets the value of [key][LabelDescriptor::key].
    pub fn set_key<T: Into<String>>(mut self, v: T) -> Self {
        self.key = v.into();
        self
    }

    /// Sets the value of [value_type][LabelDescriptor::value_type].
    pub fn set_value_type(mut self, v: label_descriptor::ValueType) -> Self {
        self.value_type = v;
        self
    }
}

/// Defines additional types related to [LabelDescriptor].
pub mod label_descriptor {
    /// Value types that can be used as label values.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    #[non_exhaustive]
    pub enum ValueType {
        /// A variable-length string. This is the default.
        #[default]
        String,
        /// Boolean; true or false.
        Bool,
        /// A 64-bit signed integer.
        Int64,
    }
}

/// The severity of the event described in a log entry.
///
/// Severities are ordered, `Debug < Info < ... < Emergency`. The JSON
/// encoding uses the enum names, e.g. `"ERROR"`.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum LogSeverity {
    /// The log entry has no assigned severity level.
    #[default]
    Default,
    /// Debug or trace information.
    Debug,
    /// Routine information, such as ongoing status or performance.
    Info,
    /// Normal but significant events, such as start up, shut down, or
    /// a configuration change.
    Notice,
    /// Warning events might cause problems.
    Warning,
    /// Error events are likely to cause problems.
    Error,
    /// Critical events cause more severe problems or outages.
    Critical,
    /// A person must take an action immediately.
    Alert,
    /// One or more systems are unusable.
    Emergency,
}

impl LogSeverity {
    /// The numeric value of the severity, e.g. `500` for [LogSeverity::Error].
    pub fn value(&self) -> i32 {
        match self {
            Self::Default => 0,
            Self::Debug => 100,
            Self::Info => 200,
            Self::Notice => 300,
            Self::Warning => 400,
            Self::Error => 500,
            Self::Critical => 600,
            Self::Alert => 700,
            Self::Emergency => 800,
        }
    }
}

/// A common proto for logging HTTP requests.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct HttpRequest {
    /// The request method. Examples: `"GET"`, `"HEAD"`, `"PUT"`, `"POST"`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub request_method: String,

    /// The scheme (http, https), the host name, the path and the query
    /// portion of the URL that was requested.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub request_url: String,

    /// The size of the HTTP request message in bytes, including the request
    /// headers and the request body.
    #[serde(skip_serializing_if = "is_default")]
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub request_size: i64,

    /// The response code indicating the status of response.
    #[serde(skip_serializing_if = "is_default")]
    pub status: i32,

    /// The size of the HTTP response message sent back to the client, in
    /// bytes, including the response headers and the response body.
    #[serde(skip_serializing_if = "is_default")]
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub response_size: i64,

    /// The user agent sent by the client.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub user_agent: String,

    /// The IP address (IPv4 or IPv6) of the client that issued the HTTP
    /// request.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub remote_ip: String,

    /// The IP address (IPv4 or IPv6) of the origin server that the request
    /// was sent to.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub server_ip: String,

    /// The referer URL of the request.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub referer: String,

    /// The request processing latency on the server, from the time the
    /// request was received until the response was sent.
    #[serde(with = "duration", skip_serializing_if = "Option::is_none")]
    pub latency: Option<Duration>,

    /// Whether or not a cache lookup was attempted.
    #[serde(skip_serializing_if = "is_default")]
    pub cache_lookup: bool,

    /// Whether or not an entity was served from cache (with or without
    /// validation).
    #[serde(skip_serializing_if = "is_default")]
    pub cache_hit: bool,

    /// Whether or not the response was validated with the origin server
    /// before being served from cache.
    #[serde(skip_serializing_if = "is_default")]
    pub cache_validated_with_origin_server: bool,

    /// The number of HTTP response bytes inserted into cache.
    #[serde(skip_serializing_if = "is_default")]
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub cache_fill_bytes: i64,

    /// Protocol used for the request. Examples: "HTTP/1.1", "HTTP/2".
    #[serde(skip_serializing_if = "String::is_empty")]
    pub protocol: String,
}

impl HttpRequest {
    /// Sets the value of [request_method][HttpRequest::request_method].
    pub fn set_request_method<T: Into<String>>(mut self, v: T) -> Self {
        self.request_method = v.into();
        self
    }

    /// Sets the value of [request_url][HttpRequest::request_url].
    pub fn set_request_url<T: Into<String>>(mut self, v: T) -> Self {
        self.request_url = v.into();
        self
    }

    /// Sets the value of [request_size][HttpRequest::request_size].
    pub fn set_request_size(mut self, v: i64) -> Self {
        self.request_size = v;
        self
    }

    /// Sets the value of [status][HttpRequest::status].
    pub fn set_status(mut self, v: i32) -> Self {
        self.status = v;
        self
    }

    /// Sets the value of [response_size][HttpRequest::response_size].
    pub fn set_response_size(mut self, v: i64) -> Self {
        self.response_size = v;
        self
    }

    /// Sets the value of [user_agent][HttpRequest::user_agent].
    pub fn set_user_agent<T: Into<String>>(mut self, v: T) -> Self {
        self.user_agent = v.into();
        self
    }

    /// Sets the value of [remote_ip][HttpRequest::remote_ip].
    pub fn set_remote_ip<T: Into<String>>(mut self, v: T) -> Self {
        self.remote_ip = v.into();
        self
    }

    /// Sets the value of [latency][HttpRequest::latency].
    pub fn set_latency<T: Into<Option<Duration>>>(mut self, v: T) -> Self {
        self.latency = v.into();
        self
    }

    /// Sets the value of [protocol][HttpRequest::protocol].
    pub fn set_protocol<T: Into<String>>(mut self, v: T) -> Self {
        self.protocol = v.into();
        self
    }
}

/// An individual entry in a log.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogEntry {
    /// The resource name of the log to which this log entry belongs, e.g.
    /// `projects/my-project/logs/syslog`. The log id must be URL-encoded.
    pub log_name: String,

    /// The monitored resource associated with this log entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<MonitoredResource>,

    /// The log entry payload, which can be one of multiple types.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub payload: Option<log_entry::Payload>,

    /// The time the event described by the log entry occurred.
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<OffsetDateTime>,

    /// The time the log entry was received by Logging. Output only.
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub receive_timestamp: Option<OffsetDateTime>,

    /// The severity of the log entry.
    #[serde(skip_serializing_if = "is_default")]
    pub severity: LogSeverity,

    /// A unique identifier for the log entry.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub insert_id: String,

    /// Information about the HTTP request associated with this log entry,
    /// if applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_request: Option<HttpRequest>,

    /// A map of key, value pairs that provides additional information about
    /// the log entry.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,

    /// Information about an operation associated with the log entry, if
    /// applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<LogEntryOperation>,

    /// The REST resource name of the trace being written to Cloud Trace in
    /// association with this log entry, e.g.
    /// `projects/my-project/traces/06796866738c859f2f19b7cfb3214824`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub trace: String,

    /// The ID of the Cloud Trace span associated with the current operation
    /// in which the log is being written.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub span_id: String,

    /// Source code location information associated with the log entry, if
    /// any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_location: Option<LogEntrySourceLocation>,
}

impl LogEntry {
    /// Sets the value of [log_name][LogEntry::log_name].
    pub fn set_log_name<T: Into<String>>(mut self, v: T) -> Self {
        self.log_name = v.into();
        self
    }

    /// Sets the value of [resource][LogEntry::resource].
    pub fn set_resource<T: Into<Option<MonitoredResource>>>(mut self, v: T) -> Self {
        self.resource = v.into();
        self
    }

    /// Sets the payload to a text payload.
    pub fn set_text_payload<T: Into<String>>(mut self, v: T) -> Self {
        self.payload = Some(log_entry::Payload::TextPayload(v.into()));
        self
    }

    /// Sets the payload to a JSON object payload.
    pub fn set_json_payload(mut self, v: serde_json::Map<String, serde_json::Value>) -> Self {
        self.payload = Some(log_entry::Payload::JsonPayload(v));
        self
    }

    /// Sets the payload to a protocol buffer payload, in its JSON encoding,
    /// including the `@type` field.
    pub fn set_proto_payload<T: Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.payload = Some(log_entry::Payload::ProtoPayload(v.into()));
        self
    }

    /// The text payload, if the payload is set and holds text.
    pub fn text_payload(&self) -> Option<&String> {
        match &self.payload {
            Some(log_entry::Payload::TextPayload(v)) => Some(v),
            _ => None,
        }
    }

    /// The JSON payload, if the payload is set and holds a JSON object.
    pub fn json_payload(&self) -> Option<&serde_json::Map<String, serde_json::Value>> {
        match &self.payload {
            Some(log_entry::Payload::JsonPayload(v)) => Some(v),
            _ => None,
        }
    }

    /// Sets the value of [timestamp][LogEntry::timestamp].
    pub fn set_timestamp<T: Into<Option<OffsetDateTime>>>(mut self, v: T) -> Self {
        self.timestamp = v.into();
        self
    }

    /// Sets the value of [severity][LogEntry::severity].
    pub fn set_severity(mut self, v: LogSeverity) -> Self {
        self.severity = v;
        self
    }

    /// Sets the value of [insert_id][LogEntry::insert_id].
    pub fn set_insert_id<T: Into<String>>(mut self, v: T) -> Self {
        self.insert_id = v.into();
        self
    }

    /// Sets the value of [http_request][LogEntry::http_request].
    pub fn set_http_request<T: Into<Option<HttpRequest>>>(mut self, v: T) -> Self {
        self.http_request = v.into();
        self
    }

    /// Sets the value of [labels][LogEntry::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [operation][LogEntry::operation].
    pub fn set_operation<T: Into<Option<LogEntryOperation>>>(mut self, v: T) -> Self {
        self.operation = v.into();
        self
    }

    /// Sets the value of [trace][LogEntry::trace].
    pub fn set_trace<T: Into<String>>(mut self, v: T) -> Self {
        self.trace = v.into();
        self
    }

    /// Sets the value of [span_id][LogEntry::span_id].
    pub fn set_span_id<T: Into<String>>(mut self, v: T) -> Self {
        self.span_id = v.into();
        self
    }

    /// Sets the value of [source_location][LogEntry::source_location].
    pub fn set_source_location<T: Into<Option<LogEntrySourceLocation>>>(mut self, v: T) -> Self {
        self.source_location = v.into();
        self
    }
}

/// Defines additional types related to [LogEntry].
pub mod log_entry {
    /// The log entry payload.
    #[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    #[non_exhaustive]
    pub enum Payload {
        /// The log entry payload, represented as a protocol buffer in its
        /// JSON encoding.
        ProtoPayload(serde_json::Value),
        /// The log entry payload, represented as a Unicode string (UTF-8).
        TextPayload(String),
        /// The log entry payload, represented as a structure that is
        /// expressed as a JSON object.
        JsonPayload(serde_json::Map<String, serde_json::Value>),
    }
}

/// Additional information about a potentially long-running operation with
/// which a log entry is associated.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogEntryOperation {
    /// An arbitrary operation identifier. Log entries with the same
    /// identifier are assumed to be part of the same operation.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// An arbitrary producer identifier.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub producer: String,

    /// Set this to true if this is the first log entry in the operation.
    #[serde(skip_serializing_if = "is_default")]
    pub first: bool,

    /// Set this to true if this is the last log entry in the operation.
    #[serde(skip_serializing_if = "is_default")]
    pub last: bool,
}

impl LogEntryOperation {
    /// Sets the value of [id][LogEntryOperation::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [producer][LogEntryOperation::producer].
    pub fn set_producer<T: Into<String>>(mut self, v: T) -> Self {
        self.producer = v.into();
        self
    }

    /// Sets the value of [first][LogEntryOperation::first].
    pub fn set_first(mut self, v: bool) -> Self {
        self.first = v;
        self
    }

    /// Sets the value of [last][LogEntryOperation::last].
    pub fn set_last(mut self, v: bool) -> Self {
        self.last = v;
        self
    }
}

/// Additional information about the source code location that produced the
/// log entry.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogEntrySourceLocation {
    /// Source file name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub file: String,

    /// Line within the source file. 1-based; 0 indicates no line number
    /// available.
    #[serde(skip_serializing_if = "is_default")]
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub line: i64,

    /// Human-readable name of the function or method being invoked.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub function: String,
}

impl LogEntrySourceLocation {
    /// Sets the value of [file][LogEntrySourceLocation::file].
    pub fn set_file<T: Into<String>>(mut self, v: T) -> Self {
        self.file = v.into();
        self
    }

    /// Sets the value of [line][LogEntrySourceLocation::line].
    pub fn set_line(mut self, v: i64) -> Self {
        self.line = v;
        self
    }

    /// Sets the value of [function][LogEntrySourceLocation::function].
    pub fn set_function<T: Into<String>>(mut self, v: T) -> Self {
        self.function = v.into();
        self
    }
}

/// The parameters to DeleteLog.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteLogRequest {
    /// The resource name of the log to delete, e.g.
    /// `projects/my-project/logs/syslog`.
    pub log_name: String,
}

impl DeleteLogRequest {
    /// Sets the value of [log_name][DeleteLogRequest::log_name].
    pub fn set_log_name<T: Into<String>>(mut self, v: T) -> Self {
        self.log_name = v.into();
        self
    }
}

/// The parameters to WriteLogEntries.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct WriteLogEntriesRequest {
    /// A default log resource name that is assigned to all log entries in
    /// `entries` that do not specify a value for `log_name`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub log_name: String,

    /// A default monitored resource object that is assigned to all log
    /// entries in `entries` that do not specify a value for `resource`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<MonitoredResource>,

    /// Default labels that are added to the `labels` field of all log
    /// entries in `entries`.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,

    /// The log entries to write.
    pub entries: Vec<LogEntry>,

    /// Whether a batch's valid entries should be written even if some other
    /// entry failed due to a permanent error.
    #[serde(skip_serializing_if = "is_default")]
    pub partial_success: bool,
}

impl WriteLogEntriesRequest {
    /// Sets the value of [log_name][WriteLogEntriesRequest::log_name].
    pub fn set_log_name<T: Into<String>>(mut self, v: T) -> Self {
        self.log_name = v.into();
        self
    }

    /// Sets the value of [resource][WriteLogEntriesRequest::resource].
    pub fn set_resource<T: Into<Option<MonitoredResource>>>(mut self, v: T) -> Self {
        self.resource = v.into();
        self
    }

    /// Sets the value of [labels][WriteLogEntriesRequest::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [entries][WriteLogEntriesRequest::entries].
    pub fn set_entries<T: IntoIterator<Item = LogEntry>>(mut self, v: T) -> Self {
        self.entries = v.into_iter().collect();
        self
    }

    /// Sets the value of [partial_success][WriteLogEntriesRequest::partial_success].
    pub fn set_partial_success(mut self, v: bool) -> Self {
        self.partial_success = v;
        self
    }
}

/// Result returned from WriteLogEntries. Empty.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct WriteLogEntriesResponse {}

/// The parameters to `ListLogEntries`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListLogEntriesRequest {
    /// Names of one or more parent resources from which to retrieve log
    /// entries, e.g. `projects/my-project`.
    pub resource_names: Vec<String>,

    /// A filter that chooses which log entries to return.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub filter: String,

    /// How the results should be sorted: `"timestamp asc"` (default) or
    /// `"timestamp desc"`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub order_by: String,

    /// The maximum number of results to return from this request.
    #[serde(skip_serializing_if = "is_default")]
    pub page_size: i32,

    /// If present, then retrieve the next batch of results from the
    /// preceding call to this method.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub page_token: String,
}

impl ListLogEntriesRequest {
    /// Sets the value of [resource_names][ListLogEntriesRequest::resource_names].
    pub fn set_resource_names<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.resource_names = v.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the value of [filter][ListLogEntriesRequest::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [order_by][ListLogEntriesRequest::order_by].
    pub fn set_order_by<T: Into<String>>(mut self, v: T) -> Self {
        self.order_by = v.into();
        self
    }

    /// Sets the value of [page_size][ListLogEntriesRequest::page_size].
    pub fn set_page_size(mut self, v: i32) -> Self {
        self.page_size = v;
        self
    }

    /// Sets the value of [page_token][ListLogEntriesRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

/// Result returned from `ListLogEntries`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListLogEntriesResponse {
    /// A list of log entries.
    pub entries: Vec<LogEntry>,

    /// If there might be more results than those appearing in this response,
    /// then `nextPageToken` is included.
    pub next_page_token: String,
}

impl ListLogEntriesResponse {
    /// Sets the value of [entries][ListLogEntriesResponse::entries].
    pub fn set_entries<T: IntoIterator<Item = LogEntry>>(mut self, v: T) -> Self {
        self.entries = v.into_iter().collect();
        self
    }

    /// Sets the value of [next_page_token][ListLogEntriesResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for ListLogEntriesResponse {
    type PageItem = LogEntry;

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }

    fn into_items(self) -> Vec<LogEntry> {
        self.entries
    }
}

/// The parameters to ListMonitoredResourceDescriptors
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListMonitoredResourceDescriptorsRequest {
    /// The maximum number of results to return from this request.
    #[serde(skip_serializing_if = "is_default")]
    pub page_size: i32,

    /// If present, then retrieve the next batch of results from the
    /// preceding call to this method.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub page_token: String,
}

impl ListMonitoredResourceDescriptorsRequest {
    /// Sets the value of [page_size][ListMonitoredResourceDescriptorsRequest::page_size].
    pub fn set_page_size(mut self, v: i32) -> Self {
        self.page_size = v;
        self
    }

    /// Sets the value of [page_token][ListMonitoredResourceDescriptorsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

/// Result returned from ListMonitoredResourceDescriptors.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListMonitoredResourceDescriptorsResponse {
    /// A list of resource descriptors.
    pub resource_descriptors: Vec<MonitoredResourceDescriptor>,

    /// If there might be more results than those appearing in this response,
    /// then `nextPageToken` is included.
    pub next_page_token: String,
}

impl ListMonitoredResourceDescriptorsResponse {
    /// Sets the value of [resource_descriptors][ListMonitoredResourceDescriptorsResponse::resource_descriptors].
    pub fn set_resource_descriptors<T>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = MonitoredResourceDescriptor>,
    {
        self.resource_descriptors = v.into_iter().collect();
        self
    }

    /// Sets the value of [next_page_token][ListMonitoredResourceDescriptorsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for ListMonitoredResourceDescriptorsResponse {
    type PageItem = MonitoredResourceDescriptor;

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }

    fn into_items(self) -> Vec<MonitoredResourceDescriptor> {
        self.resource_descriptors
    }
}

/// Describes a sink used to export log entries to a destination outside of
/// Logging.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogSink {
    /// The client-assigned sink identifier, unique within the project, e.g.
    /// `"my-syslog-errors-to-pubsub"`.
    pub name: String,

    /// The export destination, e.g.
    /// `"storage.googleapis.com/my-gcs-bucket"`.
    pub destination: String,

    /// An advanced logs filter. Only log entries matching the filter are
    /// exported.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub filter: String,

    /// The log entry format to use for this sink's exported log entries.
    #[serde(skip_serializing_if = "is_default")]
    pub output_version_format: log_sink::VersionFormat,

    /// An IAM identity under which Logging writes the exported log entries
    /// to the sink's destination. Output only.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub writer_identity: String,

    /// If true, then logs from the child resources of the sink's parent are
    /// also exported.
    #[serde(skip_serializing_if = "is_default")]
    pub include_children: bool,

    /// The time at which this sink starts exporting log entries.
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_time: Option<OffsetDateTime>,

    /// The time at which this sink stops exporting log entries.
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_time: Option<OffsetDateTime>,
}

impl LogSink {
    /// Sets the value of [name][LogSink::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [destination][LogSink::destination].
    pub fn set_destination<T: Into<String>>(mut self, v: T) -> Self {
        self.destination = v.into();
        self
    }

    /// Sets the value of [filter][LogSink::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [output_version_format][LogSink::output_version_format].
    pub fn set_output_version_format(mut self, v: log_sink::VersionFormat) -> Self {
        self.output_version_format = v;
        self
    }

    /// Sets the value of [include_children][LogSink::include_children].
    pub fn set_include_children(mut self, v: bool) -> Self {
        self.include_children = v;
        self
    }

    /// Sets the value of [start_time][LogSink::start_time].
    pub fn set_start_time<T: Into<Option<OffsetDateTime>>>(mut self, v: T) -> Self {
        self.start_time = v.into();
        self
    }

    /// Sets the value of [end_time][LogSink::end_time].
    pub fn set_end_time<T: Into<Option<OffsetDateTime>>>(mut self, v: T) -> Self {
        self.end_time = v.into();
        self
    }
}

/// Defines additional types related to [LogSink].
pub mod log_sink {
    /// Available log entry formats.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    #[non_exhaustive]
    pub enum VersionFormat {
        /// An unspecified format version that will default to V2.
        #[default]
        VersionFormatUnspecified,
        /// `LogEntry` version 2 format.
        V2,
        /// `LogEntry` version 1 format.
        V1,
    }
}

/// The parameters to `ListSinks`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListSinksRequest {
    /// The parent resource whose sinks are to be listed, e.g.
    /// `projects/my-project`.
    pub parent: String,

    /// If present, then retrieve the next batch of results from the
    /// preceding call to this method.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub page_token: String,

    /// The maximum number of results to return from this request.
    #[serde(skip_serializing_if = "is_default")]
    pub page_size: i32,
}

impl ListSinksRequest {
    /// Sets the value of [parent][ListSinksRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [page_token][ListSinksRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [page_size][ListSinksRequest::page_size].
    pub fn set_page_size(mut self, v: i32) -> Self {
        self.page_size = v;
        self
    }
}

/// Result returned from `ListSinks`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListSinksResponse {
    /// A list of sinks.
    pub sinks: Vec<LogSink>,

    /// If there might be more results than appear in this response, then
    /// `nextPageToken` is included.
    pub next_page_token: String,
}

impl ListSinksResponse {
    /// Sets the value of [sinks][ListSinksResponse::sinks].
    pub fn set_sinks<T: IntoIterator<Item = LogSink>>(mut self, v: T) -> Self {
        self.sinks = v.into_iter().collect();
        self
    }

    /// Sets the value of [next_page_token][ListSinksResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for ListSinksResponse {
    type PageItem = LogSink;

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }

    fn into_items(self) -> Vec<LogSink> {
        self.sinks
    }
}

/// The parameters to `GetSink`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetSinkRequest {
    /// The resource name of the sink, e.g.
    /// `projects/my-project/sinks/my-sink`.
    pub sink_name: String,
}

impl GetSinkRequest {
    /// Sets the value of [sink_name][GetSinkRequest::sink_name].
    pub fn set_sink_name<T: Into<String>>(mut self, v: T) -> Self {
        self.sink_name = v.into();
        self
    }
}

/// The parameters to `CreateSink`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateSinkRequest {
    /// The resource in which to create the sink, e.g. `projects/my-project`.
    pub parent: String,

    /// The new sink, whose `name` must not already be in use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sink: Option<LogSink>,

    /// Determines the kind of IAM identity returned as `writer_identity` in
    /// the new sink.
    #[serde(skip_serializing_if = "is_default")]
    pub unique_writer_identity: bool,
}

impl CreateSinkRequest {
    /// Sets the value of [parent][CreateSinkRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [sink][CreateSinkRequest::sink].
    pub fn set_sink<T: Into<Option<LogSink>>>(mut self, v: T) -> Self {
        self.sink = v.into();
        self
    }

    /// Sets the value of [unique_writer_identity][CreateSinkRequest::unique_writer_identity].
    pub fn set_unique_writer_identity(mut self, v: bool) -> Self {
        self.unique_writer_identity = v;
        self
    }
}

/// The parameters to `UpdateSink`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateSinkRequest {
    /// The full resource name of the sink to update, e.g.
    /// `projects/my-project/sinks/my-sink`.
    pub sink_name: String,

    /// The updated sink, whose name is the same identifier that appears as
    /// part of `sink_name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sink: Option<LogSink>,

    /// See [CreateSinkRequest::unique_writer_identity].
    #[serde(skip_serializing_if = "is_default")]
    pub unique_writer_identity: bool,
}

impl UpdateSinkRequest {
    /// Sets the value of [sink_name][UpdateSinkRequest::sink_name].
    pub fn set_sink_name<T: Into<String>>(mut self, v: T) -> Self {
        self.sink_name = v.into();
        self
    }

    /// Sets the value of [sink][UpdateSinkRequest::sink].
    pub fn set_sink<T: Into<Option<LogSink>>>(mut self, v: T) -> Self {
        self.sink = v.into();
        self
    }

    /// Sets the value of [unique_writer_identity][UpdateSinkRequest::unique_writer_identity].
    pub fn set_unique_writer_identity(mut self, v: bool) -> Self {
        self.unique_writer_identity = v;
        self
    }
}

/// The parameters to `DeleteSink`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteSinkRequest {
    /// The full resource name of the sink to delete, e.g.
    /// `projects/my-project/sinks/my-sink`.
    pub sink_name: String,
}

impl DeleteSinkRequest {
    /// Sets the value of [sink_name][DeleteSinkRequest::sink_name].
    pub fn set_sink_name<T: Into<String>>(mut self, v: T) -> Self {
        self.sink_name = v.into();
        self
    }
}

/// Describes a logs-based metric. The value of the metric is the number of
/// log entries that match a logs filter in a given time interval.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogMetric {
    /// The client-assigned metric identifier, e.g. `"severe_errors"`.
    pub name: String,

    /// A description of this metric, which is used in documentation.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// An advanced logs filter, e.g. `"resource.type=gae_app AND severity>=ERROR"`.
    pub filter: String,

    /// The API version that created or updated this metric.
    #[serde(skip_serializing_if = "is_default")]
    pub version: log_metric::ApiVersion,
}

impl LogMetric {
    /// Sets the value of [name][LogMetric::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [description][LogMetric::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = v.into();
        self
    }

    /// Sets the value of [filter][LogMetric::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [version][LogMetric::version].
    pub fn set_version(mut self, v: log_metric::ApiVersion) -> Self {
        self.version = v;
        self
    }
}

/// Defines additional types related to [LogMetric].
pub mod log_metric {
    /// Logging API version.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    #[non_exhaustive]
    pub enum ApiVersion {
        /// Logging API v2.
        #[default]
        V2,
        /// Logging API v1.
        V1,
    }
}

/// The parameters to ListLogMetrics.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListLogMetricsRequest {
    /// The name of the project containing the metrics, e.g.
    /// `projects/my-project`.
    pub parent: String,

    /// If present, then retrieve the next batch of results from the
    /// preceding call to this method.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub page_token: String,

    /// The maximum number of results to return from this request.
    #[serde(skip_serializing_if = "is_default")]
    pub page_size: i32,
}

impl ListLogMetricsRequest {
    /// Sets the value of [parent][ListLogMetricsRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [page_token][ListLogMetricsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [page_size][ListLogMetricsRequest::page_size].
    pub fn set_page_size(mut self, v: i32) -> Self {
        self.page_size = v;
        self
    }
}

/// Result returned from ListLogMetrics.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListLogMetricsResponse {
    /// A list of logs-based metrics.
    pub metrics: Vec<LogMetric>,

    /// If there might be more results than appear in this response, then
    /// `nextPageToken` is included.
    pub next_page_token: String,
}

impl ListLogMetricsResponse {
    /// Sets the value of [metrics][ListLogMetricsResponse::metrics].
    pub fn set_metrics<T: IntoIterator<Item = LogMetric>>(mut self, v: T) -> Self {
        self.metrics = v.into_iter().collect();
        self
    }

    /// Sets the value of [next_page_token][ListLogMetricsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for ListLogMetricsResponse {
    type PageItem = LogMetric;

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }

    fn into_items(self) -> Vec<LogMetric> {
        self.metrics
    }
}

/// The parameters to GetLogMetric.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetLogMetricRequest {
    /// The resource name of the desired metric, e.g.
    /// `projects/my-project/metrics/my-metric`.
    pub metric_name: String,
}

impl GetLogMetricRequest {
    /// Sets the value of [metric_name][GetLogMetricRequest::metric_name].
    pub fn set_metric_name<T: Into<String>>(mut self, v: T) -> Self {
        self.metric_name = v.into();
        self
    }
}

/// The parameters to CreateLogMetric.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateLogMetricRequest {
    /// The resource name of the project in which to create the metric.
    pub parent: String,

    /// The new logs-based metric, which must not have an identifier that
    /// already exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<LogMetric>,
}

impl CreateLogMetricRequest {
    /// Sets the value of [parent][CreateLogMetricRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [metric][CreateLogMetricRequest::metric].
    pub fn set_metric<T: Into<Option<LogMetric>>>(mut self, v: T) -> Self {
        self.metric = v.into();
        self
    }
}

/// The parameters to UpdateLogMetric.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateLogMetricRequest {
    /// The resource name of the metric to update. If the metric does not
    /// exist a new metric is created.
    pub metric_name: String,

    /// The updated metric.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<LogMetric>,
}

impl UpdateLogMetricRequest {
    /// Sets the value of [metric_name][UpdateLogMetricRequest::metric_name].
    pub fn set_metric_name<T: Into<String>>(mut self, v: T) -> Self {
        self.metric_name = v.into();
        self
    }

    /// Sets the value of [metric][UpdateLogMetricRequest::metric].
    pub fn set_metric<T: Into<Option<LogMetric>>>(mut self, v: T) -> Self {
        self.metric = v.into();
        self
    }
}

/// The parameters to DeleteLogMetric.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteLogMetricRequest {
    /// The resource name of the metric to delete.
    pub metric_name: String,
}

impl DeleteLogMetricRequest {
    /// Sets the value of [metric_name][DeleteLogMetricRequest::metric_name].
    pub fn set_metric_name<T: Into<String>>(mut self, v: T) -> Self {
        self.metric_name = v.into();
        self
    }
}

fn is_default<T: Default + PartialEq>(v: &T) -> bool {
    v == &T::default()
}

// Durations use the protobuf JSON encoding: seconds with 0, 3, 6 or 9
// fractional digits followed by `s`, e.g. `"1.500s"`.
mod duration {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};
    use std::time::Duration;

    pub fn serialize<S>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            None => serializer.serialize_none(),
            Some(d) => serializer.serialize_str(&format(d)),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|s| parse(&s).ok_or_else(|| D::Error::custom(format!("invalid duration {s:?}"))))
            .transpose()
    }

    pub(super) fn format(d: &Duration) -> String {
        let (secs, nanos) = (d.as_secs(), d.subsec_nanos());
        match nanos {
            0 => format!("{secs}s"),
            n if n % 1_000_000 == 0 => format!("{secs}.{:03}s", n / 1_000_000),
            n if n % 1_000 == 0 => format!("{secs}.{:06}s", n / 1_000),
            n => format!("{secs}.{n:09}s"),
        }
    }

    pub(super) fn parse(s: &str) -> Option<Duration> {
        let s = s.strip_suffix('s')?;
        let (secs, frac) = s.split_once('.').unwrap_or((s, ""));
        if frac.len() > 9 || !frac.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let secs = secs.parse::<u64>().ok()?;
        let nanos = match frac {
            "" => 0,
            f => format!("{f:0<9}").parse::<u32>().ok()?,
        };
        Some(Duration::new(secs, nanos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;
    use time::macros::datetime;

    #[test]
    fn log_entry_json() -> anyhow::Result<()> {
        let entry = LogEntry::default()
            .set_log_name("projects/p/logs/syslog")
            .set_resource(MonitoredResource::default().set_type("global"))
            .set_text_payload("hello")
            .set_timestamp(datetime!(2025-03-04 05:06:07.5 UTC))
            .set_severity(LogSeverity::Warning)
            .set_labels([("env", "test")])
            .set_source_location(
                LogEntrySourceLocation::default()
                    .set_file("main.rs")
                    .set_line(42),
            );
        let value = serde_json::to_value(&entry)?;
        assert_eq!(
            value,
            json!({
                "logName": "projects/p/logs/syslog",
                "resource": {"type": "global"},
                "textPayload": "hello",
                "timestamp": "2025-03-04T05:06:07.5Z",
                "severity": "WARNING",
                "labels": {"env": "test"},
                "sourceLocation": {"file": "main.rs", "line": "42"},
            })
        );
        let got = serde_json::from_value::<LogEntry>(value)?;
        assert_eq!(got, entry);
        Ok(())
    }

    #[test]
    fn log_entry_json_payload() -> anyhow::Result<()> {
        let payload = json!({"message": "m", "count": 3});
        let map = payload.as_object().cloned().unwrap_or_default();
        let entry = LogEntry::default().set_json_payload(map.clone());
        let value = serde_json::to_value(&entry)?;
        assert_eq!(value, json!({"logName": "", "jsonPayload": payload}));
        let got = serde_json::from_value::<LogEntry>(value)?;
        assert_eq!(got.json_payload(), Some(&map));
        assert_eq!(got.text_payload(), None);
        Ok(())
    }

    #[test]
    fn log_entry_without_payload() -> anyhow::Result<()> {
        let got = serde_json::from_value::<LogEntry>(json!({"logName": "projects/p/logs/l"}))?;
        assert_eq!(got.payload, None);
        assert_eq!(got.severity, LogSeverity::Default);
        Ok(())
    }

    #[test]
    fn severity_order() {
        assert!(LogSeverity::Debug < LogSeverity::Info);
        assert!(LogSeverity::Error < LogSeverity::Emergency);
        assert_eq!(LogSeverity::Error.value(), 500);
        assert_eq!(LogSeverity::default().value(), 0);
    }

    #[test_case(Duration::from_secs(3), "3s")]
    #[test_case(Duration::from_millis(1500), "1.500s")]
    #[test_case(Duration::from_micros(2_000_001), "2.000001s")]
    #[test_case(Duration::new(0, 5), "0.000000005s")]
    fn duration_format(input: Duration, want: &str) {
        assert_eq!(duration::format(&input), want);
        assert_eq!(duration::parse(want), Some(input));
    }

    #[test_case("3"; "missing suffix")]
    #[test_case("1.5.3s"; "two dots")]
    #[test_case("-1s"; "negative")]
    #[test_case("1.0000000001s"; "too precise")]
    fn duration_parse_errors(input: &str) {
        assert_eq!(duration::parse(input), None);
    }

    #[test]
    fn http_request_json() -> anyhow::Result<()> {
        let request = HttpRequest::default()
            .set_request_method("GET")
            .set_status(200)
            .set_response_size(1024)
            .set_latency(Duration::from_millis(250));
        let value = serde_json::to_value(&request)?;
        assert_eq!(
            value,
            json!({
                "requestMethod": "GET",
                "status": 200,
                "responseSize": "1024",
                "latency": "0.250s",
            })
        );
        let got = serde_json::from_value::<HttpRequest>(value)?;
        assert_eq!(got, request);
        Ok(())
    }

    #[test]
    fn sink_json() -> anyhow::Result<()> {
        let sink = LogSink::default()
            .set_name("my-sink")
            .set_destination("storage.googleapis.com/my-bucket")
            .set_output_version_format(log_sink::VersionFormat::V2);
        let value = serde_json::to_value(&sink)?;
        assert_eq!(
            value,
            json!({
                "name": "my-sink",
                "destination": "storage.googleapis.com/my-bucket",
                "outputVersionFormat": "V2",
            })
        );
        Ok(())
    }

    #[test]
    fn metric_defaults() -> anyhow::Result<()> {
        let got = serde_json::from_value::<LogMetric>(json!({"name": "m", "filter": "f"}))?;
        assert_eq!(got, LogMetric::default().set_name("m").set_filter("f"));
        assert_eq!(got.version, log_metric::ApiVersion::V2);
        Ok(())
    }
}
