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

//! A JSON over HTTP [Transport] using `reqwest`.
//!
//! Each RPC is mapped to its REST binding: the fields named in the path
//! template are removed from the request and formatted into the URL, the body
//! field (or all the remaining fields for `*`) is sent as the JSON body, and
//! any other fields are sent as query parameters.

use crate::Result;
use crate::error::Error;
use crate::path_template::PathTemplate;
use crate::transport::{AttemptContext, MethodDescriptor, Transport};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Characters encoded in path variables. `/` is kept, it separates the
/// segments of multi-segment variables.
const PATH_ENCODE_SET: percent_encoding::AsciiSet = percent_encoding::CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'[')
    .add(b']')
    .add(b'^')
    .add(b'|')
    .add(b'\\');

#[derive(Clone, Debug)]
pub struct HttpTransport {
    inner: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// Creates a transport sending requests to `endpoint`, e.g.
    /// `https://logging.googleapis.com`.
    pub fn new<T: Into<String>>(endpoint: T) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Creates a transport using a preconfigured `reqwest` client.
    pub fn with_client<T: Into<String>>(inner: reqwest::Client, endpoint: T) -> Self {
        let endpoint = endpoint.into();
        let endpoint = endpoint.trim_end_matches('/').to_string();
        Self { inner, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn builder(
        &self,
        method: &MethodDescriptor,
        request: Value,
    ) -> Result<reqwest::RequestBuilder> {
        let Value::Object(mut fields) = request else {
            return Err(Error::ser(format!(
                "the request for {} is not a JSON object",
                method.full_name()
            )));
        };
        let path = bind_path(method, &mut fields)?;
        let body = match method.http.body {
            None => None,
            Some("*") => Some(Value::Object(std::mem::take(&mut fields))),
            Some(field) => Some(
                fields
                    .remove(&to_camel_case(field))
                    .unwrap_or_else(|| Value::Object(Map::new())),
            ),
        };
        let query = query_parameters(&fields);

        let mut builder = self
            .inner
            .request(method.http.verb.clone(), format!("{}{path}", self.endpoint));
        if !query.is_empty() {
            builder = builder.query(&query);
        }
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        Ok(builder)
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn invoke(
        &self,
        method: &'static MethodDescriptor,
        request: Value,
        context: AttemptContext,
    ) -> Result<Value> {
        let mut builder = self.builder(method, request)?.headers(context.headers);
        if let Some(timeout) = context.timeout {
            builder = builder.timeout(timeout);
        }
        let response = builder.send().await.map_err(Self::map_send_error)?;
        if !response.status().is_success() {
            return to_http_error(response).await;
        }
        to_http_response(response).await
    }
}

lazy_static::lazy_static! {
    static ref HTTP_TEMPLATES: Mutex<HashMap<&'static str, Arc<PathTemplate>>> =
        Mutex::new(HashMap::new());
}

/// Returns the compiled path template of `method`, compiling it on first use.
fn http_template(method: &MethodDescriptor) -> Result<Arc<PathTemplate>> {
    let path = method.http.path;
    if let Some(t) = HTTP_TEMPLATES.lock().ok().and_then(|m| m.get(path).cloned()) {
        return Ok(t);
    }
    let template = Arc::new(PathTemplate::new(path).map_err(Error::binding)?);
    if let Ok(mut m) = HTTP_TEMPLATES.lock() {
        return Ok(m.entry(path).or_insert(template).clone());
    }
    Ok(template)
}

/// Removes the fields bound by the path template from `fields` and returns the
/// formatted path.
fn bind_path(method: &MethodDescriptor, fields: &mut Map<String, Value>) -> Result<String> {
    let template = http_template(method)?;
    let mut bindings = Vec::new();
    for variable in template.variables().map(str::to_string).collect::<Vec<_>>() {
        let value = match fields.remove(&to_camel_case(&variable)) {
            Some(Value::String(s)) => s,
            Some(v) => v.to_string(),
            None => String::new(),
        };
        let encoded = value
            .split('/')
            .map(|s| percent_encoding::utf8_percent_encode(s, &PATH_ENCODE_SET).to_string())
            .collect::<Vec<_>>()
            .join("/");
        bindings.push((variable, encoded));
    }
    template.render(bindings).map_err(Error::binding)
}

/// Flattens the remaining request fields into query parameters.
///
/// Nested messages use dotted names, e.g. `resource.type`, and repeated
/// fields repeat the parameter.
fn query_parameters(fields: &Map<String, Value>) -> Vec<(String, String)> {
    let mut query = Vec::new();
    for (name, value) in fields {
        flatten(name, value, &mut query);
    }
    query
}

fn flatten(name: &str, value: &Value, query: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::String(s) => query.push((name.to_string(), s.clone())),
        Value::Bool(_) | Value::Number(_) => query.push((name.to_string(), value.to_string())),
        Value::Array(items) => items.iter().for_each(|v| flatten(name, v, query)),
        Value::Object(map) => map
            .iter()
            .for_each(|(k, v)| flatten(&format!("{name}.{k}"), v, query)),
    }
}

fn to_camel_case(name: &str) -> String {
    let mut camel = String::with_capacity(name.len());
    let mut upper = false;
    for c in name.chars() {
        match c {
            '_' => upper = true,
            c if upper => {
                camel.extend(c.to_uppercase());
                upper = false;
            }
            c => camel.push(c),
        }
    }
    camel
}

pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let headers = response.headers().clone();
    let body = response.bytes().await.map_err(Error::io)?;

    let error = match crate::error::rpc::Status::try_from(&body) {
        Ok(status) => Error::service_with_http_metadata(status, Some(status_code), Some(headers)),
        Err(_) => Error::http(status_code, headers, body),
    };
    Err(error)
}

async fn to_http_response(response: reqwest::Response) -> Result<Value> {
    let body = response.bytes().await.map_err(Error::io)?;
    if body.is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice::<Value>(&body).map_err(Error::deser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::rpc::Code;
    use crate::transport::HttpRule;
    use http::{HeaderMap, HeaderValue};
    use serde_json::json;
    use test_case::test_case;
    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    static GET_SINK: MethodDescriptor = MethodDescriptor {
        service: "google.logging.v2.ConfigServiceV2",
        name: "GetSink",
        http: HttpRule {
            verb: http::Method::GET,
            path: "/v2/{sink_name=projects/*/sinks/*}",
            body: None,
        },
    };

    static CREATE_SINK: MethodDescriptor = MethodDescriptor {
        service: "google.logging.v2.ConfigServiceV2",
        name: "CreateSink",
        http: HttpRule {
            verb: http::Method::POST,
            path: "/v2/{parent=projects/*}/sinks",
            body: Some("sink"),
        },
    };

    static CANCEL: MethodDescriptor = MethodDescriptor {
        service: "google.longrunning.Operations",
        name: "CancelOperation",
        http: HttpRule {
            verb: http::Method::POST,
            path: "/v1/{name=operations/**}:cancel",
            body: Some("*"),
        },
    };

    #[test_case("log_name", "logName")]
    #[test_case("name", "name")]
    #[test_case("operation_path", "operationPath")]
    #[test_case("page_token", "pageToken")]
    fn camel_case(input: &str, want: &str) {
        assert_eq!(to_camel_case(input), want);
    }

    #[test]
    fn http_template_compiled_once() -> TestResult {
        let first = http_template(&GET_SINK)?;
        let second = http_template(&GET_SINK)?;
        assert!(Arc::ptr_eq(&first, &second));
        let mut fields = json!({"sinkName": "projects/p/sinks/s"})
            .as_object()
            .cloned()
            .unwrap_or_default();
        bind_path(&GET_SINK, &mut fields)?;
        assert!(Arc::ptr_eq(&first, &http_template(&GET_SINK)?));
        Ok(())
    }

    #[test]
    fn bind_path_basic() -> TestResult {
        let mut fields = json!({"sinkName": "projects/p/sinks/s", "other": 1})
            .as_object()
            .cloned()
            .unwrap_or_default();
        let path = bind_path(&GET_SINK, &mut fields)?;
        assert_eq!(path, "/v2/projects/p/sinks/s");
        assert_eq!(fields.get("sinkName"), None);
        assert_eq!(fields.get("other"), Some(&json!(1)));
        Ok(())
    }

    #[test]
    fn bind_path_encodes() -> TestResult {
        let mut fields = json!({"sinkName": "projects/p/sinks/my sink"})
            .as_object()
            .cloned()
            .unwrap_or_default();
        let path = bind_path(&GET_SINK, &mut fields)?;
        assert_eq!(path, "/v2/projects/p/sinks/my%20sink");
        Ok(())
    }

    #[test]
    fn bind_path_verb() -> TestResult {
        let mut fields = json!({"name": "operations/a/b/c"})
            .as_object()
            .cloned()
            .unwrap_or_default();
        let path = bind_path(&CANCEL, &mut fields)?;
        assert_eq!(path, "/v1/operations/a/b/c:cancel");
        Ok(())
    }

    #[test_case(json!({}); "missing")]
    #[test_case(json!({"sinkName": ""}); "empty")]
    #[test_case(json!({"sinkName": "projects/p/logs/l"}); "mismatch")]
    #[test_case(json!({"sinkName": "projects/p/sinks/s/extra"}); "too long")]
    fn bind_path_errors(input: Value) {
        let mut fields = input.as_object().cloned().unwrap_or_default();
        let got = bind_path(&GET_SINK, &mut fields);
        assert!(got.as_ref().is_err_and(|e| e.is_binding()), "{got:?}");
    }

    #[test]
    fn query_flatten() {
        let fields = json!({
            "filter": "severity>=ERROR",
            "pageSize": 10,
            "resourceNames": ["projects/a", "projects/b"],
            "resource": {"type": "gce_instance", "labels": {"zone": "us-central1-a"}},
            "unset": null,
        });
        let mut got = query_parameters(fields.as_object().unwrap_or(&Map::new()));
        got.sort();
        let want = vec![
            ("filter", "severity>=ERROR"),
            ("pageSize", "10"),
            ("resource.labels.zone", "us-central1-a"),
            ("resource.type", "gce_instance"),
            ("resourceNames", "projects/a"),
            ("resourceNames", "projects/b"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect::<Vec<_>>();
        assert_eq!(got, want);
    }

    #[test]
    fn builder_body_field() -> TestResult {
        let transport = HttpTransport::new("https://logging.googleapis.com/");
        assert_eq!(transport.endpoint(), "https://logging.googleapis.com");
        let request = json!({
            "parent": "projects/p",
            "sink": {"name": "s", "destination": "storage.googleapis.com/b"},
            "uniqueWriterIdentity": true,
        });
        let built = transport.builder(&CREATE_SINK, request)?.build()?;
        assert_eq!(built.method(), http::Method::POST);
        assert_eq!(
            built.url().as_str(),
            "https://logging.googleapis.com/v2/projects/p/sinks?uniqueWriterIdentity=true"
        );
        let body = built
            .body()
            .and_then(|b| b.as_bytes())
            .map(serde_json::from_slice::<Value>)
            .transpose()?;
        assert_eq!(body, Some(json!({"name": "s", "destination": "storage.googleapis.com/b"})));
        Ok(())
    }

    #[test]
    fn builder_body_star() -> TestResult {
        let transport = HttpTransport::new("https://longrunning.googleapis.com");
        let request = json!({"name": "operations/op-123"});
        let built = transport.builder(&CANCEL, request)?.build()?;
        assert_eq!(
            built.url().as_str(),
            "https://longrunning.googleapis.com/v1/operations/op-123:cancel"
        );
        let body = built
            .body()
            .and_then(|b| b.as_bytes())
            .map(serde_json::from_slice::<Value>)
            .transpose()?;
        assert_eq!(body, Some(json!({})));
        Ok(())
    }

    #[test]
    fn builder_not_an_object() {
        let transport = HttpTransport::new("https://logging.googleapis.com");
        let got = transport.builder(&GET_SINK, json!([1, 2]));
        assert!(got.as_ref().is_err_and(|e| e.is_serialization()), "{got:?}");
    }

    #[tokio::test]
    async fn client_http_error_bytes() -> TestResult {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(400)
            .body(r#"{"error": "bad request"}"#)?;
        let response: reqwest::Response = http_resp.into();
        assert!(response.status().is_client_error());
        let response = super::to_http_error::<()>(response).await;
        let err = response.unwrap_err();
        assert_eq!(err.http_status_code(), Some(400));
        assert_eq!(err.code(), Some(Code::InvalidArgument));
        let mut want = HeaderMap::new();
        want.insert("content-type", HeaderValue::from_static("application/json"));
        assert_eq!(err.http_headers(), Some(&want));
        assert_eq!(
            err.http_payload(),
            Some(bytes::Bytes::from(r#"{"error": "bad request"}"#)).as_ref()
        );
        Ok(())
    }

    #[tokio::test]
    async fn client_error_with_status() -> TestResult {
        let body = json!({"error": {
            "code": 404,
            "message": "The thing is not there, oh noes!",
            "status": "NOT_FOUND",
        }});
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(404)
            .body(body.to_string())?;
        let response: reqwest::Response = http_resp.into();
        let err = super::to_http_error::<()>(response).await.unwrap_err();
        assert!(err.is_service(), "{err:?}");
        assert_eq!(err.code(), Some(Code::NotFound));
        assert_eq!(
            err.status().map(|s| s.message.as_str()),
            Some("The thing is not there, oh noes!")
        );
        assert_eq!(err.http_status_code(), Some(404_u16));
        Ok(())
    }

    #[tokio::test]
    async fn empty_response() -> TestResult {
        let http_resp = http::Response::builder().status(200).body("")?;
        let response: reqwest::Response = http_resp.into();
        let got = to_http_response(response).await?;
        assert_eq!(got, json!({}));
        Ok(())
    }

    #[tokio::test]
    async fn bad_response() -> TestResult {
        let http_resp = http::Response::builder().status(200).body("not json")?;
        let response: reqwest::Response = http_resp.into();
        let got = to_http_response(response).await;
        assert!(got.as_ref().is_err_and(|e| e.is_deserialization()), "{got:?}");
        Ok(())
    }
}
