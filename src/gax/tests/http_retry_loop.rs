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

//! Verify the api callables use the HTTP transport and the retry loop as
//! expected.
//!
//! The tests use an HTTP server that returns a sequence of responses. The
//! sequence is specific to each test, intended to drive the retry loop as
//! needed for that test.

#[cfg(all(test, feature = "http-transport"))]
mod tests {
    use gapic_gax as gax;
    use gax::api_callable::{ApiCallable, CallContext, CallDescriptors, ClientState, create_api_call};
    use gax::api_header::{GAPIC, XGoogApiClient};
    use gax::call_settings::{BackoffSettings, CallSettings, RetrySettings};
    use gax::error::rpc::Code;
    use gax::http_client::HttpTransport;
    use gax::options::CallOptions;
    use gax::transport::{HttpRule, MethodDescriptor};
    use http::StatusCode;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::{Value, json};
    use std::sync::Arc;
    use std::time::Duration;

    type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

    const API_CLIENT: XGoogApiClient = XGoogApiClient {
        name: "gapic-gax-test",
        version: "0.0.0",
        library_type: GAPIC,
    };

    static GET_THING: MethodDescriptor = MethodDescriptor {
        service: "google.test.v1.TestService",
        name: "GetThing",
        http: HttpRule {
            verb: http::Method::GET,
            path: "/v1/{name=things/*}",
            body: None,
        },
    };

    static CREATE_THING: MethodDescriptor = MethodDescriptor {
        service: "google.test.v1.TestService",
        name: "CreateThing",
        http: HttpRule {
            verb: http::Method::POST,
            path: "/v1/{parent=projects/*}/things",
            body: Some("thing"),
        },
    };

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn no_retry_immediate_success() -> Result<()> {
        let server = start(vec![success()]);
        let call = callable(&server, CallSettings::new(Duration::from_secs(5)), ClientState::new())?;
        let response = call.call(&get_request(), CallContext::default()).await?;
        assert_eq!(response, json!({"status": "done"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_permanent_failure() -> Result<()> {
        let server = start(vec![permanent()]);
        let call = callable(&server, retry_settings(), ClientState::new())?;
        let err = call
            .call(&get_request(), CallContext::default())
            .await
            .unwrap_err();
        assert_eq!(err.code(), Some(Code::InvalidArgument), "{err:?}");
        assert_eq!(err.http_status_code(), Some(400), "{err:?}");
        assert_eq!(err.attempt_count(), Some(1), "{err:?}");
        assert_eq!(err.method(), Some("google.test.v1.TestService/GetThing"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_success() -> Result<()> {
        // Two transient errors and then a success.
        let server = start(vec![transient(), transient(), success()]);
        let call = callable(&server, retry_settings(), ClientState::new())?;
        let response = call.call(&get_request(), CallContext::default()).await?;
        assert_eq!(response, json!({"status": "done"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_disabled_per_call() -> Result<()> {
        let server = start(vec![transient()]);
        let call = callable(&server, retry_settings(), ClientState::new())?;
        let mut options = CallOptions::default();
        options.disable_retry();
        let context = CallContext {
            options,
            ..Default::default()
        };
        let err = call.call(&get_request(), context).await.unwrap_err();
        assert_eq!(err.code(), Some(Code::Unavailable), "{err:?}");
        assert_eq!(err.attempt_count(), Some(1), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_exhausted() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/things/a"))
                .times(1..)
                .respond_with(cycle(vec![to_responder(transient())])),
        );
        let mut backoff = fast_backoff();
        backoff.total_timeout = Duration::from_millis(50);
        backoff.initial_retry_delay = Duration::from_millis(10);
        backoff.max_retry_delay = Duration::from_millis(10);
        let settings = CallSettings::new(Duration::from_secs(5))
            .with_retry(RetrySettings::new([Code::Unavailable], backoff));
        let call = callable(&server, settings, ClientState::new())?;
        let err = call
            .call(&get_request(), CallContext::default())
            .await
            .unwrap_err();
        assert!(err.is_exhausted() || err.is_timeout(), "{err:?}");
        assert!(err.attempt_count().is_some_and(|n| n >= 1), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn request_binding() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/projects/p/things"),
                request::query(url_decoded(contains(("requestId", "r-123")))),
                request::headers(contains(key("x-goog-api-client"))),
                request::body(json_decoded(eq(json!({"id": "t", "size": 3})))),
            ])
            .respond_with(cycle(vec![to_responder(success())])),
        );
        let transport = Arc::new(HttpTransport::new(format!("http://{}", server.addr())));
        let call: ApiCallable<Value, Value> = create_api_call(
            transport,
            &CREATE_THING,
            CallSettings::new(Duration::from_secs(5)),
            descriptors(ClientState::new())?,
        );
        let request = json!({
            "parent": "projects/p",
            "requestId": "r-123",
            "thing": {"id": "t", "size": 3},
        });
        let response = call.call(&request, CallContext::default()).await?;
        assert_eq!(response, json!({"status": "done"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn binding_error() -> Result<()> {
        let server = Server::run();
        let call = callable(&server, retry_settings(), ClientState::new())?;
        let err = call
            .call(&json!({"name": "projects/p/things/a"}), CallContext::default())
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn closed_client() -> Result<()> {
        let server = Server::run();
        let state = ClientState::new();
        let call = callable(&server, retry_settings(), state.clone())?;
        state.close().await;
        let err = call
            .call(&get_request(), CallContext::default())
            .await
            .unwrap_err();
        assert!(err.is_closed(), "{err:?}");
        Ok(())
    }

    fn get_request() -> Value {
        json!({"name": "things/a", "filter": "x"})
    }

    fn success() -> (StatusCode, String) {
        let response = json!({
            "status": "done"
        });
        (StatusCode::OK, response.to_string())
    }

    fn transient() -> (StatusCode, String) {
        let status = json!({"error": {
            "code": StatusCode::SERVICE_UNAVAILABLE.as_u16(),
            "status": "UNAVAILABLE",
            "message": "try-again",
        }});
        (StatusCode::SERVICE_UNAVAILABLE, status.to_string())
    }

    fn permanent() -> (StatusCode, String) {
        let status = json!({"error": {
            "code": StatusCode::BAD_REQUEST.as_u16(),
            "status": "INVALID_ARGUMENT",
            "message": "uh-oh",
        }});
        (StatusCode::BAD_REQUEST, status.to_string())
    }

    fn fast_backoff() -> BackoffSettings {
        BackoffSettings {
            initial_retry_delay: Duration::from_millis(1),
            retry_delay_multiplier: 1.0,
            max_retry_delay: Duration::from_millis(1),
            initial_rpc_timeout: Duration::from_secs(5),
            rpc_timeout_multiplier: 1.0,
            max_rpc_timeout: Duration::from_secs(5),
            total_timeout: Duration::from_secs(30),
        }
    }

    fn retry_settings() -> CallSettings {
        CallSettings::new(Duration::from_secs(5))
            .with_retry(RetrySettings::new([Code::Unavailable], fast_backoff()))
    }

    fn descriptors(state: Arc<ClientState>) -> Result<CallDescriptors> {
        Ok(CallDescriptors {
            api_client_header: API_CLIENT.to_header(None)?,
            state,
            tracing: false,
        })
    }

    fn callable(
        server: &Server,
        settings: CallSettings,
        state: Arc<ClientState>,
    ) -> Result<ApiCallable<Value, Value>> {
        let transport = Arc::new(HttpTransport::new(format!("http://{}", server.addr())));
        Ok(create_api_call(transport, &GET_THING, settings, descriptors(state)?))
    }

    fn start(responses: Vec<(StatusCode, String)>) -> Server {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/things/a"),
                request::query(url_decoded(contains(("filter", "x")))),
            ])
            .times(responses.len())
            .respond_with(cycle(responses.into_iter().map(to_responder).collect())),
        );
        server
    }

    fn to_responder((status, response): (StatusCode, String)) -> Box<dyn Responder> {
        Box::new(
            status_code(status.as_u16())
                .insert_header("Content-Type", "application/json")
                .body(response),
        )
    }
}
