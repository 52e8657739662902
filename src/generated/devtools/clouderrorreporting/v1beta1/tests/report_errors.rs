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

#[cfg(test)]
mod tests {
    use gapic_errorreporting_v1beta1::client::ReportErrorsService;
    use gapic_errorreporting_v1beta1::model::{ReportedErrorEvent, ServiceContext};
    use gapic_test_utils::fake_transport::FakeTransport;
    use gax::call_settings::{BackoffSettings, RetrySettings};
    use gax::error::rpc::Code;
    use gax::options::CallOptionsBuilder;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::time::Duration;

    type Result = anyhow::Result<()>;

    fn event() -> ReportedErrorEvent {
        ReportedErrorEvent::default()
            .set_service_context(ServiceContext::default().set_service("frontend"))
            .set_message("thread 'main' panicked at src/main.rs:3:5")
    }

    #[tokio::test]
    async fn report_error_event() -> Result {
        let fake = FakeTransport::new();
        fake.push_response(json!({}));
        let client = ReportErrorsService::builder()
            .with_transport(fake.clone())
            .with_application("my-app", "1.2.3")
            .build()
            .await?;

        let project_name = ReportErrorsService::format_project_name("my-project-123")?;
        client.report_error_event(project_name, event()).send().await?;

        let requests = fake.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(
            request.method,
            "google.devtools.clouderrorreporting.v1beta1.ReportErrorsService/ReportErrorEvent"
        );
        assert_eq!(
            request.request,
            json!({
                "projectName": "projects/my-project-123",
                "event": {
                    "serviceContext": {"service": "frontend"},
                    "message": "thread 'main' panicked at src/main.rs:3:5",
                },
            })
        );
        let header = request
            .headers
            .get("x-goog-api-client")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(header.contains("my-app/1.2.3"), "{header}");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn not_retried_by_default() -> Result {
        let fake = FakeTransport::new();
        fake.push_status(Code::Unavailable, "try-again");
        fake.push_response(json!({}));
        let client = ReportErrorsService::builder()
            .with_transport(fake.clone())
            .build()
            .await?;

        let err = client
            .report_error_event("projects/p", event())
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.code(), Some(Code::Unavailable), "{err:?}");
        assert_eq!(err.attempt_count(), Some(1), "{err:?}");
        assert_eq!(fake.request_count(), 1);
        assert_eq!(fake.pending(), 1);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn retry_per_call() -> Result {
        let fake = FakeTransport::new();
        fake.push_status(Code::Unavailable, "try-again");
        fake.push_status(Code::Unavailable, "try-again");
        fake.push_response(json!({}));
        let client = ReportErrorsService::builder()
            .with_transport(fake.clone())
            .build()
            .await?;

        let retry = RetrySettings::new([Code::Unavailable], BackoffSettings::default());
        client
            .report_error_event("projects/p", event())
            .with_retry(retry)
            .send()
            .await?;
        assert_eq!(fake.request_count(), 3);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn retry_per_client() -> Result {
        let fake = FakeTransport::new();
        fake.push_status(Code::Unavailable, "try-again");
        fake.push_response(json!({}));
        let retry = RetrySettings::new([Code::Unavailable], BackoffSettings::default());
        let client = ReportErrorsService::builder()
            .with_transport(fake.clone())
            .with_retry("ReportErrorEvent", retry)
            .build()
            .await?;

        client
            .report_error_event("projects/p", event())
            .send()
            .await?;
        assert_eq!(fake.request_count(), 2);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn attempt_timeout() -> Result {
        let fake = FakeTransport::new();
        fake.push_delayed(Duration::from_secs(120), Ok(json!({})));
        let client = ReportErrorsService::builder()
            .with_transport(fake.clone())
            .build()
            .await?;

        let err = client
            .report_error_event("projects/p", event())
            .send()
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        assert_eq!(err.code(), Some(Code::DeadlineExceeded), "{err:?}");
        // The initial_rpc_timeout of the non_idempotent settings.
        assert_eq!(fake.requests()[0].timeout, Some(Duration::from_secs(20)));
        Ok(())
    }

    #[tokio::test]
    async fn malformed_project_name_is_not_sent() -> Result {
        let fake = FakeTransport::new();
        let client = ReportErrorsService::builder()
            .with_transport(fake.clone())
            .build()
            .await?;

        for name in ["my-project", "projects/p/extra", ""] {
            let err = client
                .report_error_event(name, event())
                .send()
                .await
                .unwrap_err();
            assert!(err.is_binding(), "{name} {err:?}");
        }
        assert_eq!(fake.request_count(), 0);
        Ok(())
    }
}
