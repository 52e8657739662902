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
    use futures::TryStreamExt;
    use gapic_logging_v2::client::LoggingServiceV2;
    use gapic_logging_v2::model::{LogEntry, LogSeverity, MonitoredResource};
    use gapic_test_utils::fake_transport::FakeTransport;
    use gapic_test_utils::resource_names::random_log_id;
    use gapic_test_utils::tracing::enable_tracing;
    use gapic_test_utils::test_layer::TestLayer;
    use gax::error::rpc::Code;
    use gax::options::CallOptionsBuilder;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::time::Duration;
    use tokio_util::sync::CancellationToken;

    type Result = anyhow::Result<()>;

    async fn new_client(fake: &FakeTransport) -> anyhow::Result<LoggingServiceV2> {
        let client = LoggingServiceV2::builder()
            .with_transport(fake.clone())
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test]
    async fn write_log_entries() -> Result {
        let fake = FakeTransport::new();
        fake.push_response(json!({}));
        let client = new_client(&fake).await?;

        let log_name = LoggingServiceV2::format_log_name("my-project", "my-log")?;
        let entries = [
            LogEntry::default()
                .set_severity(LogSeverity::Warning)
                .set_text_payload("disk almost full"),
            LogEntry::default().set_json_payload(
                json!({"user": "alice", "action": "login"})
                    .as_object()
                    .cloned()
                    .unwrap_or_default(),
            ),
        ];
        client
            .write_log_entries(entries)
            .set_log_name(log_name)
            .set_resource(MonitoredResource::default().set_type("global"))
            .set_labels([("env", "test")])
            .send()
            .await?;

        let requests = fake.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].method,
            "google.logging.v2.LoggingServiceV2/WriteLogEntries"
        );
        assert_eq!(
            requests[0].request,
            json!({
                "logName": "projects/my-project/logs/my-log",
                "resource": {"type": "global"},
                "labels": {"env": "test"},
                "entries": [
                    {"logName": "", "severity": "WARNING", "textPayload": "disk almost full"},
                    {"logName": "", "jsonPayload": {"user": "alice", "action": "login"}},
                ],
            })
        );
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn write_is_not_retried() -> Result {
        let fake = FakeTransport::new();
        fake.push_status(Code::Unavailable, "try-again");
        let client = new_client(&fake).await?;

        let err = client
            .write_log_entries([LogEntry::default().set_text_payload("hello")])
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.code(), Some(Code::Unavailable), "{err:?}");
        assert_eq!(err.attempt_count(), Some(1), "{err:?}");
        assert_eq!(fake.request_count(), 1);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn delete_log_retries_transient_errors() -> Result {
        let fake = FakeTransport::new();
        fake.push_status(Code::Unavailable, "try-again");
        fake.push_status(Code::DeadlineExceeded, "try-again");
        fake.push_response(json!({}));
        let client = new_client(&fake).await?;

        client
            .delete_log("projects/my-project/logs/my-log")
            .send()
            .await?;
        let requests = fake.requests();
        let attempts: Vec<u32> = requests.iter().map(|r| r.attempt).collect();
        assert_eq!(attempts, vec![1, 2, 3]);
        let timeouts: Vec<Option<Duration>> = requests.iter().map(|r| r.timeout).collect();
        assert_eq!(timeouts[0], Some(Duration::from_secs(2)));
        assert_eq!(timeouts[1], Some(Duration::from_secs(3)));
        for r in &requests {
            assert_eq!(r.request, json!({"logName": "projects/my-project/logs/my-log"}));
        }
        Ok(())
    }

    #[tokio::test]
    async fn delete_log_permanent_error() -> Result {
        let fake = FakeTransport::new();
        fake.push_status(Code::PermissionDenied, "nope");
        let client = new_client(&fake).await?;

        let log_name = LoggingServiceV2::format_log_name("my-project", &random_log_id())?;
        let err = client
            .delete_log(log_name)
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.code(), Some(Code::PermissionDenied), "{err:?}");
        assert_eq!(
            err.method(),
            Some("google.logging.v2.LoggingServiceV2/DeleteLog"),
            "{err:?}"
        );
        assert_eq!(fake.request_count(), 1);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn retries_exhausted() -> Result {
        let _guard = enable_tracing();
        let fake = FakeTransport::new();
        fake.set_fallback(Code::Unavailable);
        let client = new_client(&fake).await?;

        let err = client
            .delete_log("projects/my-project/logs/my-log")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        let attempts = err.attempt_count().unwrap_or_default();
        assert!(attempts > 1, "{err:?}");
        assert_eq!(fake.request_count(), attempts as usize);
        assert!(
            err.elapsed().is_some_and(|e| e <= Duration::from_secs(45)),
            "{err:?}"
        );
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn per_call_timeout_limits_retries() -> Result {
        let fake = FakeTransport::new();
        fake.set_fallback(Code::Unavailable);
        let client = new_client(&fake).await?;

        let err = client
            .delete_log("projects/my-project/logs/my-log")
            .with_timeout(Duration::from_secs(1))
            .send()
            .await
            .unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        assert!(
            err.elapsed().is_some_and(|e| e <= Duration::from_secs(1)),
            "{err:?}"
        );
        for r in fake.requests() {
            assert!(
                r.timeout.is_some_and(|t| t <= Duration::from_secs(1)),
                "{r:?}"
            );
        }
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn without_retry() -> Result {
        let fake = FakeTransport::new();
        fake.push_status(Code::Unavailable, "try-again");
        fake.push_response(json!({}));
        let client = new_client(&fake).await?;

        let err = client
            .delete_log("projects/my-project/logs/my-log")
            .without_retry()
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.code(), Some(Code::Unavailable), "{err:?}");
        assert_eq!(fake.request_count(), 1);
        assert_eq!(fake.requests()[0].timeout, Some(Duration::from_secs(30)));
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation() -> Result {
        let fake = FakeTransport::new();
        fake.push_delayed(Duration::from_secs(10), Ok(json!({})));
        let client = new_client(&fake).await?;

        let token = CancellationToken::new();
        let call = client
            .list_monitored_resource_descriptors()
            .with_cancellation(token.clone())
            .send();
        let cancel = async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            token.cancel();
        };
        let (result, _) = tokio::join!(call, cancel);
        let err = result.unwrap_err();
        assert!(err.is_cancelled(), "{err:?}");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn deadline() -> Result {
        let fake = FakeTransport::new();
        fake.push_delayed(Duration::from_secs(10), Ok(json!({})));
        let client = new_client(&fake).await?;

        let deadline = tokio::time::Instant::now() + Duration::from_millis(250);
        let err = client
            .list_monitored_resource_descriptors()
            .with_deadline(deadline)
            .send()
            .await
            .unwrap_err();
        assert!(err.is_cancelled(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn list_log_entries_by_page() -> Result {
        let fake = FakeTransport::new();
        fake.push_response(json!({
            "entries": [{"logName": "projects/p/logs/a", "textPayload": "one"}],
            "nextPageToken": "t2",
        }));
        fake.push_response(json!({
            "entries": [{"logName": "projects/p/logs/a", "textPayload": "two"}],
        }));
        let client = new_client(&fake).await?;

        let pages = client
            .list_log_entries(["projects/p"])
            .set_filter("severity>=ERROR")
            .set_order_by("timestamp desc")
            .by_page()
            .try_collect::<Vec<_>>()
            .await?;
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].next_page_token, "t2");
        assert_eq!(
            pages[1].entries[0].text_payload().map(String::as_str),
            Some("two")
        );

        let requests = fake.requests();
        assert_eq!(
            requests[1].request,
            json!({
                "resourceNames": ["projects/p"],
                "filter": "severity>=ERROR",
                "orderBy": "timestamp desc",
                "pageToken": "t2",
            })
        );
        // ListLogEntries uses the "list" retry params.
        assert_eq!(requests[0].timeout, Some(Duration::from_secs(7)));
        Ok(())
    }

    #[tokio::test]
    async fn list_monitored_resource_descriptors_by_item() -> Result {
        let fake = FakeTransport::new();
        fake.push_response(json!({
            "resourceDescriptors": [{"type": "gce_instance"}, {"type": "global"}],
            "nextPageToken": "t2",
        }));
        fake.push_response(json!({"resourceDescriptors": [{"type": "k8s_container"}]}));
        let client = new_client(&fake).await?;

        let types = client
            .list_monitored_resource_descriptors()
            .set_page_size(2)
            .by_item()
            .map_ok(|d| d.r#type)
            .try_collect::<Vec<_>>()
            .await?;
        assert_eq!(types, vec!["gce_instance", "global", "k8s_container"]);
        assert_eq!(fake.request_count(), 2);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn tracing_span() -> Result {
        let (layer, _guard) = TestLayer::initialize();
        let fake = FakeTransport::new();
        fake.push_status(Code::Unavailable, "try-again");
        fake.push_response(json!({}));
        let client = LoggingServiceV2::builder()
            .with_transport(fake.clone())
            .with_tracing()
            .build()
            .await?;

        client.delete_log("projects/p/logs/l").send().await?;

        let spans = layer.spans();
        let span = spans
            .iter()
            .find(|s| s.name == "gapic_call")
            .ok_or_else(|| anyhow::anyhow!("missing span in {spans:?}"))?;
        assert_eq!(
            span.attributes.get("rpc.service").map(String::as_str),
            Some("google.logging.v2.LoggingServiceV2")
        );
        assert_eq!(
            span.attributes.get("rpc.method").map(String::as_str),
            Some("DeleteLog")
        );
        let retries = layer
            .events()
            .into_iter()
            .filter(|e| {
                e.level == tracing::Level::DEBUG && e.attributes.contains_key("attempt")
            })
            .count();
        assert_eq!(retries, 1);
        Ok(())
    }

    #[tokio::test]
    async fn close() -> Result {
        let fake = FakeTransport::new();
        let client = new_client(&fake).await?;
        client.close().await;

        let err = client
            .delete_log("projects/p/logs/l")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_closed(), "{err:?}");
        assert_eq!(fake.request_count(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn close_waits_for_in_flight_calls() -> Result {
        let fake = FakeTransport::new();
        fake.push_delayed(Duration::from_millis(50), Ok(json!({})));
        let client = new_client(&fake).await?;

        let call = client.delete_log("projects/p/logs/l").send();
        let close = async {
            tokio::task::yield_now().await;
            client.close().await;
        };
        let (result, _) = tokio::join!(call, close);
        result?;
        assert_eq!(fake.request_count(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn malformed_log_name_is_not_sent() -> Result {
        let fake = FakeTransport::new();
        let client = new_client(&fake).await?;

        let err = client.delete_log("my-log").send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        let source = std::error::Error::source(&err)
            .and_then(|e| e.downcast_ref::<gax::path_template::Error>());
        assert!(
            matches!(source, Some(gax::path_template::Error::Validation { method, .. }) if method == "delete_log"),
            "{err:?}"
        );
        let err = client
            .write_log_entries([LogEntry::default().set_text_payload("hello")])
            .set_log_name("projects/p/sinks/s")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert_eq!(fake.request_count(), 0);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn spawned_calls() -> Result {
        let fake = FakeTransport::new();
        fake.push_status(Code::Unavailable, "try-again");
        fake.push_response(json!({}));
        fake.push_response(json!({}));
        let client = new_client(&fake).await?;

        let tasks = ["a", "b"].map(|id| {
            let client = client.clone();
            tokio::spawn(async move {
                client
                    .delete_log(format!("projects/my-project/logs/{id}"))
                    .send()
                    .await
            })
        });
        for task in tasks {
            task.await??;
        }
        assert_eq!(fake.request_count(), 3);
        Ok(())
    }
}
