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

/// Implements a client for the Cloud Error Reporting API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use gapic_errorreporting_v1beta1::client::ReportErrorsService;
/// # use gapic_errorreporting_v1beta1::model::ReportedErrorEvent;
/// let client = ReportErrorsService::builder().build().await?;
/// let project_name = ReportErrorsService::format_project_name("my-project-123")?;
/// let event = ReportedErrorEvent::default().set_message("panicked at src/main.rs:3:5");
/// client.report_error_event(project_name, event).send().await?;
/// # Ok::<(), Box<dyn std::error::Error>>(()) });
/// ```
///
/// # Service Description
///
/// An API for reporting error events.
///
/// # Configuration
///
/// To configure `ReportErrorsService` use the `with_*` methods in the type
/// returned by [builder()][ReportErrorsService::builder]. The default
/// configuration should work for most applications.
///
/// # Pooling and Cloning
///
/// `ReportErrorsService` holds a connection pool internally, it is advised to
/// create one and the reuse it. You do not need to wrap `ReportErrorsService`
/// in an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an
/// `Arc` internally.
#[derive(Clone, Debug)]
pub struct ReportErrorsService {
    inner: Arc<dyn super::stub::dynamic::ReportErrorsService>,
}

impl ReportErrorsService {
    /// Returns a builder for [ReportErrorsService].
    pub fn builder() -> super::builder::report_errors_service::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::report_errors_service::client::Factory,
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::ReportErrorsService + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gax::client_builder::internal::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = crate::transport::ReportErrorsService::new(config)?;
        Ok(Self::from_stub(inner))
    }

    /// Report an individual error event.
    ///
    /// `project_name` is the resource name of the project, in the format
    /// `projects/{project}`, see [format_project_name][Self::format_project_name].
    ///
    /// This method is not idempotent, it is not retried by default.
    pub fn report_error_event(
        &self,
        project_name: impl Into<String>,
        event: impl Into<crate::model::ReportedErrorEvent>,
    ) -> super::builder::report_errors_service::ReportErrorEvent {
        super::builder::report_errors_service::ReportErrorEvent::new(self.inner.clone())
            .set_project_name(project_name)
            .set_event(event)
    }

    /// Closes the client.
    ///
    /// Waits for in-flight calls to complete. Any call started after `close()`
    /// fails with [is_closed()][crate::Error::is_closed].
    pub async fn close(&self) {
        self.inner.close().await
    }

    /// Formats a `projects/{project}` resource name.
    ///
    /// ```
    /// # use gapic_errorreporting_v1beta1::client::ReportErrorsService;
    /// let name = ReportErrorsService::format_project_name("my-project-123")?;
    /// assert_eq!(name, "projects/my-project-123");
    /// # Ok::<(), gax::path_template::Error>(())
    /// ```
    pub fn format_project_name(project: &str) -> Result<String, path_template::Error> {
        crate::path_templates::project_name()?.render([("project", project)])
    }

    /// Parses the `project` from a `projects/{project}` resource name.
    ///
    /// ```
    /// # use gapic_errorreporting_v1beta1::client::ReportErrorsService;
    /// let project = ReportErrorsService::parse_project_from_project_name("projects/my-project-123")?;
    /// assert_eq!(project, "my-project-123");
    /// # Ok::<(), gax::path_template::Error>(())
    /// ```
    pub fn parse_project_from_project_name(name: &str) -> Result<String, path_template::Error> {
        crate::path_templates::project_name()?.extract(name, "project")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn format_project_name() -> anyhow::Result<()> {
        let got = ReportErrorsService::format_project_name("my-project-123")?;
        assert_eq!(got, "projects/my-project-123");
        Ok(())
    }

    #[test]
    fn parse_project_from_project_name() -> anyhow::Result<()> {
        let got = ReportErrorsService::parse_project_from_project_name("projects/my-project-123")?;
        assert_eq!(got, "my-project-123");
        Ok(())
    }

    #[test_case("my/project"; "slash")]
    #[test_case(""; "empty")]
    fn format_invalid(project: &str) {
        let got = ReportErrorsService::format_project_name(project);
        assert!(got.is_err(), "{got:?}");
    }

    #[test_case("projects/p/logs/l"; "too long")]
    #[test_case("organizations/o"; "wrong collection")]
    fn parse_no_match(name: &str) {
        let got = ReportErrorsService::parse_project_from_project_name(name);
        assert!(matches!(got, Err(ref e) if e.is_no_match()), "{got:?}");
    }
}
