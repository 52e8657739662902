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


pub mod report_errors_service {
    use crate::Result;
    use gax::options::CallOptions;
    use std::sync::Arc;

    /// A builder for [ReportErrorsService][crate::client::ReportErrorsService].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use gapic_errorreporting_v1beta1::*;
    /// # use builder::report_errors_service::ClientBuilder;
    /// # use client::ReportErrorsService;
    /// let builder: ClientBuilder = ReportErrorsService::builder();
    /// let client = builder
    ///     .with_endpoint("https://clouderrorreporting.googleapis.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder = gax::client_builder::ClientBuilder<client::Factory>;

    pub(crate) mod client {
        use super::super::super::client::ReportErrorsService;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = ReportErrorsService;
            async fn build(
                self,
                config: gax::client_builder::internal::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// The request builder for [ReportErrorsService::report_error_event][crate::client::ReportErrorsService::report_error_event] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use gapic_errorreporting_v1beta1::builder;
    /// use builder::report_errors_service::ReportErrorEvent;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ReportErrorEvent {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ReportErrorEvent {
        stub: Arc<dyn crate::stub::dynamic::ReportErrorsService>,
        request: crate::model::ReportErrorEventRequest,
        options: CallOptions,
    }

    impl ReportErrorEvent {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::ReportErrorsService>) -> Self {
            Self {
                stub,
                request: Default::default(),
                options: CallOptions::default(),
            }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ReportErrorEventRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<CallOptions>>(mut self, v: V) -> Self {
            self.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ReportErrorEventResponse> {
            crate::path_templates::validate(
                crate::path_templates::project_name(),
                &self.request.project_name,
                "report_error_event",
            )?;
            (*self.stub)
                .report_error_event(self.request, self.options)
                .await
        }

        /// Sets the value of [project_name][crate::model::ReportErrorEventRequest::project_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_name<T: Into<String>>(mut self, v: T) -> Self {
            self.request.project_name = v.into();
            self
        }

        /// Sets the value of [event][crate::model::ReportErrorEventRequest::event].
        ///
        /// This is a **required** field for requests.
        pub fn set_event<T: Into<crate::model::ReportedErrorEvent>>(mut self, v: T) -> Self {
            self.request.event = Some(v.into());
            self
        }
    }

    impl gax::options::internal::RequestBuilder for ReportErrorEvent {
        fn call_options(&mut self) -> &mut CallOptions {
            &mut self.options
        }
    }
}
