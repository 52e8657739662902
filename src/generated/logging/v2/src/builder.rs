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

pub mod logging_service_v2 {
    use crate::Result;
    use gax::options::CallOptions;
    use std::sync::Arc;

    /// A builder for [LoggingServiceV2][crate::client::LoggingServiceV2].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use gapic_logging_v2::*;
    /// # use builder::logging_service_v2::ClientBuilder;
    /// # use client::LoggingServiceV2;
    /// let builder: ClientBuilder = LoggingServiceV2::builder();
    /// let client = builder
    ///     .with_endpoint("https://logging.googleapis.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder = gax::client_builder::ClientBuilder<client::Factory>;

    pub(crate) mod client {
        use super::super::super::client::LoggingServiceV2;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = LoggingServiceV2;
            async fn build(
                self,
                config: gax::client_builder::internal::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::LoggingServiceV2] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: Arc<dyn crate::stub::dynamic::LoggingServiceV2>,
        request: R,
        options: CallOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::LoggingServiceV2>) -> Self {
            Self {
                stub,
                request: R::default(),
                options: CallOptions::default(),
            }
        }
    }

    /// The request builder for [LoggingServiceV2::delete_log][crate::client::LoggingServiceV2::delete_log] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteLog(RequestBuilder<crate::model::DeleteLogRequest>);

    impl DeleteLog {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::LoggingServiceV2>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteLogRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<CallOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::empty::Empty> {
            crate::path_templates::validate(
                crate::path_templates::log_name(),
                &self.0.request.log_name,
                "delete_log",
            )?;
            (*self.0.stub)
                .delete_log(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [log_name][crate::model::DeleteLogRequest::log_name].
        pub fn set_log_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.log_name = v.into();
            self
        }
    }

    impl gax::options::internal::RequestBuilder for DeleteLog {
        fn call_options(&mut self) -> &mut CallOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LoggingServiceV2::write_log_entries][crate::client::LoggingServiceV2::write_log_entries] calls.
    #[derive(Clone, Debug)]
    pub struct WriteLogEntries(RequestBuilder<crate::model::WriteLogEntriesRequest>);

    impl WriteLogEntries {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::LoggingServiceV2>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::WriteLogEntriesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<CallOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::WriteLogEntriesResponse> {
            if !self.0.request.log_name.is_empty() {
                crate::path_templates::validate(
                    crate::path_templates::log_name(),
                    &self.0.request.log_name,
                    "write_log_entries",
                )?;
            }
            (*self.0.stub)
                .write_log_entries(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [log_name][crate::model::WriteLogEntriesRequest::log_name].
        pub fn set_log_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.log_name = v.into();
            self
        }

        /// Sets the value of [resource][crate::model::WriteLogEntriesRequest::resource].
        pub fn set_resource<T: Into<crate::model::MonitoredResource>>(mut self, v: T) -> Self {
            self.0.request.resource = Some(v.into());
            self
        }

        /// Sets the value of [labels][crate::model::WriteLogEntriesRequest::labels].
        pub fn set_labels<T, K, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = (K, V)>,
            K: Into<String>,
            V: Into<String>,
        {
            self.0.request.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
            self
        }

        /// Sets the value of [entries][crate::model::WriteLogEntriesRequest::entries].
        pub fn set_entries<T: IntoIterator<Item = crate::model::LogEntry>>(mut self, v: T) -> Self {
            self.0.request.entries = v.into_iter().collect();
            self
        }

        /// Sets the value of [partial_success][crate::model::WriteLogEntriesRequest::partial_success].
        pub fn set_partial_success(mut self, v: bool) -> Self {
            self.0.request.partial_success = v;
            self
        }
    }

    impl gax::options::internal::RequestBuilder for WriteLogEntries {
        fn call_options(&mut self) -> &mut CallOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LoggingServiceV2::list_log_entries][crate::client::LoggingServiceV2::list_log_entries] calls.
    #[derive(Clone, Debug)]
    pub struct ListLogEntries(RequestBuilder<crate::model::ListLogEntriesRequest>);

    impl ListLogEntries {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::LoggingServiceV2>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListLogEntriesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<CallOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListLogEntriesResponse> {
            (*self.0.stub)
                .list_log_entries(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(self) -> gax::paginator::Paginator<crate::model::ListLogEntriesResponse> {
            let token = self.0.request.page_token.clone();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request = builder.0.request.set_page_token(token);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> impl futures::Stream<Item = Result<crate::model::LogEntry>> + Send {
            self.by_page().items()
        }

        /// Sets the value of [resource_names][crate::model::ListLogEntriesRequest::resource_names].
        pub fn set_resource_names<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.0.request.resource_names = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [filter][crate::model::ListLogEntriesRequest::filter].
        pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.filter = v.into();
            self
        }

        /// Sets the value of [order_by][crate::model::ListLogEntriesRequest::order_by].
        pub fn set_order_by<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.order_by = v.into();
            self
        }

        /// Sets the value of [page_size][crate::model::ListLogEntriesRequest::page_size].
        pub fn set_page_size(mut self, v: i32) -> Self {
            self.0.request.page_size = v;
            self
        }

        /// Sets the value of [page_token][crate::model::ListLogEntriesRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }
    }

    impl gax::options::internal::RequestBuilder for ListLogEntries {
        fn call_options(&mut self) -> &mut CallOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LoggingServiceV2::list_monitored_resource_descriptors][crate::client::LoggingServiceV2::list_monitored_resource_descriptors] calls.
    #[derive(Clone, Debug)]
    pub struct ListMonitoredResourceDescriptors(
        RequestBuilder<crate::model::ListMonitoredResourceDescriptorsRequest>,
    );

    impl ListMonitoredResourceDescriptors {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::LoggingServiceV2>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListMonitoredResourceDescriptorsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<CallOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListMonitoredResourceDescriptorsResponse> {
            (*self.0.stub)
                .list_monitored_resource_descriptors(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::ListMonitoredResourceDescriptorsResponse>
        {
            let token = self.0.request.page_token.clone();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request = builder.0.request.set_page_token(token);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> impl futures::Stream<Item = Result<crate::model::MonitoredResourceDescriptor>> + Send {
            self.by_page().items()
        }

        /// Sets the value of [page_size][crate::model::ListMonitoredResourceDescriptorsRequest::page_size].
        pub fn set_page_size(mut self, v: i32) -> Self {
            self.0.request.page_size = v;
            self
        }

        /// Sets the value of [page_token][crate::model::ListMonitoredResourceDescriptorsRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }
    }

    impl gax::options::internal::RequestBuilder for ListMonitoredResourceDescriptors {
        fn call_options(&mut self) -> &mut CallOptions {
            &mut self.0.options
        }
    }
}

pub mod config_service_v2 {
    use crate::Result;
    use gax::options::CallOptions;
    use std::sync::Arc;

    /// A builder for [ConfigServiceV2][crate::client::ConfigServiceV2].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use gapic_logging_v2::*;
    /// # use builder::config_service_v2::ClientBuilder;
    /// # use client::ConfigServiceV2;
    /// let builder: ClientBuilder = ConfigServiceV2::builder();
    /// let client = builder
    ///     .with_endpoint("https://logging.googleapis.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder = gax::client_builder::ClientBuilder<client::Factory>;

    pub(crate) mod client {
        use super::super::super::client::ConfigServiceV2;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = ConfigServiceV2;
            async fn build(
                self,
                config: gax::client_builder::internal::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::ConfigServiceV2] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: Arc<dyn crate::stub::dynamic::ConfigServiceV2>,
        request: R,
        options: CallOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::ConfigServiceV2>) -> Self {
            Self {
                stub,
                request: R::default(),
                options: CallOptions::default(),
            }
        }
    }

    /// The request builder for [ConfigServiceV2::list_sinks][crate::client::ConfigServiceV2::list_sinks] calls.
    #[derive(Clone, Debug)]
    pub struct ListSinks(RequestBuilder<crate::model::ListSinksRequest>);

    impl ListSinks {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::ConfigServiceV2>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListSinksRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<CallOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListSinksResponse> {
            crate::path_templates::validate(
                crate::path_templates::project_name(),
                &self.0.request.parent,
                "list_sinks",
            )?;
            (*self.0.stub)
                .list_sinks(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(self) -> gax::paginator::Paginator<crate::model::ListSinksResponse> {
            let token = self.0.request.page_token.clone();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request = builder.0.request.set_page_token(token);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> impl futures::Stream<Item = Result<crate::model::LogSink>> + Send {
            self.by_page().items()
        }

        /// Sets the value of [parent][crate::model::ListSinksRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [page_token][crate::model::ListSinksRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }

        /// Sets the value of [page_size][crate::model::ListSinksRequest::page_size].
        pub fn set_page_size(mut self, v: i32) -> Self {
            self.0.request.page_size = v;
            self
        }
    }

    impl gax::options::internal::RequestBuilder for ListSinks {
        fn call_options(&mut self) -> &mut CallOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ConfigServiceV2::get_sink][crate::client::ConfigServiceV2::get_sink] calls.
    #[derive(Clone, Debug)]
    pub struct GetSink(RequestBuilder<crate::model::GetSinkRequest>);

    impl GetSink {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::ConfigServiceV2>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetSinkRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<CallOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::LogSink> {
            crate::path_templates::validate(
                crate::path_templates::sink_name(),
                &self.0.request.sink_name,
                "get_sink",
            )?;
            (*self.0.stub)
                .get_sink(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [sink_name][crate::model::GetSinkRequest::sink_name].
        pub fn set_sink_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.sink_name = v.into();
            self
        }
    }

    impl gax::options::internal::RequestBuilder for GetSink {
        fn call_options(&mut self) -> &mut CallOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ConfigServiceV2::create_sink][crate::client::ConfigServiceV2::create_sink] calls.
    #[derive(Clone, Debug)]
    pub struct CreateSink(RequestBuilder<crate::model::CreateSinkRequest>);

    impl CreateSink {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::ConfigServiceV2>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateSinkRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<CallOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::LogSink> {
            crate::path_templates::validate(
                crate::path_templates::project_name(),
                &self.0.request.parent,
                "create_sink",
            )?;
            (*self.0.stub)
                .create_sink(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [parent][crate::model::CreateSinkRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [sink][crate::model::CreateSinkRequest::sink].
        pub fn set_sink<T: Into<crate::model::LogSink>>(mut self, v: T) -> Self {
            self.0.request.sink = Some(v.into());
            self
        }

        /// Sets the value of [unique_writer_identity][crate::model::CreateSinkRequest::unique_writer_identity].
        pub fn set_unique_writer_identity(mut self, v: bool) -> Self {
            self.0.request.unique_writer_identity = v;
            self
        }
    }

    impl gax::options::internal::RequestBuilder for CreateSink {
        fn call_options(&mut self) -> &mut CallOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ConfigServiceV2::update_sink][crate::client::ConfigServiceV2::update_sink] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateSink(RequestBuilder<crate::model::UpdateSinkRequest>);

    impl UpdateSink {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::ConfigServiceV2>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateSinkRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<CallOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::LogSink> {
            crate::path_templates::validate(
                crate::path_templates::sink_name(),
                &self.0.request.sink_name,
                "update_sink",
            )?;
            (*self.0.stub)
                .update_sink(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [sink_name][crate::model::UpdateSinkRequest::sink_name].
        pub fn set_sink_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.sink_name = v.into();
            self
        }

        /// Sets the value of [sink][crate::model::UpdateSinkRequest::sink].
        pub fn set_sink<T: Into<crate::model::LogSink>>(mut self, v: T) -> Self {
            self.0.request.sink = Some(v.into());
            self
        }

        /// Sets the value of [unique_writer_identity][crate::model::UpdateSinkRequest::unique_writer_identity].
        pub fn set_unique_writer_identity(mut self, v: bool) -> Self {
            self.0.request.unique_writer_identity = v;
            self
        }
    }

    impl gax::options::internal::RequestBuilder for UpdateSink {
        fn call_options(&mut self) -> &mut CallOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ConfigServiceV2::delete_sink][crate::client::ConfigServiceV2::delete_sink] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteSink(RequestBuilder<crate::model::DeleteSinkRequest>);

    impl DeleteSink {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::ConfigServiceV2>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteSinkRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<CallOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::empty::Empty> {
            crate::path_templates::validate(
                crate::path_templates::sink_name(),
                &self.0.request.sink_name,
                "delete_sink",
            )?;
            (*self.0.stub)
                .delete_sink(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [sink_name][crate::model::DeleteSinkRequest::sink_name].
        pub fn set_sink_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.sink_name = v.into();
            self
        }
    }

    impl gax::options::internal::RequestBuilder for DeleteSink {
        fn call_options(&mut self) -> &mut CallOptions {
            &mut self.0.options
        }
    }
}

pub mod metrics_service_v2 {
    use crate::Result;
    use gax::options::CallOptions;
    use std::sync::Arc;

    /// A builder for [MetricsServiceV2][crate::client::MetricsServiceV2].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use gapic_logging_v2::*;
    /// # use builder::metrics_service_v2::ClientBuilder;
    /// # use client::MetricsServiceV2;
    /// let builder: ClientBuilder = MetricsServiceV2::builder();
    /// let client = builder
    ///     .with_endpoint("https://logging.googleapis.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder = gax::client_builder::ClientBuilder<client::Factory>;

    pub(crate) mod client {
        use super::super::super::client::MetricsServiceV2;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = MetricsServiceV2;
            async fn build(
                self,
                config: gax::client_builder::internal::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::MetricsServiceV2] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: Arc<dyn crate::stub::dynamic::MetricsServiceV2>,
        request: R,
        options: CallOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::MetricsServiceV2>) -> Self {
            Self {
                stub,
                request: R::default(),
                options: CallOptions::default(),
            }
        }
    }

    /// The request builder for [MetricsServiceV2::list_log_metrics][crate::client::MetricsServiceV2::list_log_metrics] calls.
    #[derive(Clone, Debug)]
    pub struct ListLogMetrics(RequestBuilder<crate::model::ListLogMetricsRequest>);

    impl ListLogMetrics {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::MetricsServiceV2>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListLogMetricsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<CallOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListLogMetricsResponse> {
            crate::path_templates::validate(
                crate::path_templates::project_name(),
                &self.0.request.parent,
                "list_log_metrics",
            )?;
            (*self.0.stub)
                .list_log_metrics(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(self) -> gax::paginator::Paginator<crate::model::ListLogMetricsResponse> {
            let token = self.0.request.page_token.clone();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request = builder.0.request.set_page_token(token);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> impl futures::Stream<Item = Result<crate::model::LogMetric>> + Send {
            self.by_page().items()
        }

        /// Sets the value of [parent][crate::model::ListLogMetricsRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [page_token][crate::model::ListLogMetricsRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }

        /// Sets the value of [page_size][crate::model::ListLogMetricsRequest::page_size].
        pub fn set_page_size(mut self, v: i32) -> Self {
            self.0.request.page_size = v;
            self
        }
    }

    impl gax::options::internal::RequestBuilder for ListLogMetrics {
        fn call_options(&mut self) -> &mut CallOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [MetricsServiceV2::get_log_metric][crate::client::MetricsServiceV2::get_log_metric] calls.
    #[derive(Clone, Debug)]
    pub struct GetLogMetric(RequestBuilder<crate::model::GetLogMetricRequest>);

    impl GetLogMetric {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::MetricsServiceV2>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLogMetricRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<CallOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::LogMetric> {
            crate::path_templates::validate(
                crate::path_templates::metric_name(),
                &self.0.request.metric_name,
                "get_log_metric",
            )?;
            (*self.0.stub)
                .get_log_metric(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [metric_name][crate::model::GetLogMetricRequest::metric_name].
        pub fn set_metric_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.metric_name = v.into();
            self
        }
    }

    impl gax::options::internal::RequestBuilder for GetLogMetric {
        fn call_options(&mut self) -> &mut CallOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [MetricsServiceV2::create_log_metric][crate::client::MetricsServiceV2::create_log_metric] calls.
    #[derive(Clone, Debug)]
    pub struct CreateLogMetric(RequestBuilder<crate::model::CreateLogMetricRequest>);

    impl CreateLogMetric {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::MetricsServiceV2>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateLogMetricRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<CallOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::LogMetric> {
            crate::path_templates::validate(
                crate::path_templates::project_name(),
                &self.0.request.parent,
                "create_log_metric",
            )?;
            (*self.0.stub)
                .create_log_metric(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [parent][crate::model::CreateLogMetricRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [metric][crate::model::CreateLogMetricRequest::metric].
        pub fn set_metric<T: Into<crate::model::LogMetric>>(mut self, v: T) -> Self {
            self.0.request.metric = Some(v.into());
            self
        }
    }

    impl gax::options::internal::RequestBuilder for CreateLogMetric {
        fn call_options(&mut self) -> &mut CallOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [MetricsServiceV2::update_log_metric][crate::client::MetricsServiceV2::update_log_metric] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateLogMetric(RequestBuilder<crate::model::UpdateLogMetricRequest>);

    impl UpdateLogMetric {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::MetricsServiceV2>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateLogMetricRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<CallOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::LogMetric> {
            crate::path_templates::validate(
                crate::path_templates::metric_name(),
                &self.0.request.metric_name,
                "update_log_metric",
            )?;
            (*self.0.stub)
                .update_log_metric(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [metric_name][crate::model::UpdateLogMetricRequest::metric_name].
        pub fn set_metric_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.metric_name = v.into();
            self
        }

        /// Sets the value of [metric][crate::model::UpdateLogMetricRequest::metric].
        pub fn set_metric<T: Into<crate::model::LogMetric>>(mut self, v: T) -> Self {
            self.0.request.metric = Some(v.into());
            self
        }
    }

    impl gax::options::internal::RequestBuilder for UpdateLogMetric {
        fn call_options(&mut self) -> &mut CallOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [MetricsServiceV2::delete_log_metric][crate::client::MetricsServiceV2::delete_log_metric] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteLogMetric(RequestBuilder<crate::model::DeleteLogMetricRequest>);

    impl DeleteLogMetric {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::MetricsServiceV2>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteLogMetricRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<CallOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::empty::Empty> {
            crate::path_templates::validate(
                crate::path_templates::metric_name(),
                &self.0.request.metric_name,
                "delete_log_metric",
            )?;
            (*self.0.stub)
                .delete_log_metric(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [metric_name][crate::model::DeleteLogMetricRequest::metric_name].
        pub fn set_metric_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.metric_name = v.into();
            self
        }
    }

    impl gax::options::internal::RequestBuilder for DeleteLogMetric {
        fn call_options(&mut self) -> &mut CallOptions {
            &mut self.0.options
        }
    }
}
