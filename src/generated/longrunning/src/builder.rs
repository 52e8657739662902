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

pub mod operations {
    use crate::Result;
    use gax::options::CallOptions;
    use std::sync::Arc;

    /// A builder for [Operations][crate::client::Operations].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use gapic_longrunning::*;
    /// # use builder::operations::ClientBuilder;
    /// # use client::Operations;
    /// let builder: ClientBuilder = Operations::builder();
    /// let client = builder
    ///     .with_endpoint("https://longrunning.googleapis.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder = gax::client_builder::ClientBuilder<client::Factory>;

    pub(crate) mod client {
        use super::super::super::client::Operations;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = Operations;
            async fn build(
                self,
                config: gax::client_builder::internal::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::Operations] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: Arc<dyn crate::stub::dynamic::Operations>,
        request: R,
        options: CallOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::Operations>) -> Self {
            Self {
                stub,
                request: R::default(),
                options: CallOptions::default(),
            }
        }
    }

    /// The request builder for [Operations::get_operation][crate::client::Operations::get_operation] calls.
    #[derive(Clone, Debug)]
    pub struct GetOperation(RequestBuilder<crate::model::GetOperationRequest>);

    impl GetOperation {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::Operations>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetOperationRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<CallOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Operation> {
            crate::path_templates::validate(
                crate::path_templates::operation_path(),
                &self.0.request.name,
                "get_operation",
            )?;
            (*self.0.stub)
                .get_operation(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [name][crate::model::GetOperationRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    impl gax::options::internal::RequestBuilder for GetOperation {
        fn call_options(&mut self) -> &mut CallOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Operations::list_operations][crate::client::Operations::list_operations] calls.
    #[derive(Clone, Debug)]
    pub struct ListOperations(RequestBuilder<crate::model::ListOperationsRequest>);

    impl ListOperations {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::Operations>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListOperationsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<CallOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListOperationsResponse> {
            (*self.0.stub)
                .list_operations(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(self) -> gax::paginator::Paginator<crate::model::ListOperationsResponse> {
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
        ) -> impl futures::Stream<Item = Result<crate::model::Operation>> + Send {
            self.by_page().items()
        }

        /// Sets the value of [name][crate::model::ListOperationsRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }

        /// Sets the value of [filter][crate::model::ListOperationsRequest::filter].
        pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.filter = v.into();
            self
        }

        /// Sets the value of [page_size][crate::model::ListOperationsRequest::page_size].
        pub fn set_page_size(mut self, v: i32) -> Self {
            self.0.request.page_size = v;
            self
        }

        /// Sets the value of [page_token][crate::model::ListOperationsRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }
    }

    impl gax::options::internal::RequestBuilder for ListOperations {
        fn call_options(&mut self) -> &mut CallOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Operations::cancel_operation][crate::client::Operations::cancel_operation] calls.
    #[derive(Clone, Debug)]
    pub struct CancelOperation(RequestBuilder<crate::model::CancelOperationRequest>);

    impl CancelOperation {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::Operations>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CancelOperationRequest>>(mut self, v: V) -> Self {
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
                crate::path_templates::operation_path(),
                &self.0.request.name,
                "cancel_operation",
            )?;
            (*self.0.stub)
                .cancel_operation(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [name][crate::model::CancelOperationRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    impl gax::options::internal::RequestBuilder for CancelOperation {
        fn call_options(&mut self) -> &mut CallOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Operations::delete_operation][crate::client::Operations::delete_operation] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteOperation(RequestBuilder<crate::model::DeleteOperationRequest>);

    impl DeleteOperation {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::Operations>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteOperationRequest>>(mut self, v: V) -> Self {
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
                crate::path_templates::operation_path(),
                &self.0.request.name,
                "delete_operation",
            )?;
            (*self.0.stub)
                .delete_operation(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [name][crate::model::DeleteOperationRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    impl gax::options::internal::RequestBuilder for DeleteOperation {
        fn call_options(&mut self) -> &mut CallOptions {
            &mut self.0.options
        }
    }
}
