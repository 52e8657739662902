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

/// Implements a client for the Long Running Operations API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use gapic_longrunning::client::Operations;
/// use futures::TryStreamExt;
/// let client = Operations::builder().build().await?;
/// let mut items = client.list_operations("operations", "done=false").by_item();
/// while let Some(operation) = items.try_next().await? {
///     println!("{}", operation.name);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(()) });
/// ```
///
/// # Service Description
///
/// Manages long-running operations with an API service.
///
/// # Configuration
///
/// To configure `Operations` use the `with_*` methods in the type returned
/// by [builder()][Operations::builder]. The default configuration should
/// work for most applications.
///
/// # Pooling and Cloning
///
/// `Operations` holds a connection pool internally, it is advised to
/// create one and the reuse it. You do not need to wrap `Operations` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an
/// `Arc` internally.
#[derive(Clone, Debug)]
pub struct Operations {
    inner: Arc<dyn super::stub::dynamic::Operations>,
}

impl Operations {
    /// Returns a builder for [Operations].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use gapic_longrunning::client::Operations;
    /// let client = Operations::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::operations::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::operations::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Operations + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gax::client_builder::internal::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = crate::transport::Operations::new(config)?;
        Ok(Self::from_stub(inner))
    }

    /// Gets the latest state of a long-running operation.
    pub fn get_operation(
        &self,
        name: impl Into<String>,
    ) -> super::builder::operations::GetOperation {
        super::builder::operations::GetOperation::new(self.inner.clone()).set_name(name.into())
    }

    /// Lists operations that match the specified filter in the request.
    pub fn list_operations(
        &self,
        name: impl Into<String>,
        filter: impl Into<String>,
    ) -> super::builder::operations::ListOperations {
        super::builder::operations::ListOperations::new(self.inner.clone())
            .set_name(name.into())
            .set_filter(filter.into())
    }

    /// Starts asynchronous cancellation on a long-running operation.
    ///
    /// The server makes a best effort to cancel the operation, but success is
    /// not guaranteed.
    pub fn cancel_operation(
        &self,
        name: impl Into<String>,
    ) -> super::builder::operations::CancelOperation {
        super::builder::operations::CancelOperation::new(self.inner.clone())
            .set_name(name.into())
    }

    /// Deletes a long-running operation.
    pub fn delete_operation(
        &self,
        name: impl Into<String>,
    ) -> super::builder::operations::DeleteOperation {
        super::builder::operations::DeleteOperation::new(self.inner.clone())
            .set_name(name.into())
    }

    /// Closes the client.
    ///
    /// Waits for in-flight calls to complete. Any call started after `close()`
    /// fails with [is_closed()][crate::Error::is_closed].
    pub async fn close(&self) {
        self.inner.close().await
    }

    /// Formats a `operations/{operation_path=**}` resource name.
    ///
    /// ```
    /// # use gapic_longrunning::client::Operations;
    /// let name = Operations::format_operation_path_name("abc/123")?;
    /// assert_eq!(name, "operations/abc/123");
    /// # Ok::<(), gax::path_template::Error>(())
    /// ```
    pub fn format_operation_path_name(
        operation_path: &str,
    ) -> Result<String, path_template::Error> {
        crate::path_templates::operation_path()?.render([("operation_path", operation_path)])
    }

    /// Parses the `operation_path` from an operation resource name.
    pub fn parse_operation_path_from_operation_path_name(
        name: &str,
    ) -> Result<String, path_template::Error> {
        crate::path_templates::operation_path()?.extract(name, "operation_path")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("abc"; "single")]
    #[test_case("abc/def/123"; "nested")]
    fn operation_path_roundtrip(path: &str) -> anyhow::Result<()> {
        let name = Operations::format_operation_path_name(path)?;
        assert_eq!(name, format!("operations/{path}"));
        let got = Operations::parse_operation_path_from_operation_path_name(&name)?;
        assert_eq!(got, path);
        Ok(())
    }

    #[test]
    fn parse_mismatch() {
        let got = Operations::parse_operation_path_from_operation_path_name("projects/p");
        assert!(matches!(got, Err(ref e) if e.is_no_match()), "{got:?}");
    }
}
