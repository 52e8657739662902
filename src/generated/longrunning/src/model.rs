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

use gax::error::rpc::Status;

/// This resource represents a long-running operation that is the result of a
/// network API call.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Operation {
    /// The server-assigned name, which is only unique within the same service
    /// that originally returns it.
    pub name: String,

    /// Service-specific metadata associated with the operation. It typically
    /// contains progress information and common metadata such as create time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,

    /// If the value is `false`, it means the operation is still in progress.
    /// If `true`, the operation is completed, and either `error` or `response`
    /// is available.
    pub done: bool,

    /// The error result of the operation in case of failure or cancellation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Status>,

    /// The normal response of the operation in case of success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<serde_json::Value>,
}

impl Operation {
    /// Sets the value of [name][Operation::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [metadata][Operation::metadata].
    pub fn set_metadata<T: Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.metadata = Some(v.into());
        self
    }

    /// Sets the value of [done][Operation::done].
    pub fn set_done(mut self, v: bool) -> Self {
        self.done = v;
        self
    }

    /// Sets the error result, clearing any response.
    pub fn set_error(mut self, v: Status) -> Self {
        self.error = Some(v);
        self.response = None;
        self
    }

    /// Sets the response, clearing any error.
    pub fn set_response<T: Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.response = Some(v.into());
        self.error = None;
        self
    }

    /// The outcome of a completed operation, `None` while in progress.
    pub fn result(&self) -> Option<std::result::Result<&serde_json::Value, &Status>> {
        if !self.done {
            return None;
        }
        match (&self.error, &self.response) {
            (Some(e), _) => Some(Err(e)),
            (None, Some(r)) => Some(Ok(r)),
            (None, None) => None,
        }
    }
}

/// The request message for [Operations.GetOperation][crate::client::Operations::get_operation].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetOperationRequest {
    /// The name of the operation resource.
    pub name: String,
}

impl GetOperationRequest {
    /// Sets the value of [name][GetOperationRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The request message for [Operations.ListOperations][crate::client::Operations::list_operations].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListOperationsRequest {
    /// The name of the operation collection.
    pub name: String,

    /// The standard list filter.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub filter: String,

    /// The standard list page size.
    #[serde(skip_serializing_if = "is_default")]
    pub page_size: i32,

    /// The standard list page token.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub page_token: String,
}

impl ListOperationsRequest {
    /// Sets the value of [name][ListOperationsRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [filter][ListOperationsRequest::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [page_size][ListOperationsRequest::page_size].
    pub fn set_page_size(mut self, v: i32) -> Self {
        self.page_size = v;
        self
    }

    /// Sets the value of [page_token][ListOperationsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

/// The response message for [Operations.ListOperations][crate::client::Operations::list_operations].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListOperationsResponse {
    /// A list of operations that matches the specified filter in the request.
    pub operations: Vec<Operation>,

    /// The standard List next-page token.
    pub next_page_token: String,
}

impl ListOperationsResponse {
    /// Sets the value of [operations][ListOperationsResponse::operations].
    pub fn set_operations<T: IntoIterator<Item = Operation>>(mut self, v: T) -> Self {
        self.operations = v.into_iter().collect();
        self
    }

    /// Sets the value of [next_page_token][ListOperationsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for ListOperationsResponse {
    type PageItem = Operation;

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }

    fn into_items(self) -> Vec<Operation> {
        self.operations
    }
}

/// The request message for [Operations.CancelOperation][crate::client::Operations::cancel_operation].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CancelOperationRequest {
    /// The name of the operation resource to be cancelled.
    pub name: String,
}

impl CancelOperationRequest {
    /// Sets the value of [name][CancelOperationRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The request message for [Operations.DeleteOperation][crate::client::Operations::delete_operation].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteOperationRequest {
    /// The name of the operation resource to be deleted.
    pub name: String,
}

impl DeleteOperationRequest {
    /// Sets the value of [name][DeleteOperationRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

fn is_default<T: Default + PartialEq>(v: &T) -> bool {
    v == &T::default()
}
