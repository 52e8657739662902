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

use crate::Result;
use crate::model::*;
use gax::api_callable::{ApiCallable, CallContext};
use gax::client_builder::internal::{ClientConfig, ClientRuntime};
use gax::empty::Empty;
use gax::options::CallOptions;
use gax::transport::{HttpRule, MethodDescriptor};
use http::Method;

const SERVICE: &str = "google.longrunning.Operations";
const CLIENT_CONFIG: &str = include_str!("resources/operations_client_config.json");

static GET_OPERATION: MethodDescriptor = MethodDescriptor {
    service: SERVICE,
    name: "GetOperation",
    http: HttpRule {
        verb: Method::GET,
        path: "/v1/{name=operations/**}",
        body: None,
    },
};

static LIST_OPERATIONS: MethodDescriptor = MethodDescriptor {
    service: SERVICE,
    name: "ListOperations",
    http: HttpRule {
        verb: Method::GET,
        path: "/v1/{name=operations}",
        body: None,
    },
};

static CANCEL_OPERATION: MethodDescriptor = MethodDescriptor {
    service: SERVICE,
    name: "CancelOperation",
    http: HttpRule {
        verb: Method::POST,
        path: "/v1/{name=operations/**}:cancel",
        body: Some("*"),
    },
};

static DELETE_OPERATION: MethodDescriptor = MethodDescriptor {
    service: SERVICE,
    name: "DeleteOperation",
    http: HttpRule {
        verb: Method::DELETE,
        path: "/v1/{name=operations/**}",
        body: None,
    },
};

/// Implements [Operations](super::stub::Operations) using the configured
/// [Transport][gax::transport::Transport].
#[derive(Debug)]
pub struct Operations {
    runtime: ClientRuntime,
    get_operation: ApiCallable<GetOperationRequest, Operation>,
    list_operations: ApiCallable<ListOperationsRequest, ListOperationsResponse>,
    cancel_operation: ApiCallable<CancelOperationRequest, Empty>,
    delete_operation: ApiCallable<DeleteOperationRequest, Empty>,
}

impl Operations {
    pub fn new(config: ClientConfig) -> gax::client_builder::Result<Self> {
        let runtime = ClientRuntime::new(
            config,
            SERVICE,
            CLIENT_CONFIG,
            crate::DEFAULT_HOST,
            &crate::info::X_GOOG_API_CLIENT,
        )?;
        Ok(Self {
            get_operation: runtime.callable(&GET_OPERATION),
            list_operations: runtime.callable(&LIST_OPERATIONS),
            cancel_operation: runtime.callable(&CANCEL_OPERATION),
            delete_operation: runtime.callable(&DELETE_OPERATION),
            runtime,
        })
    }

    fn context(&self, options: CallOptions) -> CallContext {
        CallContext::new(options, self.runtime.credentials().clone())
    }
}

impl super::stub::Operations for Operations {
    async fn get_operation(
        &self,
        req: GetOperationRequest,
        options: CallOptions,
    ) -> Result<Operation> {
        self.get_operation.call(&req, self.context(options)).await
    }

    async fn list_operations(
        &self,
        req: ListOperationsRequest,
        options: CallOptions,
    ) -> Result<ListOperationsResponse> {
        self.list_operations.call(&req, self.context(options)).await
    }

    async fn cancel_operation(
        &self,
        req: CancelOperationRequest,
        options: CallOptions,
    ) -> Result<Empty> {
        self.cancel_operation.call(&req, self.context(options)).await
    }

    async fn delete_operation(
        &self,
        req: DeleteOperationRequest,
        options: CallOptions,
    ) -> Result<Empty> {
        self.delete_operation.call(&req, self.context(options)).await
    }

    async fn close(&self) {
        self.runtime.state().close().await
    }
}
