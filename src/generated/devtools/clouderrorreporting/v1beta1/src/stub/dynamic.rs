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
use gax::options::CallOptions;

/// A dyn-compatible, crate-private version of [super::ReportErrorsService].
#[async_trait::async_trait]
pub trait ReportErrorsService: std::fmt::Debug + Send + Sync {
    async fn report_error_event(
        &self,
        req: crate::model::ReportErrorEventRequest,
        options: CallOptions,
    ) -> Result<crate::model::ReportErrorEventResponse>;

    async fn close(&self);
}

/// All implementations of [super::ReportErrorsService] also implement [ReportErrorsService].
#[async_trait::async_trait]
impl<T: super::ReportErrorsService> ReportErrorsService for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn report_error_event(
        &self,
        req: crate::model::ReportErrorEventRequest,
        options: CallOptions,
    ) -> Result<crate::model::ReportErrorEventResponse> {
        T::report_error_event(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn close(&self) {
        T::close(self).await
    }
}
