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

use gax::path_template::{Error, PathTemplate};

lazy_static::lazy_static! {
    static ref PROJECT_NAME: Result<PathTemplate, Error> = PathTemplate::new("projects/{project}");
    static ref LOG_NAME: Result<PathTemplate, Error> =
        PathTemplate::new("projects/{project}/logs/{log}");
    static ref SINK_NAME: Result<PathTemplate, Error> =
        PathTemplate::new("projects/{project}/sinks/{sink}");
    static ref METRIC_NAME: Result<PathTemplate, Error> =
        PathTemplate::new("projects/{project}/metrics/{metric}");
}

pub(crate) fn project_name() -> Result<&'static PathTemplate, Error> {
    PROJECT_NAME.as_ref().map_err(Clone::clone)
}

pub(crate) fn log_name() -> Result<&'static PathTemplate, Error> {
    LOG_NAME.as_ref().map_err(Clone::clone)
}

pub(crate) fn sink_name() -> Result<&'static PathTemplate, Error> {
    SINK_NAME.as_ref().map_err(Clone::clone)
}

pub(crate) fn metric_name() -> Result<&'static PathTemplate, Error> {
    METRIC_NAME.as_ref().map_err(Clone::clone)
}

/// Checks a resource name against `template` before a request is sent.
///
/// `method` names the client method in the error.
pub(crate) fn validate(
    template: Result<&'static PathTemplate, Error>,
    name: &str,
    method: &str,
) -> crate::Result<()> {
    template
        .and_then(|t| t.validate(name, method))
        .map_err(gax::error::Error::binding)
}
