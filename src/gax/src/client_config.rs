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

//! Loads per-method [CallSettings] from a client configuration document.
//!
//! Each generated client embeds a JSON document describing, for each method,
//! the timeout, the retryable status codes and the backoff parameters:
//!
//! ```
//! # use gapic_gax::client_config::load;
//! # use std::collections::HashMap;
//! # use std::time::Duration;
//! const CONFIG: &str = r#"{ "interfaces": { "google.example.v1.Echo": {
//!     "retry_codes": { "idempotent": ["UNAVAILABLE"] },
//!     "retry_params": { "default": {
//!         "initial_retry_delay_millis": 100, "retry_delay_multiplier": 1.3,
//!         "max_retry_delay_millis": 60000, "initial_rpc_timeout_millis": 20000,
//!         "rpc_timeout_multiplier": 1.0, "max_rpc_timeout_millis": 20000,
//!         "total_timeout_millis": 600000 } },
//!     "methods": { "Echo": {
//!         "retry_codes_name": "idempotent", "retry_params_name": "default" } }
//! } } }"#;
//! let settings = load(
//!     "google.example.v1.Echo",
//!     CONFIG,
//!     &HashMap::new(),
//!     &HashMap::new(),
//!     Duration::from_secs(30),
//! )?;
//! assert!(settings["Echo"].retry().is_some());
//! # Ok::<(), gapic_gax::client_config::Error>(())
//! ```

use crate::call_settings::{BackoffSettings, CallSettings, RetryOverride, RetrySettings};
use crate::error::rpc::Code;
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use std::time::Duration;

/// The errors loading a client configuration.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("cannot parse client configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no interface named {0} in the client configuration")]
    MissingService(String),
    #[error("method {method} references unknown retry codes {name}")]
    UnknownRetryCodes { method: String, name: String },
    #[error("method {method} references unknown retry params {name}")]
    UnknownRetryParams { method: String, name: String },
    #[error("retry codes {name} contain an unknown status code {code}")]
    UnknownStatusCode { name: String, code: String },
    #[error("invalid backoff parameters in retry params {name}: {source}")]
    InvalidBackoff {
        name: String,
        #[source]
        source: crate::exponential_backoff::Error,
    },
}

/// Loads the call settings for each method of `service`.
///
/// The `overrides` are keyed by method name. [RetryOverride::Disable] removes
/// the retry settings for the method, [RetryOverride::Replace] replaces
/// them. The method timeout is `timeout_millis` from the configuration, or
/// `default_timeout` if the method does not set one.
///
/// The status code names listed in `retry_codes` are looked up in
/// `retryable_code_names` first, then matched against the canonical names
/// such as `UNAVAILABLE`. Names found in neither are an error.
pub fn load(
    service: &str,
    config: &str,
    overrides: &HashMap<String, RetryOverride>,
    retryable_code_names: &HashMap<String, Code>,
    default_timeout: Duration,
) -> Result<HashMap<String, CallSettings>, Error> {
    let mut document = serde_json::from_str::<ClientConfigDocument>(config)?;
    let interface = document
        .interfaces
        .remove(service)
        .ok_or_else(|| Error::MissingService(service.to_string()))?;

    let codes = interface
        .retry_codes
        .iter()
        .map(|(name, codes)| Ok((name.as_str(), parse_codes(name, codes, retryable_code_names)?)))
        .collect::<Result<HashMap<_, _>, Error>>()?;
    let params = interface
        .retry_params
        .iter()
        .map(|(name, p)| Ok((name.as_str(), p.to_backoff(name)?)))
        .collect::<Result<HashMap<_, _>, Error>>()?;

    let mut settings = HashMap::new();
    for (method, config) in &interface.methods {
        let timeout = config
            .timeout_millis
            .map(Duration::from_millis)
            .unwrap_or(default_timeout);
        let configured = match (&config.retry_codes_name, &config.retry_params_name) {
            (None, None) => None,
            (codes_name, params_name) => {
                let codes_name = codes_name.as_deref().unwrap_or_default();
                let retryable = codes.get(codes_name).ok_or_else(|| Error::UnknownRetryCodes {
                    method: method.clone(),
                    name: codes_name.to_string(),
                })?;
                let params_name = params_name.as_deref().unwrap_or_default();
                let backoff = params.get(params_name).ok_or_else(|| Error::UnknownRetryParams {
                    method: method.clone(),
                    name: params_name.to_string(),
                })?;
                Some(RetrySettings::new(retryable.iter().copied(), backoff.clone()))
            }
        };
        let retry = match overrides.get(method) {
            None | Some(RetryOverride::Inherit) => configured,
            Some(RetryOverride::Disable) => None,
            Some(RetryOverride::Replace(r)) => Some(r.clone()),
        };
        let mut s = CallSettings::new(timeout);
        if let Some(r) = retry {
            s = s.with_retry(r);
        }
        settings.insert(method.clone(), s);
    }
    Ok(settings)
}

fn parse_codes(
    name: &str,
    codes: &[String],
    code_names: &HashMap<String, Code>,
) -> Result<BTreeSet<Code>, Error> {
    codes
        .iter()
        .map(|c| match code_names.get(c) {
            Some(code) => Ok(*code),
            None => Code::try_from(c.as_str()).map_err(|_| Error::UnknownStatusCode {
                name: name.to_string(),
                code: c.clone(),
            }),
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct ClientConfigDocument {
    interfaces: HashMap<String, InterfaceConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct InterfaceConfig {
    retry_codes: HashMap<String, Vec<String>>,
    retry_params: HashMap<String, RetryParams>,
    methods: HashMap<String, MethodConfig>,
}

#[derive(Debug, Deserialize)]
struct RetryParams {
    initial_retry_delay_millis: u64,
    retry_delay_multiplier: f64,
    max_retry_delay_millis: u64,
    initial_rpc_timeout_millis: u64,
    rpc_timeout_multiplier: f64,
    max_rpc_timeout_millis: u64,
    total_timeout_millis: u64,
}

impl RetryParams {
    fn to_backoff(&self, name: &str) -> Result<BackoffSettings, Error> {
        let backoff = BackoffSettings {
            initial_retry_delay: Duration::from_millis(self.initial_retry_delay_millis),
            retry_delay_multiplier: self.retry_delay_multiplier,
            max_retry_delay: Duration::from_millis(self.max_retry_delay_millis),
            initial_rpc_timeout: Duration::from_millis(self.initial_rpc_timeout_millis),
            rpc_timeout_multiplier: self.rpc_timeout_multiplier,
            max_rpc_timeout: Duration::from_millis(self.max_rpc_timeout_millis),
            total_timeout: Duration::from_millis(self.total_timeout_millis),
        };
        backoff.validate().map_err(|source| Error::InvalidBackoff {
            name: name.to_string(),
            source,
        })?;
        Ok(backoff)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MethodConfig {
    timeout_millis: Option<u64>,
    retry_codes_name: Option<String>,
    retry_params_name: Option<String>,
}
