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

//! Status codes and error payloads returned by Google APIs.

use serde::{Deserialize, Serialize};

/// The status of a failed RPC, as reported by the service.
///
/// Google APIs return errors using the `google.rpc.Status` message. Over
/// JSON/HTTP the message is wrapped in an `{"error": ...}` envelope, and
/// carries both the numeric code and its string name.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Status {
    /// The status code, one of the values in [Code].
    pub code: i32,

    /// A developer-facing error message, in English.
    pub message: String,

    /// The string representation of `code`, if the service provided one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Additional error details, kept as raw JSON.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<serde_json::Value>,
}

impl Status {
    /// Sets the value for [code][Status::code].
    pub fn set_code<T: Into<Code>>(mut self, v: T) -> Self {
        let code: Code = v.into();
        self.code = code as i32;
        self.status = Some(code.name().to_string());
        self
    }

    /// Sets the value for [message][Status::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the value for [details][Status::details].
    pub fn set_details<T, I>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = I>,
        I: Into<serde_json::Value>,
    {
        self.details = v.into_iter().map(Into::into).collect();
        self
    }

    /// The code as an enum.
    ///
    /// Prefers the numeric value, the string representation is used when the
    /// numeric value is missing.
    pub fn code(&self) -> Code {
        if self.code != 0 {
            return Code::from(self.code);
        }
        self.status
            .as_deref()
            .and_then(|s| Code::try_from(s).ok())
            .unwrap_or(Code::Ok)
    }
}

/// The canonical error codes for Google APIs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum Code {
    /// Not an error; returned on success.
    Ok = 0,
    /// The operation was cancelled, typically by the caller.
    Cancelled = 1,
    /// Unknown error.
    #[default]
    Unknown = 2,
    /// The client specified an invalid argument.
    InvalidArgument = 3,
    /// The deadline expired before the operation could complete.
    DeadlineExceeded = 4,
    /// Some requested entity was not found.
    NotFound = 5,
    /// The entity that a client attempted to create already exists.
    AlreadyExists = 6,
    /// The caller does not have permission to execute the operation.
    PermissionDenied = 7,
    /// Some resource has been exhausted.
    ResourceExhausted = 8,
    /// The system is not in a state required for the operation.
    FailedPrecondition = 9,
    /// The operation was aborted.
    Aborted = 10,
    /// The operation was attempted past the valid range.
    OutOfRange = 11,
    /// The operation is not implemented or supported.
    Unimplemented = 12,
    /// Internal errors.
    Internal = 13,
    /// The service is currently unavailable.
    Unavailable = 14,
    /// Unrecoverable data loss or corruption.
    DataLoss = 15,
    /// The request does not have valid authentication credentials.
    Unauthenticated = 16,
}

impl Code {
    /// The canonical name of the code, as used in configuration files and
    /// in the `status` field of JSON errors.
    pub fn name(&self) -> &'static str {
        match self {
            Code::Ok => "OK",
            Code::Cancelled => "CANCELLED",
            Code::Unknown => "UNKNOWN",
            Code::InvalidArgument => "INVALID_ARGUMENT",
            Code::DeadlineExceeded => "DEADLINE_EXCEEDED",
            Code::NotFound => "NOT_FOUND",
            Code::AlreadyExists => "ALREADY_EXISTS",
            Code::PermissionDenied => "PERMISSION_DENIED",
            Code::ResourceExhausted => "RESOURCE_EXHAUSTED",
            Code::FailedPrecondition => "FAILED_PRECONDITION",
            Code::Aborted => "ABORTED",
            Code::OutOfRange => "OUT_OF_RANGE",
            Code::Unimplemented => "UNIMPLEMENTED",
            Code::Internal => "INTERNAL",
            Code::Unavailable => "UNAVAILABLE",
            Code::DataLoss => "DATA_LOSS",
            Code::Unauthenticated => "UNAUTHENTICATED",
        }
    }

    /// The code a service would likely return along with this HTTP status.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => Code::InvalidArgument,
            401 => Code::Unauthenticated,
            403 => Code::PermissionDenied,
            404 => Code::NotFound,
            409 => Code::Aborted,
            412 => Code::FailedPrecondition,
            416 => Code::OutOfRange,
            429 => Code::ResourceExhausted,
            499 => Code::Cancelled,
            501 => Code::Unimplemented,
            503 => Code::Unavailable,
            504 => Code::DeadlineExceeded,
            s if (200..300).contains(&s) => Code::Ok,
            s if (500..600).contains(&s) => Code::Internal,
            _ => Code::Unknown,
        }
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<i32> for Code {
    fn from(value: i32) -> Self {
        match value {
            0 => Code::Ok,
            1 => Code::Cancelled,
            2 => Code::Unknown,
            3 => Code::InvalidArgument,
            4 => Code::DeadlineExceeded,
            5 => Code::NotFound,
            6 => Code::AlreadyExists,
            7 => Code::PermissionDenied,
            8 => Code::ResourceExhausted,
            9 => Code::FailedPrecondition,
            10 => Code::Aborted,
            11 => Code::OutOfRange,
            12 => Code::Unimplemented,
            13 => Code::Internal,
            14 => Code::Unavailable,
            15 => Code::DataLoss,
            16 => Code::Unauthenticated,
            _ => Code::default(),
        }
    }
}

impl TryFrom<&str> for Code {
    type Error = String;
    fn try_from(value: &str) -> std::result::Result<Code, Self::Error> {
        match value {
            "OK" => Ok(Code::Ok),
            // Both spellings appear in published configuration files.
            "CANCELLED" | "CANCELED" => Ok(Code::Cancelled),
            "UNKNOWN" => Ok(Code::Unknown),
            "INVALID_ARGUMENT" => Ok(Code::InvalidArgument),
            "DEADLINE_EXCEEDED" => Ok(Code::DeadlineExceeded),
            "NOT_FOUND" => Ok(Code::NotFound),
            "ALREADY_EXISTS" => Ok(Code::AlreadyExists),
            "PERMISSION_DENIED" => Ok(Code::PermissionDenied),
            "RESOURCE_EXHAUSTED" => Ok(Code::ResourceExhausted),
            "FAILED_PRECONDITION" => Ok(Code::FailedPrecondition),
            "ABORTED" => Ok(Code::Aborted),
            "OUT_OF_RANGE" => Ok(Code::OutOfRange),
            "UNIMPLEMENTED" => Ok(Code::Unimplemented),
            "INTERNAL" => Ok(Code::Internal),
            "UNAVAILABLE" => Ok(Code::Unavailable),
            "DATA_LOSS" => Ok(Code::DataLoss),
            "UNAUTHENTICATED" => Ok(Code::Unauthenticated),
            _ => Err(format!("unknown status code value {value}")),
        }
    }
}

impl Serialize for Code {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Code::try_from(name.as_str()).map_err(serde::de::Error::custom)
    }
}

#[derive(Clone, Debug, Deserialize)]
struct ErrorWrapper {
    error: Status,
}

impl TryFrom<&bytes::Bytes> for Status {
    type Error = serde_json::Error;

    fn try_from(value: &bytes::Bytes) -> Result<Self, Self::Error> {
        serde_json::from_slice::<ErrorWrapper>(value).map(|w| w.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(Code::Ok)]
    #[test_case(Code::Cancelled)]
    #[test_case(Code::Unknown)]
    #[test_case(Code::InvalidArgument)]
    #[test_case(Code::DeadlineExceeded)]
    #[test_case(Code::NotFound)]
    #[test_case(Code::AlreadyExists)]
    #[test_case(Code::PermissionDenied)]
    #[test_case(Code::ResourceExhausted)]
    #[test_case(Code::FailedPrecondition)]
    #[test_case(Code::Aborted)]
    #[test_case(Code::OutOfRange)]
    #[test_case(Code::Unimplemented)]
    #[test_case(Code::Internal)]
    #[test_case(Code::Unavailable)]
    #[test_case(Code::DataLoss)]
    #[test_case(Code::Unauthenticated)]
    fn code_names(code: Code) {
        assert_eq!(Code::try_from(code.name()), Ok(code));
        assert_eq!(Code::from(code as i32), code);
        assert_eq!(code.to_string(), code.name());
    }

    #[test]
    fn code_alternative_spelling() {
        assert_eq!(Code::try_from("CANCELED"), Ok(Code::Cancelled));
        assert!(Code::try_from("NOT-A-CODE").is_err());
        assert_eq!(Code::from(1234), Code::Unknown);
    }

    #[test_case(404, Code::NotFound)]
    #[test_case(429, Code::ResourceExhausted)]
    #[test_case(503, Code::Unavailable)]
    #[test_case(504, Code::DeadlineExceeded)]
    #[test_case(502, Code::Internal)]
    #[test_case(418, Code::Unknown)]
    fn code_from_http(status: u16, want: Code) {
        assert_eq!(Code::from_http_status(status), want);
    }

    #[test]
    fn status_from_payload() -> anyhow::Result<()> {
        let payload = json!({
            "error": {
                "code": 14,
                "message": "try again",
                "status": "UNAVAILABLE",
                "details": [{"@type": "google.rpc.RetryInfo", "retryDelay": "1s"}]
            }
        });
        let payload = bytes::Bytes::from(serde_json::to_vec(&payload)?);
        let status = Status::try_from(&payload)?;
        assert_eq!(status.code(), Code::Unavailable);
        assert_eq!(status.message, "try again");
        assert_eq!(status.details.len(), 1);
        Ok(())
    }

    #[test]
    fn status_code_from_name() {
        let status = Status {
            status: Some("NOT_FOUND".to_string()),
            ..Status::default()
        };
        assert_eq!(status.code(), Code::NotFound);
        assert_eq!(Status::default().code(), Code::Ok);
    }

    #[test]
    fn status_setters() {
        let status = Status::default()
            .set_code(Code::Aborted)
            .set_message("conflict")
            .set_details([json!({"reason": "test"})]);
        assert_eq!(status.code, 10);
        assert_eq!(status.status.as_deref(), Some("ABORTED"));
        assert_eq!(status.message, "conflict");
        assert_eq!(status.details, vec![json!({"reason": "test"})]);
    }

    #[test]
    fn code_serde() -> anyhow::Result<()> {
        let value = serde_json::to_value(Code::Unavailable)?;
        assert_eq!(value, json!("UNAVAILABLE"));
        let code = serde_json::from_value::<Code>(json!("DEADLINE_EXCEEDED"))?;
        assert_eq!(code, Code::DeadlineExceeded);
        Ok(())
    }
}
