//! Response interpretation — status classification, per-endpoint body
//! normalization, typed decode or the generic error envelope.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SdkError;
use crate::http::RawResponse;
use crate::operation::ResultShape;

/// Status code of a successful call. Anything else is a failure envelope.
pub const STATUS_OK: u16 = 200;

/// The result of one call: status, headers and the decoded body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub data: ResponseData<T>,
}

/// Decoded body: the operation's typed success shape, or the generic error.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseData<T> {
    Success(T),
    Failure(ErrorResponse),
}

/// Generic error body returned by the service for non-200 statuses.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_details: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// Coarse classification of a failure envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// 400 — request failed validation; see `validation_details`.
    Validation,
    /// 401/403 — signature, handle or timestamp rejected.
    Auth,
    /// 5xx — server-side fault.
    Server,
    /// Any other non-200 status.
    Client,
}

impl FailureKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::Validation,
            401 | 403 => Self::Auth,
            500..=599 => Self::Server,
            _ => Self::Client,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        matches!(self.data, ResponseData::Success(_))
    }

    pub fn success(&self) -> Option<&T> {
        match &self.data {
            ResponseData::Success(body) => Some(body),
            ResponseData::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&ErrorResponse> {
        match &self.data {
            ResponseData::Success(_) => None,
            ResponseData::Failure(err) => Some(err),
        }
    }

    /// `None` for successful responses.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        self.failure().map(|_| FailureKind::from_status(self.status_code))
    }

    pub fn into_result(self) -> Result<T, ErrorResponse> {
        match self.data {
            ResponseData::Success(body) => Ok(body),
            ResponseData::Failure(err) => Err(err),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }
}

/// Turn a raw response into an [`ApiResponse`].
///
/// Non-200 statuses are returned as `Ok(ResponseData::Failure(..))`. Only a
/// 200 body that does not match `T` is an error.
pub fn interpret<T: DeserializeOwned>(
    raw: RawResponse,
    shape: ResultShape,
) -> Result<ApiResponse<T>, SdkError> {
    let RawResponse {
        status,
        headers,
        body,
    } = raw;

    tracing::debug!(status, shape = %shape, body_len = body.len(), "Interpreting response");

    let data = if status == STATUS_OK {
        let decoded = if shape.normalizes_body() {
            normalize_body(&body).and_then(|normalized| serde_json::from_slice::<T>(&normalized))
        } else {
            serde_json::from_slice::<T>(&body)
        };
        match decoded {
            Ok(value) => ResponseData::Success(value),
            Err(source) => {
                return Err(SdkError::Deserialization {
                    status,
                    body: String::from_utf8_lossy(&body).into_owned(),
                    source,
                })
            }
        }
    } else {
        ResponseData::Failure(decode_error(&body))
    };

    Ok(ApiResponse {
        status_code: status,
        headers,
        data,
    })
}

/// Top-level fields the normalization pass may coerce.
const NORMALIZED_FIELDS: &[&str] = &["success", "sila_balance"];

/// Decode → coerce → re-encode for bodies whose scalar encoding drifts
/// between environments (`"true"` for `true`, `"12.5"` for `12.5`).
fn normalize_body(body: &[u8]) -> Result<Vec<u8>, serde_json::Error> {
    let mut value: Value = serde_json::from_slice(body)?;
    if let Value::Object(map) = &mut value {
        for name in NORMALIZED_FIELDS {
            if let Some(field) = map.get_mut(*name) {
                coerce_scalar(field);
            }
        }
    }
    serde_json::to_vec(&value)
}

fn coerce_scalar(field: &mut Value) {
    let replacement = match field {
        Value::String(s) => match s.trim() {
            "true" => Some(Value::Bool(true)),
            "false" => Some(Value::Bool(false)),
            text => text
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .and_then(serde_json::Number::from_f64)
                .map(Value::Number),
        },
        _ => None,
    };
    if let Some(v) = replacement {
        *field = v;
    }
}

fn decode_error(body: &[u8]) -> ErrorResponse {
    let value: Value = match serde_json::from_slice(body) {
        Ok(v) => v,
        Err(_) => {
            return ErrorResponse {
                message: String::from_utf8_lossy(body).trim().to_string(),
                ..ErrorResponse::default()
            }
        }
    };

    let mut error = match &value {
        Value::Object(map) => ErrorResponse {
            success: false,
            status: map.get("status").and_then(scalar_text),
            message: map
                .get("message")
                .and_then(scalar_text)
                .unwrap_or_default(),
            validation_details: map.get("validation_details").filter(|v| !v.is_null()).cloned(),
            reference: map.get("reference").and_then(scalar_text),
        },
        other => ErrorResponse {
            message: other.to_string(),
            ..ErrorResponse::default()
        },
    };

    if error.message.is_empty() {
        let source = error.validation_details.as_ref().unwrap_or(&value);
        let mut leaves = Vec::new();
        collect_messages(source, String::new(), &mut leaves);
        error.message = leaves.join("; ");
    }
    error
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Flatten string leaves into `path.to.field: text` entries.
fn collect_messages(value: &Value, path: String, out: &mut Vec<String>) {
    match value {
        Value::String(text) => {
            if path.is_empty() {
                out.push(text.clone());
            } else {
                out.push(format!("{}: {}", path, text));
            }
        }
        Value::Object(map) => {
            for (key, child) in map {
                if path.is_empty() && matches!(key.as_str(), "status" | "success" | "reference") {
                    continue;
                }
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", path, key)
                };
                collect_messages(child, child_path, out);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_messages(item, path.clone(), out);
            }
        }
        _ => {}
    }
}
