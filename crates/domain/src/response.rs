//! Response types
//!
//! [`RawResponse`] is what the transport hands back; [`ApiResponse`] is the
//! decoded value delivered to callers on success. [`ServerErrorBody`] is the
//! uniform error envelope the admin backend returns on failures.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::error::{DomainError, DomainResult};

/// HTTP status code with semantic helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusCode(pub u16);

impl StatusCode {
    /// Creates a new `StatusCode`.
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Returns the numeric status code.
    #[must_use]
    pub const fn as_u16(&self) -> u16 {
        self.0
    }

    /// Returns true if this is a 2xx success status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// Returns true if this is a 4xx client error status.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.0 >= 400 && self.0 < 500
    }

    /// Returns true if this is a 5xx server error status.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.0 >= 500 && self.0 < 600
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

/// Undecoded response as received from the transport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResponse {
    /// Status code.
    pub status: StatusCode,
    /// Response headers, names lowercased.
    pub headers: HashMap<String, String>,
    /// Raw body bytes.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Creates a raw response, lowercasing header names.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status: StatusCode(status),
            headers: headers
                .into_iter()
                .map(|(k, v)| (k.to_ascii_lowercase(), v))
                .collect(),
            body,
        }
    }

    /// Returns the `Content-Type` header, if present.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get("content-type").map(String::as_str)
    }

    /// Returns true when the response declares a JSON media type.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.content_type().is_some_and(|ct| {
            let essence = ct.split(';').next().unwrap_or_default().trim();
            essence.eq_ignore_ascii_case("application/json") || essence.ends_with("+json")
        })
    }

    /// Decodes the body into a JSON value.
    ///
    /// An empty body decodes to `null`. JSON media types must parse. Other
    /// media types are parsed when possible and otherwise kept as a string.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidBody`] when a JSON response is malformed.
    pub fn decode_body(&self) -> DomainResult<JsonValue> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonValue::Null);
        }
        match serde_json::from_slice(&self.body) {
            Ok(value) => Ok(value),
            Err(e) if self.is_json() => Err(DomainError::InvalidBody(format!(
                "malformed JSON response: {e}"
            ))),
            Err(_) => Ok(JsonValue::String(
                String::from_utf8_lossy(&self.body).into_owned(),
            )),
        }
    }
}

/// Successful, decoded response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// Status code (always 2xx).
    pub status: StatusCode,
    /// Response headers, names lowercased.
    pub headers: HashMap<String, String>,
    /// Parsed body.
    pub body: JsonValue,
}

impl ApiResponse {
    /// Decodes the body into a typed value.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidBody`] when the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> DomainResult<T> {
        T::deserialize(&self.body).map_err(|e| DomainError::InvalidBody(e.to_string()))
    }
}

/// The backend's error envelope: `{status, reason, message, data}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerErrorBody {
    /// HTTP status echoed by the server.
    pub status: u16,
    /// Short reason, e.g. `"Resource Not Found"`.
    pub reason: String,
    /// Human-readable message.
    pub message: String,
    /// Optional extra data, usually `null`.
    #[serde(default)]
    pub data: JsonValue,
}

impl ServerErrorBody {
    /// Extracts the envelope from a raw error payload, if it has that shape.
    #[must_use]
    pub fn from_payload(payload: &JsonValue) -> Option<Self> {
        Self::deserialize(payload).ok()
    }
}
