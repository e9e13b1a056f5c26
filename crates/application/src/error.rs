//! Application error types

use serde_json::Value as JsonValue;
use thiserror::Error;
use console_domain::{DomainError, ServerErrorBody, StatusCode};

/// Failure outcome of a dispatch.
///
/// Every failure reaches the caller through this type; nothing is retried or
/// suppressed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DispatchError {
    /// No response reached the client.
    #[error("network error: {message}")]
    Network {
        /// Transport-level description.
        message: String,
    },

    /// The server answered with a non-success status.
    #[error("HTTP {status}{}", server_message(.payload.as_ref()))]
    HttpStatus {
        /// Response status.
        status: StatusCode,
        /// Raw error payload sent by the server, if any.
        payload: Option<JsonValue>,
    },

    /// A body could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The request violated a precondition and was never sent.
    #[error("invalid request: {0}")]
    InvalidRequest(DomainError),
}

impl DispatchError {
    /// Status code, or `None` when no response was received.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw server-provided error payload, if present.
    #[must_use]
    pub const fn payload(&self) -> Option<&JsonValue> {
        match self {
            Self::HttpStatus { payload, .. } => payload.as_ref(),
            _ => None,
        }
    }

    /// The payload parsed as the backend's error envelope.
    #[must_use]
    pub fn server_error(&self) -> Option<ServerErrorBody> {
        self.payload().and_then(ServerErrorBody::from_payload)
    }

    /// Returns true for failures where no response was received.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

impl From<DomainError> for DispatchError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::InvalidBody(message) => Self::Serialization(message),
            other => Self::InvalidRequest(other),
        }
    }
}

fn server_message(payload: Option<&JsonValue>) -> String {
    payload
        .and_then(ServerErrorBody::from_payload)
        .map(|body| format!(": {}", body.message))
        .unwrap_or_default()
}

/// Result type alias for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;
