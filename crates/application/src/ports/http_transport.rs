//! HTTP transport port

use async_trait::async_trait;
use console_domain::{DomainError, PreparedRequest, RawResponse};

use crate::error::DispatchError;

/// Errors raised by a transport before a response is available.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// Connection, DNS, TLS or read failure.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The URL could not be resolved.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// A header name or value cannot be sent, e.g. a token with a newline.
    #[error("invalid header {name}: {message}")]
    InvalidHeader {
        /// Header name as prepared.
        name: String,
        /// Parser message.
        message: String,
    },

    /// The prepared body could not be put on the wire.
    #[error("body encoding failed: {0}")]
    Body(String),
}

impl From<TransportError> for DispatchError {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::Connection(message) => Self::Network { message },
            TransportError::InvalidUrl(message) => {
                Self::InvalidRequest(DomainError::InvalidUrl(message))
            }
            TransportError::Body(message) => Self::Serialization(message),
            error @ TransportError::InvalidHeader { .. } => Self::Serialization(error.to_string()),
        }
    }
}


/// Port performing one HTTP exchange.
///
/// Implementations send the request exactly as prepared: no retries, no
/// caching, no extra content type for multipart bodies. Any received status,
/// success or not, is returned as a [`RawResponse`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends the request and returns the undecoded response.
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, TransportError>;
}
