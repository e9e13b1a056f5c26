//! Request model and payload encoding policy.
//!
//! A [`RequestSpec`] is what a view asks for; [`RequestSpec::prepare`] turns
//! it into a [`PreparedRequest`] following the console's encoding rules:
//!
//! - JSON payloads on GET travel as query parameters, never as a body
//! - JSON payloads on other methods are serialized to JSON text
//! - both JSON forms announce `Content-Type: application/json`
//! - multipart payloads leave the content type to the transport

mod method;
mod multipart;
mod prepared;
mod query;

pub use method::HttpMethod;
pub use multipart::{MultipartField, MultipartForm, MultipartValue, coerce_field_value};
pub use prepared::{
    APPLICATION_JSON, AUTHORIZATION, CONTENT_TYPE, CSRF_TOKEN, PreparedBody, PreparedRequest,
};
pub use query::{QueryParam, QueryParams};

use serde_json::Value as JsonValue;

use crate::error::{DomainError, DomainResult};

/// Payload supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestPayload {
    /// No payload.
    #[default]
    None,
    /// Structured value, encoded according to the method.
    Json(JsonValue),
    /// Multipart field set.
    Multipart(MultipartForm),
}

impl RequestPayload {
    /// Returns true for multipart payloads.
    #[must_use]
    pub const fn is_multipart(&self) -> bool {
        matches!(self, Self::Multipart(_))
    }
}

/// A single request as described by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    /// HTTP method.
    pub method: HttpMethod,
    /// Absolute URL or path relative to the API base.
    pub url: String,
    /// Caller payload.
    pub payload: RequestPayload,
}

impl RequestSpec {
    /// Creates a JSON request.
    #[must_use]
    pub fn json(method: HttpMethod, url: impl Into<String>, body: JsonValue) -> Self {
        Self {
            method,
            url: url.into(),
            payload: RequestPayload::Json(body),
        }
    }

    /// Creates a multipart request.
    #[must_use]
    pub fn multipart(method: HttpMethod, url: impl Into<String>, form: MultipartForm) -> Self {
        Self {
            method,
            url: url.into(),
            payload: RequestPayload::Multipart(form),
        }
    }

    /// Returns true if the payload is transmitted as multipart.
    #[must_use]
    pub const fn is_multipart(&self) -> bool {
        self.payload.is_multipart()
    }

    /// Encodes the request for the transport.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUrl`] for an empty URL, and
    /// [`DomainError::InvalidBody`] when a GET payload is not a key/value
    /// mapping or the payload cannot be serialized.
    pub fn prepare(self) -> DomainResult<PreparedRequest> {
        if self.url.trim().is_empty() {
            return Err(DomainError::InvalidUrl("URL must not be empty".to_string()));
        }

        let mut prepared = PreparedRequest::new(self.method, self.url);
        match self.payload {
            RequestPayload::None => {
                prepared.set_header(CONTENT_TYPE, APPLICATION_JSON);
            }
            RequestPayload::Json(body) => {
                prepared.set_header(CONTENT_TYPE, APPLICATION_JSON);
                if self.method.sends_body_as_query() {
                    prepared.query = QueryParams::from_json(&body)?;
                } else {
                    let text = serde_json::to_string(&body)
                        .map_err(|e| DomainError::InvalidBody(e.to_string()))?;
                    prepared.body = PreparedBody::Json(text);
                }
            }
            RequestPayload::Multipart(form) => {
                prepared.body = PreparedBody::Multipart(form);
            }
        }
        Ok(prepared)
    }
}
