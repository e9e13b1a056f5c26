//! Wire-ready request handed to the transport.

use super::{HttpMethod, MultipartForm, QueryParams};

/// Header name for bearer credentials.
pub const AUTHORIZATION: &str = "Authorization";
/// Header name for the payload media type.
pub const CONTENT_TYPE: &str = "Content-Type";
/// Header name for the anti-forgery token.
pub const CSRF_TOKEN: &str = "X-CSRFToken";
/// Media type for JSON payloads.
pub const APPLICATION_JSON: &str = "application/json";

/// Encoded request body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PreparedBody {
    /// No body is transmitted.
    #[default]
    None,
    /// Serialized JSON text.
    Json(String),
    /// Multipart field set; the transport emits the boundary content type.
    Multipart(MultipartForm),
}

/// A fully encoded request: headers decided, payload serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Absolute or relative URL, as supplied by the caller.
    pub url: String,
    /// Headers in insertion order.
    pub headers: Vec<(String, String)>,
    /// Query parameters appended to the URL.
    pub query: QueryParams,
    /// Encoded body.
    pub body: PreparedBody,
}

impl PreparedRequest {
    /// Creates a request with no headers, query or body.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            query: QueryParams::new(),
            body: PreparedBody::None,
        }
    }

    /// Sets a header, replacing any existing value with the same name.
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
    }

    /// Returns the value of the named header (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if the body is a multipart field set.
    #[must_use]
    pub const fn is_multipart(&self) -> bool {
        matches!(self.body, PreparedBody::Multipart(_))
    }
}
