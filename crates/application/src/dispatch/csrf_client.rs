//! Anti-forgery client for unauthenticated flows.

use std::sync::Arc;

use console_domain::{
    ApiResponse, ClientSettings, DomainError, HttpMethod, PreparedBody, PreparedRequest,
    request::{APPLICATION_JSON, CONTENT_TYPE, CSRF_TOKEN},
};
use serde_json::Value as JsonValue;

use super::execute;
use crate::error::{DispatchError, DispatchResult};
use crate::ports::{CookieReader, HttpTransport};

/// Client for the login and sign-up pages.
///
/// No bearer credential is attached. Every call carries the anti-forgery
/// cookie as `X-CSRFToken` (omitted when the cookie is not set) and
/// `Content-Type: application/json`.
#[derive(Clone)]
pub struct CsrfClient {
    transport: Arc<dyn HttpTransport>,
    cookies: Arc<dyn CookieReader>,
    cookie_name: String,
}

impl CsrfClient {
    /// Creates a client reading the cookie named in `settings`.
    #[must_use]
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        cookies: Arc<dyn CookieReader>,
        settings: &ClientSettings,
    ) -> Self {
        Self {
            transport,
            cookies,
            cookie_name: settings.csrf_cookie_name.clone(),
        }
    }

    /// Sends a GET without a body.
    ///
    /// # Errors
    ///
    /// Returns a [`DispatchError`] on any failure.
    pub async fn get(&self, url: impl Into<String>) -> DispatchResult<ApiResponse> {
        let request = self.prepare(HttpMethod::Get, url.into(), None)?;
        execute(self.transport.as_ref(), request).await
    }

    /// Sends a POST with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns a [`DispatchError`] on any failure.
    pub async fn post(
        &self,
        url: impl Into<String>,
        body: &JsonValue,
    ) -> DispatchResult<ApiResponse> {
        let request = self.prepare(HttpMethod::Post, url.into(), Some(body))?;
        execute(self.transport.as_ref(), request).await
    }

    /// Sends a DELETE with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns a [`DispatchError`] on any failure.
    pub async fn delete(
        &self,
        url: impl Into<String>,
        body: &JsonValue,
    ) -> DispatchResult<ApiResponse> {
        let request = self.prepare(HttpMethod::Delete, url.into(), Some(body))?;
        execute(self.transport.as_ref(), request).await
    }

    fn prepare(
        &self,
        method: HttpMethod,
        url: String,
        body: Option<&JsonValue>,
    ) -> DispatchResult<PreparedRequest> {
        if url.trim().is_empty() {
            return Err(DispatchError::InvalidRequest(DomainError::InvalidUrl(
                "URL must not be empty".to_string(),
            )));
        }

        let mut request = PreparedRequest::new(method, url);
        request.set_header(CONTENT_TYPE, APPLICATION_JSON);
        match self.cookies.cookie(&self.cookie_name) {
            Some(token) => request.set_header(CSRF_TOKEN, token),
            None => tracing::debug!(cookie = %self.cookie_name, "anti-forgery cookie not set"),
        }
        if let Some(body) = body {
            let text = serde_json::to_string(body)
                .map_err(|e| DispatchError::Serialization(e.to_string()))?;
            request.body = PreparedBody::Json(text);
        }
        Ok(request)
    }
}
