//! Authenticated request dispatcher.

use std::sync::Arc;

use console_domain::{
    ApiResponse, HttpMethod, MultipartForm, PreparedRequest, RequestSpec,
    request::AUTHORIZATION,
};
use serde_json::Value as JsonValue;

use super::{DispatchHandle, execute};
use crate::error::DispatchResult;
use crate::ports::{CredentialResolver, HttpTransport};

/// Issues authenticated calls to the admin API.
///
/// Each call reads the credential store once, attaches
/// `Authorization: Bearer <token>` when a token is present (admin before
/// user), encodes the payload and settles exactly once. Calls are
/// independent of one another; responses may complete in any order.
#[derive(Clone)]
pub struct RequestDispatcher {
    transport: Arc<dyn HttpTransport>,
    credentials: Arc<dyn CredentialResolver>,
}

impl RequestDispatcher {
    /// Creates a dispatcher over a transport and a credential source.
    #[must_use]
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        credentials: Arc<dyn CredentialResolver>,
    ) -> Self {
        Self {
            transport,
            credentials,
        }
    }

    /// Sends a JSON request.
    ///
    /// For GET the body (a key/value mapping, or `null`) is sent as query
    /// parameters; other methods send it as JSON text. Both announce
    /// `Content-Type: application/json`.
    ///
    /// # Errors
    ///
    /// Returns a [`DispatchError`](crate::DispatchError) for network failures,
    /// non-success statuses, encoding or decoding failures and empty URLs.
    pub async fn dispatch_json(
        &self,
        method: HttpMethod,
        url: impl Into<String>,
        body: JsonValue,
    ) -> DispatchResult<ApiResponse> {
        self.dispatch(RequestSpec::json(method, url, body)).await
    }

    /// Sends a multipart request.
    ///
    /// `fields` is either a ready [`MultipartForm`] or a flat JSON mapping,
    /// converted entry by entry. No content type is set here so the
    /// transport can announce the multipart boundary.
    ///
    /// # Errors
    ///
    /// Same as [`dispatch_json`](Self::dispatch_json).
    pub async fn dispatch_multipart(
        &self,
        method: HttpMethod,
        url: impl Into<String>,
        fields: impl Into<MultipartForm>,
    ) -> DispatchResult<ApiResponse> {
        self.dispatch(RequestSpec::multipart(method, url, fields.into()))
            .await
    }

    /// Sends any request spec.
    ///
    /// # Errors
    ///
    /// Same as [`dispatch_json`](Self::dispatch_json).
    pub async fn dispatch(&self, spec: RequestSpec) -> DispatchResult<ApiResponse> {
        let prepared = self.prepare(spec)?;
        execute(self.transport.as_ref(), prepared).await
    }

    /// Runs a JSON request on the runtime; see [`DispatchHandle`].
    #[must_use]
    pub fn spawn_json(
        &self,
        method: HttpMethod,
        url: impl Into<String>,
        body: JsonValue,
    ) -> DispatchHandle {
        self.spawn(RequestSpec::json(method, url, body))
    }

    /// Runs a multipart request on the runtime; see [`DispatchHandle`].
    #[must_use]
    pub fn spawn_multipart(
        &self,
        method: HttpMethod,
        url: impl Into<String>,
        fields: impl Into<MultipartForm>,
    ) -> DispatchHandle {
        self.spawn(RequestSpec::multipart(method, url, fields.into()))
    }

    /// Runs any request spec on the runtime.
    #[must_use]
    pub fn spawn(&self, spec: RequestSpec) -> DispatchHandle {
        let dispatcher = self.clone();
        DispatchHandle::spawn(async move { dispatcher.dispatch(spec).await })
    }

    /// Encodes a spec and attaches the resolved credential.
    ///
    /// # Errors
    ///
    /// Returns an error if the spec cannot be encoded.
    pub fn prepare(&self, spec: RequestSpec) -> DispatchResult<PreparedRequest> {
        let mut prepared = spec.prepare()?;
        match self.credentials.resolve() {
            Some(credential) => {
                tracing::debug!(
                    method = %prepared.method,
                    url = %prepared.url,
                    credential = credential.kind().as_str(),
                    "dispatching authenticated request"
                );
                prepared.set_header(AUTHORIZATION, credential.bearer_header());
            }
            None => {
                tracing::debug!(
                    method = %prepared.method,
                    url = %prepared.url,
                    "dispatching unauthenticated request"
                );
            }
        }
        Ok(prepared)
    }
}
