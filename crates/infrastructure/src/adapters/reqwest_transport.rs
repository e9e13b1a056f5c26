//! HTTP transport implementation using reqwest.
//!
//! This adapter implements the `HttpTransport` port using the reqwest library.
//! It puts a prepared request on the wire exactly as prepared and hands back
//! whatever status the server answered with.

use std::collections::HashMap;
use std::time::Instant;

use async_trait::async_trait;
use console_application::ports::{HttpTransport, TransportError};
use console_domain::{ClientSettings, HttpMethod, PreparedBody, PreparedRequest, RawResponse};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};

use crate::http::build_multipart_form;

/// HTTP transport implementation using reqwest.
///
/// Relative request URLs are resolved against the configured base URL.
pub struct ReqwestTransport {
    client: Client,
    settings: ClientSettings,
}

impl ReqwestTransport {
    /// Creates a new transport from client settings.
    ///
    /// Configuration:
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled
    /// - User-Agent: from settings
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new(settings: ClientSettings) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(settings.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| TransportError::Connection(e.to_string()))?;

        Ok(Self { client, settings })
    }

    /// Creates a new transport with a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client, settings: ClientSettings) -> Self {
        Self { client, settings }
    }

    /// Returns the settings used to resolve URLs.
    #[must_use]
    pub const fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// Attaches the prepared body.
    ///
    /// Multipart bodies get their `Content-Type` (with boundary) from reqwest.
    fn build_body(
        builder: RequestBuilder,
        body: PreparedBody,
    ) -> Result<RequestBuilder, TransportError> {
        match body {
            PreparedBody::None => Ok(builder),
            PreparedBody::Json(text) => Ok(builder.body(text)),
            PreparedBody::Multipart(form) => {
                let form =
                    build_multipart_form(form).map_err(|e| TransportError::Body(e.to_string()))?;
                Ok(builder.multipart(form))
            }
        }
    }

    /// Converts prepared headers, rejecting names or values HTTP cannot carry.
    fn build_headers(headers: &[(String, String)]) -> Result<HeaderMap, TransportError> {
        let mut map = HeaderMap::with_capacity(headers.len());
        for (name, value) in headers {
            let invalid = |message: String| TransportError::InvalidHeader {
                name: name.clone(),
                message,
            };
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(e.to_string()))?;
            let header_value = HeaderValue::from_str(value).map_err(|e| invalid(e.to_string()))?;
            map.insert(header_name, header_value);
        }
        Ok(map)
    }

    /// Maps reqwest errors to the transport error.
    ///
    /// URLs and headers are validated before the builder runs, so a builder
    /// failure here concerns the request body.
    fn map_error(error: &reqwest::Error) -> TransportError {
        if error.is_builder() {
            return TransportError::Body(error.to_string());
        }

        if error.is_connect() {
            let host = error
                .url()
                .and_then(|u| u.host_str().map(str::to_string))
                .unwrap_or_else(|| "unknown".to_string());
            return TransportError::Connection(format!("{host}: {error}"));
        }

        TransportError::Connection(error.to_string())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, TransportError> {
        let mut url = self
            .settings
            .resolve_url(&request.url)
            .map_err(|e| TransportError::InvalidUrl(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(TransportError::InvalidUrl(format!(
                "unsupported scheme: {url}"
            )));
        }
        let headers = Self::build_headers(&request.headers)?;

        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(
                request
                    .query
                    .all()
                    .iter()
                    .map(|p| (p.key.as_str(), p.value.as_str())),
            );
        }

        let start = Instant::now();

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), url)
            .headers(headers);

        builder = Self::build_body(builder, request.body)?;

        let response = builder.send().await.map_err(|e| Self::map_error(&e))?;

        let status = response.status().as_u16();

        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
            .collect();

        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Connection(format!("Failed to read body: {e}")))?
            .to_vec();

        tracing::trace!(
            status,
            bytes = body.len(),
            elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
            "response received"
        );

        Ok(RawResponse::new(status, headers, body))
    }
}
