//! Request dispatch.
//!
//! [`RequestDispatcher`] is the authenticated entry point used by the admin
//! views; [`CsrfClient`] covers the unauthenticated flows that rely on the
//! anti-forgery cookie instead. Both settle each request exactly once.

mod csrf_client;
mod dispatcher;
mod handle;

pub use csrf_client::CsrfClient;
pub use dispatcher::RequestDispatcher;
pub use handle::DispatchHandle;

use console_domain::{ApiResponse, PreparedRequest, RawResponse};
use serde_json::Value as JsonValue;

use crate::error::{DispatchError, DispatchResult};
use crate::ports::HttpTransport;

/// Sends a prepared request and normalizes the outcome.
pub(crate) async fn execute(
    transport: &dyn HttpTransport,
    request: PreparedRequest,
) -> DispatchResult<ApiResponse> {
    let method = request.method;
    let url = request.url.clone();

    let outcome = match transport.send(request).await {
        Ok(raw) => settle(raw),
        Err(e) => Err(DispatchError::from(e)),
    };

    match &outcome {
        Ok(response) => {
            tracing::debug!(%method, %url, status = %response.status, "request completed");
        }
        Err(error) => {
            tracing::warn!(%method, %url, status = ?error.status(), %error, "request failed");
        }
    }
    outcome
}

/// Maps a raw response onto success or failure.
fn settle(raw: RawResponse) -> DispatchResult<ApiResponse> {
    if !raw.status.is_success() {
        let payload = Some(raw.decode_body().unwrap_or_else(|_| {
            JsonValue::String(String::from_utf8_lossy(&raw.body).into_owned())
        }))
        .filter(|v| !v.is_null());
        return Err(DispatchError::HttpStatus {
            status: raw.status,
            payload,
        });
    }

    let body: JsonValue = raw.decode_body()?;
    Ok(ApiResponse {
        status: raw.status,
        headers: raw.headers,
        body,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::HashMap;

    fn json_response(status: u16, body: &str) -> RawResponse {
        let headers = HashMap::from([("Content-Type".to_string(), "application/json".to_string())]);
        RawResponse::new(status, headers, body.as_bytes().to_vec())
    }

    #[test]
    fn test_success_parses_body() {
        let response = settle(json_response(200, r#"{"ok":true}"#)).unwrap();
        assert_eq!(response.body, json!({"ok": true}));
    }

    #[test]
    fn test_non_success_carries_payload() {
        let error = settle(json_response(400, r#"{"message":"bad"}"#)).unwrap_err();
        assert_eq!(error.status().map(|s| s.as_u16()), Some(400));
        assert_eq!(error.payload(), Some(&json!({"message": "bad"})));
    }

    #[test]
    fn test_non_success_without_body() {
        let error = settle(json_response(500, "")).unwrap_err();
        assert_eq!(error.payload(), None);
    }

    #[test]
    fn test_unparsable_error_body_kept_as_text() {
        let error = settle(json_response(502, "<html>Bad Gateway</html>")).unwrap_err();
        assert_eq!(error.status().map(|s| s.as_u16()), Some(502));
        assert_eq!(error.payload(), Some(&json!("<html>Bad Gateway</html>")));
        assert!(error.server_error().is_none());
    }

    #[test]
    fn test_malformed_success_body_is_serialization_error() {
        let error = settle(json_response(200, "{nope")).unwrap_err();
        assert!(matches!(error, DispatchError::Serialization(_)));
    }

    #[test]
    fn test_redirect_status_is_failure() {
        let error = settle(json_response(304, "")).unwrap_err();
        assert_eq!(error.status().map(|s| s.as_u16()), Some(304));
    }
}
