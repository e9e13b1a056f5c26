//! Test doubles for the application ports.

#![allow(clippy::expect_used, missing_docs)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use console_domain::{PreparedRequest, RawResponse};
use parking_lot::Mutex;

use crate::ports::{CookieReader, HttpTransport, TransportError};

/// Transport that records requests and replays a canned outcome.
#[derive(Clone)]
pub struct RecordingTransport {
    outcome: Result<RawResponse, TransportError>,
    sent: Arc<Mutex<Vec<PreparedRequest>>>,
}

impl RecordingTransport {
    pub fn replying(status: u16, body: &str) -> Self {
        let headers = HashMap::from([("content-type".to_string(), "application/json".to_string())]);
        Self {
            outcome: Ok(RawResponse::new(status, headers, body.as_bytes().to_vec())),
            sent: Arc::default(),
        }
    }

    pub fn failing(error: TransportError) -> Self {
        Self {
            outcome: Err(error),
            sent: Arc::default(),
        }
    }

    pub fn sent(&self) -> Vec<PreparedRequest> {
        self.sent.lock().clone()
    }

    pub fn last(&self) -> PreparedRequest {
        self.sent.lock().last().cloned().expect("no request was sent")
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, TransportError> {
        self.sent.lock().push(request);
        self.outcome.clone()
    }
}

/// Cookie jar backed by a map.
pub struct MapCookies(pub HashMap<String, String>);

impl CookieReader for MapCookies {
    fn cookie(&self, name: &str) -> Option<String> {
        self.0.get(name).cloned()
    }
}
