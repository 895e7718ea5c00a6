//! Shared test helpers: a transport that records requests and replays a
//! canned response.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use pidman_client::{ClientConfig, PidmanClient, PidmanRequest, PidmanResponse, Result, Transport};
use std::sync::Arc;
use url::form_urlencoded;

pub const BASE_URL: &str = "http://brutus.library.emory.edu/pidman";
pub const USERNAME: &str = "testuser";
pub const PASSWORD: &str = "testuserpass";

/// Records every request and answers with the configured response.
pub struct RecordingTransport {
    response: Mutex<PidmanResponse>,
    requests: Mutex<Vec<PidmanRequest>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        RecordingTransport {
            response: Mutex::new(PidmanResponse::new(200, "")),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn respond(&self, status: u16, body: &str) {
        *self.response.lock() = PidmanResponse::new(status, body.to_string());
    }

    pub fn requests(&self) -> Vec<PidmanRequest> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn last(&self) -> PidmanRequest {
        self.requests
            .lock()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: PidmanRequest) -> Result<PidmanResponse> {
        self.requests.lock().push(request);
        Ok(self.response.lock().clone())
    }
}

/// A client over a fresh recording transport.
pub fn new_client() -> (PidmanClient, Arc<RecordingTransport>) {
    let transport = Arc::new(RecordingTransport::new());
    let config = ClientConfig::new(BASE_URL, USERNAME, PASSWORD).unwrap();
    let client = PidmanClient::with_transport(config, transport.clone());
    (client, transport)
}

/// Decode a url-encoded body into key/value pairs.
pub fn form_pairs(request: &PidmanRequest) -> Vec<(String, String)> {
    let body = request.body_text().unwrap_or_default();
    form_urlencoded::parse(body.as_bytes()).into_owned().collect()
}

/// Keys present in a url-encoded body.
pub fn form_keys(request: &PidmanRequest) -> Vec<String> {
    form_pairs(request).into_iter().map(|(k, _)| k).collect()
}

/// Decode a JSON body.
pub fn json_body(request: &PidmanRequest) -> serde_json::Value {
    serde_json::from_slice(request.body.as_ref().expect("request has no body")).unwrap()
}
