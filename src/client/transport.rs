//! Request transport.
//!
//! [`PidmanClient`](crate::PidmanClient) builds a [`PidmanRequest`] and hands
//! it to a [`Transport`]. The production transport is [`HttpTransport`];
//! tests substitute their own implementation to record requests and return
//! canned responses without a network.

use crate::client::config::ClientConfig;
use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;
use http::header::{HeaderMap, HeaderValue, CONTENT_LENGTH};
use http::Method;

/// A request ready to be sent.
#[derive(Debug, Clone)]
pub struct PidmanRequest {
    /// HTTP method
    pub method: Method,
    /// Origin-form path: prefix, resource and optional query string
    pub path: String,
    /// Headers to send
    pub headers: HeaderMap,
    /// Body, if any
    pub body: Option<Bytes>,
}

impl PidmanRequest {
    /// A bodiless request.
    pub fn new(method: Method, path: impl Into<String>, headers: HeaderMap) -> Self {
        PidmanRequest {
            method,
            path: path.into(),
            headers,
            body: None,
        }
    }

    /// Attach a body. The `Content-Length` header is set to its length,
    /// replacing the zero carried by the header templates.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        let body = body.into();
        self.headers
            .insert(CONTENT_LENGTH, HeaderValue::from(body.len()));
        self.body = Some(body);
        self
    }

    /// The body as text, if any.
    pub fn body_text(&self) -> Option<&str> {
        self.body
            .as_ref()
            .and_then(|body| std::str::from_utf8(body).ok())
    }
}

/// A response as seen by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PidmanResponse {
    /// Status code
    pub status: u16,
    /// Reason phrase
    pub reason: String,
    /// Raw body
    pub body: Bytes,
}

impl PidmanResponse {
    /// Build a response, deriving the reason phrase from the status code.
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        let reason = http::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("")
            .to_string();

        PidmanResponse {
            status,
            reason,
            body: body.into(),
        }
    }

    /// The body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends one request and returns its response.
///
/// Implementations perform exactly one round trip per call. Status codes
/// are not interpreted here; only failures to deliver the request or read
/// the response are errors.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` and wait for the response.
    async fn send(&self, request: PidmanRequest) -> Result<PidmanResponse>;
}

/// HTTP transport backed by `reqwest`, bound to one scheme and host.
///
/// Keeps at most one idle connection to the host, which is reused across
/// calls.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    origin: String,
}

impl HttpTransport {
    /// Prepare a transport for the scheme and host in `config`.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(1)
            .https_only(config.is_https())
            .build()?;

        Ok(HttpTransport {
            client,
            origin: format!("{}://{}", config.scheme(), config.host()),
        })
    }

    /// `scheme://host` every request path is appended to.
    pub fn origin(&self) -> &str {
        &self.origin
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: PidmanRequest) -> Result<PidmanResponse> {
        let url = format!("{}{}", self.origin, request.path);

        let mut req_builder = self
            .client
            .request(request.method, url)
            .headers(request.headers);

        if let Some(body) = request.body {
            req_builder = req_builder.body(body);
        }

        let response = req_builder.send().await?;

        let status = response.status();
        let reason = status.canonical_reason().unwrap_or("").to_string();
        let body = response.bytes().await?;

        Ok(PidmanResponse {
            status: status.as_u16(),
            reason,
            body,
        })
    }
}
