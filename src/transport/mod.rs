//! HTTP transport abstraction.
//!
//! The resolver talks to the provider through the [`HttpTransport`] trait so the
//! network layer can be swapped out (tests use scripted fakes). The production
//! implementation is [`ReqwestTransport`], which retries transient failures
//! inside a single `execute` call.

mod reqwest_transport;

pub use reqwest_transport::{is_retriable_status, ReqwestTransport};

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

use crate::error_handling::LookupError;

/// A provider request: always a `GET` with a handful of headers.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    /// Absolute URL
    pub url: String,
    /// Header name/value pairs in insertion order
    pub headers: Vec<(String, String)>,
}

impl TransportRequest {
    /// A `GET` for `url` with no headers.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
        }
    }

    /// Appends a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A fully-read provider response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Header names are stored lowercase.
    pub headers: HashMap<String, String>,
    /// Body decoded as text
    pub body: String,
}

impl TransportResponse {
    /// A response with no headers.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    /// Sets a header, lowercasing its name.
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// Network-level failure of a transport call (no HTTP response was obtained).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    /// The per-request timeout elapsed.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    Connect(String),

    /// The request itself was malformed; never retried.
    #[error("request could not be built: {0}")]
    Builder(String),

    /// Any other failure while sending or reading the body.
    #[error("request failed: {0}")]
    Request(String),
}

impl TransportError {
    /// Whether another attempt could plausibly succeed.
    pub fn is_retriable(&self) -> bool {
        !matches!(self, TransportError::Builder(_))
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        let msg = error.to_string();
        if error.is_builder() {
            TransportError::Builder(msg)
        } else if error.is_timeout() {
            TransportError::Timeout(msg)
        } else if error.is_connect() {
            TransportError::Connect(msg)
        } else {
            TransportError::Request(msg)
        }
    }
}

impl From<TransportError> for LookupError {
    fn from(error: TransportError) -> Self {
        LookupError::Transport(error.to_string())
    }
}

/// Capability interface for issuing provider requests.
///
/// Implementations own their retry policy for transient failures; callers see
/// either the last response obtained or the last network error.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issues `request`, retrying transient failures per the implementation's policy.
    async fn execute(&self, request: &TransportRequest) -> Result<TransportResponse, TransportError>;
}
