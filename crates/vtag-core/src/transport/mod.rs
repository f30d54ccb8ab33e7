//! HTTP seam used by [`crate::session::RestSession`].
//!
//! A transport performs one request and hands back the decoded JSON body.
//! Authentication with the vCenter credentials is the transport's job; the session header is
//! added by the session layer.
mod error;
pub use error::TransportError;

mod http;
pub use http::HttpTransport;

#[cfg(test)]
pub(crate) mod fake;

use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Last value set for `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .rev()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform the request.
    ///
    /// Non-2xx answers must be reported as [`TransportError::Status`].
    /// An empty success body is returned as `Value::Null`.
    async fn execute(&self, request: ApiRequest) -> Result<Value, TransportError>;
}
