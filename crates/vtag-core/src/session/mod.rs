//! Authenticated access to the CIS REST namespace.
//!
//! [`RestSession::connect`] trades the configured credentials for a session token, which is
//! then attached as `vmware-api-session-id` to every call made through
//! [`RestSession::request_json`]. All payloads of this API come wrapped as `{"value": ...}`;
//! `request_json` enforces that envelope and decodes the inner value.

use std::sync::{Arc, PoisonError, RwLock};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};
use vtag_model::RestConfig;

use crate::{
    error::{ApiError, ApiResult},
    transport::{ApiRequest, Method, Transport, TransportError},
};

/// Header carrying the session token.
pub const SESSION_HEADER: &str = "vmware-api-session-id";

const SESSION_ENDPOINT: &str = "session";

pub struct RestSession {
    transport: Arc<dyn Transport>,
    hostname: String,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl RestSession {
    /// Create a session handle; no request is made until [`RestSession::connect`].
    pub fn new(cfg: &RestConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            hostname: cfg.hostname.clone(),
            base_url: cfg.api_base_url(),
            token: RwLock::new(None),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_connected(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Create (or refresh) the session token.
    pub async fn connect(&self) -> ApiResult<()> {
        let url = format!("{}{}", self.base_url, SESSION_ENDPOINT);
        let body = self
            .transport
            .execute(ApiRequest::new(Method::Post, url))
            .await
            .map_err(|e| {
                ApiError::Connection(format!(
                    "Connection to vSphere Rest API failed for host {}: {e}",
                    self.hostname
                ))
            })?;

        let token = body
            .get("value")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::Connection("Failed to retrieve session token".into()))?;

        // The slot holds a plain `Option`; a panicked writer cannot leave it half-updated.
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        info!(host = %self.hostname, "vSphere REST session established");
        Ok(())
    }

    /// Call `endpoint` (relative to the CIS base URL) and decode the `value` element of the answer.
    pub async fn request_json<T>(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<Value>,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut request = ApiRequest::new(method, url.clone());
        let token = self.token.read().unwrap_or_else(PoisonError::into_inner).clone();
        if let Some(token) = token {
            request = request.with_header(SESSION_HEADER, token);
        }
        if let Some(body) = body {
            request = request
                .with_header("Content-Type", "application/json")
                .with_body(body);
        }

        debug!(?method, %url, "vSphere REST request");
        let mut data = self.transport.execute(request).await.map_err(|e| match e {
            TransportError::Decode { .. } => ApiError::Response(e.to_string()),
            other => ApiError::Connection(other.to_string()),
        })?;

        let Some(value) = data.as_object_mut().and_then(|o| o.remove("value")) else {
            return Err(ApiError::Response(format!(
                "Missing `value` element in response for url: {url}"
            )));
        };

        serde_json::from_value(value).map_err(|e| {
            ApiError::Response(format!("Unexpected `value` element in response for url: {url}: {e}"))
        })
    }
}
