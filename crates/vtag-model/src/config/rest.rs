use std::{fmt, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    error::{ModelError, ModelResult},
    strategy::RetryStrategy,
};

/// Connection settings for the vSphere REST endpoint.
///
/// All fields are read-only for the lifetime of a resolver.
#[derive(Clone, Serialize, Deserialize)]
pub struct RestConfig {
    /// vCenter host name (optionally with `:port`).
    pub hostname: String,
    pub username: String,
    pub password: String,
    /// PEM bundle, or a directory of `.pem` / `.crt` files, used as extra trust roots.
    #[serde(default)]
    pub ssl_capath: Option<PathBuf>,
    /// When `false`, server certificates are not validated.
    #[serde(default = "default_ssl_verify")]
    pub ssl_verify: bool,
    /// Prepended to every resolved `category:name` tag.
    #[serde(default, alias = "vsphere_tags_prefix")]
    pub tags_prefix: String,
    /// Per-request timeout enforced by the HTTP transport.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default)]
    pub retry: RetryStrategy,
}

fn default_ssl_verify() -> bool {
    true
}

fn default_timeout_ms() -> u64 {
    30_000
}

impl RestConfig {
    pub fn new<H, U, P>(hostname: H, username: U, password: P) -> Self
    where
        H: Into<String>,
        U: Into<String>,
        P: Into<String>,
    {
        Self {
            hostname: hostname.into(),
            username: username.into(),
            password: password.into(),
            ssl_capath: None,
            ssl_verify: default_ssl_verify(),
            tags_prefix: String::new(),
            timeout_ms: default_timeout_ms(),
            retry: RetryStrategy::default(),
        }
    }

    /// Replace the tag prefix and return the updated config.
    pub fn with_tags_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.tags_prefix = prefix.into();
        self
    }

    /// Replace the retry strategy and return the updated config.
    pub fn with_retry(mut self, retry: RetryStrategy) -> Self {
        self.retry = retry;
        self
    }

    /// Root of the CIS REST namespace, always ending with `/`.
    pub fn api_base_url(&self) -> String {
        format!("https://{}/rest/com/vmware/cis/", self.hostname)
    }

    pub fn validate(&self) -> ModelResult<()> {
        if self.hostname.trim().is_empty() {
            return Err(ModelError::InvalidConfig("hostname cannot be empty".into()));
        }
        if self.timeout_ms == 0 {
            return Err(ModelError::InvalidConfig("timeout_ms cannot be zero".into()));
        }
        self.retry.validate()
    }
}

impl fmt::Debug for RestConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestConfig")
            .field("hostname", &self.hostname)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("ssl_capath", &self.ssl_capath)
            .field("ssl_verify", &self.ssl_verify)
            .field("tags_prefix", &self.tags_prefix)
            .field("timeout_ms", &self.timeout_ms)
            .field("retry", &self.retry)
            .finish()
    }
}
