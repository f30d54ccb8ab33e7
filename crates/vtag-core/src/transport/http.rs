use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use async_trait::async_trait;
use reqwest::{Certificate, Client};
use serde_json::Value;
use tracing::{debug, trace};
use vtag_model::RestConfig;

use super::{ApiRequest, Method, Transport, TransportError};

/// [`Transport`] backed by `reqwest`.
///
/// Every request carries basic-auth credentials from the config, mirroring how the
/// session endpoint expects them.
pub struct HttpTransport {
    client: Client,
    username: String,
    password: String,
}

impl HttpTransport {
    pub fn from_config(cfg: &RestConfig) -> Result<Self, TransportError> {
        let mut builder = Client::builder()
            .timeout(Duration::from_millis(cfg.timeout_ms))
            .danger_accept_invalid_certs(!cfg.ssl_verify);

        if let Some(path) = &cfg.ssl_capath {
            for cert in load_certificates(path)? {
                builder = builder.add_root_certificate(cert);
            }
        }

        let client = builder
            .build()
            .map_err(|e| TransportError::Config(e.to_string()))?;

        Ok(Self {
            client,
            username: cfg.username.clone(),
            password: cfg.password.clone(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<Value, TransportError> {
        let ApiRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let mut builder = match method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        }
        .basic_auth(&self.username, Some(&self.password));

        for (name, value) in headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        trace!(?method, %url, "sending request");
        let response = builder.send().await.map_err(|e| TransportError::Unreachable {
            url: url.clone(),
            reason: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::Unreachable {
                url: url.clone(),
                reason: e.to_string(),
            })?;
        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes).map_err(|e| TransportError::Decode {
            url,
            reason: e.to_string(),
        })
    }
}

/// Reads a PEM bundle, or every `.pem` / `.crt` file of a directory in name order.
fn load_certificates(path: &Path) -> Result<Vec<Certificate>, TransportError> {
    let files = if path.is_dir() {
        let entries = fs::read_dir(path).map_err(|e| ca_error(path, e))?;
        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| {
                p.extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("pem") || ext.eq_ignore_ascii_case("crt"))
            })
            .collect();
        files.sort();
        files
    } else {
        vec![path.to_path_buf()]
    };

    let mut certs = Vec::with_capacity(files.len());
    for file in files {
        let pem = fs::read(&file).map_err(|e| ca_error(&file, e))?;
        let cert = Certificate::from_pem(&pem).map_err(|e| ca_error(&file, e))?;
        debug!(path = %file.display(), "loaded CA certificate");
        certs.push(cert);
    }
    Ok(certs)
}

fn ca_error(path: &Path, e: impl std::fmt::Display) -> TransportError {
    TransportError::Config(format!("cannot load CA from {}: {e}", path.display()))
}
