use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum TransportError {
    #[error("request to {url} failed: {reason}")]
    Unreachable { url: String, reason: String },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("invalid JSON body from {url}: {reason}")]
    Decode { url: String, reason: String },

    #[error("invalid transport configuration: {0}")]
    Config(String),
}
