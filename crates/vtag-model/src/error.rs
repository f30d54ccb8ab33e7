use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown jitter strategy: {0}")]
    UnknownJitter(String),

    #[error("unknown resource type: {0}")]
    UnknownResourceType(String),

    #[error("unknown metric type: {0}")]
    UnknownMetricType(String),

    #[error("invalid document id: {0}")]
    InvalidDocumentId(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
