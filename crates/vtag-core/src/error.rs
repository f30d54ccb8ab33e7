use thiserror::Error;
use vtag_model::ModelError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The API could not be reached, refused the credentials or answered with a non-success status.
    #[error("connection error: {0}")]
    Connection(String),

    /// The API answered, but the payload does not have the expected shape.
    #[error("response error: {0}")]
    Response(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] ModelError),
}

impl ApiError {
    pub fn is_connection(&self) -> bool {
        matches!(self, ApiError::Connection(_))
    }

    pub fn is_response(&self) -> bool {
        matches!(self, ApiError::Response(_))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
