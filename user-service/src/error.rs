use thiserror::Error;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures while loading the user batch
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Network failure or malformed request
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("Unexpected status: {status}")]
    Status { status: u16 },

    /// Body was not the expected JSON
    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}
