use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("API request failed with status: {status}")]
    StatusError { status: reqwest::StatusCode },

    #[error("Response missing field: {field}")]
    MissingFieldError { field: String },
}

pub type Result<T> = std::result::Result<T, ClientError>;
