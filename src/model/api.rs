use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response for requests which succeed without returning a resource
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct MessageDto {
    pub message: String,
}

/// Failure of a request made by the portal client.
///
/// Every variant is recoverable by the user retrying; none of them clears the
/// session on its own.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never reached the server.
    #[error("Unable to reach the server: {0}")]
    Network(String),
    /// The server refused the request (401/403).
    #[error("{0}")]
    Unauthorized(String),
    /// The request was rejected as invalid (400/409/422).
    #[error("{0}")]
    Validation(String),
    /// The requested resource does not exist (404).
    #[error("{0}")]
    NotFound(String),
    /// Any other status, including 5xx.
    #[error("Request failed with status {status}: {message}")]
    Unexpected { status: u16, message: String },
}

impl ApiError {
    /// Classifies a non-success response by its status code.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();

        match status {
            401 | 403 => Self::Unauthorized(message),
            400 | 409 | 422 => Self::Validation(message),
            404 => Self::NotFound(message),
            status => Self::Unexpected { status, message },
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}
