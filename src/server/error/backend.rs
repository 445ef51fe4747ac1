use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

/// Failure talking to the upstream REST backend.
///
/// Responses are only classified by status; their bodies are treated as opaque.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Backend is unreachable: {0}")]
    Unreachable(String),
    #[error("Backend refused the request with status {0}")]
    Unauthorized(u16),
    #[error("Backend rejected the request as invalid")]
    Validation,
    #[error("Backend reported a conflict with existing data")]
    Conflict,
    #[error("Backend resource not found")]
    NotFound,
    #[error("Backend responded with unexpected status {0}")]
    UnexpectedStatus(u16),
    #[error("Failed to decode backend response: {0}")]
    InvalidBody(String),
}

impl BackendError {
    /// Classifies a non-success status returned by the backend.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::Unauthorized(status),
            400 | 422 => Self::Validation,
            404 => Self::NotFound,
            409 => Self::Conflict,
            status => Self::UnexpectedStatus(status),
        }
    }
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        match self {
            Self::Unreachable(_) => {
                tracing::error!("{}", self);

                error_response(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "The service is unavailable, please try again later.",
                )
            }
            Self::Unauthorized(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::UNAUTHORIZED, "Unauthorized")
            }
            Self::Validation => error_response(
                StatusCode::BAD_REQUEST,
                "The request was rejected, please check the submitted details.",
            ),
            Self::Conflict => error_response(
                StatusCode::CONFLICT,
                "An account with these details already exists.",
            ),
            Self::NotFound => error_response(StatusCode::NOT_FOUND, "Not found"),
            Self::UnexpectedStatus(_) | Self::InvalidBody(_) => {
                tracing::error!("{}", self);

                error_response(
                    StatusCode::BAD_GATEWAY,
                    "The service returned an unexpected response, please try again.",
                )
            }
        }
    }
}
