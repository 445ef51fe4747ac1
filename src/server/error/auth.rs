use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::session::SessionError,
    server::error::{error_response, InternalServerError},
};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No session is active")]
    NotLoggedIn,
    #[error("The backend rejected the supplied email or password")]
    InvalidCredentials,
    #[error("Invalid login response from backend: {0}")]
    InvalidLoginResponse(SessionError),
    #[error("Refusing to store an invalid session: {0}")]
    InvalidSession(SessionError),
    #[error("{0}")]
    Validation(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotLoggedIn => {
                tracing::debug!("{}", self);

                error_response(StatusCode::NOT_FOUND, "No active session")
            }
            Self::InvalidCredentials => {
                tracing::debug!("{}", self);

                error_response(StatusCode::UNAUTHORIZED, "Invalid email or password")
            }
            Self::InvalidLoginResponse(ref reason) => {
                tracing::warn!(reason = %reason, "{}", self);

                error_response(
                    StatusCode::BAD_GATEWAY,
                    "There was an issue logging you in, please try again.",
                )
            }
            Self::Validation(message) => error_response(StatusCode::BAD_REQUEST, message),
            Self::InvalidSession(_) => InternalServerError(self).into_response(),
        }
    }
}
