//! Error types for the portal server.
//!
//! Each domain (authentication, upstream backend, configuration) has its own error enum
//! with an `IntoResponse` mapping. [`Error`] aggregates them together with library errors
//! so handlers can propagate everything with `?`.

pub mod auth;
pub mod backend;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, backend::BackendError, config::ConfigError},
};

/// Main error type for the portal server.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (credentials, login response, session invariants).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// The upstream REST backend failed or refused a request.
    #[error(transparent)]
    BackendError(#[from] BackendError),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Valkey session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// HTTP client construction error.
    #[error(transparent)]
    HttpClientError(#[from] reqwest::Error),
}

/// Maps domain errors to their own responses, everything else is a 500.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::BackendError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged, the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

/// Builds a JSON [`ErrorDto`] response.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::{
        auth::AuthError, backend::BackendError, config::ConfigError, Error, InternalServerError,
    };
    use crate::model::session::SessionError;

    #[test]
    fn config_errors_are_internal() {
        let resp = Error::from(ConfigError::MissingEnvVar("BACKEND_URL".to_string())).into_response();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn auth_errors_keep_their_status() {
        let resp = Error::from(AuthError::InvalidCredentials).into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let resp = Error::from(AuthError::InvalidLoginResponse(SessionError::MissingField(
            "token",
        )))
        .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn backend_errors_keep_their_status() {
        let resp = Error::from(BackendError::Unreachable("refused".to_string())).into_response();

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn wrapper_hides_details() {
        let resp = InternalServerError("connection string leaked").into_response();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
