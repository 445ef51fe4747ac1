use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Problems with the environment the server was started with.
///
/// These are only ever hit during startup, the response mapping exists so they can travel
/// through [`Error`](super::Error) like everything else.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable {0} must be set")]
    MissingEnvVar(String),
    #[error("Environment variable {var} is invalid: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
