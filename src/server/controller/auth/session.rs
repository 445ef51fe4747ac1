use axum::{http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, auth::SessionDto},
    server::{error::Error, model::session::SessionStore},
};

use super::AUTH_TAG;

/// Get the active session
///
/// Used by the client on start up to restore the login after a page reload.
///
/// # Responses
/// - 200 (Success): Returns the active session
/// - 404 (Not Found): No session, the visitor is a guest
/// - 500 (Internal Server Error): There was an issue reading the session
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Active session", body = SessionDto),
        (status = 404, description = "No active session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_session(session: Session) -> Result<impl IntoResponse, Error> {
    let auth_session = SessionStore::new(session).require().await?;

    Ok((StatusCode::OK, Json(auth_session.to_dto())))
}
