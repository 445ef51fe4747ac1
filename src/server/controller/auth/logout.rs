use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::api::{ErrorDto, MessageDto},
    server::{
        error::Error,
        model::{app::AppState, session::SessionStore},
        service::auth::LoginService,
    },
};

use super::AUTH_TAG;

/// Log out by clearing the session
///
/// Succeeds whether or not a session was active.
///
/// # Responses
/// - 200 (Success): Session cleared
/// - 500 (Internal Server Error): There was an issue reading the session
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let store = SessionStore::new(session);

    LoginService::new(&state.backend, &store).logout().await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out successfully".to_string(),
        }),
    ))
}
