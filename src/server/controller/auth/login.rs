use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, SessionDto},
    },
    server::{
        error::Error,
        model::{app::AppState, session::SessionStore},
        service::auth::LoginService,
    },
};

use super::AUTH_TAG;

/// Log in with email and password
///
/// Forwards the credentials to the backend and, when it returns a complete login response,
/// stores the session for this browser. The credential itself is kept server side.
///
/// # Responses
/// - 200 (Success): Session established, returns the session
/// - 400 (Bad Request): Email or password missing
/// - 401 (Unauthorized): Backend rejected the email or password
/// - 502 (Bad Gateway): Backend returned an incomplete or unexpected response
/// - 503 (Service Unavailable): Backend could not be reached
/// - 500 (Internal Server Error): Session storage failed
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Session established", body = SessionDto),
        (status = 400, description = "Email or password missing", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 502, description = "Invalid response from backend", body = ErrorDto),
        (status = 503, description = "Backend unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let store = SessionStore::new(session);

    let auth_session = LoginService::new(&state.backend, &store).login(dto).await?;

    Ok((StatusCode::OK, Json(auth_session.to_dto())))
}
