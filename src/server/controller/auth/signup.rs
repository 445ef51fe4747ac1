use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::SignupDto,
    },
    server::{error::Error, model::app::AppState, service::auth::SignupService},
};

use super::AUTH_TAG;

/// Register a customer or donor account
///
/// # Responses
/// - 201 (Created): Account registered, the user still has to log in
/// - 400 (Bad Request): Form failed validation locally or at the backend
/// - 409 (Conflict): An account with these details already exists
/// - 502 (Bad Gateway): Backend returned an unexpected response
/// - 503 (Service Unavailable): Backend could not be reached
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = AUTH_TAG,
    request_body = SignupDto,
    responses(
        (status = 201, description = "Account registered", body = MessageDto),
        (status = 400, description = "Invalid registration details", body = ErrorDto),
        (status = 409, description = "Account already exists", body = ErrorDto),
        (status = 502, description = "Invalid response from backend", body = ErrorDto),
        (status = 503, description = "Backend unavailable", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(dto): Json<SignupDto>,
) -> Result<impl IntoResponse, Error> {
    SignupService::new(&state.backend).signup(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto {
            message: "User registered successfully".to_string(),
        }),
    ))
}
