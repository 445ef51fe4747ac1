use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{ForgotPasswordDto, ResetPasswordDto, VerifyOtpDto},
    },
    server::{error::Error, model::app::AppState, service::auth::PasswordResetService},
};

use super::AUTH_TAG;

fn message(message: &str) -> Json<MessageDto> {
    Json(MessageDto {
        message: message.to_string(),
    })
}

/// Request a password reset code
///
/// The backend mails a one-time code to the account's email.
///
/// # Responses
/// - 200 (Success): Code sent
/// - 400 (Bad Request): Email missing or malformed
/// - 404 (Not Found): No account is registered with this email
/// - 503 (Service Unavailable): Backend could not be reached
#[utoipa::path(
    post,
    path = "/api/auth/forgot-password",
    tag = AUTH_TAG,
    request_body = ForgotPasswordDto,
    responses(
        (status = 200, description = "Code sent", body = MessageDto),
        (status = 400, description = "Invalid email", body = ErrorDto),
        (status = 404, description = "Email not registered", body = ErrorDto),
        (status = 502, description = "Invalid response from backend", body = ErrorDto),
        (status = 503, description = "Backend unavailable", body = ErrorDto)
    ),
)]
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(dto): Json<ForgotPasswordDto>,
) -> Result<impl IntoResponse, Error> {
    PasswordResetService::new(&state.backend)
        .request(dto)
        .await?;

    Ok((StatusCode::OK, message("OTP sent to your email")))
}

/// Verify a password reset code
///
/// # Responses
/// - 200 (Success): Code accepted, the password may now be changed
/// - 400 (Bad Request): Code malformed, wrong or expired
/// - 503 (Service Unavailable): Backend could not be reached
#[utoipa::path(
    post,
    path = "/api/auth/verify-otp",
    tag = AUTH_TAG,
    request_body = VerifyOtpDto,
    responses(
        (status = 200, description = "Code verified", body = MessageDto),
        (status = 400, description = "Invalid or expired code", body = ErrorDto),
        (status = 404, description = "Email not registered", body = ErrorDto),
        (status = 502, description = "Invalid response from backend", body = ErrorDto),
        (status = 503, description = "Backend unavailable", body = ErrorDto)
    ),
)]
pub async fn verify_otp(
    State(state): State<AppState>,
    Json(dto): Json<VerifyOtpDto>,
) -> Result<impl IntoResponse, Error> {
    PasswordResetService::new(&state.backend)
        .verify_otp(dto)
        .await?;

    Ok((StatusCode::OK, message("OTP verified")))
}

/// Set a new password after verifying the reset code
///
/// Does not log the user in, they are expected to log in with the new password.
///
/// # Responses
/// - 200 (Success): Password changed
/// - 400 (Bad Request): Passwords missing, too short or not matching
/// - 503 (Service Unavailable): Backend could not be reached
#[utoipa::path(
    post,
    path = "/api/auth/reset-password",
    tag = AUTH_TAG,
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "Password changed", body = MessageDto),
        (status = 400, description = "Invalid password", body = ErrorDto),
        (status = 404, description = "Email not registered", body = ErrorDto),
        (status = 502, description = "Invalid response from backend", body = ErrorDto),
        (status = 503, description = "Backend unavailable", body = ErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    Json(dto): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, Error> {
    PasswordResetService::new(&state.backend).reset(dto).await?;

    Ok((StatusCode::OK, message("Password changed successfully")))
}
