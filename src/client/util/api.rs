//! Calls to the portal server API.
//!
//! Every call sends the session cookie and turns a failed response into an [`ApiError`].

use arc_portal::model::{
    api::{ApiError, ErrorDto},
    auth::{
        ForgotPasswordDto, LoginDto, ResetPasswordDto, SessionDto, SignupDto, VerifyOtpDto,
    },
};
use reqwasm::http::{Request, RequestCredentials, Response};
use serde::{de::DeserializeOwned, Serialize};

/// Retrieve the active session, `None` for a guest
pub async fn fetch_session() -> Result<Option<SessionDto>, ApiError> {
    let response = Request::get("/api/auth/session")
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    match response.status() {
        200 => parse(&response).await.map(Some),
        404 => Ok(None),
        _ => Err(error_from(&response).await),
    }
}

/// Log in, returning the session the server established
pub async fn login(dto: &LoginDto) -> Result<SessionDto, ApiError> {
    let response = post_json("/api/auth/login", dto).await?;

    parse(&response).await
}

/// Register a customer or donor account
pub async fn signup(dto: &SignupDto) -> Result<(), ApiError> {
    post_json("/api/auth/signup", dto).await?;

    Ok(())
}

/// Have a password reset code mailed to the account
pub async fn forgot_password(dto: &ForgotPasswordDto) -> Result<(), ApiError> {
    post_json("/api/auth/forgot-password", dto).await?;

    Ok(())
}

/// Verify the mailed password reset code
pub async fn verify_otp(dto: &VerifyOtpDto) -> Result<(), ApiError> {
    post_json("/api/auth/verify-otp", dto).await?;

    Ok(())
}

/// Set a new password once the reset code has been verified
pub async fn reset_password(dto: &ResetPasswordDto) -> Result<(), ApiError> {
    post_json("/api/auth/reset-password", dto).await?;

    Ok(())
}

/// Clear the session on the server
pub async fn logout() -> Result<(), ApiError> {
    let response = Request::post("/api/auth/logout")
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from(&response).await);
    }

    Ok(())
}

async fn post_json<T: Serialize>(url: &str, body: &T) -> Result<Response, ApiError> {
    let body = serde_json::to_string(body)
        .map_err(|e| ApiError::Unexpected {
            status: 0,
            message: format!("Failed to encode request: {}", e),
        })?;

    let response = Request::post(url)
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from(&response).await);
    }

    Ok(response)
}

async fn parse<T: DeserializeOwned>(response: &Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Unexpected {
            status: response.status(),
            message: format!("Failed to parse response: {}", e),
        })
}

async fn error_from(response: &Response) -> ApiError {
    let message = match response.json::<ErrorDto>().await {
        Ok(error_dto) => error_dto.error,
        Err(_) => response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string()),
    };

    ApiError::from_status(response.status(), message)
}
