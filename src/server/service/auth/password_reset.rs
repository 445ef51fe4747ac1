use dioxus_logger::tracing;

use crate::{
    model::auth::{ForgotPasswordDto, ResetPasswordDto, VerifyOtpDto},
    server::{
        backend::BackendClient,
        error::{auth::AuthError, Error},
    },
};

use super::signup::{is_plausible_email, MIN_PASSWORD_LEN};

const OTP_LEN: usize = 6;

/// Service for recovering an account through a one-time code mailed by the backend.
///
/// The backend tracks which code belongs to which email and whether it has been verified,
/// the portal only validates input and forwards each step.
pub struct PasswordResetService<'a> {
    backend: &'a BackendClient,
}

impl<'a> PasswordResetService<'a> {
    pub fn new(backend: &'a BackendClient) -> Self {
        Self { backend }
    }

    /// Asks the backend to mail a one-time code to the account's email.
    pub async fn request(&self, dto: ForgotPasswordDto) -> Result<(), Error> {
        let email = validate_email(&dto.email)?;

        self.backend.request_password_reset(email).await?;

        tracing::info!(email = %email, "Password reset code requested");

        Ok(())
    }

    /// Checks the one-time code the user received.
    pub async fn verify_otp(&self, dto: VerifyOtpDto) -> Result<(), Error> {
        let email = validate_email(&dto.email)?;
        let otp = dto.otp.trim();
        if otp.len() != OTP_LEN || !otp.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AuthError::Validation("OTP must be 6 digits".to_string()).into());
        }

        self.backend.verify_otp(email, otp).await?;

        tracing::info!(email = %email, "Password reset code verified");

        Ok(())
    }

    /// Sets the new password for an account whose code has been verified.
    pub async fn reset(&self, dto: ResetPasswordDto) -> Result<(), Error> {
        let email = validate_email(&dto.email)?;
        if dto.password != dto.confirm_password {
            return Err(AuthError::Validation("Passwords do not match".to_string()).into());
        }
        if dto.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::Validation(
                "Password must be at least 6 characters".to_string(),
            )
            .into());
        }

        self.backend
            .change_password(email, &dto.password, &dto.confirm_password)
            .await?;

        tracing::info!(email = %email, "Password changed");

        Ok(())
    }
}

fn validate_email(email: &str) -> Result<&str, AuthError> {
    let email = email.trim();

    if email.is_empty() {
        return Err(AuthError::Validation("Email is required".to_string()));
    }
    if !is_plausible_email(email) {
        return Err(AuthError::Validation("Invalid email format".to_string()));
    }

    Ok(email)
}
