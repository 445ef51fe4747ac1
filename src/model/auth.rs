use serde::{Deserialize, Serialize};

use crate::model::role::Role;

/// Credentials submitted from the login form.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Account details submitted from the registration form.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SignupDto {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub role: Role,
}

/// Body returned by the backend's login endpoint.
///
/// Every field is optional so a malformed response can still be parsed and then
/// rejected by [`AuthSession::from_login_response`](crate::model::session::AuthSession::from_login_response)
/// instead of failing deserialization.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LoginResponseDto {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// The client-facing view of an active session, the credential is never included.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SessionDto {
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Starts password recovery by having the backend mail a one-time code.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ForgotPasswordDto {
    pub email: String,
}

/// One-time code received by mail for `email`.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct VerifyOtpDto {
    pub email: String,
    pub otp: String,
}

/// New password for an account whose one-time code has been verified.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ResetPasswordDto {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}
