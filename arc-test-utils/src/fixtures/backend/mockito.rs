//! Mock endpoint builders for the upstream backend.

use mockito::{Mock, ServerGuard};
use serde_json::Value;

use crate::{
    constant::{
        BACKEND_CHANGE_PASSWORD_PATH, BACKEND_LOGIN_PATH, BACKEND_SIGNUP_PATH,
        BACKEND_VERIFY_EMAIL_PATH, BACKEND_VERIFY_OTP_PATH,
    },
    fixtures::backend::factory,
};

/// Create a login endpoint answering 200 with the provided body.
pub fn mock_login(server: &mut ServerGuard, body: &Value, expected_requests: usize) -> Mock {
    server
        .mock("POST", BACKEND_LOGIN_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(expected_requests)
        .create()
}

/// Create a login endpoint failing with the provided status.
pub fn mock_login_error(server: &mut ServerGuard, status: usize, expected_requests: usize) -> Mock {
    server
        .mock("POST", BACKEND_LOGIN_PATH)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(factory::error_body("Invalid email or password").to_string())
        .expect(expected_requests)
        .create()
}

/// Create a signup endpoint answering with the provided status.
///
/// Success statuses carry a message body, anything else an error body.
pub fn mock_signup(server: &mut ServerGuard, status: usize, expected_requests: usize) -> Mock {
    let body = if (200..300).contains(&status) {
        serde_json::json!({ "message": "User registered successfully" })
    } else {
        factory::error_body("Registration rejected")
    };

    server
        .mock("POST", BACKEND_SIGNUP_PATH)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(expected_requests)
        .create()
}

/// Create one of the password recovery endpoints answering with the provided status.
///
/// # Arguments
/// - `method` - HTTP method the backend expects
/// - `path` - Full path including the email and code segments
/// - `status` - HTTP status the backend answers with
/// - `expected_requests` - Number of times the endpoint is expected to be called
pub fn mock_forgot(
    server: &mut ServerGuard,
    method: &str,
    path: &str,
    status: usize,
    expected_requests: usize,
) -> Mock {
    let body = if (200..300).contains(&status) {
        "OK".to_string()
    } else {
        factory::error_body("Password recovery failed").to_string()
    };

    server
        .mock(method, path)
        .with_status(status)
        .with_body(body)
        .expect(expected_requests)
        .create()
}

/// Path of the backend endpoint mailing a code to `email`.
pub fn verify_email_path(email: &str) -> String {
    format!("{}/{}", BACKEND_VERIFY_EMAIL_PATH, email)
}

/// Path of the backend endpoint checking `otp` for `email`.
pub fn verify_otp_path(email: &str, otp: &str) -> String {
    format!("{}/{}/{}", BACKEND_VERIFY_OTP_PATH, email, otp)
}

/// Path of the backend endpoint changing the password of `email`.
pub fn change_password_path(email: &str) -> String {
    format!("{}/{}", BACKEND_CHANGE_PASSWORD_PATH, email)
}
