//! Upstream backend paths mocked by the test server.
//!
//! These mirror the paths the portal forwards to, so a change on either side shows up as
//! unmatched mocks.

/// Backend login endpoint.
pub static BACKEND_LOGIN_PATH: &str = "/api/auth/login";

/// Backend signup endpoint.
pub static BACKEND_SIGNUP_PATH: &str = "/api/auth/signup";

/// Backend endpoint mailing a one-time code, followed by the email.
pub static BACKEND_VERIFY_EMAIL_PATH: &str = "/forgot/verify-email";

/// Backend endpoint checking a one-time code, followed by the email and code.
pub static BACKEND_VERIFY_OTP_PATH: &str = "/forgot/verify-otp";

/// Backend endpoint setting the new password, followed by the email.
pub static BACKEND_CHANGE_PASSWORD_PATH: &str = "/forgot/change-pass";
