//! Authentication service layer.
//!
//! Business logic for logging in through the upstream backend, registering accounts,
//! recovering passwords and ending sessions. Controllers stay thin and delegate here.

pub mod login;
pub mod password_reset;
pub mod signup;

pub use login::LoginService;
pub use password_reset::PasswordResetService;
pub use signup::SignupService;
