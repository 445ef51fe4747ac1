//! Authentication endpoints, one module per endpoint.

pub mod login;
pub mod logout;
pub mod password_reset;
pub mod session;
pub mod signup;

pub use login::login;
pub use logout::logout;
pub use password_reset::{forgot_password, reset_password, verify_otp};
pub use session::get_session;
pub use signup::signup;

pub static AUTH_TAG: &str = "auth";
