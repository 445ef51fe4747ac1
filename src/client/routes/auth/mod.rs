pub mod forgot_password;
pub mod login;
pub mod register;
pub mod reset_password;
pub mod verify_otp;

pub use forgot_password::ForgotPassword;
pub use login::Login;
pub use register::Register;
pub use reset_password::ResetPassword;
pub use verify_otp::VerifyOtp;
