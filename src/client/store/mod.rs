pub mod auth;
pub mod notice;
