//! Tests for the authentication controller endpoints.

mod login;
mod logout;
mod password_reset;
mod session;
mod signup;

use super::*;
use arc_portal::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{LoginDto, SessionDto, SignupDto},
        role::Role,
    },
    server::{error::Error, model::session::SessionStore},
};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

fn login_dto() -> LoginDto {
    LoginDto {
        email: "a@x.com".to_string(),
        password: "secret1".to_string(),
    }
}
