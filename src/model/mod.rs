//! Data models shared between the portal client and server.

pub mod api;
pub mod auth;
pub mod role;
pub mod session;
