//! Server application models.
//!
//! Application state shared by the HTTP handlers and the session data stored per browser.

pub mod app;
pub mod session;
