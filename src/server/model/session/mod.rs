//! Session data models.
//!
//! Type-safe wrappers around tower-sessions for the data the portal keeps per browser.

pub mod auth;

pub use auth::SessionStore;
