//! Access control shared by the client views and the server.
//!
//! [`guard`] decides whether a view may render for the current session and
//! [`landing`] maps a role to the page it starts on. Both are pure so the same
//! rules apply on every target.

pub mod guard;
pub mod landing;

pub use guard::{required_role, AuthState, GuardOutcome, RouteGuard};
pub use landing::{landing_for, landing_path, post_login_target};
