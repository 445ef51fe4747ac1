//! Factory functions for upstream backend response bodies.

use serde_json::{json, Value};

/// Create a complete backend login response.
///
/// # Arguments
/// - `token` - Credential the backend hands out
/// - `name` - Display name of the user
/// - `email` - Email the user logged in with
/// - `role` - Role as sent on the wire, e.g. `"DONOR"`
pub fn login_response(token: &str, name: &str, email: &str, role: &str) -> Value {
    json!({
        "token": token,
        "name": name,
        "email": email,
        "role": role,
    })
}

/// Create the error body the backend sends alongside a failure status.
pub fn error_body(message: &str) -> Value {
    json!({ "error": message })
}
