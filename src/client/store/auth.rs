use arc_portal::{access::AuthState, model::auth::SessionDto};
use dioxus::prelude::*;

/// Shared authentication state provided by [`App`](crate::client::App).
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Replace the client's session after login or logout.
pub fn set_session(mut auth: Signal<AuthState>, session: Option<SessionDto>) {
    auth.set(AuthState::resolved(session));
}
