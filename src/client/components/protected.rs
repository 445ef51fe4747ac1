use arc_portal::{
    access::{GuardOutcome, RouteGuard},
    model::role::Role,
};
use dioxus::prelude::*;

use crate::client::{components::Redirect, router::Route, store::auth::use_auth};

/// Renders `children` only for a session the guard permits.
///
/// Without a session the user is sent to login with the current path preserved, a
/// session of another role is sent home. Nothing renders while the session check is
/// still running.
#[component]
pub fn Protected(#[props(!optional)] role: Option<Role>, children: Element) -> Element {
    let auth = use_auth();
    let route = use_route::<Route>();

    let outcome = RouteGuard::new(role).check(&auth.read(), &route.to_string());

    match outcome {
        GuardOutcome::Pending => rsx!(
            div { class: "flex justify-center p-8",
                span { class: "loading loading-spinner loading-lg" }
            }
        ),
        GuardOutcome::Render => children,
        GuardOutcome::RedirectToLogin { from } => rsx!(Redirect {
            to: Route::login_from(from)
        }),
        GuardOutcome::RedirectHome => rsx!(Redirect { to: Route::Home {} }),
    }
}
