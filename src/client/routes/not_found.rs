use dioxus::prelude::*;

use crate::client::{components::Redirect, router::Route};

/// Unknown paths go home.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx!(Redirect { to: Route::Home {} })
}
