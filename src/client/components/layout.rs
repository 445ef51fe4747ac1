use arc_portal::model::role::Role;
use dioxus::prelude::*;

use crate::client::{components::Protected, router::Route};

#[component]
pub fn CustomerLayout() -> Element {
    rsx!(Protected { role: Some(Role::Customer), Outlet::<Route> {} })
}

#[component]
pub fn DonorLayout() -> Element {
    rsx!(Protected { role: Some(Role::Donor), Outlet::<Route> {} })
}

#[component]
pub fn AdminLayout() -> Element {
    rsx!(Protected { role: Some(Role::Admin), Outlet::<Route> {} })
}
