use arc_portal::{access::landing_path, model::role::Role};
use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaPaw, Icon};

use crate::client::{
    components::NoticeBanner,
    router::Route,
    store::{
        auth::{set_session, use_auth},
        notice::use_notice,
    },
};

#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();

    let state = auth.read();
    let role = state.role();
    let name = state.session.as_ref().map(|session| session.name.clone());
    let fetched = state.fetched;
    drop(state);

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-20",
            div {
                class: "navbar-start",
                Link { to: Route::from_path(landing_path(role)),
                    class: "btn btn-ghost text-xl flex gap-2",
                    Icon {
                        width: 24,
                        height: 24,
                        icon: FaPaw
                    }
                    "ARC"
                }
                RoleLinks { role }
            }
            div {
                class: "navbar-end",
                if let Some(name) = name {
                    div { class: "flex items-center gap-2",
                        p { class: "text-sm", "{name}" }
                        LogoutButton {}
                    }
                } else if fetched {
                    ul { class: "flex gap-2",
                        li {
                            Link { to: Route::login_from(""),
                                class: "btn btn-primary w-24",
                                "Login"
                            }
                        }
                        li {
                            Link { to: Route::Register {},
                                class: "btn btn-outline w-24",
                                "Register"
                            }
                        }
                    }
                }
            }
        }

        NoticeBanner {}

        Outlet::<Route> {}
    }
}

/// Section links for the current role.
#[component]
fn RoleLinks(role: Role) -> Element {
    let dashboard = match role {
        Role::Guest => None,
        Role::Customer => Some(Route::CustomerDashboard {}),
        Role::Donor => Some(Route::DonorDashboard {}),
        Role::Admin => Some(Route::AdminDashboard {}),
    };

    rsx!(
        ul { class: "menu menu-horizontal px-1",
            li { Link { to: Route::Home {}, "Home" } }
            li { Link { to: Route::About {}, "About" } }
            li { Link { to: Route::Contact {}, "Contact" } }
            if let Some(dashboard) = dashboard {
                li { Link { to: dashboard, "Dashboard" } }
            }
        }
    )
}

#[component]
fn LogoutButton() -> Element {
    let auth = use_auth();
    let mut notice = use_notice();
    let mut loading = use_signal(|| false);
    let nav = navigator();

    let onclick = move |_| async move {
        loading.set(true);

        #[cfg(feature = "web")]
        {
            use crate::client::{store::notice::Notice, util::api};

            match api::logout().await {
                Ok(()) => {
                    set_session(auth, None);
                    notice.set(Some(Notice::success("Logged out")));
                    nav.replace(Route::login_from(""));
                }
                Err(err) => notice.set(Some(Notice::from(&err))),
            }
        }

        #[cfg(not(feature = "web"))]
        {
            set_session(auth, None);
            notice.set(None);
            nav.replace(Route::Home {});
        }

        loading.set(false);
    };

    rsx!(
        button {
            class: "btn btn-outline",
            disabled: loading(),
            onclick,
            "Logout"
        }
    )
}
