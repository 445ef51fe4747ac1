use arc_portal::access::landing_path;
use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaHeart, FaPaw},
    Icon,
};

use crate::client::{
    components::{Page, Redirect},
    router::Route,
    store::auth::use_auth,
};

#[component]
pub fn Home() -> Element {
    let role = use_auth().read().role();

    // Customers and donors treat their dashboard as home
    if role.is_self_service() {
        return rsx!(Redirect {
            to: Route::from_path(landing_path(role))
        });
    }

    rsx!(
        Title { "ARC | Animal Rescue Centre" }
        Meta {
            name: "description",
            content: "Adopt a rescued animal or support its care with a donation."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-6 text-center",
                h1 { class: "text-4xl font-bold", "Every animal deserves a home" }
                p { class: "max-w-xl",
                    "ARC rescues, treats and rehomes animals in need. Adopt a companion or help fund medical care, food and shelter."
                }
                ul { class: "flex flex-wrap justify-center gap-2",
                    li {
                        Link { to: Route::Register {},
                            class: "btn btn-primary w-48 flex gap-2",
                            Icon { width: 24, height: 24, icon: FaPaw }
                            "Adopt"
                        }
                    }
                    li {
                        Link { to: Route::Register {},
                            class: "btn btn-outline w-48 flex gap-2",
                            Icon { width: 24, height: 24, icon: FaHeart }
                            "Donate"
                        }
                    }
                }
            }
        }
    )
}
