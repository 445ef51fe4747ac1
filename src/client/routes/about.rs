use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

const VALUES: [(&str, &str); 3] = [
    ("Compassion", "Every animal is treated with care from rescue to adoption."),
    ("Transparency", "Donors can see how their support is spent."),
    ("Community", "Volunteers, adopters and donors make the rescues possible."),
];

#[component]
pub fn About() -> Element {
    rsx!(
        Title { "About | ARC" }
        Page { class: "flex flex-col items-center gap-6",
            h1 { class: "text-3xl font-bold", "About ARC" }
            p { class: "max-w-2xl text-center",
                "ARC is an animal rescue centre connecting rescued animals with adopters and the donors who fund their care."
            }
            div { class: "grid md:grid-cols-3 gap-4",
                for (title, description) in VALUES {
                    div { class: "card shadow-sm",
                        div { class: "card-body",
                            h2 { class: "card-title", "{title}" }
                            p { "{description}" }
                        }
                    }
                }
            }
            Link { to: Route::Register {}, class: "btn btn-primary", "Join us" }
        }
    )
}
