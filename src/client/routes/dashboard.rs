//! Landing views of the role sections, rendered behind the section guards.

use dioxus::prelude::*;

use crate::client::{components::Page, store::auth::use_auth};

#[component]
pub fn CustomerDashboard() -> Element {
    rsx!(
        Title { "Customer Dashboard | ARC" }
        DashboardPage {
            heading: "Customer Dashboard",
            tagline: "Your compassion makes a real difference.",
            cards: vec![
                ("Kindness Matters", "Every action you take helps animals feel safe and loved."),
                ("Community Support", "You are part of a growing network of animal lovers."),
                ("Adoption", "Browse rescued animals waiting for a forever home."),
            ],
        }
    )
}

#[component]
pub fn DonorDashboard() -> Element {
    rsx!(
        Title { "Donor Dashboard | ARC" }
        DashboardPage {
            heading: "Donor Dashboard",
            tagline: "Thank you for supporting rescue and medical care.",
            cards: vec![
                ("Make a Donation", "Support rescue and medical care."),
                ("My Contributions", "View your donation history."),
                ("Impact Stories", "See the lives you have changed."),
            ],
        }
    )
}

#[component]
pub fn AdminDashboard() -> Element {
    rsx!(
        Title { "Admin Control Panel | ARC" }
        DashboardPage {
            heading: "Admin Control Panel",
            tagline: "Manage animals, adoptions, users and expenses.",
            cards: vec![
                ("Animals", "Add and update rescued animals."),
                ("Adoptions", "Review adoption requests."),
                ("Users", "Manage customer and donor accounts."),
            ],
        }
    )
}

#[component]
fn DashboardPage(
    heading: &'static str,
    tagline: &'static str,
    cards: Vec<(&'static str, &'static str)>,
) -> Element {
    let auth = use_auth();
    let name = auth
        .read()
        .session
        .as_ref()
        .map(|session| session.name.clone())
        .unwrap_or_default();

    rsx!(
        Page { class: "flex flex-col gap-6",
            div {
                h1 { class: "text-4xl font-bold", "{heading}" }
                if !name.is_empty() {
                    p { class: "text-lg", "Welcome, {name}" }
                }
                p { "{tagline}" }
            }
            div { class: "grid md:grid-cols-3 gap-6",
                for (title, text) in cards {
                    div { class: "card shadow-sm",
                        div { class: "card-body",
                            h2 { class: "card-title", "{title}" }
                            p { "{text}" }
                        }
                    }
                }
            }
        }
    )
}
