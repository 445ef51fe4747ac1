use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaClock, FaEnvelope, FaLocationDot, FaPaperPlane, FaPhone},
    Icon,
};

use crate::client::{
    components::{Page, TextField},
    store::notice::{use_notice, Notice},
};

/// Contact details and a message form.
///
/// Messages are not sent anywhere yet, the form only confirms and clears itself.
#[component]
pub fn Contact() -> Element {
    let mut notice = use_notice();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        notice.set(Some(Notice::success("Message sent successfully!")));
        name.set(String::new());
        email.set(String::new());
        subject.set(String::new());
        message.set(String::new());
    };

    rsx!(
        Title { "Contact | ARC" }
        Page { class: "flex flex-col items-center gap-8",
            div { class: "text-center",
                h1 { class: "text-3xl font-bold", "Contact Us" }
                p { "Have questions? We're here to help!" }
            }
            div { class: "grid md:grid-cols-2 lg:grid-cols-4 gap-4 w-full",
                ContactCard { title: "Phone", details: ["+1 (555) 123-4567", "+1 (555) 987-6543 (Emergency)"],
                    Icon { width: 20, height: 20, icon: FaPhone }
                }
                ContactCard { title: "Email", details: ["info@animalrescue.org", "support@animalrescue.org"],
                    Icon { width: 20, height: 20, icon: FaEnvelope }
                }
                ContactCard { title: "Address", details: ["123 Rescue Street", "Animal City, AC 12345"],
                    Icon { width: 20, height: 20, icon: FaLocationDot }
                }
                ContactCard { title: "Hours", details: ["Mon-Fri: 9AM - 6PM", "Sat-Sun: 10AM - 4PM"],
                    Icon { width: 20, height: 20, icon: FaClock }
                }
            }
            form {
                class: "card shadow-sm w-full max-w-xl",
                onsubmit,
                div { class: "card-body flex flex-col gap-3",
                    h2 { class: "card-title", "Send us a Message" }
                    TextField {
                        label: "Your name",
                        kind: "text",
                        required: true,
                        value: name(),
                        oninput: move |v| name.set(v),
                    }
                    TextField {
                        label: "Email address",
                        kind: "email",
                        required: true,
                        value: email(),
                        oninput: move |v| email.set(v),
                    }
                    TextField {
                        label: "Subject",
                        kind: "text",
                        required: true,
                        value: subject(),
                        oninput: move |v| subject.set(v),
                    }
                    label { class: "flex flex-col gap-1",
                        "Message"
                        textarea {
                            class: "textarea w-full",
                            rows: 5,
                            required: true,
                            value: "{message}",
                            oninput: move |e| message.set(e.value()),
                        }
                    }
                    button { class: "btn btn-primary flex gap-2", r#type: "submit",
                        Icon { width: 16, height: 16, icon: FaPaperPlane }
                        "Send Message"
                    }
                }
            }
        }
    )
}

#[component]
fn ContactCard(title: &'static str, details: [&'static str; 2], children: Element) -> Element {
    rsx!(
        div { class: "card shadow-sm",
            div { class: "card-body items-center text-center",
                {children}
                h3 { class: "card-title", "{title}" }
                for detail in details {
                    p { class: "text-sm", "{detail}" }
                }
            }
        }
    )
}
