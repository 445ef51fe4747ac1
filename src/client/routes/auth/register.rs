use arc_portal::model::role::Role;
use dioxus::prelude::*;

use crate::client::{
    components::{Page, TextField},
    router::Route,
    store::notice::{use_notice, Notice},
};

#[component]
pub fn Register() -> Element {
    let mut notice = use_notice();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut role = use_signal(|| Role::Customer);
    let mut loading = use_signal(|| false);
    #[cfg_attr(not(feature = "web"), allow(unused))]
    let nav = navigator();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        async move {
            if password() != confirm() {
                notice.set(Some(Notice::error("Passwords do not match")));
                return;
            }

            loading.set(true);

            #[cfg(feature = "web")]
            {
                use arc_portal::model::auth::SignupDto;

                use crate::client::util::api;

                let optional = |value: String| Some(value).filter(|v| !v.trim().is_empty());

                let dto = SignupDto {
                    name: name(),
                    email: email(),
                    password: password(),
                    phone: optional(phone()),
                    address: optional(address()),
                    role: role(),
                };

                match api::signup(&dto).await {
                    Ok(()) => {
                        notice.set(Some(Notice::success(
                            "Registration successful! Please login.",
                        )));
                        nav.replace(Route::login_from(""));
                    }
                    Err(err) => notice.set(Some(Notice::from(&err))),
                }
            }

            loading.set(false);
        }
    };

    rsx!(
        Title { "Register | ARC" }
        Page { class: "flex items-center justify-center",
            form {
                class: "card shadow-sm w-full max-w-md mx-auto",
                onsubmit,
                div { class: "card-body flex flex-col gap-3",
                    h2 { class: "card-title", "Create an account" }
                    div { class: "join",
                        for option in Role::ALL.into_iter().filter(|r| r.is_self_service()) {
                            button {
                                class: if role() == option { "btn join-item btn-primary" } else { "btn join-item" },
                                r#type: "button",
                                onclick: move |_| role.set(option),
                                {role_label(option)}
                            }
                        }
                    }
                    TextField {
                        label: "Name",
                        kind: "text",
                        required: true,
                        value: name(),
                        oninput: move |v| name.set(v),
                    }
                    TextField {
                        label: "Email",
                        kind: "email",
                        required: true,
                        value: email(),
                        oninput: move |v| email.set(v),
                    }
                    TextField {
                        label: "Password",
                        kind: "password",
                        required: true,
                        value: password(),
                        oninput: move |v| password.set(v),
                    }
                    TextField {
                        label: "Confirm password",
                        kind: "password",
                        required: true,
                        value: confirm(),
                        oninput: move |v| confirm.set(v),
                    }
                    TextField {
                        label: "Phone",
                        kind: "tel",
                        required: false,
                        value: phone(),
                        oninput: move |v| phone.set(v),
                    }
                    TextField {
                        label: "Address",
                        kind: "text",
                        required: false,
                        value: address(),
                        oninput: move |v| address.set(v),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Registering..." } else { "Register" }
                    }
                    p { class: "text-sm",
                        "Already registered? "
                        Link { to: Route::login_from(""), class: "link", "Login" }
                    }
                }
            }
        }
    )
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::Guest => "Guest",
        Role::Customer => "Customer",
        Role::Donor => "Donor",
        Role::Admin => "Admin",
    }
}
