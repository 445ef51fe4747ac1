use dioxus::prelude::*;

use crate::client::{
    components::Page,
    router::Route,
    store::{auth::use_auth, notice::use_notice},
};

/// Login form.
///
/// `from` is the path a guard turned the user away from; after login the user returns
/// there when their role may see it, otherwise they land on their dashboard.
#[component]
pub fn Login(from: String) -> Element {
    #[cfg_attr(not(feature = "web"), allow(unused))]
    let auth = use_auth();
    #[cfg_attr(not(feature = "web"), allow(unused))]
    let mut notice = use_notice();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);
    #[cfg_attr(not(feature = "web"), allow(unused))]
    let nav = navigator();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        #[cfg_attr(not(feature = "web"), allow(unused))]
        let from = from.clone();

        async move {
            loading.set(true);

            #[cfg(feature = "web")]
            {
                use arc_portal::{access::post_login_target, model::auth::LoginDto};

                use crate::client::{
                    store::{auth::set_session, notice::Notice},
                    util::api,
                };

                let dto = LoginDto {
                    email: email(),
                    password: password(),
                };

                match api::login(&dto).await {
                    Ok(session) => {
                        let target = post_login_target(session.role, Some(&from));
                        set_session(auth, Some(session));
                        notice.set(Some(Notice::success("Login successful")));
                        nav.replace(Route::from_path(&target));
                    }
                    Err(err) => notice.set(Some(Notice::from(&err))),
                }
            }

            loading.set(false);
        }
    };

    rsx!(
        Title { "Login | ARC" }
        Page { class: "flex items-center justify-center",
            form {
                class: "card shadow-sm w-full max-w-96 mx-auto",
                onsubmit,
                div { class: "card-body flex flex-col gap-4",
                    h2 { class: "card-title", "Welcome Back" }
                    p { class: "text-sm", "Sign in to continue" }
                    label { class: "flex flex-col gap-1",
                        "Email"
                        input {
                            class: "input",
                            r#type: "email",
                            required: true,
                            placeholder: "you@example.com",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                    }
                    label { class: "flex flex-col gap-1",
                        "Password"
                        input {
                            class: "input",
                            r#type: "password",
                            required: true,
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                    }
                    Link { to: Route::ForgotPassword {}, class: "link text-sm self-end",
                        "Forgot password?"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Login" }
                    }
                    p { class: "text-sm",
                        "No account yet? "
                        Link { to: Route::Register {}, class: "link", "Register" }
                    }
                }
            }
        }
    )
}
