use dioxus::prelude::*;

use crate::client::{
    components::{Page, TextField},
    router::Route,
    store::notice::use_notice,
};

/// First step of password recovery, asks for the account's email.
#[component]
pub fn ForgotPassword() -> Element {
    #[cfg_attr(not(feature = "web"), allow(unused))]
    let mut notice = use_notice();
    let mut email = use_signal(String::new);
    let mut loading = use_signal(|| false);
    #[cfg_attr(not(feature = "web"), allow(unused))]
    let nav = navigator();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        async move {
            loading.set(true);

            #[cfg(feature = "web")]
            {
                use arc_portal::model::auth::ForgotPasswordDto;

                use crate::client::{store::notice::Notice, util::api};

                let email = email().trim().to_string();

                match api::forgot_password(&ForgotPasswordDto {
                    email: email.clone(),
                })
                .await
                {
                    Ok(()) => {
                        notice.set(Some(Notice::success("OTP sent to your email")));
                        nav.push(Route::VerifyOtp { email });
                    }
                    Err(err) => notice.set(Some(Notice::from(&err))),
                }
            }

            loading.set(false);
        }
    };

    rsx!(
        Title { "Forgot Password | ARC" }
        Page { class: "flex items-center justify-center",
            form {
                class: "card shadow-sm w-full max-w-96 mx-auto",
                onsubmit,
                div { class: "card-body flex flex-col gap-4",
                    h2 { class: "card-title", "Forgot Password" }
                    p { class: "text-sm", "Enter your registered email to receive an OTP" }
                    TextField {
                        label: "Email",
                        kind: "email",
                        required: true,
                        value: email(),
                        oninput: move |v| email.set(v),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Sending OTP..." } else { "Send OTP" }
                    }
                    p { class: "text-sm",
                        Link { to: Route::login_from(""), class: "link", "Back to login" }
                    }
                }
            }
        }
    )
}
