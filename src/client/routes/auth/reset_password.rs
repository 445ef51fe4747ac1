use dioxus::prelude::*;

use crate::client::{
    components::{Page, Redirect, TextField},
    router::Route,
    store::notice::{use_notice, Notice},
};

/// Last step of password recovery, sets the new password for `email`.
#[component]
pub fn ResetPassword(email: String) -> Element {
    let mut notice = use_notice();
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut loading = use_signal(|| false);
    #[cfg_attr(not(feature = "web"), allow(unused))]
    let nav = navigator();

    if email.trim().is_empty() {
        return rsx!(Redirect { to: Route::ForgotPassword {} });
    }

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        #[cfg_attr(not(feature = "web"), allow(unused))]
        let email = email.clone();

        async move {
            if password() != confirm() {
                notice.set(Some(Notice::error("Passwords do not match")));
                return;
            }

            loading.set(true);

            #[cfg(feature = "web")]
            {
                use arc_portal::model::auth::ResetPasswordDto;

                use crate::client::util::api;

                let dto = ResetPasswordDto {
                    email,
                    password: password(),
                    confirm_password: confirm(),
                };

                match api::reset_password(&dto).await {
                    Ok(()) => {
                        notice.set(Some(Notice::success("Password changed successfully")));
                        nav.replace(Route::login_from(""));
                    }
                    Err(err) => notice.set(Some(Notice::from(&err))),
                }
            }

            loading.set(false);
        }
    };

    rsx!(
        Title { "Reset Password | ARC" }
        Page { class: "flex items-center justify-center",
            form {
                class: "card shadow-sm w-full max-w-96 mx-auto",
                onsubmit,
                div { class: "card-body flex flex-col gap-4",
                    h2 { class: "card-title", "Reset Password" }
                    TextField {
                        label: "New password",
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
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Updating..." } else { "Reset Password" }
                    }
                }
            }
        }
    )
}
