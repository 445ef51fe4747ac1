use dioxus::prelude::*;

use crate::client::{
    components::{Page, Redirect, TextField},
    router::Route,
    store::notice::use_notice,
};

/// Second step of password recovery, checks the code mailed to `email`.
///
/// Without an email there is nothing to verify, so the page sends the user back to the
/// first step.
#[component]
pub fn VerifyOtp(email: String) -> Element {
    #[cfg_attr(not(feature = "web"), allow(unused))]
    let mut notice = use_notice();
    let mut otp = use_signal(String::new);
    let mut loading = use_signal(|| false);
    #[cfg_attr(not(feature = "web"), allow(unused))]
    let nav = navigator();

    if email.trim().is_empty() {
        return rsx!(Redirect { to: Route::ForgotPassword {} });
    }

    let onsubmit = {
        #[cfg_attr(not(feature = "web"), allow(unused))]
        let email = email.clone();

        move |evt: FormEvent| {
            evt.prevent_default();
            #[cfg_attr(not(feature = "web"), allow(unused))]
            let email = email.clone();

            async move {
                loading.set(true);

                #[cfg(feature = "web")]
                {
                    use arc_portal::model::auth::VerifyOtpDto;

                    use crate::client::{store::notice::Notice, util::api};

                    let dto = VerifyOtpDto {
                        email: email.clone(),
                        otp: otp().trim().to_string(),
                    };

                    match api::verify_otp(&dto).await {
                        Ok(()) => {
                            notice.set(Some(Notice::success("OTP verified")));
                            nav.replace(Route::ResetPassword { email });
                        }
                        Err(err) => notice.set(Some(Notice::from(&err))),
                    }
                }

                loading.set(false);
            }
        }
    };

    rsx!(
        Title { "Verify OTP | ARC" }
        Page { class: "flex items-center justify-center",
            form {
                class: "card shadow-sm w-full max-w-96 mx-auto",
                onsubmit,
                div { class: "card-body flex flex-col gap-4",
                    h2 { class: "card-title", "Verify OTP" }
                    p { class: "text-sm",
                        "Enter the OTP sent to "
                        span { class: "font-medium", "{email}" }
                    }
                    TextField {
                        label: "OTP",
                        kind: "text",
                        required: true,
                        value: otp(),
                        oninput: move |v| otp.set(v),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Verifying..." } else { "Verify OTP" }
                    }
                    p { class: "text-sm",
                        "Didn't get a code? "
                        Link { to: Route::ForgotPassword {}, class: "link", "Send again" }
                    }
                }
            }
        }
    )
}
