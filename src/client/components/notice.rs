use dioxus::prelude::*;

use crate::client::store::notice::{use_notice, NoticeKind};

#[component]
pub fn NoticeBanner() -> Element {
    let mut notice = use_notice();

    let Some(current) = notice() else {
        return rsx!();
    };

    let class = match current.kind {
        NoticeKind::Success => "alert-success",
        NoticeKind::Error => "alert-error",
    };

    rsx!(
        div { class: "fixed top-[72px] left-1/2 -translate-x-1/2 z-10 w-full max-w-lg px-4",
            div { role: "alert", class: "alert {class} flex justify-between",
                span { "{current.message}" }
                button {
                    class: "btn btn-ghost btn-sm",
                    onclick: move |_| notice.set(None),
                    "Dismiss"
                }
            }
        }
    )
}
