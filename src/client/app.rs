use arc_portal::access::AuthState;
use dioxus::prelude::*;

use crate::client::{router::Route, store::notice::Notice};

#[component]
pub fn App() -> Element {
    #[cfg_attr(not(feature = "web"), allow(unused))]
    let mut auth = use_context_provider(|| Signal::new(AuthState::checking()));
    use_context_provider(|| Signal::new(Option::<Notice>::None));

    // Restore the session of a reloaded page before any guard decides
    #[cfg(feature = "web")]
    use_future(move || async move {
        use dioxus_logger::tracing;

        use crate::client::util::api;

        let session = match api::fetch_session().await {
            Ok(session) => session,
            Err(err) => {
                tracing::error!("Failed to restore session: {}", err);
                None
            }
        };

        auth.set(AuthState::resolved(session));
    });

    rsx! {
        Router::<Route> {}
    }
}
