use dioxus::prelude::*;

/// Labelled input reporting every change as a string.
#[component]
pub fn TextField(
    label: &'static str,
    kind: &'static str,
    required: bool,
    value: String,
    oninput: EventHandler<String>,
) -> Element {
    rsx!(
        label { class: "flex flex-col gap-1",
            "{label}"
            input {
                class: "input w-full",
                r#type: kind,
                required,
                value,
                oninput: move |e| oninput.call(e.value()),
            }
        }
    )
}
