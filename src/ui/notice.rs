use dioxus::prelude::*;

/// Non-fatal error banner with Dismiss and an optional Retry.
#[component]
pub fn NoticeBanner(
    message: String,
    on_dismiss: Callback<(), ()>,
    on_retry: Option<Callback<(), ()>>,
) -> Element {
    rsx! {
        div { class: "notice", role: "alert",
            div { class: "notice-title", "Something went wrong" }
            div { class: "notice-body", "{message}" }
            div { class: "notice-actions",
                if let Some(on_retry) = on_retry {
                    button {
                        class: "danger",
                        onclick: move |_| on_retry(()),
                        "Retry"
                    }
                }
                button {
                    class: "secondary",
                    onclick: move |_| on_dismiss(()),
                    "Dismiss"
                }
            }
        }
    }
}
