use dioxus::{logger::tracing::warn, prelude::*};

use crate::{clipboard::copy_text, md2rsx::markdown_to_rsx, session::Feedback};

/// What the response panel shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseView {
    Loading,
    Empty,
    HasResponse(String),
}

impl ResponseView {
    pub fn select(loading: bool, response: Option<&str>) -> Self {
        match (loading, response) {
            (true, _) => ResponseView::Loading,
            (false, Some(r)) => ResponseView::HasResponse(r.to_string()),
            (false, None) => ResponseView::Empty,
        }
    }
}

#[component]
pub fn AiResponse(
    view: ResponseView,
    feedback: Option<Feedback>,
    on_rate: Callback<Feedback, ()>,
) -> Element {
    // Text most recently copied, so the "Copied" mark follows the response.
    let mut copied: Signal<Option<String>> = use_signal(|| None);

    let text = match view {
        ResponseView::Loading => {
            return rsx! {
                div { class: "card response loading",
                    div { class: "response-title",
                        span { class: "bot", "🤖" }
                        h3 { "AI Helper" }
                    }
                    div { class: "typing",
                        span { class: "dot" }
                        span { class: "dot" }
                        span { class: "dot" }
                        span { class: "muted", "Analyzing your question..." }
                    }
                    div { class: "skeleton full" }
                    div { class: "skeleton three-quarters" }
                    div { class: "skeleton half" }
                }
            };
        }
        ResponseView::Empty => {
            return rsx! {
                div { class: "card response empty",
                    div { class: "bot large", "🤖" }
                    h3 { "Ready to Help!" }
                    p { class: "muted",
                        "Upload a photo or ask a question to get started. I'll provide clear explanations to help you and your child."
                    }
                }
            };
        }
        ResponseView::HasResponse(text) => text,
    };

    let body = markdown_to_rsx(&text);
    let is_copied = copied.read().as_deref() == Some(text.as_str());
    let copy = move |_: MouseEvent| {
        let text = text.clone();
        async move {
            match copy_text(&text).await {
                Ok(()) => copied.set(Some(text)),
                Err(e) => warn!("Could not copy response: {e:?}"),
            }
        }
    };
    let rated = |f: Feedback| if feedback == Some(f) { "ghost selected" } else { "ghost" };
    let up_class = rated(Feedback::Helpful);
    let down_class = rated(Feedback::NotHelpful);

    rsx! {
        div { class: "card response",
            div { class: "response-header",
                div { class: "response-title",
                    span { class: "bot", "🤖" }
                    h3 { "AI Helper Response" }
                }
                button {
                    class: "ghost",
                    title: "Copy to clipboard",
                    onclick: copy,
                    if is_copied { "✓ Copied" } else { "⧉ Copy" }
                }
            }
            div { class: "response-body", {body} }
            div { class: "response-footer",
                p { class: "muted small", "Was this helpful?" }
                div { class: "button-row",
                    button {
                        class: "{up_class} thumbs-up",
                        onclick: move |_| on_rate(Feedback::Helpful),
                        "👍"
                    }
                    button {
                        class: "{down_class} thumbs-down",
                        onclick: move |_| on_rate(Feedback::NotHelpful),
                        "👎"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_wins_over_a_stored_response() {
        assert_eq!(ResponseView::select(true, Some("x")), ResponseView::Loading);
        assert_eq!(ResponseView::select(true, None), ResponseView::Loading);
    }

    #[test]
    fn empty_until_something_arrives() {
        assert_eq!(ResponseView::select(false, None), ResponseView::Empty);
        assert_eq!(
            ResponseView::select(false, Some("answer")),
            ResponseView::HasResponse("answer".into())
        );
    }
}
