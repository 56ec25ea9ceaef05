// Copyright © 2025 Nipun Kumar

use std::rc::Rc;

use dioxus::prelude::*;

/// Free-form question box. Ctrl+Enter submits like the button does.
#[component]
pub fn TextQuestion(
    draft: String,
    loading: bool,
    can_submit: bool,
    on_input: Callback<String, ()>,
    on_submit: Callback<(), ()>,
) -> Element {
    let submit = move || {
        if can_submit {
            on_submit(());
        }
    };
    let disabled = if can_submit { None } else { Some(true) };
    rsx! {
        div { class: "text-question",
            label { r#for: "question", class: "field-label",
                "What homework question can I help you with?"
            }
            textarea {
                id: "question",
                class: "question-input",
                placeholder: "Type your child's homework question here... For example: 'My 8-year-old is struggling with fractions. How do I explain 1/2 + 1/4?'",
                oninput: move |e: Event<FormData>| on_input(e.value()),
                onkeypress: move |e: Event<KeyboardData>| {
                    let k: Rc<KeyboardData> = e.data;
                    if k.code() == Code::Enter && k.modifiers().ctrl() {
                        submit();
                    }
                },
                value: "{draft}",
            }
            button {
                class: "primary wide",
                disabled,
                onclick: move |_e: Event<MouseData>| submit(),
                if loading {
                    span { class: "spinner" }
                    "Getting help..."
                } else {
                    "➤ Get Help"
                }
            }
        }
    }
}
