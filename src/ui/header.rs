use dioxus::prelude::*;

#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "app-header",
            div { class: "container header-row",
                div { class: "brand",
                    div { class: "brand-logo", "📘" }
                    div {
                        h1 { "Parent Power-Up AI" }
                        p { class: "muted small", "Homework help made simple" }
                    }
                }
                div { class: "badges wide-only",
                    span { class: "badge secondary", "👪 Family Plan" }
                    span { class: "badge outline", "⭐ KES 5/question" }
                }
            }
        }
    }
}

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "hero",
            h2 { "Help Your Child Excel in School" }
            p {
                "Simply snap a photo of homework or ask a question, and get clear, parent-friendly explanations to help your child learn."
            }
        }
    }
}
