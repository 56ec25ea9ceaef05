use dioxus::prelude::*;

const IMPACT: [(&str, &str); 3] = [
    ("Questions Asked", "23"),
    ("Subjects Covered", "5"),
    ("Learning Streaks", "7 days"),
];

#[component]
pub fn ImpactCard() -> Element {
    rsx! {
        div { class: "card impact",
            h3 { "Your Impact" }
            for (label, value) in IMPACT {
                div { key: "{label}", class: "impact-row",
                    span { "{label}" }
                    strong { "{value}" }
                }
            }
        }
    }
}

#[component]
pub fn TipCard() -> Element {
    rsx! {
        div { class: "card tip",
            h3 { "💡 Parent Tip" }
            p {
                "Always encourage your child to try solving the problem first. This builds confidence and independent thinking skills!"
            }
        }
    }
}
