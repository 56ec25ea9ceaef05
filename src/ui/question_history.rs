// Copyright © 2025 Nipun Kumar

use dioxus::prelude::*;

use crate::history::{HistoryEntry, recent_questions};

#[component]
fn Stars(entry: HistoryEntry) -> Element {
    let rating = entry.rating;
    let classes = entry
        .stars()
        .map(|filled| if filled { "star filled" } else { "star" });
    rsx! {
        div { class: "stars", title: "{rating} of 5",
            for (i, class) in classes.into_iter().enumerate() {
                span { key: "{i}", class, "★" }
            }
        }
    }
}

#[component]
fn HistoryRow(entry: HistoryEntry) -> Element {
    let icon = entry.kind.icon();
    let question = entry.question;
    let subject = entry.subject.name();
    let subject_class = entry.subject.badge_class();
    let grade = entry.grade;
    let timestamp = entry.timestamp;
    rsx! {
        div { class: "card history-item",
            div { class: "history-icon", "{icon}" }
            div { class: "history-body",
                p { class: "history-question", "{question}" }
                div { class: "badges",
                    span { class: "{subject_class}", "{subject}" }
                    span { class: "badge outline", "{grade}" }
                }
                div { class: "history-meta",
                    span { class: "muted small", "🕘 {timestamp}" }
                    Stars { entry }
                }
            }
        }
    }
}

/// The fixed list of past questions.
#[component]
pub fn QuestionHistory() -> Element {
    let entries = use_hook(recent_questions);
    let count = entries.len();
    rsx! {
        div { class: "question-history",
            div { class: "history-header",
                h3 { "Recent Questions" }
                span { class: "badge outline", "{count} questions" }
            }
            if entries.is_empty() {
                div { class: "card empty",
                    div { class: "large", "🕘" }
                    p { "No questions yet" }
                    p { class: "muted small", "Your question history will appear here as you use the app." }
                }
            } else {
                for entry in entries {
                    {
                        let id = entry.id;
                        rsx! {
                            HistoryRow { key: "{id}", entry }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MAX_RATING;

    fn render() -> String {
        let mut dom = VirtualDom::new(QuestionHistory);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn stars_match_each_rating() {
        let html = render();
        let entries = recent_questions();
        let filled: usize = entries.iter().map(|e| e.rating as usize).sum();
        let total = entries.len() * MAX_RATING as usize;
        assert_eq!(html.matches(r#"class="star filled""#).count(), filled);
        assert_eq!(html.matches(r#"class="star""#).count(), total - filled);
        for e in &entries {
            assert!(html.contains(&format!("{} of 5", e.rating)));
            assert!(html.contains(e.question));
        }
    }

    #[test]
    fn rendering_is_repeatable() {
        assert_eq!(render(), render());
    }
}
