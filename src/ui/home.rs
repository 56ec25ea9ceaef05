//! Main page: the coordinator that owns the session.
//!
//! Holds the session and photo intake state, routes submissions from the
//! intakes to the response producer and feeds the response panel. Producer
//! calls are spawned from this component so they keep running when the user
//! switches tabs.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::{
    AppSettings,
    intake::photo::{PhotoIntake, analyze_photo},
    producer::{MockProducer, ResponseProducer},
    session::{Feedback, Mode, SessionState, retry, submit_text},
    ui::{
        ai_response::{AiResponse, ResponseView},
        header::{Header, Hero},
        notice::NoticeBanner,
        photo_upload::PhotoUpload,
        question_history::QuestionHistory,
        sidebar::{ImpactCard, TipCard},
        text_question::TextQuestion,
    },
};

#[component]
fn ModeTabs(active: Mode, on_select: Callback<Mode, ()>) -> Element {
    rsx! {
        div { class: "tabs", role: "tablist",
            for mode in Mode::ALL {
                {
                    let class = if mode == active { "tab active" } else { "tab" };
                    let icon = mode.icon();
                    let label = mode.label();
                    rsx! {
                        button {
                            key: "{label}",
                            class,
                            onclick: move |_| on_select(mode),
                            span { "{icon}" }
                            span { "{label}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    let settings_ctx = use_context::<Signal<Option<AppSettings>>>();
    let settings = settings_ctx.read().clone().unwrap_or_default();

    let producer: Rc<dyn ResponseProducer> = use_hook({
        let settings = settings.clone();
        move || Rc::new(MockProducer::from_settings(&settings)) as Rc<dyn ResponseProducer>
    });
    let mut session = use_signal(SessionState::default);
    let max_upload_bytes = settings.max_upload_bytes;
    let mut photo = use_signal(move || PhotoIntake::new(max_upload_bytes));

    let select_mode = move |mode: Mode| {
        session.write().set_mode(mode);
        if mode != Mode::Photo {
            photo.write().leave();
        }
    };

    let submit = {
        let producer = producer.clone();
        move |_: ()| {
            let producer = producer.clone();
            async move {
                let question = session.read().draft.clone();
                submit_text(session, producer.as_ref(), question).await;
            }
        }
    };

    let retry_submission = {
        let producer = producer.clone();
        move |_: ()| {
            let producer = producer.clone();
            async move {
                retry(session, producer.as_ref()).await;
            }
        }
    };

    let analyze = {
        let producer = producer.clone();
        move |_: ()| {
            let producer = producer.clone();
            async move {
                analyze_photo(photo, session, producer.as_ref()).await;
            }
        }
    };

    let state = session.read().clone();
    let view = ResponseView::select(state.loading, state.response.as_deref());

    let notice = state.notice.as_ref().map(|n| {
        let on_retry = n.retry.is_some().then(|| Callback::new(retry_submission.clone()));
        rsx! {
            NoticeBanner {
                message: n.error.to_string(),
                on_dismiss: move |_| session.write().dismiss_notice(),
                on_retry,
            }
        }
    });

    let panel = match state.mode {
        Mode::Photo => rsx! {
            PhotoUpload {
                photo,
                max_upload_label: settings.max_upload_label(),
                on_analyze: analyze,
            }
        },
        Mode::Text => rsx! {
            TextQuestion {
                draft: state.draft.clone(),
                loading: state.loading,
                can_submit: state.can_submit(),
                on_input: move |text: String| session.write().set_draft(text),
                on_submit: submit,
            }
        },
        Mode::History => rsx! {
            QuestionHistory {}
        },
    };

    rsx! {
        div { class: "page",
            Header {}
            main { class: "container",
                Hero {}
                div { class: "layout",
                    div { class: "input-column",
                        div { class: "card input-card",
                            ModeTabs { active: state.mode, on_select: select_mode }
                            {notice}
                            {panel}
                        }
                    }
                    aside { class: "response-column",
                        div { class: "sticky",
                            AiResponse {
                                view,
                                feedback: state.feedback,
                                on_rate: move |f: Feedback| session.write().rate_response(f),
                            }
                            ImpactCard {}
                            TipCard {}
                        }
                    }
                }
            }
        }
    }
}
