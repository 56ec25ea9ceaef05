//! Session state owned by the coordinator, and the operations that move it.

use dioxus::logger::tracing::{info, warn};

use crate::{
    error::HelperError,
    producer::{HelperInput, ResponseProducer},
    state::StateHandle,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Photo,
    Text,
    History,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Photo, Mode::Text, Mode::History];

    pub fn label(self) -> &'static str {
        match self {
            Mode::Photo => "Photo Upload",
            Mode::Text => "Ask Question",
            Mode::History => "History",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Mode::Photo => "📷",
            Mode::Text => "💬",
            Mode::History => "🕘",
        }
    }
}

/// What to run again when the user hits "Retry".
#[derive(Debug, Clone, PartialEq)]
pub enum Retry {
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub error: HelperError,
    pub retry: Option<Retry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Helpful,
    NotHelpful,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub mode: Mode,
    pub draft: String,
    pub response: Option<String>,
    pub loading: bool,
    pub notice: Option<Notice>,
    pub feedback: Option<Feedback>,
}

impl SessionState {
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn set_draft(&mut self, text: String) {
        self.draft = text;
    }

    pub fn can_submit(&self) -> bool {
        !self.loading && !self.draft.trim().is_empty()
    }

    /// Marks a text submission as in flight. `None` (and no change at all)
    /// for blank questions or while another submission is running.
    pub fn begin_text(&mut self, question: &str) -> Option<String> {
        if self.loading || question.trim().is_empty() {
            return None;
        }
        self.loading = true;
        self.notice = None;
        Some(question.to_string())
    }

    pub fn finish_text(&mut self, question: String, result: Result<String, HelperError>) {
        self.loading = false;
        match result {
            Ok(response) => {
                self.response = Some(response);
                self.feedback = None;
                self.draft.clear();
            }
            Err(error) => {
                let retry = error.is_retryable().then(|| Retry::Text(question));
                self.notice = Some(Notice { error, retry });
            }
        }
    }

    pub fn receive_photo_result(&mut self, response: String) {
        self.response = Some(response);
        self.feedback = None;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Records feedback on the current response. Repeating the same rating
    /// withdraws it.
    pub fn rate_response(&mut self, feedback: Feedback) {
        if self.response.is_none() {
            return;
        }
        self.feedback = if self.feedback == Some(feedback) {
            None
        } else {
            Some(feedback)
        };
    }
}

/// Sends `question` to the producer and stores the answer. Returns whether a
/// submission was started.
///
/// The result is applied whenever it arrives, even if the user has switched
/// modes in the meantime.
pub async fn submit_text<S>(mut session: S, producer: &dyn ResponseProducer, question: String) -> bool
where
    S: StateHandle<SessionState>,
{
    let Some(question) = session.apply(|s| s.begin_text(&question)) else {
        return false;
    };
    info!("submitting text question ({} chars)", question.len());
    let result = producer.produce(HelperInput::Text(question.clone())).await;
    if let Err(e) = &result {
        warn!("text question failed: {e}");
    }
    session.apply(|s| s.finish_text(question, result));
    true
}

/// Re-runs whatever the current notice offers to retry.
pub async fn retry<S>(session: S, producer: &dyn ResponseProducer) -> bool
where
    S: StateHandle<SessionState>,
{
    let target = session.view(|s| s.notice.as_ref().and_then(|n| n.retry.clone()));
    match target {
        Some(Retry::Text(question)) => submit_text(session, producer, question).await,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc, time::Duration};

    use super::*;
    use crate::producer::{MockProducer, MockResponseProducer};

    /// Records the loading flag after every state change.
    #[derive(Clone, Default)]
    struct Recording {
        state: Rc<RefCell<SessionState>>,
        loading: Rc<RefCell<Vec<bool>>>,
    }

    impl StateHandle<SessionState> for Recording {
        fn view<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
            f(&*self.state.borrow())
        }

        fn apply<R>(&mut self, f: impl FnOnce(&mut SessionState) -> R) -> R {
            let r = f(&mut *self.state.borrow_mut());
            self.loading.borrow_mut().push(self.state.borrow().loading);
            r
        }
    }

    fn producer() -> MockProducer {
        MockProducer::new(Duration::from_millis(2_000), Duration::from_millis(3_000))
    }

    fn shared(state: SessionState) -> Rc<RefCell<SessionState>> {
        Rc::new(RefCell::new(state))
    }

    #[tokio::test(start_paused = true)]
    async fn loading_goes_up_and_down_exactly_once() {
        for question in ["2 + 2?", "  why is the sky blue  ", "x"] {
            let rec = Recording::default();
            assert!(submit_text(rec.clone(), &producer(), question.into()).await);
            assert_eq!(*rec.loading.borrow(), vec![true, false]);
            let s = rec.state.borrow();
            assert!(!s.loading);
            assert!(s.response.is_some());
        }
    }

    #[tokio::test]
    async fn blank_or_busy_submissions_do_nothing() {
        let mut mock = MockResponseProducer::new();
        mock.expect_produce().never();

        for question in ["", "   ", "\n\t"] {
            let session = shared(SessionState::default());
            assert!(!submit_text(session.clone(), &mock, question.into()).await);
            assert_eq!(*session.borrow(), SessionState::default());
        }

        let busy = SessionState {
            loading: true,
            draft: "pending".into(),
            ..Default::default()
        };
        let session = shared(busy.clone());
        assert!(!submit_text(session.clone(), &mock, "another one".into()).await);
        assert_eq!(*session.borrow(), busy);
    }

    #[tokio::test(start_paused = true)]
    async fn fractions_question_end_to_end() {
        let session = shared(SessionState {
            mode: Mode::Text,
            draft: "How do I explain fractions?".into(),
            ..Default::default()
        });
        let question = session.borrow().draft.clone();
        submit_text(session.clone(), &producer(), question).await;

        let s = session.borrow();
        assert!(!s.loading);
        assert!(s.draft.is_empty());
        let response = s.response.as_deref().unwrap();
        assert!(response.contains("Understanding the Problem:"));
        assert!(response.contains("How do I explain fractions?"));
    }

    #[tokio::test(start_paused = true)]
    async fn switching_mode_does_not_cancel_a_submission() {
        let session = shared(SessionState {
            mode: Mode::Text,
            response: Some("old answer".into()),
            ..Default::default()
        });
        let producer = producer();
        let switcher = {
            let session = session.clone();
            async move {
                tokio::time::sleep(Duration::from_millis(500)).await;
                session.borrow_mut().set_mode(Mode::History);
                assert!(session.borrow().loading);
            }
        };
        tokio::join!(
            submit_text(session.clone(), &producer, "What is a noun?".into()),
            switcher
        );

        let s = session.borrow();
        assert_eq!(s.mode, Mode::History);
        assert!(!s.loading);
        assert!(s.response.as_deref().unwrap().contains("What is a noun?"));
    }

    #[tokio::test]
    async fn unavailable_keeps_state_and_offers_retry() {
        let mut mock = MockResponseProducer::new();
        mock.expect_produce()
            .times(1)
            .returning(|_| Err(HelperError::unavailable("timed out")));
        let session = shared(SessionState {
            mode: Mode::Text,
            draft: "Help with spelling".into(),
            response: Some("previous".into()),
            ..Default::default()
        });

        assert!(submit_text(session.clone(), &mock, "Help with spelling".into()).await);

        let s = session.borrow();
        assert!(!s.loading);
        assert_eq!(s.draft, "Help with spelling");
        assert_eq!(s.response.as_deref(), Some("previous"));
        let notice = s.notice.clone().unwrap();
        assert!(matches!(notice.error, HelperError::Unavailable(_)));
        assert_eq!(notice.retry, Some(Retry::Text("Help with spelling".into())));
    }

    #[tokio::test]
    async fn retry_resubmits_the_failed_question() {
        let mut mock = MockResponseProducer::new();
        mock.expect_produce()
            .withf(|input| *input == HelperInput::Text("Long division".into()))
            .times(1)
            .returning(|_| Ok("explained".into()));
        let session = shared(SessionState {
            notice: Some(Notice {
                error: HelperError::unavailable("offline"),
                retry: Some(Retry::Text("Long division".into())),
            }),
            ..Default::default()
        });

        assert!(retry(session.clone(), &mock).await);

        let s = session.borrow();
        assert!(s.notice.is_none());
        assert_eq!(s.response.as_deref(), Some("explained"));
    }

    #[tokio::test]
    async fn retry_without_target_is_a_no_op() {
        let mut mock = MockResponseProducer::new();
        mock.expect_produce().never();
        let session = shared(SessionState::default());
        assert!(!retry(session, &mock).await);
    }

    #[test]
    fn photo_results_replace_the_response_and_reset_feedback() {
        let mut s = SessionState {
            response: Some("a".into()),
            feedback: Some(Feedback::Helpful),
            ..Default::default()
        };
        s.receive_photo_result("b".into());
        assert_eq!(s.response.as_deref(), Some("b"));
        assert_eq!(s.feedback, None);
    }

    #[test]
    fn mode_changes_are_always_allowed() {
        let mut s = SessionState::default();
        for from in Mode::ALL {
            for to in Mode::ALL {
                s.set_mode(from);
                s.set_mode(to);
                assert_eq!(s.mode, to);
            }
        }
    }

    #[test]
    fn rating_toggles_and_needs_a_response() {
        let mut s = SessionState::default();
        s.rate_response(Feedback::Helpful);
        assert_eq!(s.feedback, None);

        s.receive_photo_result("answer".into());
        s.rate_response(Feedback::Helpful);
        assert_eq!(s.feedback, Some(Feedback::Helpful));
        s.rate_response(Feedback::NotHelpful);
        assert_eq!(s.feedback, Some(Feedback::NotHelpful));
        s.rate_response(Feedback::NotHelpful);
        assert_eq!(s.feedback, None);
    }

    #[test]
    fn can_submit_tracks_draft_and_loading() {
        let mut s = SessionState::default();
        assert!(!s.can_submit());
        s.set_draft("hi".into());
        assert!(s.can_submit());
        s.loading = true;
        assert!(!s.can_submit());
    }
}
