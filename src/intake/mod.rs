//! Input flows that collect a question from the user.
//!
//! Text input is small enough to live on the session itself (see
//! [`crate::session::SessionState::set_draft`]); photos carry their own state.

pub mod photo;
