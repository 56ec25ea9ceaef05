//! User interface components.
//!
//! `home` is the page itself; everything else is a panel it composes.

mod ai_response;   // Response panel: loading, empty, or the answer
mod header;        // Page header and hero text
pub mod home;      // Coordinator page (public for routing)
mod notice;        // Dismissible error banner
mod photo_upload;  // Photo intake panel
mod question_history;
mod sidebar;       // Static stats and tip cards
mod text_question; // Text intake panel
