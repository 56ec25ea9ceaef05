//! Error types surfaced to the user as notices.

use thiserror::Error;

/// Failures a user can run into while asking for help.
///
/// None of these are fatal: every variant is shown as a dismissible notice
/// and the user recovers by interacting again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HelperError {
    /// The user handed us something we cannot work with (wrong file type,
    /// file too large).
    #[error("{0}")]
    InvalidInput(String),

    /// The response producer could not be reached.
    #[error("The homework helper is unavailable right now: {0}")]
    Unavailable(String),
}

impl HelperError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Whether asking again with the same input could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_unavailable_is_retryable() {
        assert!(HelperError::unavailable("offline").is_retryable());
        assert!(!HelperError::invalid_input("not an image").is_retryable());
    }

    #[test]
    fn invalid_input_displays_the_reason_verbatim() {
        let e = HelperError::invalid_input("Please choose an image file.");
        assert_eq!(e.to_string(), "Please choose an image file.");
    }
}
