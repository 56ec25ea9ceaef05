//! The boundary to whatever turns a homework question into an explanation.
//!
//! Only a simulated producer exists today. Callers must still treat
//! [`ResponseProducer::produce`] as a fallible remote call.

mod mock;

use async_trait::async_trait;

pub use mock::{MockProducer, PHOTO_RESPONSE};

use crate::{error::HelperError, intake::photo::PendingImage};

/// What the user asked about.
#[derive(Debug, Clone, PartialEq)]
pub enum HelperInput {
    Image(PendingImage),
    Text(String),
}

impl HelperInput {
    pub fn kind(&self) -> &'static str {
        match self {
            HelperInput::Image(_) => "image",
            HelperInput::Text(_) => "text",
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait ResponseProducer {
    /// Produces an explanation for `input`.
    ///
    /// Fails with [`HelperError::Unavailable`] when the service behind the
    /// producer cannot be reached.
    async fn produce(&self, input: HelperInput) -> Result<String, HelperError>;
}
