//! Errors raised by the sticks crate outside of validation proper.

use lattices_core::ValidationError;
use thiserror::Error;

/// Error building, merging or converting a sticks configuration.
#[derive(Error, Debug)]
pub enum SticksError {
    /// The configuration failed a validation rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The packaged default document could not be parsed.
    #[error("default configuration document is unusable: {0}")]
    DefaultDocument(String),

    /// Conversion between the value tree and the typed model failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl SticksError {
    /// The validation failure, if this is one.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}
