//! # Query Mode
//!
//! Every validator returns a [`Validation`](crate::Validation). Strict
//! callers propagate it with `?`; callers that only want a yes/no answer use
//! [`Query::holds`], which discards the failure after tracing it.

use crate::error::ValidationError;

/// Boolean view over a validation outcome.
pub trait Query {
    /// True if the validation passed.
    fn holds(self) -> bool;
}

impl<T> Query for Result<T, ValidationError> {
    fn holds(self) -> bool {
        match self {
            Ok(_) => true,
            Err(err) => {
                tracing::trace!(
                    kind = %err.kind,
                    path = ?err.path,
                    "query-mode validation failed: {}",
                    err.message
                );
                false
            }
        }
    }
}
