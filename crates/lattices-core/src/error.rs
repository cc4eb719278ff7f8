//! # Error Types: Validation Failure Taxonomy
//!
//! Every validator in the workspace reports failure through a single
//! [`ValidationError`] carrying a [`FailureKind`], the dotted path of the
//! offending field (e.g. `lattice.offsets`) and a human-readable message.
//!
//! ## Design
//!
//! - The kind says which rule family failed; the message names the rule and
//!   the actual value(s) so it can be surfaced to the user verbatim.
//! - Validators return [`Validation`]. Strict mode propagates the error with
//!   `?`; query mode inspects it through [`Query`](crate::Query).

use std::fmt;

use thiserror::Error;

/// The family of rule a failed validation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// A value's runtime kind is not in the declared acceptable set.
    TypeMismatch,
    /// A mapping's key set differs from the expected key set.
    SchemaKeyMismatch,
    /// A number or array fails its sign, zero or bounds policy.
    ValueOutOfRange,
    /// A cross-field positional or dimensional relationship does not hold.
    GeometryViolation,
    /// A sequence or array that must hold unique entries has duplicates.
    UniquenessViolation,
}

impl FailureKind {
    /// Stable name used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TypeMismatch => "TypeMismatch",
            Self::SchemaKeyMismatch => "SchemaKeyMismatch",
            Self::ValueOutOfRange => "ValueOutOfRange",
            Self::GeometryViolation => "GeometryViolation",
            Self::UniquenessViolation => "UniquenessViolation",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single failed validation rule.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{kind} at '{}': {message}", .path.as_deref().unwrap_or("(root)"))]
pub struct ValidationError {
    /// Rule family that failed.
    pub kind: FailureKind,
    /// Dotted path of the offending field, if known.
    pub path: Option<String>,
    /// Diagnostic naming the constraint and the actual value(s).
    pub message: String,
}

impl ValidationError {
    /// Build an error of the given kind.
    pub fn new(kind: FailureKind, path: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.map(str::to_string),
            message: message.into(),
        }
    }

    /// A value's kind is not acceptable.
    pub fn type_mismatch(path: Option<&str>, message: impl Into<String>) -> Self {
        Self::new(FailureKind::TypeMismatch, path, message)
    }

    /// A mapping has the wrong key set.
    pub fn key_mismatch(path: Option<&str>, message: impl Into<String>) -> Self {
        Self::new(FailureKind::SchemaKeyMismatch, path, message)
    }

    /// A value fails its sign or bounds policy.
    pub fn out_of_range(path: Option<&str>, message: impl Into<String>) -> Self {
        Self::new(FailureKind::ValueOutOfRange, path, message)
    }

    /// A geometric relationship between fields does not hold.
    pub fn geometry(path: Option<&str>, message: impl Into<String>) -> Self {
        Self::new(FailureKind::GeometryViolation, path, message)
    }

    /// Duplicates found where entries must be unique.
    pub fn uniqueness(path: Option<&str>, message: impl Into<String>) -> Self {
        Self::new(FailureKind::UniquenessViolation, path, message)
    }

    /// Replace the path, keeping kind and message.
    pub fn at(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// True if this error belongs to `kind`.
    pub fn is(&self, kind: FailureKind) -> bool {
        self.kind == kind
    }
}

/// Outcome of a single validation rule.
pub type Validation = Result<(), ValidationError>;

/// Render `name` for inclusion in a diagnostic sentence.
pub(crate) fn subject(name: Option<&str>, noun: &str) -> String {
    match name {
        Some(name) => format!("{noun} '{name}'"),
        None => format!("the {noun}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_path_and_message() {
        let err = ValidationError::geometry(Some("box_label.height"), "too tall");
        assert_eq!(
            err.to_string(),
            "GeometryViolation at 'box_label.height': too tall"
        );
    }

    #[test]
    fn display_root_when_no_path() {
        let err = ValidationError::type_mismatch(None, "not a mapping");
        assert_eq!(err.to_string(), "TypeMismatch at '(root)': not a mapping");
    }

    #[test]
    fn at_replaces_path() {
        let err = ValidationError::out_of_range(None, "negative").at("lattice.offsets");
        assert_eq!(err.path.as_deref(), Some("lattice.offsets"));
        assert!(err.is(FailureKind::ValueOutOfRange));
    }

    #[test]
    fn subject_phrasing() {
        assert_eq!(subject(Some("box.width"), "value"), "value 'box.width'");
        assert_eq!(subject(None, "list"), "the list");
    }
}
