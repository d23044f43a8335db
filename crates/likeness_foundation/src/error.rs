//! Error types for the likeness system.
//!
//! Uses `thiserror` for ergonomic error definition. Type mismatches found by
//! the comparator are ordinary values, not errors; this type only covers
//! malformed caller input.

use thiserror::Error;

use crate::types::TypeTag;

/// The main error type for likeness operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an invalid settings error.
    #[must_use]
    pub fn invalid_settings(field: &'static str, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidSettings {
            field,
            reason: reason.into(),
        })
    }

    /// Creates an error for a value that cannot be viewed as an expression.
    #[must_use]
    pub fn not_an_expression(found: TypeTag) -> Self {
        Self::new(ErrorKind::NotAnExpression(found))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A settings field was missing a required property.
    #[error("invalid setting `{field}`: {reason}")]
    InvalidSettings {
        /// The offending field.
        field: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// A value was supplied where a symbol or call was required.
    #[error("expected a symbol or call, got {0}")]
    NotAnExpression(TypeTag),
}
