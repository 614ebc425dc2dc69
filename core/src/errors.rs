//! Error taxonomy shared by the validator and the weighted selector.

use std::fmt;
use thiserror::Error;

/// **ERROR KIND** - Which constraint was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Value is not of the expected primitive kind.
    TypeMismatch,
    /// Value is empty and the rules forbid it.
    EmptyValue,
    /// Value (or its length) is below the configured minimum.
    BelowMinimum,
    /// Value (or its length) is above the configured maximum.
    AboveMaximum,
    /// Value is not a member of the configured allow-list.
    NotAllowed,
    /// Value does not match the expected textual format.
    WrongFormat,
    /// A required field is absent.
    MissingField,
    /// Inputs are individually valid but their combination is not.
    InvalidConfiguration,
}

impl ErrorKind {
    /// **STABLE ERROR CODE** for machine consumption.
    pub fn code(&self) -> &'static str {
        match self {
            Self::TypeMismatch => "RULECHECK_TYPE_MISMATCH",
            Self::EmptyValue => "RULECHECK_EMPTY_VALUE",
            Self::BelowMinimum => "RULECHECK_BELOW_MINIMUM",
            Self::AboveMaximum => "RULECHECK_ABOVE_MAXIMUM",
            Self::NotAllowed => "RULECHECK_NOT_ALLOWED",
            Self::WrongFormat => "RULECHECK_WRONG_FORMAT",
            Self::MissingField => "RULECHECK_MISSING_FIELD",
            Self::InvalidConfiguration => "RULECHECK_INVALID_CONFIGURATION",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Failure returned by every fallible operation in the crate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProjectError {
    /// A validator rule was violated.
    #[error("VALIDATION ERROR: {kind} - {message}")]
    Validation {
        /// Violated constraint.
        kind: ErrorKind,
        /// Message built from the rule's alias.
        message: String,
    },

    /// The selector or the random generator rejected its inputs.
    #[error("SELECTION ERROR: {kind} - {message}")]
    Selection {
        /// Violated constraint.
        kind: ErrorKind,
        /// Human-readable detail.
        message: String,
    },
}

impl ProjectError {
    pub(crate) fn validation(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::Validation {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn selection(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::Selection {
            kind,
            message: message.into(),
        }
    }

    /// Taxonomy tag of the failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { kind, .. } | Self::Selection { kind, .. } => *kind,
        }
    }

    /// Human-readable message, without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. } | Self::Selection { message, .. } => message,
        }
    }
}
