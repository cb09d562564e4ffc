//! Error types for fluentseq.
//!
//! All errors are strongly typed using thiserror. Dispatch failures are
//! kept separate from operator failures so callers can pattern match on
//! the layer that rejected the call.

use thiserror::Error;

use crate::value::ValueType;

/// Dispatch errors raised before an operator runs.
///
/// These cover every way a fluent call can be rejected by the handle
/// itself: the name is not callable on this handle, or the explicit
/// arguments do not satisfy the operator's declared signature.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("unknown operator: {name}")]
    UnknownOperator {
        name: String,
    },

    #[error("unknown member '{name}' on a handle wrapping a {value_type} value")]
    UnknownMember {
        name: String,
        value_type: ValueType,
    },

    #[error("operator '{name}' expects {expected} argument(s), got {actual}")]
    ArityMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("operator '{name}' argument {index}: expected {expected}, got {actual}")]
    ArgumentType {
        name: String,
        index: usize,
        expected: ValueType,
        actual: ValueType,
    },
}

/// Failure reported by an operator function itself.
///
/// The dispatch layer never constructs these; they are produced inside
/// operator bodies and surface to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct OperatorError {
    message: String,
}

impl OperatorError {
    /// Creates an operator error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Top-level error type for fluentseq.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// An operator failed. Transparent: the operator's own error is the
    /// whole story and is not rewrapped.
    #[error(transparent)]
    Operator(#[from] OperatorError),

    #[error("internal error: {message}")]
    Internal {
        message: String,
    },
}

impl SequenceError {
    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this is a dispatch error.
    #[must_use]
    pub const fn is_dispatch(&self) -> bool {
        matches!(self, Self::Dispatch(_))
    }

    /// Returns true if this is an operator failure.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }

    /// Returns true if this is an internal error.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }
}

/// Result type alias for fluentseq operations.
pub type SequenceResult<T> = Result<T, SequenceError>;
