//! Error types for resource ID parsing and mapping.

use thiserror::Error;

/// Errors that can occur when parsing a resource ID or mapping it onto a typed ID.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The ID string is empty.
    #[error("resource ID cannot be empty")]
    EmptyInput,

    /// The ID has fewer segments than the template requires.
    #[error("resource ID has too few segments: expected {expected}, got {actual}")]
    TooFewSegments { expected: usize, actual: usize },

    /// The ID has more segments than the template allows.
    #[error("resource ID has too many segments: expected {expected}, got {actual}")]
    TooManySegments { expected: usize, actual: usize },

    /// A fixed segment did not match its declared literal.
    #[error("segment '{segment}' mismatch: expected '{expected}', got '{actual}'")]
    StaticSegmentMismatch {
        segment: &'static str,
        expected: String,
        actual: String,
    },

    /// A user-supplied segment was empty.
    #[error("segment '{segment}' cannot be empty")]
    EmptySegmentValue { segment: &'static str },

    /// The parse result has no value for a segment the typed ID expects.
    ///
    /// This means the template and the typed ID disagree; it is never caused
    /// by user input.
    #[error("segment '{segment}' was not specified in the parse result")]
    SegmentNotSpecified { segment: &'static str },
}

impl IdError {
    /// Returns true if this error indicates the input was empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, IdError::EmptyInput)
    }

    /// Returns true if this error indicates a segment count problem.
    pub fn is_length_error(&self) -> bool {
        matches!(
            self,
            IdError::TooFewSegments { .. } | IdError::TooManySegments { .. }
        )
    }

    /// Returns true if this error is a programming defect rather than bad input.
    pub fn is_defect(&self) -> bool {
        matches!(self, IdError::SegmentNotSpecified { .. })
    }

    /// The segment name this error refers to, if any.
    pub fn segment(&self) -> Option<&'static str> {
        match self {
            IdError::StaticSegmentMismatch { segment, .. }
            | IdError::EmptySegmentValue { segment }
            | IdError::SegmentNotSpecified { segment } => Some(*segment),
            _ => None,
        }
    }
}
