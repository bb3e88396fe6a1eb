//! Validation error types

use crate::form::Field;

/// A field that failed its validation rules.
///
/// Displays as the bare message so it can be shown inline next to the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: Field,
    /// Human-readable validation error message.
    pub message: String,
}

impl ValidationError {
    /// Creates a new field validation error.
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}
