//! FieldError for Field Record access

/// Error type for addressing or writing Field Record slots.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The name does not match any of the form's fields.
    #[error("Unknown field '{field}'")]
    Unknown { field: String },

    /// The value has the wrong kind for the slot (text vs checkbox).
    #[error("Field '{field}' type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        actual: &'static str,
    },
}

impl FieldError {
    /// Creates a new unknown field error.
    pub fn unknown(field: impl Into<String>) -> Self {
        Self::Unknown {
            field: field.into(),
        }
    }

    /// Creates a new type mismatch error.
    pub fn type_mismatch(field: &'static str, expected: &'static str, actual: &'static str) -> Self {
        Self::TypeMismatch {
            field,
            expected,
            actual,
        }
    }
}
