//! Error types

mod api;
mod field;
mod validation;

pub use api::*;
pub use field::*;
pub use validation::*;

/// Top-level error for form operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A field name or value did not fit the Field Record.
    #[error(transparent)]
    Field(#[from] FieldError),

    /// The registration endpoint could not be used.
    #[error(transparent)]
    Api(#[from] ApiError),
}
