//! Form validation for the registration record.
//!
//! A [`Schema`] maps every [`Field`](crate::form::Field) to an ordered chain of
//! rules. Each rule is a pure predicate paired with a fixed message; the first
//! failing rule decides the field's error.
//!
//! # Example
//!
//! ```
//! use signup_lib::form::{Field, FieldValue};
//! use signup_lib::validation::Schema;
//!
//! let schema = Schema::registration();
//!
//! let err = schema
//!     .validate_field(Field::Username, &FieldValue::from("ab"))
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "username must be at least 3 characters");
//! ```

mod result;
mod rules;
mod schema;

pub use result::ValidationResult;
pub use rules::FieldRules;
pub use schema::Schema;
