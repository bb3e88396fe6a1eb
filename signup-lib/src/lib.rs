//! Registration form library
//!
//! The validation-and-submission state machine behind a four-field signup
//! form: a declarative schema, reactive field/error stores, and a submission
//! controller that posts the record to the registration endpoint.

pub mod config;
pub mod error;
pub mod form;
pub mod messages;
pub mod validation;

mod client;

pub use client::*;
pub use config::FormConfig;
pub use form::RegistrationForm;
pub use form::SubmitOutcome;
