//! Form configuration

use crate::client::DEFAULT_ENDPOINT;
use crate::messages::MESSAGES;

/// Configuration for a [`RegistrationForm`](crate::RegistrationForm).
///
/// # Example
///
/// ```
/// use signup_lib::FormConfig;
///
/// let config = FormConfig::default()
///     .with_endpoint("http://localhost:9000/api/registration");
/// assert_eq!(config.failure_message, "registration failed — username may be taken");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// Registration endpoint, used when the form builds its own client.
    ///
    /// Default: the public registration endpoint
    pub endpoint: String,

    /// Message shown after any failed attempt.
    ///
    /// Default: the message table's registration failure text
    pub failure_message: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            failure_message: MESSAGES.registration_failed.to_string(),
        }
    }
}

impl FormConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the registration endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets the failure message.
    pub fn with_failure_message(mut self, message: impl Into<String>) -> Self {
        self.failure_message = message.into();
        self
    }
}
