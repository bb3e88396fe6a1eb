//! The registration form: Field/Error stores plus the submission controller.

use std::sync::Arc;

use crate::client::RegistrationApi;
use crate::client::RegistrationClient;
use crate::config::FormConfig;
use crate::error::Error;
use crate::error::FieldError;
use crate::validation::Schema;

use super::fields::{Field, FieldValue, FormErrors, FormValues, InputEvent};
use super::state::State;
use super::tasks::TaskQueue;

/// Submit gate and the messages reported after a registration attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionState {
    /// Whether submitting is currently refused.
    pub disabled: bool,
    /// Whether a registration request is in flight.
    pub submitting: bool,
    /// Message returned by the server on the last success.
    pub success_message: String,
    /// Fixed message set on the last failure.
    pub failure_message: String,
}

impl Default for SubmissionState {
    fn default() -> Self {
        Self {
            disabled: true,
            submitting: false,
            success_message: String::new(),
            failure_message: String::new(),
        }
    }
}

/// What a call to [`RegistrationForm::submit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The gate was closed; nothing was sent.
    Blocked,
    /// The server accepted the registration with this message.
    Succeeded(String),
    /// The attempt failed; carries the message shown to the user.
    Failed(String),
}

/// A registration form instance.
///
/// Owns the Field Record, the Error Record and the submission state. Input
/// changes validate the changed field on the task queue and write the value;
/// each Field Record write enqueues a whole-record revalidation that drives
/// the submit gate. Must be used from within a tokio runtime.
///
/// # Example
///
/// ```ignore
/// let form = RegistrationForm::new(RegistrationClient::builder().build()?);
///
/// form.on_change(&InputEvent::text("username", "ferris"))?;
/// form.on_change(&InputEvent::radio("favLanguage", "rust"))?;
/// form.on_change(&InputEvent::select("favFood", "pizza"))?;
/// form.on_change(&InputEvent::checkbox("agreement", true))?;
/// form.settle().await;
///
/// if !form.is_disabled() {
///     form.submit().await;
/// }
/// ```
pub struct RegistrationForm<A> {
    api: Arc<A>,
    schema: Arc<Schema>,
    config: FormConfig,
    values: State<FormValues>,
    errors: State<FormErrors>,
    submission: State<SubmissionState>,
    tasks: TaskQueue,
}

impl RegistrationForm<RegistrationClient> {
    /// Creates a form posting to the endpoint named in `config`.
    ///
    /// Fails with [`Error::Api`] when the endpoint is not a valid URL.
    pub fn from_config(config: FormConfig) -> Result<Self, Error> {
        let client = RegistrationClient::builder()
            .endpoint(config.endpoint.clone())
            .build()?;
        Ok(Self::with_config(client, config))
    }
}

impl<A: RegistrationApi + 'static> RegistrationForm<A> {
    /// Creates a form with default configuration.
    pub fn new(api: A) -> Self {
        Self::with_config(api, FormConfig::default())
    }

    /// Creates a form with the given configuration.
    pub fn with_config(api: A, config: FormConfig) -> Self {
        let form = Self {
            api: Arc::new(api),
            schema: Arc::new(Schema::registration()),
            config,
            values: State::new(FormValues::default()),
            errors: State::new(FormErrors::default()),
            submission: State::new(SubmissionState::default()),
            tasks: TaskQueue::new(),
        };
        form.watch_values();
        form
    }

    /// Re-evaluate the submit gate after every Field Record change.
    ///
    /// Each change validates the snapshot it was triggered by. When several
    /// revalidations are pending, the gate reflects whichever resolves last.
    fn watch_values(&self) {
        let schema = Arc::clone(&self.schema);
        let submission = self.submission.clone();
        let tasks = self.tasks.clone();

        self.values.subscribe(move |snapshot: &FormValues| {
            let snapshot = snapshot.clone();
            let schema = Arc::clone(&schema);
            let submission = submission.clone();
            tasks.spawn("revalidate", async move {
                let valid = schema.validate_all(&snapshot);
                log::debug!("Record revalidated: valid={}", valid);
                submission.update(|s| s.disabled = !valid || s.submitting);
            });
        });
    }

    /// Handles a change event from one of the inputs.
    pub fn on_change(&self, event: &InputEvent) -> Result<(), Error> {
        let field: Field = event.name.parse()?;
        self.input_change(field, event.value_to_use())?;
        Ok(())
    }

    /// Validates `value` for `field` and writes it into the Field Record.
    ///
    /// The field's error slot is updated when the validation task resolves.
    /// A value of the wrong kind is validated (and reported) but not stored.
    pub fn input_change(&self, field: Field, value: FieldValue) -> Result<(), FieldError> {
        log::debug!("Input changed: {} = {:?}", field, value);
        self.validate(field, value.clone());

        let mut next = self.values.get();
        next.set(field, value)?;
        self.values.set(next);
        Ok(())
    }

    fn validate(&self, field: Field, value: FieldValue) {
        let schema = Arc::clone(&self.schema);
        let errors = self.errors.clone();
        self.tasks.spawn("validate-field", async move {
            let message = match schema.validate_field(field, &value) {
                Ok(()) => String::new(),
                Err(e) => e.message,
            };
            errors.update(|e| e.set(field, message));
        });
    }

    /// Attempts the registration.
    ///
    /// Refused while the gate is closed. Otherwise closes the gate, posts the
    /// current record, records the outcome and resets the Field Record. The
    /// gate is not reopened here; the revalidation of the reset record
    /// decides it.
    pub async fn submit(&self) -> SubmitOutcome {
        let admitted = self.submission.update(|s| {
            if s.disabled {
                return false;
            }
            s.disabled = true;
            s.submitting = true;
            true
        });
        if !admitted {
            log::debug!("Submit refused: form is disabled");
            return SubmitOutcome::Blocked;
        }

        let payload = self.values.get();
        log::info!("Submitting registration for '{}'", payload.username);

        let outcome = match self.api.register(&payload).await {
            Ok(response) => {
                log::info!("Registration succeeded: {}", response.message);
                self.submission.update(|s| {
                    s.success_message = response.message.clone();
                    s.failure_message.clear();
                });
                SubmitOutcome::Succeeded(response.message)
            }
            Err(e) => {
                log::warn!("Registration failed: {}", e);
                let message = self.config.failure_message.clone();
                self.submission
                    .update(|s| s.failure_message = message.clone());
                SubmitOutcome::Failed(message)
            }
        };

        self.reset();
        self.submission.update(|s| s.submitting = false);
        outcome
    }

    /// Restores the initial Field Record. The Error Record is left as is.
    pub fn reset(&self) {
        self.values.set(FormValues::default());
    }

    /// Waits for every pending validation to resolve.
    pub async fn settle(&self) {
        self.tasks.settle().await;
    }

    /// Current Field Record.
    pub fn values(&self) -> FormValues {
        self.values.get()
    }

    /// Current Error Record.
    pub fn errors(&self) -> FormErrors {
        self.errors.get()
    }

    /// Current message for one field, empty when valid.
    pub fn error(&self, field: Field) -> String {
        self.errors.with(|e| e.get(field).to_string())
    }

    /// Current submission state.
    pub fn submission(&self) -> SubmissionState {
        self.submission.get()
    }

    /// Whether the submit control is disabled.
    pub fn is_disabled(&self) -> bool {
        self.submission.with(|s| s.disabled)
    }

    /// Message from the last successful registration, empty if none.
    pub fn success_message(&self) -> String {
        self.submission.with(|s| s.success_message.clone())
    }

    /// Message from the last failed registration, empty if none.
    pub fn failure_message(&self) -> String {
        self.submission.with(|s| s.failure_message.clone())
    }

    /// Number of validations not yet resolved.
    pub fn pending(&self) -> usize {
        self.tasks.pending()
    }

    /// The registration backend.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// The schema this form validates against.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}
