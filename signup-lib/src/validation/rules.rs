//! Per-field rule chains.

use crate::error::ValidationError;
use crate::form::Field;

/// Type alias for validation rule closures.
type Rule<V> = Box<dyn Fn(&V) -> Result<(), String> + Send + Sync>;

/// Normalization applied to a value before any rule sees it.
type Normalize<V> = fn(&V) -> &V;

/// Ordered validation rules for a single field.
///
/// Rules run in the order they were added and stop at the first failure.
/// A value that is absent (or of the wrong kind for the field) fails with the
/// field's missing-value message before any rule runs.
pub struct FieldRules<V: ?Sized> {
    field: Field,
    missing: String,
    normalize: Option<Normalize<V>>,
    rules: Vec<Rule<V>>,
}

impl<V: ?Sized + 'static> FieldRules<V> {
    /// Create an empty rule chain for `field`.
    pub fn new(field: Field) -> Self {
        Self {
            field,
            missing: format!("{field} is required"),
            normalize: None,
            rules: Vec::new(),
        }
    }

    /// Set the message used when the value is absent.
    pub fn when_missing(mut self, msg: impl Into<String>) -> Self {
        self.missing = msg.into();
        self
    }

    /// Add a custom validation rule.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&V) -> bool + Send + Sync + 'static,
    {
        let msg = msg.into();
        self.rules
            .push(Box::new(move |v| if f(v) { Ok(()) } else { Err(msg.clone()) }));
        self
    }

    /// Run the chain against `value`, returning the first failure.
    pub fn check(&self, value: Option<&V>) -> Result<(), ValidationError> {
        let Some(value) = value else {
            return Err(ValidationError::new(self.field, self.missing.clone()));
        };
        let value = match self.normalize {
            Some(normalize) => normalize(value),
            None => value,
        };
        for rule in &self.rules {
            rule(value).map_err(|msg| ValidationError::new(self.field, msg))?;
        }
        Ok(())
    }
}

// Built-in rules for text values
impl FieldRules<str> {
    /// Trim surrounding whitespace before the rules run.
    pub fn trim(mut self) -> Self {
        self.normalize = Some(str::trim);
        self
    }

    /// Require the field to be non-empty.
    ///
    /// Also becomes the message for an absent value.
    pub fn required(self, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        self.when_missing(msg.clone())
            .rule(|v: &str| !v.trim().is_empty(), msg)
    }

    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v: &str| v.chars().count() >= min, msg)
    }

    /// Require maximum length (in characters).
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v: &str| v.chars().count() <= max, msg)
    }

    /// Require the value to be exactly one of `options`.
    pub fn one_of(self, options: &'static [&'static str], msg: impl Into<String>) -> Self {
        self.rule(move |v: &str| options.iter().any(|option| *option == v), msg)
    }
}

// Built-in rules for checkbox values
impl FieldRules<bool> {
    /// Require the checkbox to be checked.
    pub fn checked(self, msg: impl Into<String>) -> Self {
        self.rule(|&v: &bool| v, msg)
    }
}

impl<V: ?Sized> std::fmt::Debug for FieldRules<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRules")
            .field("field", &self.field)
            .field("rules", &self.rules.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_failing_rule_wins() {
        let rules = FieldRules::<str>::new(Field::Username)
            .required("required")
            .min_length(3, "too short")
            .max_length(1, "too long");

        let err = rules.check(Some("ab")).unwrap_err();
        assert_eq!(err.message, "too short");

        let err = rules.check(Some("")).unwrap_err();
        assert_eq!(err.message, "required");
    }

    #[test]
    fn test_missing_value_uses_missing_message() {
        let rules = FieldRules::<bool>::new(Field::Agreement)
            .when_missing("missing")
            .checked("unchecked");

        assert_eq!(rules.check(None).unwrap_err().message, "missing");
        assert_eq!(rules.check(Some(&false)).unwrap_err().message, "unchecked");
        assert!(rules.check(Some(&true)).is_ok());
    }

    #[test]
    fn test_trim_applies_before_length() {
        let rules = FieldRules::<str>::new(Field::Username)
            .trim()
            .min_length(3, "too short");

        assert!(rules.check(Some("  ab  ")).is_err());
        assert!(rules.check(Some(" abc ")).is_ok());
    }

    #[test]
    fn test_length_counts_characters() {
        let rules = FieldRules::<str>::new(Field::Username).max_length(3, "too long");
        assert!(rules.check(Some("äöü")).is_ok());
    }
}
