//! The registration schema.

use crate::error::ValidationError;
use crate::form::{FOOD_OPTIONS, Field, FieldValue, FormValues, LANGUAGE_OPTIONS};
use crate::messages::MESSAGES;

use super::result::ValidationResult;
use super::rules::FieldRules;

/// Declarative rules for the four registration fields.
///
/// Validation is pure: no method touches any state, so a schema can be shared
/// behind an `Arc` by every pending validation task.
#[derive(Debug)]
pub struct Schema {
    username: FieldRules<str>,
    fav_language: FieldRules<str>,
    fav_food: FieldRules<str>,
    agreement: FieldRules<bool>,
}

impl Schema {
    /// Build the registration schema from the message table.
    pub fn registration() -> Self {
        Self {
            username: FieldRules::<str>::new(Field::Username)
                .trim()
                .required(MESSAGES.username_required)
                .min_length(3, MESSAGES.username_min)
                .max_length(20, MESSAGES.username_max),
            fav_language: FieldRules::<str>::new(Field::FavLanguage)
                .required(MESSAGES.fav_language_required)
                .one_of(LANGUAGE_OPTIONS, MESSAGES.fav_language_options),
            fav_food: FieldRules::<str>::new(Field::FavFood)
                .required(MESSAGES.fav_food_required)
                .one_of(FOOD_OPTIONS, MESSAGES.fav_food_options),
            agreement: FieldRules::<bool>::new(Field::Agreement)
                .when_missing(MESSAGES.agreement_required)
                .checked(MESSAGES.agreement_options),
        }
    }

    /// Validate a single field in isolation.
    ///
    /// A value of the wrong kind for the field is treated as absent.
    pub fn validate_field(&self, field: Field, value: &FieldValue) -> Result<(), ValidationError> {
        match field {
            Field::Username => self.username.check(value.as_text()),
            Field::FavLanguage => self.fav_language.check(value.as_text()),
            Field::FavFood => self.fav_food.check(value.as_text()),
            Field::Agreement => self.agreement.check(value.as_checked().as_ref()),
        }
    }

    /// Whether the whole record passes. Stops at the first failing field.
    pub fn validate_all(&self, values: &FormValues) -> bool {
        Field::ALL.iter().all(|&field| self.check_record(field, values).is_ok())
    }

    /// Validate every field and collect all failures.
    pub fn validate(&self, values: &FormValues) -> ValidationResult {
        Field::ALL
            .iter()
            .filter_map(|&field| self.check_record(field, values).err())
            .collect::<Vec<_>>()
            .into()
    }

    fn check_record(&self, field: Field, values: &FormValues) -> Result<(), ValidationError> {
        match field {
            Field::Username => self.username.check(Some(values.username.as_str())),
            Field::FavLanguage => self.fav_language.check(Some(values.fav_language.as_str())),
            Field::FavFood => self.fav_food.check(Some(values.fav_food.as_str())),
            Field::Agreement => self.agreement.check(Some(&values.agreement)),
        }
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::registration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> FormValues {
        FormValues {
            username: "abc".to_string(),
            fav_language: "rust".to_string(),
            fav_food: "pizza".to_string(),
            agreement: true,
        }
    }

    #[test]
    fn test_initial_record_is_invalid() {
        let schema = Schema::registration();
        assert!(!schema.validate_all(&FormValues::default()));
        assert_eq!(schema.validate(&FormValues::default()).errors().len(), 4);
    }

    #[test]
    fn test_valid_record() {
        let schema = Schema::registration();
        assert!(schema.validate_all(&valid()));
        assert!(schema.validate(&valid()).is_valid());
    }

    #[test]
    fn test_wrong_kind_is_treated_as_missing() {
        let schema = Schema::registration();
        let err = schema
            .validate_field(Field::Username, &FieldValue::Checked(true))
            .unwrap_err();
        assert_eq!(err.message, MESSAGES.username_required);

        let err = schema
            .validate_field(Field::Agreement, &FieldValue::from("true"))
            .unwrap_err();
        assert_eq!(err.message, MESSAGES.agreement_required);
    }

    #[test]
    fn test_validate_collects_in_field_order() {
        let schema = Schema::registration();
        let values = FormValues {
            fav_food: "tacos".to_string(),
            agreement: false,
            ..valid()
        };
        let result = schema.validate(&values);
        let fields: Vec<Field> = result.errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::FavFood, Field::Agreement]);
        assert_eq!(result.message_for(Field::FavFood), Some(MESSAGES.fav_food_options));
    }
}
