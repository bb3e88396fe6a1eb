//! Field Record, Error Record and input events.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::FieldError;

/// Accepted `favLanguage` values.
pub const LANGUAGE_OPTIONS: &[&str] = &["javascript", "rust"];

/// Accepted `favFood` values.
pub const FOOD_OPTIONS: &[&str] = &["pizza", "spaghetti", "broccoli"];

/// One of the four registration fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Username,
    FavLanguage,
    FavFood,
    Agreement,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 4] = [
        Field::Username,
        Field::FavLanguage,
        Field::FavFood,
        Field::Agreement,
    ];

    /// The wire/input name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::FavLanguage => "favLanguage",
            Field::FavFood => "favFood",
            Field::Agreement => "agreement",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FieldError::unknown(s))
    }
}

/// A value coming from an input: text for text/radio/select, a checked
/// flag for checkboxes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl FieldValue {
    /// The text, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Checked(_) => None,
        }
    }

    /// The checked flag, if this is a checkbox value.
    pub fn as_checked(&self) -> Option<bool> {
        match self {
            Self::Checked(checked) => Some(*checked),
            Self::Text(_) => None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Checked(_) => "boolean",
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Checked(value)
    }
}

/// Kind of input control that produced a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Radio,
    Select,
    Checkbox,
}

/// A change event from one of the form's inputs.
///
/// Mirrors what a UI surface reports: the input's name, its kind, its
/// string value and its checked state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEvent {
    pub name: String,
    pub kind: InputKind,
    pub value: String,
    pub checked: bool,
}

impl InputEvent {
    /// A text input change.
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_kind(name, InputKind::Text, value)
    }

    /// A radio button selection.
    pub fn radio(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_kind(name, InputKind::Radio, value)
    }

    /// A select option change.
    pub fn select(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_kind(name, InputKind::Select, value)
    }

    /// A checkbox toggle. Checkboxes always report the value `"on"`.
    pub fn checkbox(name: impl Into<String>, checked: bool) -> Self {
        Self {
            name: name.into(),
            kind: InputKind::Checkbox,
            value: "on".to_string(),
            checked,
        }
    }

    fn with_kind(name: impl Into<String>, kind: InputKind, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            value: value.into(),
            checked: false,
        }
    }

    /// The value to store: the checked flag for checkboxes, the string
    /// value for everything else.
    pub fn value_to_use(&self) -> FieldValue {
        match self.kind {
            InputKind::Checkbox => FieldValue::Checked(self.checked),
            _ => FieldValue::Text(self.value.clone()),
        }
    }
}

/// Current values of all form inputs. Serializes as the request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub username: String,
    pub fav_language: String,
    pub fav_food: String,
    pub agreement: bool,
}

impl FormValues {
    /// The value held in `field`'s slot.
    pub fn value(&self, field: Field) -> FieldValue {
        match field {
            Field::Username => FieldValue::Text(self.username.clone()),
            Field::FavLanguage => FieldValue::Text(self.fav_language.clone()),
            Field::FavFood => FieldValue::Text(self.fav_food.clone()),
            Field::Agreement => FieldValue::Checked(self.agreement),
        }
    }

    /// Write `value` into `field`'s slot.
    ///
    /// The agreement slot only takes checkbox values and the other three
    /// only take text.
    pub fn set(&mut self, field: Field, value: FieldValue) -> Result<(), FieldError> {
        let actual = value.kind();
        match (field, value) {
            (Field::Username, FieldValue::Text(text)) => self.username = text,
            (Field::FavLanguage, FieldValue::Text(text)) => self.fav_language = text,
            (Field::FavFood, FieldValue::Text(text)) => self.fav_food = text,
            (Field::Agreement, FieldValue::Checked(checked)) => self.agreement = checked,
            (Field::Agreement, _) => {
                return Err(FieldError::type_mismatch(field.as_str(), "boolean", actual));
            }
            (_, _) => return Err(FieldError::type_mismatch(field.as_str(), "text", actual)),
        }
        Ok(())
    }
}

/// Current per-field validation message. An empty string means no error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormErrors {
    pub username: String,
    pub fav_language: String,
    pub fav_food: String,
    pub agreement: String,
}

impl FormErrors {
    /// The message for `field`, empty when valid.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::FavLanguage => &self.fav_language,
            Field::FavFood => &self.fav_food,
            Field::Agreement => &self.agreement,
        }
    }

    /// Replace the message for `field`.
    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        let slot = match field {
            Field::Username => &mut self.username,
            Field::FavLanguage => &mut self.fav_language,
            Field::FavFood => &mut self.fav_food,
            Field::Agreement => &mut self.agreement,
        };
        *slot = message.into();
    }

    /// True when no field carries a message.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|&field| self.get(field).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>(), Ok(field));
        }
        assert_eq!(
            "email".parse::<Field>(),
            Err(FieldError::unknown("email"))
        );
    }

    #[test]
    fn test_checkbox_uses_checked_flag() {
        let event = InputEvent::checkbox("agreement", true);
        assert_eq!(event.value_to_use(), FieldValue::Checked(true));

        let event = InputEvent::select("favFood", "pizza");
        assert_eq!(event.value_to_use(), FieldValue::Text("pizza".to_string()));
    }

    #[test]
    fn test_set_rejects_wrong_kind() {
        let mut values = FormValues::default();
        assert!(values.set(Field::Agreement, "yes".into()).is_err());
        assert!(values.set(Field::Username, true.into()).is_err());
        assert_eq!(values, FormValues::default());

        values.set(Field::Agreement, true.into()).unwrap();
        assert!(values.agreement);
    }

    #[test]
    fn test_body_uses_wire_names() {
        let values = FormValues {
            username: "abc".to_string(),
            fav_language: "rust".to_string(),
            fav_food: "pizza".to_string(),
            agreement: true,
        };
        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "username": "abc",
                "favLanguage": "rust",
                "favFood": "pizza",
                "agreement": true,
            })
        );
    }
}
