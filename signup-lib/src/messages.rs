//! User-facing message table

/// Fixed messages shown to the user, keyed by field and violation.
///
/// There is exactly one table, [`MESSAGES`]; it is never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub username_required: &'static str,
    pub username_min: &'static str,
    pub username_max: &'static str,
    pub fav_language_required: &'static str,
    pub fav_language_options: &'static str,
    pub fav_food_required: &'static str,
    pub fav_food_options: &'static str,
    pub agreement_required: &'static str,
    pub agreement_options: &'static str,
    /// Shown for any failed registration attempt, whatever the cause.
    pub registration_failed: &'static str,
}

/// The message table.
pub static MESSAGES: Messages = Messages {
    username_required: "username is required",
    username_min: "username must be at least 3 characters",
    username_max: "username cannot exceed 20 characters",
    fav_language_required: "favLanguage is required",
    fav_language_options: "favLanguage must be either javascript or rust",
    fav_food_required: "favFood is required",
    fav_food_options: "favFood must be either broccoli, spaghetti or pizza",
    agreement_required: "agreement is required",
    agreement_options: "agreement must be accepted",
    registration_failed: "registration failed — username may be taken",
};
