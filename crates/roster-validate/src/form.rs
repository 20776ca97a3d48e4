//! Whole-form validity.
//!
//! This check re-runs the rules over every draft value and does not look at
//! the blur-driven [`FieldErrors`](crate::FieldErrors). The two can disagree:
//! a field blurred while empty and filled in afterwards still holds its
//! error, while a never-blurred invalid field has none. Submission needs both.

use roster_model::{Draft, Field};

use crate::rules::{is_non_empty_string, is_valid_date, is_valid_email, is_valid_whole_number};

/// Fields whose current draft value fails the form-level rules.
pub fn failing_fields(draft: &Draft) -> Vec<Field> {
    let checks = [
        (Field::Name, is_non_empty_string(&draft.name)),
        (
            Field::Email,
            is_non_empty_string(&draft.email) && is_valid_email(&draft.email),
        ),
        (Field::Age, is_valid_whole_number(&draft.age)),
        (Field::Gender, is_non_empty_string(&draft.gender)),
        (Field::Status, is_non_empty_string(&draft.status)),
        (
            Field::Date,
            is_non_empty_string(&draft.date) && is_valid_date(&draft.date),
        ),
    ];
    checks
        .into_iter()
        .filter(|(_, passed)| !passed)
        .map(|(field, _)| field)
        .collect()
}

/// True when every required field passes its rule.
pub fn is_form_valid(draft: &Draft) -> bool {
    failing_fields(draft).is_empty()
}
