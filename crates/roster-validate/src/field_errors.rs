//! Blur-driven field error set.
//!
//! Entries are only recomputed when a field loses focus, so a field that
//! was never blurred keeps an empty entry even if its value is invalid.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use roster_model::{Draft, Field};

use crate::issue::FieldIssue;
use crate::rules::{is_non_empty_string, is_valid_date, is_valid_email, is_valid_whole_number};

/// Validate one raw field value the way a blur does.
///
/// Returns `None` when the value is acceptable and for fields without rules.
pub fn check_field(field: Field, value: &str) -> Option<FieldIssue> {
    if !field.is_tracked() {
        return None;
    }
    if value.trim().is_empty() {
        return Some(FieldIssue::Required { field });
    }
    match field {
        Field::Email if !is_valid_email(value) => Some(FieldIssue::InvalidEmail),
        Field::Age if !is_valid_whole_number(value) => Some(FieldIssue::InvalidWholeNumber),
        Field::Date if !is_valid_date(value) => Some(FieldIssue::InvalidDate),
        Field::Name | Field::Gender | Field::Status if !is_non_empty_string(value) => {
            Some(FieldIssue::Blank { field })
        }
        _ => None,
    }
}

/// Field name to error message; an empty message means valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors {
    entries: BTreeMap<Field, String>,
}

impl Default for FieldErrors {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldErrors {
    /// Error set with an empty entry for every tracked field.
    pub fn new() -> Self {
        Self {
            entries: Field::TRACKED
                .into_iter()
                .map(|field| (field, String::new()))
                .collect(),
        }
    }

    /// Recompute the entry for `field` from the draft's current value.
    ///
    /// The flag field has no entry and is left alone.
    pub fn blur(&mut self, field: Field, draft: &Draft) {
        let Some(value) = draft.text(field) else {
            return;
        };
        let message = check_field(field, value)
            .map(|issue| issue.message())
            .unwrap_or_default();
        self.entries.insert(field, message);
    }

    /// Message for a field, `None` when the field is currently valid.
    pub fn message(&self, field: Field) -> Option<&str> {
        self.entries
            .get(&field)
            .map(String::as_str)
            .filter(|message| !message.is_empty())
    }

    /// True when every entry is empty.
    pub fn is_clear(&self) -> bool {
        self.entries.values().all(String::is_empty)
    }

    /// Fields currently holding a message.
    pub fn fields_with_errors(&self) -> Vec<Field> {
        self.entries
            .iter()
            .filter(|(_, message)| !message.is_empty())
            .map(|(field, _)| *field)
            .collect()
    }

    /// Clear every entry back to empty.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.entries
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}
