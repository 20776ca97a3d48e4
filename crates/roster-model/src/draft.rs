//! Form draft: the editable copy of a record's fields.

use serde::{Deserialize, Serialize};

use crate::enums::Gender;
use crate::error::{ModelError, Result};
use crate::field::{Field, FieldValue};
use crate::record::Record;

/// Field values being edited in the form.
///
/// Text fields hold raw input; nothing is validated on assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub age: String,
    pub gender: String,
    pub status: String,
    pub date: String,
    pub is_checked: bool,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            age: String::new(),
            gender: Gender::Male.as_str().to_string(),
            status: String::new(),
            date: String::new(),
            is_checked: false,
        }
    }
}

impl Draft {
    /// Draft pre-filled from an existing record.
    pub fn from_record(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            age: record.age.clone(),
            gender: record.gender.clone(),
            status: record.status.clone(),
            date: record.date.clone(),
            is_checked: record.is_checked,
        }
    }

    /// Raw text of a field (`None` for the flag field).
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => Some(&self.name),
            Field::Email => Some(&self.email),
            Field::Age => Some(&self.age),
            Field::Gender => Some(&self.gender),
            Field::Status => Some(&self.status),
            Field::Date => Some(&self.date),
            Field::IsChecked => None,
        }
    }

    /// Assign a value to a field.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::FieldKind`] when a flag is given to a text field
    /// or text to the flag field.
    pub fn set(&mut self, field: Field, value: FieldValue) -> Result<()> {
        match value {
            FieldValue::Flag(checked) if field.is_flag() => {
                self.is_checked = checked;
                Ok(())
            }
            FieldValue::Flag(_) => Err(ModelError::FieldKind {
                field,
                expected: "text",
            }),
            FieldValue::Text(text) => match self.text_slot(field) {
                Some(slot) => {
                    *slot = text;
                    Ok(())
                }
                None => Err(ModelError::FieldKind {
                    field,
                    expected: "boolean",
                }),
            },
        }
    }

    fn text_slot(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::Email => Some(&mut self.email),
            Field::Age => Some(&mut self.age),
            Field::Gender => Some(&mut self.gender),
            Field::Status => Some(&mut self.status),
            Field::Date => Some(&mut self.date),
            Field::IsChecked => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_draft_preselects_male() {
        let draft = Draft::default();
        assert_eq!(draft.gender, "male");
        assert!(draft.name.is_empty());
        assert!(!draft.is_checked);
    }

    #[test]
    fn set_rejects_mismatched_kinds() {
        let mut draft = Draft::default();
        assert!(draft.set(Field::IsChecked, FieldValue::text("yes")).is_err());
        assert!(draft.set(Field::Name, FieldValue::Flag(true)).is_err());
        draft.set(Field::Name, "Ann".into()).unwrap();
        draft.set(Field::IsChecked, true.into()).unwrap();
        assert_eq!(draft.name, "Ann");
        assert!(draft.is_checked);
    }
}
