//! The persisted record entity and partial updates to it.

use serde::{Deserialize, Deserializer, Serialize};

use crate::draft::Draft;
use crate::field::Field;
use crate::ids::RecordId;

/// A row in the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    /// Whole number kept as entered (e.g. `"007"`).
    #[serde(deserialize_with = "number_or_string")]
    pub age: String,
    pub gender: String,
    pub status: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    #[serde(default)]
    pub is_checked: bool,
}

impl Record {
    /// Build a record from a submitted draft.
    pub fn from_draft(id: RecordId, draft: &Draft) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            email: draft.email.clone(),
            age: draft.age.clone(),
            gender: draft.gender.clone(),
            status: draft.status.clone(),
            date: draft.date.clone(),
            is_checked: draft.is_checked,
        }
    }

    /// Copy of this record under a different id.
    pub fn with_id(&self, id: RecordId) -> Self {
        Self { id, ..self.clone() }
    }

    /// Text value of a field (`None` for the flag field).
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

    /// Every value of the record rendered as text, id included.
    ///
    /// The flag renders as `true`/`false`.
    pub fn stringified_values(&self) -> [String; 8] {
        [
            self.id.to_string(),
            self.name.clone(),
            self.email.clone(),
            self.age.clone(),
            self.gender.clone(),
            self.is_checked.to_string(),
            self.date.clone(),
            self.status.clone(),
        ]
    }

    /// Shallow-merge the fields present in `patch`; `id` never changes.
    pub fn apply(&mut self, patch: RecordPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        if let Some(gender) = patch.gender {
            self.gender = gender;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(is_checked) = patch.is_checked {
            self.is_checked = is_checked;
        }
    }
}

/// A partial record: absent fields are left untouched by [`Record::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub status: Option<String>,
    pub date: Option<String>,
    pub is_checked: Option<bool>,
}

impl RecordPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<Draft> for RecordPatch {
    fn from(draft: Draft) -> Self {
        Self {
            name: Some(draft.name),
            email: Some(draft.email),
            age: Some(draft.age),
            gender: Some(draft.gender),
            status: Some(draft.status),
            date: Some(draft.date),
            is_checked: Some(draft.is_checked),
        }
    }
}

/// Accept `25` as well as `"25"` for the age column.
fn number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(value) => value.to_string(),
        Raw::Text(value) => value,
    })
}
