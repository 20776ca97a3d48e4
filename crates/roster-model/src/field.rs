//! Form field identifiers.
//!
//! Every editable attribute of a [`Record`](crate::Record) has a [`Field`].
//! The wire name (`as_str`) is the name used in error messages, scripts,
//! and serialized records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// An editable record attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Age,
    Gender,
    Status,
    Date,
    IsChecked,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 7] = [
        Self::Name,
        Self::Email,
        Self::Age,
        Self::Gender,
        Self::Date,
        Self::Status,
        Self::IsChecked,
    ];

    /// Fields that carry an entry in the field error set.
    pub const TRACKED: [Field; 6] = [
        Self::Name,
        Self::Email,
        Self::Age,
        Self::Date,
        Self::Gender,
        Self::Status,
    ];

    /// Wire name, e.g. `"email"` or `"isChecked"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Status => "status",
            Self::Date => "date",
            Self::IsChecked => "isChecked",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Age => "Age",
            Self::Gender => "Gender",
            Self::Status => "Status",
            Self::Date => "Date",
            Self::IsChecked => "Checked",
        }
    }

    /// Returns true for the boolean flag field.
    pub fn is_flag(&self) -> bool {
        matches!(self, Self::IsChecked)
    }

    /// Returns true if the field has an entry in the error set.
    pub fn is_tracked(&self) -> bool {
        !self.is_flag()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = ModelError;

    /// Parse a field name (case-insensitive, accepts `is_checked` and `checked`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "");
        match normalized.as_str() {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "age" => Ok(Self::Age),
            "gender" => Ok(Self::Gender),
            "status" => Ok(Self::Status),
            "date" => Ok(Self::Date),
            "ischecked" | "checked" => Ok(Self::IsChecked),
            _ => Err(ModelError::UnknownField(s.to_string())),
        }
    }
}

/// A value entered into a form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
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
        Self::Flag(value)
    }
}
