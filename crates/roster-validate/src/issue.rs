//! Field validation issue types.
//!
//! Each variant carries only what its message needs.

use serde::{Deserialize, Serialize};

use roster_model::Field;

/// Why a field value was rejected on blur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldIssue {
    /// Value is empty after trimming.
    Required { field: Field },
    /// Email does not match `x@y.z`.
    InvalidEmail,
    /// Age is not a whole number.
    InvalidWholeNumber,
    /// Date is not shaped like `YYYY-MM-DD`.
    InvalidDate,
    /// Text field holds only whitespace.
    Blank { field: Field },
}

impl FieldIssue {
    /// Field the issue is attached to.
    pub fn field(&self) -> Field {
        match self {
            Self::Required { field } | Self::Blank { field } => *field,
            Self::InvalidEmail => Field::Email,
            Self::InvalidWholeNumber => Field::Age,
            Self::InvalidDate => Field::Date,
        }
    }

    /// Message shown next to the field.
    pub fn message(&self) -> String {
        match self {
            Self::Required { field } => format!("{field} is required"),
            Self::InvalidEmail => "Please enter a valid email".to_string(),
            Self::InvalidWholeNumber => "Please enter a valid whole number for age".to_string(),
            Self::InvalidDate => "Please enter a valid date".to_string(),
            Self::Blank { field } => format!("Please enter a non-empty {field}"),
        }
    }
}
