//! Single-column sort configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;
use crate::field::Field;

/// Column a table can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Id,
    Name,
    Email,
    Age,
    Gender,
    Status,
    Date,
    IsChecked,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Email => "email",
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Status => "status",
            Self::Date => "date",
            Self::IsChecked => "isChecked",
        }
    }
}

impl From<Field> for SortKey {
    fn from(field: Field) -> Self {
        match field {
            Field::Name => Self::Name,
            Field::Email => Self::Email,
            Field::Age => Self::Age,
            Field::Gender => Self::Gender,
            Field::Status => Self::Status,
            Field::Date => Self::Date,
            Field::IsChecked => Self::IsChecked,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ModelError;

    /// Parse a column name; column titles (`"Age"`) and field names both work.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("id") {
            return Ok(Self::Id);
        }
        s.parse::<Field>()
            .map(Self::from)
            .map_err(|_| ModelError::UnknownSortKey(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    /// Arrow shown next to a sorted column header.
    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

/// Active sort: exactly one key and a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    /// Tables open sorted by name, descending.
    fn default() -> Self {
        Self {
            key: SortKey::Name,
            direction: SortDirection::Descending,
        }
    }
}

impl SortConfig {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    pub fn ascending(key: SortKey) -> Self {
        Self::new(key, SortDirection::Ascending)
    }

    pub fn descending(key: SortKey) -> Self {
        Self::new(key, SortDirection::Descending)
    }

    /// Configuration after a header click on `key`.
    ///
    /// Clicking the active ascending column flips it to descending; any other
    /// click sorts `key` ascending.
    #[must_use]
    pub fn toggled(self, key: SortKey) -> Self {
        if self.key == key && self.direction == SortDirection::Ascending {
            Self::descending(key)
        } else {
            Self::ascending(key)
        }
    }
}
