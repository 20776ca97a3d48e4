use thiserror::Error;

use crate::field::Field;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),
    #[error("invalid record id: {0}")]
    InvalidRecordId(String),
    #[error("field {field} expects a {expected} value")]
    FieldKind { field: Field, expected: &'static str },
}

pub type Result<T> = std::result::Result<T, ModelError>;
