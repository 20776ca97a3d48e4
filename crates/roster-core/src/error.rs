//! Errors raised by the record store and seed loading.
//!
//! Seeding fails on bad outside data; creating or duplicating fails only
//! once the id space is used up.

use std::path::PathBuf;

use roster_model::RecordId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Two seed records share an id.
    #[error("duplicate record id {0} in seed data")]
    DuplicateId(RecordId),

    /// Every id up to `u64::MAX` has been handed out.
    #[error("record id space exhausted")]
    IdsExhausted,

    /// Seed file could not be read.
    #[error("failed to read seed file: {path}")]
    SeedIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Seed file is not a JSON array of records.
    #[error("failed to parse seed file: {path}")]
    SeedParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, CoreError>;
