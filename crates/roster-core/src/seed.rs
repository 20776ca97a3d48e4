//! Startup data for a session.

use std::fs;
use std::path::Path;

use tracing::info;

use roster_model::{Record, RecordId};

use crate::error::{CoreError, Result};

/// The two records every fresh session starts with.
pub fn seed_records() -> Vec<Record> {
    vec![
        Record {
            id: RecordId::new(1),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            age: "25".to_string(),
            gender: "male".to_string(),
            status: "active".to_string(),
            date: "2022-01-01".to_string(),
            is_checked: true,
        },
        Record {
            id: RecordId::new(2),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            age: "30".to_string(),
            gender: "female".to_string(),
            status: "active".to_string(),
            date: "2022-02-01".to_string(),
            is_checked: false,
        },
    ]
}

/// Load records from a JSON array file, in file order.
///
/// `age` may be a number or a string. Id uniqueness is checked when the
/// records are handed to a [`RecordStore`](crate::RecordStore).
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a record array.
pub fn load_seed(path: &Path) -> Result<Vec<Record>> {
    let contents = fs::read_to_string(path).map_err(|source| CoreError::SeedIo {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<Record> =
        serde_json::from_str(&contents).map_err(|source| CoreError::SeedParse {
            path: path.to_path_buf(),
            source,
        })?;
    info!(path = %path.display(), records = records.len(), "seed loaded");
    Ok(records)
}
