pub mod draft;
pub mod enums;
pub mod error;
pub mod field;
pub mod ids;
pub mod record;
pub mod sort;

pub use draft::Draft;
pub use enums::{Gender, Status};
pub use error::{ModelError, Result};
pub use field::{Field, FieldValue};
pub use ids::RecordId;
pub use record::{Record, RecordPatch};
pub use sort::{SortConfig, SortDirection, SortKey};
