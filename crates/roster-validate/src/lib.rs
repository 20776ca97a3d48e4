//! Validation for roster form drafts.
//!
//! Three layers:
//! - [`rules`]: pure predicates over raw text.
//! - [`FieldErrors`]: per-field messages recomputed on blur.
//! - [`is_form_valid`]: independent whole-draft check.

pub mod field_errors;
pub mod form;
pub mod issue;
pub mod rules;

pub use field_errors::{FieldErrors, check_field};
pub use form::{failing_fields, is_form_valid};
pub use issue::FieldIssue;
pub use rules::{is_non_empty_string, is_valid_date, is_valid_email, is_valid_whole_number};
