//! Value-level validators.
//!
//! Each check is a pure predicate over raw field text. The grammars are
//! intentionally lenient: the email check only requires `x@y.z` with no
//! whitespace or extra `@`, and the date check is syntactic (`2022-02-30`
//! passes).

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

/// `YYYY-MM-DD` shape with ASCII digits only.
static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Invalid date regex"));

/// True if the value has at least one non-whitespace character.
pub fn is_non_empty_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// True if the value looks like `local@domain.tld`.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// True if the value is shaped like `dddd-dd-dd`.
pub fn is_valid_date(value: &str) -> bool {
    DATE_REGEX.is_match(value)
}

/// True if the value is one or more ASCII digits.
pub fn is_valid_whole_number(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}
