//! Table view pipeline: sort, filter, paginate, aggregate.
//!
//! Everything here is a pure function of the records and the view inputs.
//! The order is fixed; the summary only covers the rows of the current page.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use roster_model::{Record, SortConfig, SortDirection, SortKey};

use crate::pager::{page_bounds, total_pages};

/// Search, page and page size as held by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub search_term: String,
    pub current_page: usize,
    pub items_per_page: usize,
}

impl ViewState {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            search_term: String::new(),
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(crate::options::DEFAULT_ITEMS_PER_PAGE)
    }
}

/// Aggregates over the visible rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Sum of the numeric ages on the page, saturating at `u64::MAX`.
    pub age: u64,
    /// Rows whose age is not a number and were left out of the sum.
    pub unparsed_ages: usize,
}

/// Everything a renderer needs to draw the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableView {
    pub rows: Vec<Record>,
    pub page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub total_count: usize,
    pub sort: SortConfig,
    pub search_term: String,
    pub summary: Summary,
}

impl TableView {
    /// Run the full pipeline over `records`.
    pub fn build(records: &[Record], sort: SortConfig, view: &ViewState) -> Self {
        let sorted = sort_records(records, sort);
        let filtered = filter_records(sorted, &view.search_term);
        let filtered_count = filtered.len();
        let rows: Vec<Record> = paginate(&filtered, view.current_page, view.items_per_page)
            .iter()
            .map(|&record| record.clone())
            .collect();
        let summary = summarize(rows.iter());
        Self {
            rows,
            page: view.current_page,
            total_pages: total_pages(filtered_count, view.items_per_page),
            filtered_count,
            total_count: records.len(),
            sort,
            search_term: view.search_term.clone(),
            summary,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Stable sort by the configured key.
///
/// Descending reverses the comparison, so equal keys keep their input order
/// in both directions.
pub fn sort_records(records: &[Record], sort: SortConfig) -> Vec<&Record> {
    let mut sorted: Vec<&Record> = records.iter().collect();
    sorted.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, sort.key);
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

/// Keep records where any stringified value contains `term`, ignoring case.
pub fn filter_records<'a>(records: Vec<&'a Record>, term: &str) -> Vec<&'a Record> {
    if term.is_empty() {
        return records;
    }
    let needle = term.to_lowercase();
    records
        .into_iter()
        .filter(|record| {
            record
                .stringified_values()
                .iter()
                .any(|value| value.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Rows of `page` (1-based); out-of-range pages are empty.
pub fn paginate<'r, 'a>(
    records: &'r [&'a Record],
    page: usize,
    items_per_page: usize,
) -> &'r [&'a Record] {
    let (start, end) = page_bounds(page, items_per_page, records.len());
    &records[start..end]
}

/// Sum numeric ages; non-numeric ages are counted, not added.
///
/// A digit string too long for `u64` counts as `u64::MAX`.
pub fn summarize<'a>(rows: impl IntoIterator<Item = &'a Record>) -> Summary {
    rows.into_iter().fold(Summary::default(), |mut summary, row| {
        let age = row.age.trim();
        if age.is_empty() {
            return summary;
        }
        if age.bytes().all(|byte| byte.is_ascii_digit()) {
            let value = age.parse::<u64>().unwrap_or(u64::MAX);
            summary.age = summary.age.saturating_add(value);
        } else {
            summary.unparsed_ages += 1;
        }
        summary
    })
}

fn compare_by_key(a: &Record, b: &Record, key: SortKey) -> Ordering {
    match key {
        SortKey::Id => a.id.cmp(&b.id),
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Email => a.email.cmp(&b.email),
        SortKey::Age => compare_numeric_text(&a.age, &b.age),
        SortKey::Gender => a.gender.cmp(&b.gender),
        SortKey::Status => a.status.cmp(&b.status),
        SortKey::Date => a.date.cmp(&b.date),
        SortKey::IsChecked => a.is_checked.cmp(&b.is_checked),
    }
}

/// Compare digit strings by numeric value without parsing them; anything
/// else falls back to plain text order.
fn compare_numeric_text(a: &str, b: &str) -> Ordering {
    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|c| c.is_ascii_digit());
    if !(is_digits(a) && is_digits(b)) {
        return a.cmp(b);
    }
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
