//! Configuration options for a roster session.

use serde::{Deserialize, Serialize};

use roster_model::SortConfig;

/// Rows per table page unless configured otherwise.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;

/// Options controlling how a session presents its records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionOptions {
    /// Rows per table page (at least 1).
    pub items_per_page: usize,
    /// Sort applied before the user picks a column.
    pub initial_sort: SortConfig,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            initial_sort: SortConfig::default(),
        }
    }
}

impl SessionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size; zero is raised to one.
    #[must_use]
    pub fn with_items_per_page(mut self, items_per_page: usize) -> Self {
        self.items_per_page = items_per_page.max(1);
        self
    }

    #[must_use]
    pub fn with_initial_sort(mut self, sort: SortConfig) -> Self {
        self.initial_sort = sort;
        self
    }
}
