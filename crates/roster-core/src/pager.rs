//! Page arithmetic and navigation bounds.
//!
//! Pages are 1-based. A result with no rows has zero pages, and no page
//! target is valid against it.

use serde::{Deserialize, Serialize};

/// Number of pages needed for `count` rows.
pub fn total_pages(count: usize, items_per_page: usize) -> usize {
    count.div_ceil(items_per_page.max(1))
}

/// Half-open row range `[start, end)` for `page`, clamped to `count`.
pub fn page_bounds(page: usize, items_per_page: usize, count: usize) -> (usize, usize) {
    let start = page
        .saturating_sub(1)
        .saturating_mul(items_per_page)
        .min(count);
    let end = start.saturating_add(items_per_page).min(count);
    (start, end)
}

/// Pull `page` back into `1..=max(total_pages, 1)`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// A pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageNav {
    First,
    Previous,
    Next,
    Last,
    To(usize),
}

impl PageNav {
    /// Page this control points at, before bounds checking.
    pub fn target(self, current: usize, total_pages: usize) -> usize {
        match self {
            Self::First => 1,
            Self::Previous => current.saturating_sub(1),
            Self::Next => current.saturating_add(1),
            Self::Last => total_pages,
            Self::To(page) => page,
        }
    }

    /// Target page if it lies within `1..=total_pages`.
    pub fn resolve(self, current: usize, total_pages: usize) -> Option<usize> {
        let target = self.target(current, total_pages);
        (1..=total_pages).contains(&target).then_some(target)
    }
}
