//! Pagination types for filtered collection reads.

use serde::{Deserialize, Serialize};

/// A requested window over a filtered result set.
///
/// `page` is 1-indexed. A `limit` of zero is not "an empty page": it asks for
/// the whole result set, unpaginated, regardless of `page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    /// The page number (1-indexed).
    pub page: u32,
    /// The number of items per page; zero means unbounded.
    pub limit: u32,
}

impl PageWindow {
    /// The default page size.
    pub const DEFAULT_LIMIT: u32 = 10;

    /// Creates a new window. Pages below 1 are raised to 1.
    #[must_use]
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit,
        }
    }

    /// A window returning every matching row.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self { page: 1, limit: 0 }
    }

    /// Returns true when no LIMIT/OFFSET should be applied.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.limit == 0
    }

    /// Returns the row offset, `(page - 1) * limit`, clamped to zero.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }

    /// Returns the total page count for `total` matching rows.
    ///
    /// An unbounded window or an empty result set is still one page.
    #[must_use]
    pub fn total_pages(&self, total: u64) -> u64 {
        if self.limit == 0 || total == 0 {
            return 1;
        }
        total.div_ceil(u64::from(self.limit))
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(1, Self::DEFAULT_LIMIT)
    }
}

/// A page of results together with the totals of the whole filtered set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Current page number.
    pub page: u32,
    /// Items per page (zero when unpaginated).
    pub limit: u32,
    /// Total number of matching rows.
    pub total: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// The rows on this page.
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Creates a page from the rows of `window` and the total row count.
    #[must_use]
    pub fn new(items: Vec<T>, window: PageWindow, total: u64) -> Self {
        Self {
            page: window.page,
            limit: window.limit,
            total,
            total_pages: window.total_pages(total),
            items,
        }
    }

    /// Maps the page content to a different type.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            page: self.page,
            limit: self.limit,
            total: self.total,
            total_pages: self.total_pages,
            items: self.items.into_iter().map(f).collect(),
        }
    }

    /// Returns true if the page is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
