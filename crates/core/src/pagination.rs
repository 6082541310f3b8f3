//! Fixed-size pagination over filtered product lists.
//!
//! Pages are 1-based, nine items each (a 3x3 grid), and derived entirely
//! from the length of the list being paginated - nothing is persisted.
//! Requested page numbers are clamped rather than rejected.

/// Items per page (3x3 grid).
pub const PAGE_SIZE: usize = 9;

/// A resolved pagination cursor over a list of known length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current: u32,
    total_pages: u32,
    total_items: usize,
}

impl Pagination {
    /// Resolve a requested page against a list length.
    ///
    /// The current page is clamped to `[1, max(1, total_pages)]`, so an
    /// out-of-range request (including page 0) lands on a valid page and an
    /// empty list resolves to page 1 of 0.
    #[must_use]
    pub fn new(total_items: usize, requested_page: u32) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let total_pages = total_items.div_ceil(PAGE_SIZE) as u32;
        let current = requested_page.clamp(1, total_pages.max(1));
        Self {
            current,
            total_pages,
            total_items,
        }
    }

    /// The resolved (clamped) current page, 1-based.
    #[must_use]
    pub const fn current(&self) -> u32 {
        self.current
    }

    /// `ceil(total_items / PAGE_SIZE)`; zero for an empty list.
    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Total pages as displayed: never below 1, even when empty.
    #[must_use]
    pub const fn display_total(&self) -> u32 {
        if self.total_pages == 0 {
            1
        } else {
            self.total_pages
        }
    }

    /// Length of the underlying list.
    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.total_items
    }

    /// Whether a previous page exists. False exactly on page 1.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.current > 1
    }

    /// Whether a next page exists. False when the current page is the last
    /// one or the list is empty.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.total_pages != 0 && self.current < self.total_pages
    }

    /// The previous page number, if any.
    #[must_use]
    pub const fn prev(&self) -> Option<u32> {
        if self.has_prev() {
            Some(self.current - 1)
        } else {
            None
        }
    }

    /// The next page number, if any.
    #[must_use]
    pub const fn next(&self) -> Option<u32> {
        if self.has_next() {
            Some(self.current + 1)
        } else {
            None
        }
    }
}

/// The contiguous slice of `items` covered by the resolved page.
#[must_use]
pub fn page_slice<'a, T>(items: &'a [T], pagination: &Pagination) -> &'a [T] {
    let start = (pagination.current() as usize - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(items.len());
    if start >= items.len() {
        &[]
    } else {
        &items[start..end]
    }
}
