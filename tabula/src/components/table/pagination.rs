//! Page-window bookkeeping for the table footer.
//!
//! Pagination here is display-only. The caller owns the current page and the
//! data: the table shows every record it was given, and a page change is
//! only reported through the `on_change` callback. Callers paging in memory
//! can use [`Pagination::page_range`] to slice before handing records over.

use std::fmt;
use std::ops::Range;

use crate::error::PaginationError;

/// Page-change callback: `(page, page_size)`.
pub type PageChangeHandler = Box<dyn FnMut(usize, usize)>;

/// Rows covered by the current page, 1-based and inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

impl fmt::Display for PageWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Showing {} to {} of {} entries",
            self.start, self.end, self.total
        )
    }
}

/// Externally owned pagination descriptor.
pub struct Pagination {
    current: usize,
    page_size: usize,
    total: usize,
    on_change: Option<PageChangeHandler>,
}

impl Pagination {
    /// Create a descriptor. `current` is clamped into the valid page range.
    pub fn new(current: usize, page_size: usize, total: usize) -> Result<Self, PaginationError> {
        if page_size == 0 {
            return Err(PaginationError::ZeroPageSize);
        }
        let mut pagination = Self {
            current,
            page_size,
            total,
            on_change: None,
        };
        pagination.current = current.clamp(1, pagination.last_page());
        Ok(pagination)
    }

    /// Register the page-change callback.
    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: FnMut(usize, usize) + 'static,
    {
        self.on_change = Some(Box::new(handler));
        self
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of pages; zero when there are no entries.
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    fn last_page(&self) -> usize {
        self.page_count().max(1)
    }

    /// Feed back a new current page from the owner. Clamped like `new`.
    pub fn set_current(&mut self, page: usize) {
        self.current = page.clamp(1, self.last_page());
    }

    /// Feed back a new total. The current page is re-clamped.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.current = self.current.clamp(1, self.last_page());
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.page_count()
    }

    /// Rows covered by the current page.
    pub fn window(&self) -> PageWindow {
        if self.total == 0 {
            return PageWindow {
                start: 0,
                end: 0,
                total: 0,
            };
        }
        let range = self.page_range();
        PageWindow {
            start: range.start + 1,
            end: range.end,
            total: self.total,
        }
    }

    /// Zero-based index range of the current page within the full set.
    pub fn page_range(&self) -> Range<usize> {
        let start = (self.current - 1)
            .saturating_mul(self.page_size)
            .min(self.total);
        let end = start.saturating_add(self.page_size).min(self.total);
        start..end
    }

    /// Ask the owner to move to `target`.
    ///
    /// Out-of-range pages are rejected rather than clamped. The current page
    /// is not changed here; the owner feeds it back.
    pub fn request_page(&mut self, target: usize) -> Result<(), PaginationError> {
        let page_count = self.page_count();
        if target < 1 || target > page_count {
            log::debug!("Rejected page request {} (page count {})", target, page_count);
            return Err(PaginationError::OutOfRange {
                requested: target,
                page_count,
            });
        }
        log::debug!("Page change requested: {} (size {})", target, self.page_size);
        if let Some(handler) = self.on_change.as_mut() {
            handler(target, self.page_size);
        }
        Ok(())
    }

    /// Request the page before the current one.
    pub fn previous_page(&mut self) -> Result<(), PaginationError> {
        self.request_page(self.current.saturating_sub(1))
    }

    /// Request the page after the current one.
    pub fn next_page(&mut self) -> Result<(), PaginationError> {
        self.request_page(self.current + 1)
    }
}

impl fmt::Debug for Pagination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pagination")
            .field("current", &self.current)
            .field("page_size", &self.page_size)
            .field("total", &self.total)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
