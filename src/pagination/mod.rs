//! Pagination state, page windows, and footer view models.
//!
//! [`PageInfo`] captures where a listing response sits within the full result
//! set. [`PageWindow`] picks the page links to render around the current page
//! and [`PaginationFooter`] combines both into what a listing view displays.

pub mod error;
pub mod footer;
pub mod window;

pub use error::PaginationError;
pub use footer::{PageControl, PaginationFooter, ResultRange};
pub use window::{MAX_WINDOW_LEN, PageWindow, page_window};

/// Number of pages needed to show `total_items` at `page_size` per page.
///
/// Returns 0 when there are no items or the page size is zero. Counts that do
/// not fit in `u32` saturate.
#[must_use]
pub fn page_count(total_items: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total_items.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Current page state for paginated results.
///
/// # Example
///
/// ```
/// use tutorlink::pagination::PageInfo;
///
/// let info = PageInfo::new(2, 10, 45);
/// assert_eq!(info.total_pages(), 5);
/// assert!(info.has_prev());
/// assert!(info.has_next());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page number (1-based).
    current_page: u32,
    /// Items per page.
    per_page: u32,
    /// Total number of items across all pages.
    total_items: u64,
}

impl PageInfo {
    /// Creates a new page info instance.
    #[must_use]
    pub const fn new(current_page: u32, per_page: u32, total_items: u64) -> Self {
        Self {
            current_page,
            per_page,
            total_items,
        }
    }

    /// Returns the current page number (1-based).
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Returns the number of items per page.
    #[must_use]
    pub const fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Returns the total number of items across all pages.
    #[must_use]
    pub const fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Returns the number of pages in the result set.
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        page_count(self.total_items, self.per_page)
    }

    /// Returns true if more pages exist after the current one.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Returns true if pages exist before the current one.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Returns true if this is the first page.
    #[must_use]
    pub const fn is_first_page(&self) -> bool {
        self.current_page <= 1
    }

    /// Returns true if this is the last page.
    #[must_use]
    pub fn is_last_page(&self) -> bool {
        !self.has_next()
    }

    /// Returns the page window around the current page.
    #[must_use]
    pub fn window(&self) -> PageWindow {
        PageWindow::clamped(self.current_page, self.total_pages())
    }

    /// Builds the footer view model for this page.
    #[must_use]
    pub fn footer(&self) -> PaginationFooter {
        PaginationFooter::new(self)
    }
}

impl Default for PageInfo {
    fn default() -> Self {
        Self {
            current_page: 1,
            per_page: 10,
            total_items: 0,
        }
    }
}
