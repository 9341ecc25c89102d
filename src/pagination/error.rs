//! Errors raised when a page window is requested for impossible input.

use thiserror::Error;

/// Rejected page window input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// The listing has no pages, so no window can contain the current page.
    #[error("max_page must be at least 1")]
    NoPages,

    /// The requested page lies outside the listing.
    #[error("page {page} is outside 1..={max_page}")]
    PageOutOfRange {
        /// Page that was asked for.
        page: u32,
        /// Last page of the listing.
        max_page: u32,
    },
}
