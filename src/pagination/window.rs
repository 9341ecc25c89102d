//! Page window calculation for pagination controls.
//!
//! A page window is the short run of page numbers rendered as clickable links
//! beneath a result list. The window always contains the current page and
//! holds up to [`MAX_WINDOW_LEN`] entries. Growth happens in two phases of two
//! steps each: phase A prefers extending backward, phase B prefers extending
//! forward, and either phase falls back to the other direction when it hits
//! page 1 or the last page.

use std::collections::VecDeque;

use super::error::PaginationError;

/// Largest number of page links a window can hold.
pub const MAX_WINDOW_LEN: usize = 5;

/// Steps each growth phase attempts.
const STEPS_PER_PHASE: usize = 2;

/// Direction a growth step tries first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Preference {
    Backward,
    Forward,
}

/// Ordered, strictly increasing run of page numbers around the current page.
///
/// # Example
///
/// ```
/// use tutorlink::pagination::PageWindow;
///
/// let window = PageWindow::checked(10, 10).expect("page is in range");
/// assert_eq!(window.pages(), &[6, 7, 8, 9, 10]);
/// assert!(window.contains(10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageWindow {
    pages: Vec<u32>,
}

impl PageWindow {
    /// Computes the window for `page` out of `max_page` pages.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::NoPages`] when `max_page` is zero and
    /// [`PaginationError::PageOutOfRange`] when `page` lies outside
    /// `1..=max_page`.
    pub fn checked(page: u32, max_page: u32) -> Result<Self, PaginationError> {
        if max_page == 0 {
            return Err(PaginationError::NoPages);
        }
        if page == 0 || page > max_page {
            return Err(PaginationError::PageOutOfRange { page, max_page });
        }
        Ok(Self::grow(page, max_page))
    }

    /// Computes the window after clamping `page` into `1..=max_page`.
    ///
    /// An empty window is returned when there are no pages at all.
    #[must_use]
    pub fn clamped(page: u32, max_page: u32) -> Self {
        if max_page == 0 {
            return Self::default();
        }
        Self::grow(page.clamp(1, max_page), max_page)
    }

    fn grow(page: u32, max_page: u32) -> Self {
        let mut pages = VecDeque::with_capacity(MAX_WINDOW_LEN);
        pages.push_back(page);

        for preference in [Preference::Backward, Preference::Forward] {
            for _ in 0..STEPS_PER_PHASE {
                extend(&mut pages, max_page, preference);
            }
        }

        Self {
            pages: pages.into(),
        }
    }

    /// Returns the page numbers in ascending order.
    #[must_use]
    pub fn pages(&self) -> &[u32] {
        &self.pages
    }

    /// Returns true if `page` is part of the window.
    #[must_use]
    pub fn contains(&self, page: u32) -> bool {
        self.pages.contains(&page)
    }

    /// Returns the number of pages in the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Returns true when the window holds no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Returns the lowest page in the window.
    #[must_use]
    pub fn first(&self) -> Option<u32> {
        self.pages.first().copied()
    }

    /// Returns the highest page in the window.
    #[must_use]
    pub fn last(&self) -> Option<u32> {
        self.pages.last().copied()
    }
}

impl IntoIterator for PageWindow {
    type Item = u32;
    type IntoIter = std::vec::IntoIter<u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.into_iter()
    }
}

/// Computes the page window for `page` out of `max_page` pages.
///
/// Out-of-range input is clamped; see [`PageWindow::checked`] for the
/// fail-fast form.
#[must_use]
pub fn page_window(page: u32, max_page: u32) -> PageWindow {
    PageWindow::clamped(page, max_page)
}

fn extend(pages: &mut VecDeque<u32>, max_page: u32, preference: Preference) {
    let (Some(&lowest), Some(&highest)) = (pages.front(), pages.back()) else {
        return;
    };
    let can_go_back = lowest > 1;
    let can_go_forward = highest < max_page;

    match (preference, can_go_back, can_go_forward) {
        (Preference::Backward, true, _) | (Preference::Forward, true, false) => {
            pages.push_front(lowest - 1);
        }
        (Preference::Forward, _, true) | (Preference::Backward, false, true) => {
            pages.push_back(highest + 1);
        }
        (_, false, false) => {}
    }
}
