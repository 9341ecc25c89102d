//! Pagination footer view model.
//!
//! The footer sits under a result list: it reports which slice of the results
//! is visible, lists the page window, and turns a click on a page control into
//! a page-change callback. It never fetches data itself; the calling view
//! re-queries the backend with the page it receives.

use super::PageInfo;
use super::window::PageWindow;

/// Inclusive 1-based range of results currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultRange {
    /// Index of the first visible result (0 when there are no results).
    pub start: u64,
    /// Index of the last visible result (0 when there are no results).
    pub end: u64,
    /// Total number of results across all pages.
    pub total: u64,
}

impl ResultRange {
    /// Computes the visible range for a page of `limit` items out of `total`.
    ///
    /// Page numbers below 1 are treated as page 1.
    #[must_use]
    pub fn for_page(page: u32, limit: u32, total: u64) -> Self {
        if total == 0 || limit == 0 {
            return Self {
                start: 0,
                end: 0,
                total,
            };
        }
        let limit_wide = u64::from(limit);
        let start = u64::from(page.max(1) - 1)
            .saturating_mul(limit_wide)
            .saturating_add(1);
        let end = start.saturating_add(limit_wide - 1).min(total);
        Self { start, end, total }
    }

    /// Renders the range as `Showing X to Y of Z results`.
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "Showing {} to {} of {} results",
            self.start, self.end, self.total
        )
    }
}

/// A single clickable (or disabled) control in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    /// Link to the previous page, `None` when already on the first page.
    Previous(Option<u32>),
    /// Link to a numbered page.
    Page {
        /// Target page number.
        number: u32,
        /// Whether this is the page being displayed.
        current: bool,
    },
    /// Link to the next page, `None` when already on the last page.
    Next(Option<u32>),
}

impl PageControl {
    /// Returns the page this control navigates to, if it is enabled.
    #[must_use]
    pub const fn target(&self) -> Option<u32> {
        match self {
            Self::Previous(target) | Self::Next(target) => *target,
            Self::Page { number, current } => {
                if *current {
                    None
                } else {
                    Some(*number)
                }
            }
        }
    }
}

/// Footer state derived from a [`PageInfo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationFooter {
    page: u32,
    total_pages: u32,
    range: ResultRange,
    window: PageWindow,
}

impl PaginationFooter {
    /// Builds the footer for the given page position.
    #[must_use]
    pub fn new(info: &PageInfo) -> Self {
        let total_pages = info.total_pages();
        let page = if total_pages == 0 {
            1
        } else {
            info.current_page().clamp(1, total_pages)
        };
        Self {
            page,
            total_pages,
            range: ResultRange::for_page(page, info.per_page(), info.total_items()),
            window: PageWindow::clamped(page, total_pages),
        }
    }

    /// Returns the page the footer treats as current.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Returns the visible result range.
    #[must_use]
    pub const fn range(&self) -> ResultRange {
        self.range
    }

    /// Returns the page window.
    #[must_use]
    pub const fn window(&self) -> &PageWindow {
        &self.window
    }

    /// Lists the controls in display order: previous, window pages, next.
    #[must_use]
    pub fn controls(&self) -> Vec<PageControl> {
        let previous = (self.page > 1).then(|| self.page - 1);
        let next = (self.page < self.total_pages).then(|| self.page + 1);

        let mut controls = Vec::with_capacity(self.window.len() + 2);
        controls.push(PageControl::Previous(previous));
        controls.extend(self.window.pages().iter().map(|&number| PageControl::Page {
            number,
            current: number == self.page,
        }));
        controls.push(PageControl::Next(next));
        controls
    }

    /// Requests a move to `target`, invoking `on_change` with the new page.
    ///
    /// The callback only runs when `target` is a valid page different from
    /// the current one. Returns whether the callback ran.
    pub fn change_page<F>(&self, target: u32, on_change: F) -> bool
    where
        F: FnOnce(u32),
    {
        if target == self.page || target == 0 || target > self.total_pages {
            return false;
        }
        on_change(target);
        true
    }

    /// Activates a control, forwarding its target to [`Self::change_page`].
    pub fn activate<F>(&self, control: PageControl, on_change: F) -> bool
    where
        F: FnOnce(u32),
    {
        control
            .target()
            .is_some_and(|target| self.change_page(target, on_change))
    }

    /// Renders the controls as a single line, e.g. `< 1 2 [3] 4 5 >`.
    ///
    /// Disabled previous/next controls render as a space.
    #[must_use]
    pub fn render_controls(&self) -> String {
        self.controls()
            .iter()
            .map(|control| match control {
                PageControl::Previous(target) => enabled_glyph(target.is_some(), "<"),
                PageControl::Next(target) => enabled_glyph(target.is_some(), ">"),
                PageControl::Page { number, current } => {
                    if *current {
                        format!("[{number}]")
                    } else {
                        number.to_string()
                    }
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn enabled_glyph(enabled: bool, glyph: &str) -> String {
    if enabled {
        glyph.to_owned()
    } else {
        " ".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use rstest::rstest;

    use super::{PageControl, PaginationFooter, ResultRange};
    use crate::pagination::PageInfo;

    #[rstest]
    #[case::first_page(1, 10, 25, 1, 10)]
    #[case::middle_page(2, 10, 25, 11, 20)]
    #[case::partial_last_page(3, 10, 25, 21, 25)]
    #[case::single_short_page(1, 10, 3, 1, 3)]
    fn result_range_bounds(
        #[case] page: u32,
        #[case] limit: u32,
        #[case] total: u64,
        #[case] start: u64,
        #[case] end: u64,
    ) {
        let range = ResultRange::for_page(page, limit, total);
        assert_eq!((range.start, range.end), (start, end));
    }

    #[test]
    fn result_range_label_reads_naturally() {
        assert_eq!(
            ResultRange::for_page(2, 10, 25).label(),
            "Showing 11 to 20 of 25 results"
        );
        assert_eq!(
            ResultRange::for_page(1, 10, 0).label(),
            "Showing 0 to 0 of 0 results"
        );
    }

    #[test]
    fn controls_disable_previous_on_first_page() {
        let footer = PaginationFooter::new(&PageInfo::new(1, 10, 45));
        let controls = footer.controls();

        assert_eq!(controls.first(), Some(&PageControl::Previous(None)));
        assert_eq!(controls.last(), Some(&PageControl::Next(Some(2))));
        assert_eq!(
            controls.get(1),
            Some(&PageControl::Page {
                number: 1,
                current: true
            })
        );
        assert_eq!(footer.render_controls(), "  [1] 2 3 4 5 >");
    }

    #[test]
    fn controls_disable_next_on_last_page() {
        let footer = PaginationFooter::new(&PageInfo::new(5, 10, 45));
        assert_eq!(footer.controls().last(), Some(&PageControl::Next(None)));
        assert_eq!(footer.render_controls(), "< 1 2 3 4 [5]  ");
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let footer = PaginationFooter::new(&PageInfo::new(40, 10, 45));
        assert_eq!(footer.page(), 5);
        assert_eq!(footer.range().start, 41);
        assert_eq!(footer.range().end, 45);
    }

    #[test]
    fn change_page_invokes_callback_for_other_pages() {
        let footer = PaginationFooter::new(&PageInfo::new(3, 10, 100));
        let received = Cell::new(None);

        assert!(footer.change_page(4, |page| received.set(Some(page))));
        assert_eq!(received.get(), Some(4));
    }

    #[rstest]
    #[case::current_page(3)]
    #[case::page_zero(0)]
    #[case::past_last_page(11)]
    fn change_page_ignores_invalid_targets(#[case] target: u32) {
        let footer = PaginationFooter::new(&PageInfo::new(3, 10, 100));
        let called = Cell::new(false);

        assert!(!footer.change_page(target, |_| called.set(true)));
        assert!(!called.get(), "callback should not run for {target}");
    }

    #[test]
    fn activate_follows_control_target() {
        let footer = PaginationFooter::new(&PageInfo::new(3, 10, 100));
        let received = Cell::new(None);

        assert!(footer.activate(PageControl::Previous(Some(2)), |page| {
            received.set(Some(page));
        }));
        assert_eq!(received.get(), Some(2));
        assert!(!footer.activate(
            PageControl::Page {
                number: 3,
                current: true
            },
            |_| {}
        ));
    }

    #[test]
    fn empty_result_set_has_no_page_links() {
        let footer = PaginationFooter::new(&PageInfo::new(1, 10, 0));
        assert!(footer.window().is_empty());
        assert_eq!(
            footer.controls(),
            vec![PageControl::Previous(None), PageControl::Next(None)]
        );
    }
}
