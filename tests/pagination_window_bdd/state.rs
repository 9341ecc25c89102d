//! Scenario state for the pagination window BDD tests.

use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tutorlink::PaginationFooter;

/// State shared across steps in a pagination scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct PaginationState {
    /// Total tutors in the result set.
    pub(crate) total: Slot<u64>,
    /// Tutors per page.
    pub(crate) per_page: Slot<u32>,
    /// Footer for the page being shown.
    pub(crate) footer: Slot<PaginationFooter>,
    /// Page passed to the page-change callback, if any.
    pub(crate) requested: Slot<u32>,
}
