//! Tutor directory browsing.
//!
//! [`BrowseFilter`] is the single source of truth for what the directory
//! shows. It serializes to a stable query string so a view can be bookmarked
//! or shared and restored exactly, and it yields the query pairs sent to the
//! backend. [`BrowseIntake`] turns a filter into a page of tutors plus its
//! pagination footer.

pub mod filter;
pub mod intake;

pub use filter::{BrowseFilter, FilterText, SortOrder};
pub use intake::{BrowseIntake, TutorPage};
