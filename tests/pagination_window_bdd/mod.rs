//! Support modules for the pagination window BDD tests.

pub(crate) mod domain;
pub(crate) mod state;

pub(crate) use domain::{ItemCount, PageNumber, PageSize, QuotedText};
pub(crate) use state::PaginationState;
