//! Domain wrapper types for the pagination window BDD tests.

use std::convert::Infallible;
use std::str::FromStr;

/// Page number as written in a scenario (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PageNumber(u32);

impl PageNumber {
    pub(crate) const fn value(self) -> u32 {
        self.0
    }
}

impl FromStr for PageNumber {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.parse::<u32>().map_err(|error| error.to_string())?;
        if value == 0 {
            return Err("PageNumber must be >= 1".to_owned());
        }
        Ok(Self(value))
    }
}

/// Number of tutors matching a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ItemCount(u64);

impl ItemCount {
    pub(crate) const fn value(self) -> u64 {
        self.0
    }
}

impl FromStr for ItemCount {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

/// Tutors per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PageSize(u32);

impl PageSize {
    pub(crate) const fn value(self) -> u32 {
        self.0
    }
}

impl FromStr for PageSize {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(Self)
    }
}

/// Text written between double quotes in a step, without the quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct QuotedText(String);

impl QuotedText {
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for QuotedText {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim_matches('"').to_owned()))
    }
}
