//! Browse-page filter schema and its query-string form.
//!
//! [`BrowseFilter`] is the single source of truth for what the browse page is
//! showing. It serialises to a versioned query string (`v=1&subject=maths&…`)
//! so the state survives reloads and shared links, and deserialises back to
//! the same value. Absent and blank values are never written, so the query
//! string only carries what the user chose.

use std::fmt;
use std::str::FromStr;

use tracing::debug;
use url::form_urlencoded;

use crate::marketplace::ClientError;
use crate::marketplace::models::{GradeLevel, LessonMode};
use crate::rating::MAX_STARS;

/// Version written to the `v` key of serialised filters.
pub const FILTER_SCHEMA_VERSION: u32 = 1;

/// Page size used when the filter does not carry one.
pub const DEFAULT_LIMIT: u32 = 10;

/// Largest page size the backend accepts.
pub const MAX_LIMIT: u32 = 100;

const VERSION_KEY: &str = "v";

/// Non-blank, trimmed free-text filter value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterText(String);

impl FilterText {
    /// Trims `value`, returning `None` when nothing remains.
    #[must_use]
    pub fn new(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_owned()))
        }
    }

    /// Borrow the text.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for FilterText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result ordering offered on the browse page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Highest average rating first.
    RatingDesc,
    /// Cheapest first.
    RateAsc,
    /// Most expensive first.
    RateDesc,
    /// Most recently joined first.
    Newest,
}

impl SortOrder {
    /// Returns the query value for this ordering.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RatingDesc => "rating_desc",
            Self::RateAsc => "rate_asc",
            Self::RateDesc => "rate_desc",
            Self::Newest => "newest",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ClientError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "rating_desc" => Ok(Self::RatingDesc),
            "rate_asc" => Ok(Self::RateAsc),
            "rate_desc" => Ok(Self::RateDesc),
            "newest" => Ok(Self::Newest),
            other => Err(invalid(format!("unknown sort order `{other}`"))),
        }
    }
}

/// Filters applied to the tutor listing.
///
/// Every field is optional; `None` means "no constraint". A filter is valid
/// when [`BrowseFilter::validate`] accepts it, and every valid filter
/// survives a round trip through [`BrowseFilter::serialize`] and
/// [`BrowseFilter::deserialize`] unchanged.
///
/// # Example
///
/// ```
/// use tutorlink::browse::{BrowseFilter, FilterText};
///
/// let filter = BrowseFilter {
///     subject: FilterText::new("maths"),
///     page: Some(2),
///     ..BrowseFilter::default()
/// };
/// let query = filter.serialize();
/// assert_eq!(query, "v=1&subject=maths&page=2");
/// assert_eq!(BrowseFilter::deserialize(&query), Ok(filter));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BrowseFilter {
    /// Free-text search across names and bios.
    pub search: Option<FilterText>,
    /// Subject taught.
    pub subject: Option<FilterText>,
    /// Grade level taught.
    pub grade_level: Option<GradeLevel>,
    /// Lesson delivery mode.
    pub mode: Option<LessonMode>,
    /// City or region.
    pub location: Option<FilterText>,
    /// Lowest acceptable hourly rate.
    pub min_rate: Option<u32>,
    /// Highest acceptable hourly rate.
    pub max_rate: Option<u32>,
    /// Lowest acceptable average rating, in whole stars.
    pub min_rating: Option<u8>,
    /// Result ordering.
    pub sort: Option<SortOrder>,
    /// Requested page (1-based).
    pub page: Option<u32>,
    /// Requested page size.
    pub limit: Option<u32>,
}

impl BrowseFilter {
    /// Returns the requested page, defaulting to 1.
    #[must_use]
    pub fn page_or_default(&self) -> u32 {
        self.page.unwrap_or(1)
    }

    /// Returns the requested page size, defaulting to [`DEFAULT_LIMIT`].
    #[must_use]
    pub fn limit_or_default(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    /// Returns a copy of this filter pointing at `page`.
    #[must_use]
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: Some(page),
            ..self.clone()
        }
    }

    /// Returns true when the filter narrows the listing in any way.
    ///
    /// Paging and ordering do not count as narrowing.
    #[must_use]
    pub const fn has_constraints(&self) -> bool {
        self.search.is_some()
            || self.subject.is_some()
            || self.grade_level.is_some()
            || self.mode.is_some()
            || self.location.is_some()
            || self.min_rate.is_some()
            || self.max_rate.is_some()
            || self.min_rating.is_some()
    }

    /// Checks cross-field and range constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidFilter`] when the page is zero, the page
    /// size is outside `1..=100`, the minimum rating is outside `1..=5`, or
    /// the minimum rate exceeds the maximum rate.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.page == Some(0) {
            return Err(invalid("page must be at least 1".to_owned()));
        }
        if let Some(limit) = self.limit
            && !(1..=MAX_LIMIT).contains(&limit)
        {
            return Err(invalid(format!(
                "limit must be between 1 and {MAX_LIMIT}, got {limit}"
            )));
        }
        if let Some(stars) = self.min_rating
            && !(1..=MAX_STARS).contains(&stars)
        {
            return Err(invalid(format!(
                "min_rating must be between 1 and {MAX_STARS}, got {stars}"
            )));
        }
        if let (Some(min), Some(max)) = (self.min_rate, self.max_rate)
            && min > max
        {
            return Err(invalid(format!(
                "min_rate {min} must not exceed max_rate {max}"
            )));
        }
        Ok(())
    }

    /// Key/value pairs sent to the backend, without the schema version.
    ///
    /// Pairs appear in a fixed order so identical filters yield identical
    /// queries.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_text(&mut pairs, "q", self.search.as_ref());
        push_text(&mut pairs, "subject", self.subject.as_ref());
        if let Some(level) = self.grade_level {
            pairs.push(("grade", level.as_str().to_owned()));
        }
        if let Some(mode) = self.mode {
            pairs.push(("mode", mode.as_str().to_owned()));
        }
        push_text(&mut pairs, "location", self.location.as_ref());
        push_number(&mut pairs, "min_rate", self.min_rate);
        push_number(&mut pairs, "max_rate", self.max_rate);
        push_number(&mut pairs, "min_rating", self.min_rating);
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.as_str().to_owned()));
        }
        push_number(&mut pairs, "page", self.page);
        push_number(&mut pairs, "limit", self.limit);
        pairs
    }

    /// Serialises the filter to a versioned, URL-encoded query string.
    #[must_use]
    pub fn serialize(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.append_pair(VERSION_KEY, &FILTER_SCHEMA_VERSION.to_string());
        for (key, value) in self.query_pairs() {
            serializer.append_pair(key, &value);
        }
        serializer.finish()
    }

    /// Parses a query string produced by [`Self::serialize`] or typed by a
    /// user.
    ///
    /// A leading `?` is ignored. Empty values are treated as absent, a
    /// missing `v` is read as the current version, repeated keys keep the
    /// last value, and unknown keys are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidFilter`] for an unsupported schema
    /// version, a value that does not parse for its key, or a filter that
    /// fails [`Self::validate`].
    pub fn deserialize(query: &str) -> Result<Self, ClientError> {
        let raw = query.strip_prefix('?').unwrap_or(query);
        let mut filter = Self::default();

        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            if value.trim().is_empty() {
                continue;
            }
            filter.apply_pair(&key, &value)?;
        }

        filter.validate()?;
        Ok(filter)
    }

    fn apply_pair(&mut self, key: &str, value: &str) -> Result<(), ClientError> {
        match key {
            VERSION_KEY => check_version(value)?,
            "q" => self.search = FilterText::new(value),
            "subject" => self.subject = FilterText::new(value),
            "grade" => self.grade_level = Some(value.trim().parse()?),
            "mode" => self.mode = Some(value.trim().parse()?),
            "location" => self.location = FilterText::new(value),
            "min_rate" => self.min_rate = Some(parse_number(key, value)?),
            "max_rate" => self.max_rate = Some(parse_number(key, value)?),
            "min_rating" => self.min_rating = Some(parse_number(key, value)?),
            "sort" => self.sort = Some(value.trim().parse()?),
            "page" => self.page = Some(parse_number(key, value)?),
            "limit" => self.limit = Some(parse_number(key, value)?),
            unknown => debug!(key = unknown, "ignoring unknown browse filter key"),
        }
        Ok(())
    }
}

fn check_version(value: &str) -> Result<(), ClientError> {
    let version: u32 = parse_number(VERSION_KEY, value)?;
    if version == FILTER_SCHEMA_VERSION {
        Ok(())
    } else {
        Err(invalid(format!(
            "unsupported filter schema version {version} (expected {FILTER_SCHEMA_VERSION})"
        )))
    }
}

fn parse_number<T: FromStr>(key: &str, value: &str) -> Result<T, ClientError> {
    value.trim().parse().map_err(|_| not_a_number(key, value))
}

fn not_a_number(key: &str, value: &str) -> ClientError {
    let message = format!("`{key}` must be a non-negative integer, got `{value}`");
    invalid(message)
}

fn push_text(
    pairs: &mut Vec<(&'static str, String)>,
    key: &'static str,
    value: Option<&FilterText>,
) {
    if let Some(text) = value {
        pairs.push((key, text.as_str().to_owned()));
    }
}

fn push_number<T: ToString>(
    pairs: &mut Vec<(&'static str, String)>,
    key: &'static str,
    value: Option<T>,
) {
    if let Some(number) = value {
        pairs.push((key, number.to_string()));
    }
}

const fn invalid(message: String) -> ClientError {
    ClientError::InvalidFilter { message }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
