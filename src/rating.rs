//! Star rating rounding and rendering.
//!
//! Averages arrive from the backend as floating-point means. Listings show
//! them as five stars rounded to the nearest half star, so 4.25 renders as
//! four and a half stars and 4.24 as four.

use std::fmt;

use serde::Serialize;

use crate::marketplace::ClientError;
use crate::marketplace::models::RatingSummary;

/// Number of stars in a full rating.
pub const MAX_STARS: u8 = 5;

const MAX_HALF_STARS: u8 = MAX_STARS * 2;

/// Number of star positions a rendered rating has.
pub const STAR_SLOTS: usize = 5;

/// A single star position in a rendered rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Star {
    /// Filled star.
    Full,
    /// Half-filled star.
    Half,
    /// Outline star.
    Empty,
}

impl Star {
    /// Returns the glyph used in text output.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Full => '★',
            Self::Half => '½',
            Self::Empty => '☆',
        }
    }
}

/// Average rating rounded to the nearest half star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct StarRating {
    half_stars: u8,
}

impl StarRating {
    /// Rounds a mean rating to the nearest half star.
    ///
    /// Halfway points round up. Values outside `0..=5` are clamped and
    /// non-finite values count as unrated.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "the value is clamped to 0..=10 before the cast"
    )]
    pub fn from_average(average: f64) -> Self {
        if !average.is_finite() {
            return Self::default();
        }
        let doubled = (average * 2.0).round().clamp(0.0, f64::from(MAX_HALF_STARS));
        Self {
            half_stars: doubled as u8,
        }
    }

    /// Builds a rating from a whole number of half stars, clamped to 10.
    #[must_use]
    pub fn from_half_stars(half_stars: u8) -> Self {
        Self {
            half_stars: half_stars.min(MAX_HALF_STARS),
        }
    }

    /// Returns the rating in half-star units (0–10).
    #[must_use]
    pub const fn half_stars(self) -> u8 {
        self.half_stars
    }

    /// Returns the five star positions, full stars first.
    #[must_use]
    pub fn stars(self) -> [Star; STAR_SLOTS] {
        let mut stars = [Star::Empty; STAR_SLOTS];
        let mut remaining = self.half_stars;
        for star in &mut stars {
            *star = match remaining {
                0 => Star::Empty,
                1 => Star::Half,
                _ => Star::Full,
            };
            remaining = remaining.saturating_sub(2);
        }
        stars
    }

    /// Renders the stars as text, e.g. `★★★½☆`.
    #[must_use]
    pub fn render(self) -> String {
        self.stars().iter().map(|star| star.glyph()).collect()
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.half_stars.div_euclid(2);
        if self.half_stars.rem_euclid(2) == 0 {
            write!(f, "{whole}")
        } else {
            write!(f, "{whole}.5")
        }
    }
}

/// Renders a backend rating summary for listings.
///
/// Unrated tutors read `No ratings yet`; otherwise the stars are followed by
/// the rounded value and the count, e.g. `★★★★½ 4.5 (12 ratings)`.
#[must_use]
pub fn describe(summary: &RatingSummary) -> String {
    if summary.count == 0 {
        return "No ratings yet".to_owned();
    }
    let rating = StarRating::from_average(summary.average);
    let noun = if summary.count == 1 {
        "rating"
    } else {
        "ratings"
    };
    format!(
        "{stars} {rating} ({count} {noun})",
        stars = rating.render(),
        count = summary.count
    )
}

/// A rating a student submits for a tutor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingSubmission {
    stars: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
}

impl RatingSubmission {
    /// Validates the star count and normalises the comment.
    ///
    /// Blank comments are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidRating`] unless `stars` is in `1..=5`.
    pub fn new(stars: u8, comment: Option<&str>) -> Result<Self, ClientError> {
        if !(1..=MAX_STARS).contains(&stars) {
            return Err(ClientError::InvalidRating {
                message: format!("stars must be between 1 and {MAX_STARS}, got {stars}"),
            });
        }
        let trimmed = comment
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(ToOwned::to_owned);
        Ok(Self {
            stars,
            comment: trimmed,
        })
    }

    /// Returns the star count.
    #[must_use]
    pub const fn stars(&self) -> u8 {
        self.stars
    }

    /// Returns the comment, if any.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}
