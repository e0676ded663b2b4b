//! Course rating values shown and collected by the rating widget.
//!
//! Three value types cover the widget's data model:
//!
//! - [`CourseId`]: the opaque identifier of the course being rated
//! - [`CurrentRating`]: the caller-supplied average, clamped to `0.0..=5.0`
//! - [`StarRating`]: a whole number of stars, where zero means "none chosen"

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of stars in both the summary row and the picker.
pub const MAX_STARS: u8 = 5;

/// Upper bound of the average rating scale.
const MAX_AVERAGE: f64 = 5.0;

/// Errors raised while constructing rating values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RatingError {
    /// The course identifier was empty or whitespace-only.
    #[error("course id must not be empty")]
    EmptyCourseId,

    /// A star count outside `0..=5` was supplied.
    #[error("star rating must be between 0 and {MAX_STARS}, got {value}")]
    StarsOutOfRange {
        /// The rejected star count.
        value: u8,
    },

    /// A submission was built without a chosen rating.
    #[error("a rating of at least one star is required")]
    NothingSelected,
}

/// Opaque identifier of the course being rated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    /// Creates a course identifier from trimmed, non-empty input.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::EmptyCourseId`] when `value` is empty after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, RatingError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RatingError::EmptyCourseId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Placeholder used when the widget starts without a host context.
    pub(crate) fn unconfigured() -> Self {
        Self("unconfigured".to_owned())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The average rating displayed in the summary row.
///
/// Values are clamped into `0.0..=5.0`; non-finite input becomes zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CurrentRating(f64);

impl CurrentRating {
    /// Creates a display rating, clamping it into the supported range.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if !value.is_finite() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, MAX_AVERAGE))
    }

    /// Returns the clamped average.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns the number of filled summary stars, `floor(value)`.
    #[must_use]
    pub fn filled_stars(self) -> StarRating {
        let count = (1..=MAX_STARS)
            .filter(|index| f64::from(*index) <= self.0)
            .count();
        u8::try_from(count).map_or(StarRating::NONE, StarRating)
    }

    /// Returns the summary label, e.g. `4.0 out of 5`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{:.1} out of {MAX_STARS}", self.0)
    }
}

impl From<f64> for CurrentRating {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// A whole number of stars between zero and [`MAX_STARS`].
///
/// Zero means no star is chosen (or hovered).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct StarRating(u8);

impl StarRating {
    /// No star chosen.
    pub const NONE: Self = Self(0);
    /// All five stars.
    pub const MAX: Self = Self(MAX_STARS);

    /// Creates a star rating.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::StarsOutOfRange`] when `value` exceeds
    /// [`MAX_STARS`].
    pub const fn new(value: u8) -> Result<Self, RatingError> {
        if value > MAX_STARS {
            return Err(RatingError::StarsOutOfRange { value });
        }
        Ok(Self(value))
    }

    /// Returns the number of stars.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns `true` when no star is chosen.
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Returns whether the 1-based star `index` is drawn filled at this level.
    #[must_use]
    pub const fn fills(self, index: u8) -> bool {
        index >= 1 && index <= self.0
    }

    /// Moves one star to the right, landing on the first star from zero.
    #[must_use]
    pub const fn step_forward(self) -> Self {
        if self.0 >= MAX_STARS {
            Self::MAX
        } else {
            Self(self.0 + 1)
        }
    }

    /// Moves one star to the left without leaving the star row.
    #[must_use]
    pub const fn step_back(self) -> Self {
        if self.0 <= 1 {
            Self(1)
        } else {
            Self(self.0 - 1)
        }
    }
}

impl TryFrom<u8> for StarRating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StarRating> for u8 {
    fn from(value: StarRating) -> Self {
        value.0
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fill level of the picker row: the larger of hover and selection.
///
/// Computed at render time and never stored.
#[must_use]
pub fn fill_level(hover: StarRating, selected: StarRating) -> StarRating {
    hover.max(selected)
}

/// Iterates the 1-based star indices of a row.
pub fn star_indices() -> impl Iterator<Item = u8> {
    1..=MAX_STARS
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn stars(value: u8) -> StarRating {
        StarRating::new(value).expect("star value should be in range")
    }

    #[rstest]
    #[case(0.0, 0)]
    #[case(0.9, 0)]
    #[case(1.0, 1)]
    #[case(3.7, 3)]
    #[case(4.0, 4)]
    #[case(4.99, 4)]
    #[case(5.0, 5)]
    fn filled_stars_floors_the_average(#[case] average: f64, #[case] expected: u8) {
        assert_eq!(CurrentRating::new(average).filled_stars(), stars(expected));
    }

    #[rstest]
    #[case(4.0, "4.0 out of 5")]
    #[case(3.26, "3.3 out of 5")]
    #[case(0.0, "0.0 out of 5")]
    #[case(5.0, "5.0 out of 5")]
    fn label_uses_one_decimal_place(#[case] average: f64, #[case] expected: &str) {
        assert_eq!(CurrentRating::new(average).label(), expected);
    }

    #[rstest]
    #[case(-1.0, 0.0)]
    #[case(7.5, 5.0)]
    #[case(f64::NAN, 0.0)]
    #[case(f64::INFINITY, 0.0)]
    fn current_rating_clamps_out_of_range_values(#[case] input: f64, #[case] expected: f64) {
        let rating = CurrentRating::new(input);
        assert!(
            (rating.value() - expected).abs() < f64::EPSILON,
            "expected {expected}, got {}",
            rating.value()
        );
    }

    #[test]
    fn current_rating_defaults_to_zero() {
        assert_eq!(CurrentRating::default().label(), "0.0 out of 5");
        assert!(CurrentRating::default().filled_stars().is_none());
    }

    #[test]
    fn course_id_rejects_blank_input() {
        assert_eq!(CourseId::new("   "), Err(RatingError::EmptyCourseId));
    }

    #[test]
    fn course_id_trims_whitespace() {
        let id = CourseId::new("  rust-101 ").expect("course id should parse");
        assert_eq!(id.as_str(), "rust-101");
        assert_eq!(id.to_string(), "rust-101");
    }

    #[test]
    fn star_rating_rejects_values_above_five() {
        assert_eq!(
            StarRating::new(6),
            Err(RatingError::StarsOutOfRange { value: 6 })
        );
    }

    #[rstest]
    #[case(0, 0, 0)]
    #[case(3, 0, 3)]
    #[case(0, 4, 4)]
    #[case(2, 5, 5)]
    #[case(5, 1, 5)]
    fn fill_level_is_max_of_hover_and_selection(
        #[case] hover: u8,
        #[case] selected: u8,
        #[case] expected: u8,
    ) {
        assert_eq!(fill_level(stars(hover), stars(selected)), stars(expected));
    }

    #[test]
    fn fills_only_indices_up_to_level() {
        let level = stars(3);
        let filled: Vec<bool> = star_indices().map(|index| level.fills(index)).collect();
        assert_eq!(filled, vec![true, true, true, false, false]);
        assert!(!StarRating::NONE.fills(0));
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 2)]
    #[case(5, 5)]
    fn step_forward_stays_on_the_row(#[case] start: u8, #[case] expected: u8) {
        assert_eq!(stars(start).step_forward(), stars(expected));
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(4, 3)]
    fn step_back_stays_on_the_row(#[case] start: u8, #[case] expected: u8) {
        assert_eq!(stars(start).step_back(), stars(expected));
    }

    #[test]
    fn star_rating_serialises_as_plain_number() {
        let json = serde_json::to_string(&stars(4)).expect("star rating should serialise");
        assert_eq!(json, "4");
        let parsed: Result<StarRating, _> = serde_json::from_str("9");
        assert!(parsed.is_err(), "out-of-range stars should not deserialise");
    }
}
