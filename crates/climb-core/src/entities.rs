//! Climb and attempt records.
//!
//! Fields with cross-field invariants (the grade index depends on the climb
//! type) are private and only reachable through validating constructors.
//! Free-text fields are plain `String`s, bounded by
//! [`TEXT_FIELD_MAX_BYTES`] at construction time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::enums::{AttemptStyle, ClimbType, Performance};
use crate::errors::CoreError;
use crate::grades::GradeScale;

/// Longest name, location, or comment that fits a record slot.
pub const TEXT_FIELD_MAX_BYTES: usize = 45;

/// Largest year or day value that fits a 4-digit record slot.
pub const NUMERIC_FIELD_MAX: u16 = 9999;

fn check_slot_number(field: &str, value: u16) -> Result<u16, CoreError> {
    if value > NUMERIC_FIELD_MAX {
        return Err(CoreError::validation(format!(
            "{field} must be at most {NUMERIC_FIELD_MAX}, got {value}"
        )));
    }
    Ok(value)
}

fn check_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.len() > TEXT_FIELD_MAX_BYTES {
        return Err(CoreError::validation(format!(
            "{field} is {} bytes, at most {TEXT_FIELD_MAX_BYTES} allowed",
            value.len()
        )));
    }
    if value.contains('\0') {
        return Err(CoreError::validation(format!(
            "{field} must not contain NUL bytes"
        )));
    }
    Ok(())
}

/// Parse a field that must be written with ASCII digits only.
///
/// Signs, spaces inside the number, and empty input are rejected.
fn parse_digits(field: &str, input: &str) -> Result<u16, CoreError> {
    let input = input.trim();
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::validation(format!(
            "{field} must be a whole number, got `{input}`"
        )));
    }
    input
        .parse::<u16>()
        .ok()
        .filter(|value| *value <= NUMERIC_FIELD_MAX)
        .ok_or_else(|| {
            CoreError::validation(format!("{field} must be at most {NUMERIC_FIELD_MAX}"))
        })
}

// ---------------------------------------------------------------------------
// Stars
// ---------------------------------------------------------------------------

/// Star rating, 0 through 4 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Stars(u8);

impl Stars {
    pub const MAX: u8 = 4;

    /// # Errors
    ///
    /// Returns `CoreError::Validation` for values above [`Stars::MAX`].
    pub fn new(value: u8) -> Result<Self, CoreError> {
        if value > Self::MAX {
            return Err(CoreError::validation(format!(
                "stars must be between 0 and {}, got {value}",
                Self::MAX
            )));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// `O` for zero, otherwise one `*` per star.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self.0 {
            0 => "O",
            1 => "*",
            2 => "**",
            3 => "***",
            _ => "****",
        }
    }
}

impl FromStr for Stars {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = parse_digits("stars", s)?;
        u8::try_from(value)
            .map_err(|_| {
                CoreError::validation(format!("stars must be between 0 and 4, got {value}"))
            })
            .and_then(Self::new)
    }
}

impl<'de> Deserialize<'de> for Stars {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u8::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Stars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ---------------------------------------------------------------------------
// ClimbDate
// ---------------------------------------------------------------------------

/// Calendar date of an attempt.
///
/// Fields are independent integers. Month must be 1..=12; year and day only
/// have to fit their four-digit slot, so a day of 0 or 45 is stored as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClimbDate {
    pub year: u16,
    pub month: u8,
    pub day: u16,
}

impl ClimbDate {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when a field is out of range.
    pub fn new(year: u16, month: u8, day: u16) -> Result<Self, CoreError> {
        Self::check_year(year)?;
        Self::check_month(month)?;
        Self::check_day(day)?;
        Ok(Self { year, month, day })
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` for years that do not fit four digits.
    pub fn check_year(year: u16) -> Result<u16, CoreError> {
        check_slot_number("year", year)
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` outside 1..=12.
    pub fn check_month(month: u8) -> Result<u8, CoreError> {
        if !(1..=12).contains(&month) {
            return Err(CoreError::validation(format!(
                "month must be between 1 and 12, got {month}"
            )));
        }
        Ok(month)
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` for days that do not fit four digits.
    pub fn check_day(day: u16) -> Result<u16, CoreError> {
        check_slot_number("day", day)
    }

    /// Parse a year typed by the user.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for non-digit input or out-of-range values.
    pub fn parse_year(input: &str) -> Result<u16, CoreError> {
        parse_digits("year", input)
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` for non-digit input or out-of-range values.
    pub fn parse_month(input: &str) -> Result<u8, CoreError> {
        let value = parse_digits("month", input)?;
        u8::try_from(value)
            .map_err(|_| {
                CoreError::validation(format!("month must be between 1 and 12, got {value}"))
            })
            .and_then(Self::check_month)
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` for non-digit input or out-of-range values.
    pub fn parse_day(input: &str) -> Result<u16, CoreError> {
        parse_digits("day", input)
    }
}

impl fmt::Display for ClimbDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}

// ---------------------------------------------------------------------------
// Attempt
// ---------------------------------------------------------------------------

/// One dated effort on a climb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    pub date: ClimbDate,
    pub style: AttemptStyle,
    pub performance: Performance,
    pub comments: String,
}

impl Attempt {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when the comment does not fit its slot.
    pub fn new(
        date: ClimbDate,
        style: AttemptStyle,
        performance: Performance,
        comments: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let comments = comments.into();
        check_text("comments", &comments)?;
        Ok(Self {
            date,
            style,
            performance,
            comments,
        })
    }
}

// ---------------------------------------------------------------------------
// Climb
// ---------------------------------------------------------------------------

/// A route or problem, identified by (name, location).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Climb {
    name: String,
    location: String,
    climb_type: ClimbType,
    grade: usize,
    stars: Stars,
    comments: String,
    attempts: Vec<Attempt>,
}

impl Climb {
    /// Build a climb from a grade label, validated against the type's table.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when the grade is not in the table for
    /// `climb_type` or a text field does not fit its slot.
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        climb_type: ClimbType,
        grade: &str,
        stars: Stars,
        comments: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let grade_index = Self::parse_grade(climb_type, grade)?;
        Self::from_parts(name, location, climb_type, grade_index, stars, comments)
    }

    /// Build a climb from an already-resolved grade index.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when `grade_index` is outside the table
    /// for `climb_type` or a text field does not fit its slot.
    pub fn from_parts(
        name: impl Into<String>,
        location: impl Into<String>,
        climb_type: ClimbType,
        grade_index: usize,
        stars: Stars,
        comments: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let name = name.into();
        let location = location.into();
        let comments = comments.into();
        check_text("name", &name)?;
        check_text("location", &location)?;
        check_text("comments", &comments)?;

        let scale = GradeScale::for_type(climb_type);
        if !scale.contains_index(grade_index) {
            return Err(CoreError::validation(format!(
                "grade index {grade_index} is outside the {scale} table"
            )));
        }

        Ok(Self {
            name,
            location,
            climb_type,
            grade: grade_index,
            stars,
            comments,
            attempts: Vec::new(),
        })
    }

    /// Resolve a grade label against the table for `climb_type`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when the label is not in that table.
    pub fn parse_grade(climb_type: ClimbType, label: &str) -> Result<usize, CoreError> {
        let scale = GradeScale::for_type(climb_type);
        scale.lookup(label.trim()).ok_or_else(|| {
            CoreError::validation(format!(
                "`{}` is not a {scale} grade ({})",
                label.trim(),
                scale.hint()
            ))
        })
    }

    /// Check that a name, location, or comment fits a record slot.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when it does not.
    pub fn check_text_field(field: &str, value: &str) -> Result<(), CoreError> {
        check_text(field, value)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub const fn climb_type(&self) -> ClimbType {
        self.climb_type
    }

    /// Index into the grade table selected by [`Climb::climb_type`].
    #[must_use]
    pub const fn grade_index(&self) -> usize {
        self.grade
    }

    #[must_use]
    pub const fn grade_scale(&self) -> GradeScale {
        GradeScale::for_type(self.climb_type)
    }

    #[must_use]
    pub fn grade_label(&self) -> &'static str {
        // Constructors guarantee the index is in range.
        self.grade_scale().labels()[self.grade]
    }

    #[must_use]
    pub const fn stars(&self) -> Stars {
        self.stars
    }

    #[must_use]
    pub fn comments(&self) -> &str {
        &self.comments
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Full access to the attempt list, for callers that reorder or edit it.
    pub fn attempts_mut(&mut self) -> &mut Vec<Attempt> {
        &mut self.attempts
    }

    pub fn push_attempt(&mut self, attempt: Attempt) {
        self.attempts.push(attempt);
    }

    /// Builder-style variant of [`Climb::push_attempt`].
    #[must_use]
    pub fn with_attempt(mut self, attempt: Attempt) -> Self {
        self.attempts.push(attempt);
        self
    }

    /// Whether this climb answers to `(name, location)`, ignoring case.
    #[must_use]
    pub fn matches_key(&self, name: &str, location: &str) -> bool {
        same_text(&self.name, name) && same_text(&self.location, location)
    }
}

/// Case-insensitive comparison used for the (name, location) identity key.
#[must_use]
fn same_text(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}
