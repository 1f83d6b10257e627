//! Shared state and validation for every content item.
//!
//! A `ContentItem` carries the fields common to all media variants and
//! enforces their invariants. Variants embed one and add their own field.

use std::sync::atomic::{AtomicU32, Ordering};

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Earliest release year accepted for any item
pub const MIN_YEAR: i32 = 1990;

/// Current calendar year in local time
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Rejected constructor or setter argument
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("Title cannot be empty.")]
    BlankTitle,

    #[error("Invalid year: {year} (expected {min}..={max})")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("Duration must be positive, got {0}")]
    NonPositiveDuration(i32),
}

/// Item identifier, assigned from an [`IdSequence`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(u32);

impl ContentId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic identifier generator.
///
/// Hands out 1, 2, 3, ... across every item built from it, whatever the
/// variant. Safe to share by reference.
#[derive(Debug)]
pub struct IdSequence {
    next: AtomicU32,
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSequence {
    pub fn new() -> Self {
        Self {
            next: AtomicU32::new(1),
        }
    }

    /// Draw the next identifier
    pub fn next_id(&self) -> ContentId {
        ContentId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

/// Fields and rules shared by all content variants
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentItem {
    id: ContentId,
    title: String,
    year: i32,
    duration_minutes: i32,
}

impl ContentItem {
    /// Create a validated item, drawing its identifier from `ids`.
    ///
    /// The identifier is drawn before validation, so a rejected
    /// construction leaves a gap in the sequence.
    pub fn new(
        ids: &IdSequence,
        title: impl Into<String>,
        year: i32,
        duration_minutes: i32,
    ) -> Result<Self, InvalidArgument> {
        let id = ids.next_id();
        let title = title.into();

        validate_title(&title)?;
        validate_year(year, current_year())?;
        validate_duration(duration_minutes)?;

        Ok(Self {
            id,
            title,
            year,
            duration_minutes,
        })
    }

    pub fn id(&self) -> ContentId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn duration_minutes(&self) -> i32 {
        self.duration_minutes
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), InvalidArgument> {
        let title = title.into();
        validate_title(&title)?;
        self.title = title;
        Ok(())
    }

    /// Set the release year, checked against the calendar year at call time
    pub fn set_year(&mut self, year: i32) -> Result<(), InvalidArgument> {
        validate_year(year, current_year())?;
        self.year = year;
        Ok(())
    }

    pub fn set_duration_minutes(&mut self, minutes: i32) -> Result<(), InvalidArgument> {
        validate_duration(minutes)?;
        self.duration_minutes = minutes;
        Ok(())
    }

    /// Years between release and `reference_year`. Not clamped: a reference
    /// year before the release year gives a negative age. Saturates at the
    /// `i32` bounds.
    pub fn age(&self, reference_year: i32) -> i32 {
        reference_year.saturating_sub(self.year)
    }

    /// Base description shared by every variant
    pub fn describe(&self) -> String {
        format!(
            "ID={}, Title='{}', Year={}, Duration={} min",
            self.id, self.title, self.year, self.duration_minutes
        )
    }
}

fn validate_title(title: &str) -> Result<(), InvalidArgument> {
    if title.trim().is_empty() {
        return Err(InvalidArgument::BlankTitle);
    }
    Ok(())
}

fn validate_year(year: i32, current: i32) -> Result<(), InvalidArgument> {
    if !(MIN_YEAR..=current).contains(&year) {
        return Err(InvalidArgument::YearOutOfRange {
            year,
            min: MIN_YEAR,
            max: current,
        });
    }
    Ok(())
}

fn validate_duration(minutes: i32) -> Result<(), InvalidArgument> {
    if minutes <= 0 {
        return Err(InvalidArgument::NonPositiveDuration(minutes));
    }
    Ok(())
}
