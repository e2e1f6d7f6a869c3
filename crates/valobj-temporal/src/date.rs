//! # Calendar Date — Strict-Format Value Object
//!
//! `Date` holds a year/month/day triple that is guaranteed to be a real
//! calendar date: month in `[1, 12]`, day valid for that month and year
//! (leap years included), year in `[0, 9999]`.
//!
//! ## Construction
//!
//! - [`Date::create_by()`] — strict factory over `"yyyy/mm/dd"` text.
//! - [`Date::create_by_with()`] — strict factory with an explicit
//!   separator; the empty separator selects fixed-width `yyyymmdd`
//!   parsing.
//! - [`Date::try_create_by()`] / [`Date::try_create_by_with()`] — the same
//!   pipeline, reporting failure as `None` instead of an error.
//! - [`Date::from_naive()`] / [`Date::today()`] — from an already-valid
//!   platform calendar value, no re-validation needed.
//!
//! Rendering is always the canonical zero-padded `"yyyy/mm/dd"`,
//! regardless of the separator used at parse time.

use std::cmp::Ordering;
use std::fmt;

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use valobj_core::ValueObjectError;

use crate::parse;

const WIDTHS: [usize; 3] = [4, 2, 2];

/// The separator used by the canonical rendering and the one-argument
/// factory.
pub const CANONICAL_SEPARATOR: &str = "/";

/// Largest representable year. Chosen so the canonical rendering is always
/// exactly four digits wide.
pub const MAX_YEAR: i32 = 9999;

/// An immutable calendar date.
///
/// Ordering is lexicographic on (year, month, day); equality and hashing
/// are keyed on the same triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Strict factory over canonical `"yyyy/mm/dd"` text.
    ///
    /// # Errors
    ///
    /// [`ValueObjectError::Format`] for token-shape mismatches,
    /// [`ValueObjectError::Range`] for triples that are not a calendar
    /// date.
    pub fn create_by(text: &str) -> Result<Self, ValueObjectError> {
        Self::create_by_with(text, CANONICAL_SEPARATOR)
    }

    /// Strict factory with an explicit separator.
    ///
    /// An empty separator selects fixed-width parsing: the input must be
    /// exactly eight digits, sliced as 4/2/2.
    ///
    /// # Errors
    ///
    /// Same classification as [`Date::create_by()`].
    pub fn create_by_with(text: &str, separator: &str) -> Result<Self, ValueObjectError> {
        let [year, month, day] = parse::tokenize(text, separator, WIDTHS)?;
        Self::from_fields(year, month, day)
    }

    /// Try factory over canonical text: `None` on any failure, never an
    /// error.
    pub fn try_create_by(text: &str) -> Option<Self> {
        Self::create_by(text).ok()
    }

    /// Try factory with an explicit separator.
    pub fn try_create_by_with(text: &str, separator: &str) -> Option<Self> {
        Self::create_by_with(text, separator).ok()
    }

    /// Adopt an already-valid platform calendar value.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The current date, read once from the local system clock.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    fn from_fields(year: i64, month: i64, day: i64) -> Result<Self, ValueObjectError> {
        if year < 0 || month < 0 || day < 0 {
            return Err(ValueObjectError::Range(format!(
                "date components must be non-negative, got {year}/{month}/{day}"
            )));
        }
        if year > i64::from(MAX_YEAR) {
            return Err(ValueObjectError::Range(format!(
                "year {year} exceeds the supported maximum {MAX_YEAR}"
            )));
        }
        let bounds_error =
            || ValueObjectError::Range(format!("{year}/{month}/{day} is not a calendar date"));
        let month = u32::try_from(month).map_err(|_| bounds_error())?;
        let day = u32::try_from(day).map_err(|_| bounds_error())?;
        let date = NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(bounds_error)?;
        Ok(Self(date))
    }

    /// The year component, in `[0, 9999]`.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// The month component, in `[1, 12]`.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// The day-of-month component.
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Canonical zero-padded `"yyyy/mm/dd"` rendering, independent of the
    /// separator used at parse time.
    pub fn as_string(&self) -> String {
        format!("{:04}/{:02}/{:02}", self.year(), self.month(), self.day())
    }

    /// The timestamp at `00:00:00` on this date. Pure.
    pub fn as_start_of_day(&self) -> NaiveDateTime {
        self.0.and_time(NaiveTime::MIN)
    }

    /// The timestamp at `23:59:59` on this date. Pure.
    pub fn as_end_of_day(&self) -> NaiveDateTime {
        // 23:59:59 exists on every calendar day.
        self.0
            .and_hms_opt(23, 59, 59)
            .unwrap_or_else(|| self.0.and_time(NaiveTime::MIN))
    }

    /// Compare against an optional other date.
    ///
    /// # Errors
    ///
    /// Returns [`ValueObjectError::NullArgument`] when `other` is absent,
    /// rather than inventing an ordering.
    pub fn compare_to(&self, other: Option<&Self>) -> Result<Ordering, ValueObjectError> {
        other
            .map(|other| self.cmp(other))
            .ok_or(ValueObjectError::NullArgument)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self::from_naive(date)
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_string())
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::create_by(&text).map_err(serde::de::Error::custom)
    }
}
