//! # Clock Time — Strict-Format Value Object
//!
//! `Time` holds an hour/minute/second triple with hour in `[0, 23]` and
//! minute/second in `[0, 59]`. Seconds precision only; sub-second
//! components are truncated on the platform ingestion path.
//!
//! The construction surface mirrors [`crate::date::Date`]: strict and try
//! factories over text, plus adoption of already-valid platform clock
//! values. [`Time::as_todays_datetime()`] is the single operation in the
//! workspace with an external read dependency (the local system clock).

use std::cmp::Ordering;
use std::fmt;

use chrono::{Local, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use valobj_core::ValueObjectError;

use crate::parse;

const WIDTHS: [usize; 3] = [2, 2, 2];

/// The separator used by the canonical rendering and the one-argument
/// factory.
pub const CANONICAL_SEPARATOR: &str = ":";

/// An immutable clock time, truncated to seconds precision.
///
/// Ordering is lexicographic on (hour, minute, second); equality and
/// hashing are keyed on the same triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(NaiveTime);

impl Time {
    /// Strict factory over canonical `"hh:mm:ss"` text.
    ///
    /// # Errors
    ///
    /// [`ValueObjectError::Format`] for token-shape mismatches,
    /// [`ValueObjectError::Range`] for triples outside clock bounds.
    pub fn create_by(text: &str) -> Result<Self, ValueObjectError> {
        Self::create_by_with(text, CANONICAL_SEPARATOR)
    }

    /// Strict factory with an explicit separator.
    ///
    /// An empty separator selects fixed-width parsing: the input must be
    /// exactly six digits, sliced as 2/2/2.
    ///
    /// # Errors
    ///
    /// Same classification as [`Time::create_by()`].
    pub fn create_by_with(text: &str, separator: &str) -> Result<Self, ValueObjectError> {
        let [hour, minute, second] = parse::tokenize(text, separator, WIDTHS)?;
        Self::from_fields(hour, minute, second)
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

    /// Adopt an already-valid platform clock value, truncating sub-second
    /// components.
    pub fn from_naive(time: NaiveTime) -> Self {
        Self(time.with_nanosecond(0).unwrap_or(time))
    }

    /// The current time of day, read once from the local system clock.
    pub fn now() -> Self {
        Self::from_naive(Local::now().time())
    }

    fn from_fields(hour: i64, minute: i64, second: i64) -> Result<Self, ValueObjectError> {
        if hour < 0 || minute < 0 || second < 0 {
            return Err(ValueObjectError::Range(format!(
                "time components must be non-negative, got {hour}:{minute}:{second}"
            )));
        }
        let bounds_error =
            || ValueObjectError::Range(format!("{hour}:{minute}:{second} is not a clock time"));
        let hour = u32::try_from(hour).map_err(|_| bounds_error())?;
        let minute = u32::try_from(minute).map_err(|_| bounds_error())?;
        let second = u32::try_from(second).map_err(|_| bounds_error())?;
        let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(bounds_error)?;
        Ok(Self(time))
    }

    /// The hour component, in `[0, 23]`.
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// The minute component, in `[0, 59]`.
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// The second component, in `[0, 59]`.
    pub fn second(&self) -> u32 {
        self.0.second()
    }

    /// Canonical zero-padded `"hh:mm:ss"` rendering, independent of the
    /// separator used at parse time.
    pub fn as_string(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour(), self.minute(), self.second())
    }

    /// Combine the stored time with the current local calendar date.
    ///
    /// This is the only operation with an external read dependency: one
    /// synchronous clock read, no retry or timeout semantics.
    pub fn as_todays_datetime(&self) -> NaiveDateTime {
        NaiveDateTime::new(Local::now().date_naive(), self.0)
    }

    /// Compare against an optional other time.
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

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl From<NaiveTime> for Time {
    fn from(time: NaiveTime) -> Self {
        Self::from_naive(time)
    }
}

impl Serialize for Time {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_string())
    }
}

impl<'de> Deserialize<'de> for Time {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::create_by(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- strict factory ----

    #[test]
    fn test_create_by_accepts_canonical_text() {
        let time = Time::create_by("10:00:00").unwrap();
        assert_eq!((time.hour(), time.minute(), time.second()), (10, 0, 0));
    }

    #[test]
    fn test_create_by_with_explicit_separators() {
        let fixed = Time::create_by_with("100010", "").unwrap();
        let dotted = Time::create_by_with("10.00.10", ".").unwrap();
        assert_eq!(fixed, dotted);
        assert_eq!(fixed.as_string(), "10:00:10");
    }

    #[test]
    fn test_format_violations() {
        for text in ["", "10:00", "10;00;00", "10:oo:oo", "aaaa", "aaaabbbbb"] {
            let err = Time::create_by(text).unwrap_err();
            assert!(
                matches!(err, ValueObjectError::Format { .. }),
                "{text:?} should be a format violation, got {err:?}"
            );
        }
    }

    #[test]
    fn test_range_violations() {
        for text in ["25:00:00", "10:60:00", "10:00:60", "-1:22:22", "22:-2:22", "22:22:-3"] {
            let err = Time::create_by(text).unwrap_err();
            assert!(
                matches!(err, ValueObjectError::Range(_)),
                "{text:?} should be a range violation, got {err:?}"
            );
        }
    }

    #[test]
    fn test_boundary_values() {
        assert!(Time::create_by("00:00:00").is_ok());
        assert!(Time::create_by("23:59:59").is_ok());
        assert!(Time::create_by("24:00:00").is_err());
    }

    // ---- try factory ----

    #[test]
    fn test_try_create_by_success() {
        let time = Time::try_create_by("10:00:00").unwrap();
        assert_eq!((time.hour(), time.minute(), time.second()), (10, 0, 0));
    }

    #[test]
    fn test_try_create_by_never_signals() {
        for text in ["aaaa", "", "10:00", "10:oo:oo", "25:00:00", "10:60:00", "-1:00:00"] {
            assert_eq!(Time::try_create_by(text), None, "{text:?}");
        }
    }

    // ---- platform path ----

    #[test]
    fn test_from_naive_truncates_subseconds() {
        let raw = NaiveTime::from_hms_nano_opt(11, 29, 59, 123_456_789).unwrap();
        let time = Time::from_naive(raw);
        assert_eq!(time.as_string(), "11:29:59");
        assert_eq!(time, Time::create_by("11:29:59").unwrap());
    }

    #[test]
    fn test_now_is_valid_by_construction() {
        let now = Time::now();
        assert!(Time::create_by(&now.as_string()).is_ok());
    }

    // ---- todays datetime ----

    #[test]
    fn test_as_todays_datetime_combines_with_current_date() {
        let time = Time::create_by("11:29:59").unwrap();
        let combined = time.as_todays_datetime();

        assert_eq!(combined.time(), NaiveTime::from_hms_opt(11, 29, 59).unwrap());
        // The date either matches today or, across a midnight race, the
        // surrounding days.
        let today = Local::now().date_naive();
        let drift = (combined.date() - today).num_days().abs();
        assert!(drift <= 1);
    }

    // ---- rendering ----

    #[test]
    fn test_as_string_roundtrip() {
        let text = "11:09:59";
        assert_eq!(Time::create_by(text).unwrap().as_string(), text);
    }

    #[test]
    fn test_display_matches_as_string() {
        let time = Time::create_by("09:05:01").unwrap();
        assert_eq!(format!("{time}"), "09:05:01");
    }

    // ---- equality and hashing ----

    #[test]
    fn test_equality_is_value_based() {
        let a = Time::create_by("10:10:10").unwrap();
        let b = Time::create_by("10:10:10").unwrap();
        let c = Time::create_by("10:10:11").unwrap();

        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_equal_times_hash_equally() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        fn hash_of(time: &Time) -> u64 {
            let mut h = DefaultHasher::new();
            time.hash(&mut h);
            h.finish()
        }

        let a = Time::create_by("10:10:10").unwrap();
        let b = Time::create_by("10:10:10").unwrap();
        let c = Time::create_by("10:10:11").unwrap();

        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(hash_of(&a), hash_of(&c));
    }

    // ---- ordering ----

    #[test]
    fn test_sort_is_lexicographic_on_fields() {
        let mut times = vec![
            Time::create_by("00:00:10").unwrap(),
            Time::create_by("00:10:10").unwrap(),
            Time::create_by("00:00:09").unwrap(),
            Time::create_by("10:10:10").unwrap(),
            Time::create_by("00:00:10").unwrap(),
        ];
        times.sort();
        for pair in times.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        assert_eq!(times[0].as_string(), "00:00:09");
        assert_eq!(times[4].as_string(), "10:10:10");
    }

    #[test]
    fn test_comparison_operators() {
        assert!(Time::create_by("09:10:10").unwrap() < Time::create_by("10:10:10").unwrap());
        assert!(Time::create_by("10:09:10").unwrap() < Time::create_by("10:10:10").unwrap());
        assert!(Time::create_by("10:10:09").unwrap() < Time::create_by("10:10:10").unwrap());
        assert!(Time::create_by("11:10:10").unwrap() > Time::create_by("10:10:10").unwrap());
        assert!(Time::create_by("10:10:10").unwrap() == Time::create_by("10:10:10").unwrap());
        assert!(Time::create_by("10:10:11").unwrap() != Time::create_by("10:10:10").unwrap());
    }

    #[test]
    fn test_compare_to_requires_an_argument() {
        let time = Time::create_by("11:22:33").unwrap();
        let later = Time::create_by("11:22:34").unwrap();

        assert_eq!(time.compare_to(Some(&later)).unwrap(), Ordering::Less);
        assert_eq!(time.compare_to(Some(&time)).unwrap(), Ordering::Equal);
        assert_eq!(time.compare_to(None).unwrap_err(), ValueObjectError::NullArgument);
    }

    // ---- serde ----

    #[test]
    fn test_serde_roundtrip() {
        let time = Time::create_by("10:00:00").unwrap();
        let json = serde_json::to_string(&time).unwrap();
        assert_eq!(json, "\"10:00:00\"");
        let back: Time = serde_json::from_str(&json).unwrap();
        assert_eq!(time, back);
    }

    #[test]
    fn test_deserialize_revalidates() {
        assert!(serde_json::from_str::<Time>("\"25:00:00\"").is_err());
        assert!(serde_json::from_str::<Time>("\"not a time\"").is_err());
    }
}
