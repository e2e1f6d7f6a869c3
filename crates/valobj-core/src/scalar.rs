//! # Scalar Value Objects — Validated Integer and Text Wrappers
//!
//! Generic wrappers over a single orderable primitive. A concrete value
//! object is declared by naming a *rule* type that carries the subtype's
//! construction precondition:
//!
//! ```
//! use valobj_core::{IntRule, IntValue, ValueObjectError};
//!
//! enum QuantityRule {}
//!
//! impl IntRule for QuantityRule {
//!     const LABEL: &'static str = "Quantity";
//!
//!     fn check(value: i64) -> Result<(), ValueObjectError> {
//!         if value < 0 {
//!             return Err(ValueObjectError::Invariant(format!(
//!                 "{} must not be negative, got {value}",
//!                 Self::LABEL
//!             )));
//!         }
//!         Ok(())
//!     }
//! }
//!
//! type Quantity = IntValue<QuantityRule>;
//!
//! let q = Quantity::new(3).unwrap();
//! assert_eq!(q.as_string(), "3");
//! assert!(Quantity::new(-1).is_err());
//! ```
//!
//! ## Identity Invariant
//!
//! Identity is the pair (rule type, wrapped value). Two wrappers with
//! different rule types are different Rust types, so comparing a `Quantity`
//! against a `Width` holding the same integer is a compile error rather
//! than a runtime `false`. Equality, ordering, and hashing all delegate to
//! the wrapped primitive, so hash/equality consistency holds by
//! construction.
//!
//! The wrapped value is private and never mutated; a successfully
//! constructed instance satisfies its rule for its entire lifetime.
//! Deserialization runs the same rule, so no invalid instance is
//! observable through serde either.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValueObjectError;

/// Construction rule for an integer-backed value object.
///
/// Implementors are marker types (conventionally uninhabited enums); the
/// rule is consulted exactly once, at construction.
pub trait IntRule {
    /// The concrete subtype's name, used in error messages and `Debug`.
    const LABEL: &'static str;

    /// Validate a candidate value. The default accepts everything.
    ///
    /// # Errors
    ///
    /// Returns [`ValueObjectError::Invariant`] when the candidate violates
    /// the subtype's precondition.
    fn check(_value: i64) -> Result<(), ValueObjectError> {
        Ok(())
    }
}

/// Construction rule for a text-backed value object.
pub trait TextRule {
    /// The concrete subtype's name, used in error messages and `Debug`.
    const LABEL: &'static str;

    /// Validate a candidate value. The default accepts everything.
    ///
    /// # Errors
    ///
    /// Returns [`ValueObjectError::Invariant`] when the candidate violates
    /// the subtype's precondition.
    fn check(_value: &str) -> Result<(), ValueObjectError> {
        Ok(())
    }
}

/// An immutable integer value object, validated by `R` at construction.
pub struct IntValue<R: IntRule> {
    value: i64,
    _rule: PhantomData<fn() -> R>,
}

impl<R: IntRule> IntValue<R> {
    /// Construct a new instance, consulting the rule's precondition.
    ///
    /// # Errors
    ///
    /// Propagates the rule's [`ValueObjectError::Invariant`] unchanged; on
    /// success the value is stored exactly as given.
    pub fn new(value: i64) -> Result<Self, ValueObjectError> {
        R::check(value)?;
        Ok(Self {
            value,
            _rule: PhantomData,
        })
    }

    /// The wrapped value.
    pub fn get(&self) -> i64 {
        self.value
    }

    /// True iff the wrapped value has positive magnitude (>= 1).
    ///
    /// This is a "has any" predicate, not "differs from default": zero and
    /// negative values both report `false`.
    pub fn any(&self) -> bool {
        self.value >= 1
    }

    /// Canonical decimal rendering of the wrapped value.
    pub fn as_string(&self) -> String {
        self.value.to_string()
    }
}

impl<R: IntRule> fmt::Debug for IntValue<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(R::LABEL).field(&self.value).finish()
    }
}

impl<R: IntRule> fmt::Display for IntValue<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

// Manual impls: derives would put unnecessary bounds on the rule parameter.

impl<R: IntRule> Clone for IntValue<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: IntRule> Copy for IntValue<R> {}

impl<R: IntRule> PartialEq for IntValue<R> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<R: IntRule> Eq for IntValue<R> {}

impl<R: IntRule> PartialOrd for IntValue<R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<R: IntRule> Ord for IntValue<R> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<R: IntRule> Hash for IntValue<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<R: IntRule> Serialize for IntValue<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.value)
    }
}

impl<'de, R: IntRule> Deserialize<'de> for IntValue<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i64::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

/// An immutable text value object, validated by `R` at construction.
pub struct TextValue<R: TextRule> {
    value: String,
    _rule: PhantomData<fn() -> R>,
}

impl<R: TextRule> TextValue<R> {
    /// Construct a new instance, consulting the rule's precondition.
    ///
    /// # Errors
    ///
    /// Propagates the rule's [`ValueObjectError::Invariant`] unchanged.
    pub fn new(value: impl Into<String>) -> Result<Self, ValueObjectError> {
        let value = value.into();
        R::check(&value)?;
        Ok(Self {
            value,
            _rule: PhantomData,
        })
    }

    /// The wrapped text.
    pub fn get(&self) -> &str {
        &self.value
    }

    /// Canonical textual form of the wrapped value.
    pub fn as_string(&self) -> String {
        self.value.clone()
    }
}

impl<R: TextRule> fmt::Debug for TextValue<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(R::LABEL).field(&self.value).finish()
    }
}

impl<R: TextRule> fmt::Display for TextValue<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<R: TextRule> Clone for TextValue<R> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _rule: PhantomData,
        }
    }
}

impl<R: TextRule> PartialEq for TextValue<R> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<R: TextRule> Eq for TextValue<R> {}

impl<R: TextRule> PartialOrd for TextValue<R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<R: TextRule> Ord for TextValue<R> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<R: TextRule> Hash for TextValue<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<R: TextRule> Serialize for TextValue<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de, R: TextRule> Deserialize<'de> for TextValue<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    enum PlainRule {}

    impl IntRule for PlainRule {
        const LABEL: &'static str = "Plain";
    }

    enum NonNegativeRule {}

    impl IntRule for NonNegativeRule {
        const LABEL: &'static str = "NonNegative";

        fn check(value: i64) -> Result<(), ValueObjectError> {
            if value < 0 {
                return Err(ValueObjectError::Invariant(format!(
                    "{} must not be negative, got {value}",
                    Self::LABEL
                )));
            }
            Ok(())
        }
    }

    enum NameRule {}

    impl TextRule for NameRule {
        const LABEL: &'static str = "Name";
    }

    type Plain = IntValue<PlainRule>;
    type NonNegative = IntValue<NonNegativeRule>;
    type Name = TextValue<NameRule>;

    // ---- construction ----

    #[test]
    fn test_new_stores_value_unchanged() {
        let v = Plain::new(10).unwrap();
        assert_eq!(v.get(), 10);
        assert_eq!(v.as_string(), "10");
    }

    #[test]
    fn test_precondition_rejects_negative() {
        let err = NonNegative::new(-1).unwrap_err();
        assert!(matches!(err, ValueObjectError::Invariant(_)));
    }

    #[test]
    fn test_precondition_accepts_zero_and_positive() {
        assert_eq!(NonNegative::new(0).unwrap().get(), 0);
        assert_eq!(NonNegative::new(42).unwrap().get(), 42);
    }

    // ---- any() ----

    #[test]
    fn test_any_true_from_one_upward() {
        assert!(Plain::new(1).unwrap().any());
        assert!(Plain::new(i64::MAX).unwrap().any());
    }

    #[test]
    fn test_any_false_below_one() {
        assert!(!Plain::new(0).unwrap().any());
        assert!(!Plain::new(-1).unwrap().any());
        assert!(!Plain::new(i64::MIN).unwrap().any());
    }

    // ---- equality and hashing ----

    #[test]
    fn test_equality_is_value_based() {
        let a = Plain::new(11).unwrap();
        let b = Plain::new(11).unwrap();
        let c = Plain::new(12).unwrap();

        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_ne!(a, c);
    }

    #[test]
    fn test_equal_values_hash_equally() {
        use std::collections::hash_map::DefaultHasher;

        fn hash_of(v: &Plain) -> u64 {
            let mut h = DefaultHasher::new();
            v.hash(&mut h);
            h.finish()
        }

        let a = Plain::new(123).unwrap();
        let b = Plain::new(123).unwrap();
        let c = Plain::new(124).unwrap();

        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(hash_of(&a), hash_of(&c));
    }

    // ---- ordering ----

    #[test]
    fn test_sort_yields_ascending_values() {
        let mut values = vec![
            Plain::new(20).unwrap(),
            Plain::new(30).unwrap(),
            Plain::new(10).unwrap(),
            Plain::new(20).unwrap(),
        ];
        values.sort();
        let raw: Vec<i64> = values.iter().map(Plain::get).collect();
        assert_eq!(raw, vec![10, 20, 20, 30]);
    }

    #[test]
    fn test_comparison_operators() {
        let smaller = Plain::new(10).unwrap();
        let smaller_alt = Plain::new(10).unwrap();
        let bigger = Plain::new(20).unwrap();

        assert!(smaller < bigger);
        assert!(!(bigger < smaller));
        assert!(smaller <= bigger);
        assert!(smaller <= smaller_alt);
        assert!(bigger > smaller);
        assert!(bigger >= smaller);
        assert!(smaller >= smaller_alt);
        assert!(smaller == smaller_alt);
        assert!(smaller != bigger);
    }

    // ---- text wrapper ----

    #[test]
    fn test_text_value_contract() {
        let a = Name::new("Test").unwrap();
        let b = Name::new("Test").unwrap();
        let c = Name::new("Other").unwrap();

        assert_eq!(a.get(), "Test");
        assert_eq!(a.as_string(), "Test");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(format!("{a}"), "Test");
    }

    #[test]
    fn test_text_sort_follows_natural_order() {
        let mut names = vec![
            Name::new("C").unwrap(),
            Name::new("A").unwrap(),
            Name::new("B").unwrap(),
            Name::new("B").unwrap(),
        ];
        names.sort();
        let raw: Vec<&str> = names.iter().map(Name::get).collect();
        assert_eq!(raw, vec!["A", "B", "B", "C"]);
    }

    // ---- rendering ----

    #[test]
    fn test_debug_names_the_subtype() {
        let v = NonNegative::new(7).unwrap();
        assert_eq!(format!("{v:?}"), "NonNegative(7)");
    }

    #[test]
    fn test_display_matches_as_string() {
        let v = Plain::new(-5).unwrap();
        assert_eq!(format!("{v}"), v.as_string());
    }

    // ---- serde ----

    #[test]
    fn test_serde_roundtrip() {
        let v = NonNegative::new(9).unwrap();
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "9");
        let back: NonNegative = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }

    #[test]
    fn test_deserialize_revalidates() {
        let err = serde_json::from_str::<NonNegative>("-5");
        assert!(err.is_err());
    }

    #[test]
    fn test_text_serde_roundtrip() {
        let v = Name::new("Test").unwrap();
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "\"Test\"");
        let back: Name = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}
