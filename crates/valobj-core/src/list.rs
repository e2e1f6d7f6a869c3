//! # First-Class Lists — Frozen, Normalized Collections
//!
//! A first-class list wraps an entire ordered sequence as one value
//! object. A rule type supplies the normalization step, which runs exactly
//! once at construction: it may reorder the input and must reject
//! disallowed shapes. Whatever it returns becomes the backing storage and
//! is never mutated afterwards.
//!
//! ## Normalization Contract
//!
//! `ListRule::normalize` must be idempotent: feeding its own output back
//! in returns the same sequence. This keeps deserialization (which
//! re-normalizes) a no-op for already-normalized data.
//!
//! ```
//! use valobj_core::{ensure_distinct, ensure_not_empty, FirstClassList, ListRule, ValueObjectError};
//!
//! enum PickSetRule {}
//!
//! impl ListRule<i64> for PickSetRule {
//!     const LABEL: &'static str = "PickSet";
//!
//!     fn normalize(mut items: Vec<i64>) -> Result<Vec<i64>, ValueObjectError> {
//!         ensure_not_empty(&items, Self::LABEL)?;
//!         ensure_distinct(&items, Self::LABEL)?;
//!         items.sort_unstable();
//!         Ok(items)
//!     }
//! }
//!
//! let picks: FirstClassList<i64, PickSetRule> =
//!     FirstClassList::new([3, 1, 2]).unwrap();
//! assert_eq!(picks.to_string(), "PickSet { { 1 }. { 2 }. { 3 } }");
//! ```

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Index;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValueObjectError;

/// Normalization and validation rule for a first-class list subtype.
pub trait ListRule<V> {
    /// The concrete subtype's name, used in rendering and error messages.
    const LABEL: &'static str;

    /// Normalize the input into the stored sequence. The default is the
    /// identity: store as given. Must be idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`ValueObjectError::Invariant`] when the input has a
    /// disallowed shape.
    fn normalize(items: Vec<V>) -> Result<Vec<V>, ValueObjectError> {
        Ok(items)
    }
}

/// Reject an empty input sequence.
///
/// # Errors
///
/// Returns [`ValueObjectError::Invariant`] when `items` is empty.
pub fn ensure_not_empty<V>(items: &[V], label: &str) -> Result<(), ValueObjectError> {
    if items.is_empty() {
        return Err(ValueObjectError::Invariant(format!(
            "{label} must not be empty"
        )));
    }
    Ok(())
}

/// Reject an input sequence containing duplicate elements.
///
/// # Errors
///
/// Returns [`ValueObjectError::Invariant`] when any element occurs twice.
pub fn ensure_distinct<V: Eq + Hash>(items: &[V], label: &str) -> Result<(), ValueObjectError> {
    let mut seen = HashSet::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        if !seen.insert(item) {
            return Err(ValueObjectError::Invariant(format!(
                "{label} must not contain duplicates (position {index})"
            )));
        }
    }
    Ok(())
}

/// An immutable, normalized sequence of `V`, shaped by rule `R`.
///
/// The inner storage is private; the only constructor runs the rule's
/// normalization, so every reachable instance holds exactly a normalized
/// sequence.
pub struct FirstClassList<V, R: ListRule<V>> {
    items: Vec<V>,
    _rule: PhantomData<fn() -> R>,
}

impl<V, R: ListRule<V>> FirstClassList<V, R> {
    /// Construct from any finite input, running the rule's normalization
    /// once. The normalized sequence becomes the frozen backing storage.
    ///
    /// # Errors
    ///
    /// Propagates the rule's [`ValueObjectError::Invariant`] unchanged.
    pub fn new(items: impl IntoIterator<Item = V>) -> Result<Self, ValueObjectError> {
        let items = R::normalize(items.into_iter().collect())?;
        Ok(Self {
            items,
            _rule: PhantomData,
        })
    }

    /// Checked element access.
    ///
    /// # Errors
    ///
    /// Returns [`ValueObjectError::IndexOutOfRange`] when `index` is not in
    /// `[0, len)`.
    pub fn get(&self, index: usize) -> Result<&V, ValueObjectError> {
        self.items.get(index).ok_or(ValueObjectError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True iff no elements are stored.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Restartable iteration over the stored elements in stored order.
    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.items.iter()
    }

    /// The stored sequence as a slice.
    pub fn as_slice(&self) -> &[V] {
        &self.items
    }
}

impl<V, R: ListRule<V>> Index<usize> for FirstClassList<V, R> {
    type Output = V;

    /// Unchecked-style indexing with the underlying slice's bounds rules.
    fn index(&self, index: usize) -> &V {
        &self.items[index]
    }
}

impl<'a, V, R: ListRule<V>> IntoIterator for &'a FirstClassList<V, R> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<V: fmt::Debug, R: ListRule<V>> fmt::Debug for FirstClassList<V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(R::LABEL).field(&self.items).finish()
    }
}

impl<V: fmt::Display, R: ListRule<V>> fmt::Display for FirstClassList<V, R> {
    /// Renders as `"<TypeName> { { e1 }. { e2 }. ... { en } }"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{ ", R::LABEL)?;
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                write!(f, ". ")?;
            }
            write!(f, "{{ {item} }}")?;
        }
        write!(f, " }}")
    }
}

impl<V: Clone, R: ListRule<V>> Clone for FirstClassList<V, R> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            _rule: PhantomData,
        }
    }
}

impl<V: PartialEq, R: ListRule<V>> PartialEq for FirstClassList<V, R> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<V: Eq, R: ListRule<V>> Eq for FirstClassList<V, R> {}

impl<V: PartialOrd, R: ListRule<V>> PartialOrd for FirstClassList<V, R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.items.partial_cmp(&other.items)
    }
}

impl<V: Ord, R: ListRule<V>> Ord for FirstClassList<V, R> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.items.cmp(&other.items)
    }
}

impl<V: Hash, R: ListRule<V>> Hash for FirstClassList<V, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

impl<V: Serialize, R: ListRule<V>> Serialize for FirstClassList<V, R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'de, V: Deserialize<'de>, R: ListRule<V>> Deserialize<'de> for FirstClassList<V, R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<V>::deserialize(deserializer)?;
        Self::new(items).map_err(serde::de::Error::custom)
    }
}
