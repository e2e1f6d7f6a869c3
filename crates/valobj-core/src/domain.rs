//! # Enum-Domain Value Objects — Closed Named-Constant Sets
//!
//! A domain is a closed set of named constants, modeled as a plain Rust
//! enum implementing [`EnumDomain`]. Because the enum is closed, a
//! constructed [`EnumValue`] can never hold an undeclared member; the
//! membership check survives only on the raw-ordinal ingestion path
//! ([`EnumValue::from_ordinal`]), where external integers enter the system.
//!
//! ## Invariants
//!
//! - `members()` lists every declared member exactly once, in ordinal order.
//! - Ordinals are unique across members; ordering by ordinal is therefore
//!   consistent with equality.
//! - One domain enum per value-object subtype: distinct domains are
//!   distinct Rust types, so cross-domain comparison does not compile.

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValueObjectError;

/// A closed enumeration of named integer constants.
///
/// Every `match` on an implementing enum is exhaustive; adding a member
/// forces every consumer to handle it at compile time.
pub trait EnumDomain: Copy + Eq + Hash + fmt::Debug + 'static {
    /// The domain's name, used in error messages.
    const LABEL: &'static str;

    /// All declared members in ordinal order.
    fn members() -> &'static [Self];

    /// The member's declared name.
    fn name(&self) -> &'static str;

    /// The member's underlying ordinal.
    fn ordinal(&self) -> i32;

    /// Resolve a raw ordinal to a declared member.
    ///
    /// This is the only place arbitrary integers can enter the domain.
    ///
    /// # Errors
    ///
    /// Returns [`ValueObjectError::DomainMembership`] when no declared
    /// member carries the ordinal.
    fn from_ordinal(ordinal: i32) -> Result<Self, ValueObjectError> {
        Self::members()
            .iter()
            .copied()
            .find(|m| m.ordinal() == ordinal)
            .ok_or(ValueObjectError::DomainMembership {
                domain: Self::LABEL,
                ordinal,
            })
    }
}

/// An immutable value object constrained to the members of domain `E`.
pub struct EnumValue<E: EnumDomain> {
    value: E,
}

impl<E: EnumDomain> EnumValue<E> {
    /// Wrap a declared member. Infallible: the closed enum cannot
    /// represent an undeclared value.
    pub fn new(value: E) -> Self {
        Self { value }
    }

    /// Construct from a raw ordinal.
    ///
    /// # Errors
    ///
    /// Returns [`ValueObjectError::DomainMembership`] when the ordinal does
    /// not correspond to any declared member.
    pub fn from_ordinal(ordinal: i32) -> Result<Self, ValueObjectError> {
        E::from_ordinal(ordinal).map(Self::new)
    }

    /// The wrapped member.
    pub fn get(&self) -> E {
        self.value
    }

    /// The member's declared name (not its ordinal).
    pub fn as_string(&self) -> &'static str {
        self.value.name()
    }

    /// The member's underlying ordinal.
    pub fn as_int(&self) -> i32 {
        self.value.ordinal()
    }

    /// Decimal rendering of the underlying ordinal.
    pub fn as_int_string(&self) -> String {
        self.value.ordinal().to_string()
    }
}

impl<E: EnumDomain> fmt::Debug for EnumValue<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(E::LABEL).field(&self.value).finish()
    }
}

impl<E: EnumDomain> fmt::Display for EnumValue<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value.name())
    }
}

impl<E: EnumDomain> Clone for EnumValue<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: EnumDomain> Copy for EnumValue<E> {}

impl<E: EnumDomain> PartialEq for EnumValue<E> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<E: EnumDomain> Eq for EnumValue<E> {}

impl<E: EnumDomain> PartialOrd for EnumValue<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Order follows the domain's ordinal order. Ordinal uniqueness (an
// `EnumDomain` invariant) keeps this consistent with equality.
impl<E: EnumDomain> Ord for EnumValue<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.ordinal().cmp(&other.value.ordinal())
    }
}

impl<E: EnumDomain> Hash for EnumValue<E> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<E: EnumDomain + Serialize> Serialize for EnumValue<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, E: EnumDomain + Deserialize<'de>> Deserialize<'de> for EnumValue<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        E::deserialize(deserializer).map(Self::new)
    }
}
