//! # valobj-core — Immutable Value-Object Primitives
//!
//! This crate is the foundation of the valobj workspace. It defines small,
//! self-validating wrapper types whose identity is entirely determined by
//! the value they hold, never by allocation identity.
//!
//! ## Key Design Principles
//!
//! 1. **Validation at construction, once.** Every type is built through a
//!    validating constructor; a successfully constructed instance
//!    satisfies its declared invariants for its entire lifetime. There is
//!    no mutation and no partially-valid state.
//!
//! 2. **Rules instead of inheritance.** A concrete subtype is declared by
//!    naming a rule type (`IntRule`, `TextRule`, `ListRule`) that carries
//!    its precondition or normalization step. Distinct rules are distinct
//!    Rust types, so structurally-equal-but-differently-typed instances
//!    cannot even be compared.
//!
//! 3. **Closed domains are closed enums.** `EnumValue` wraps a plain Rust
//!    enum implementing [`EnumDomain`]; the membership check survives only
//!    where raw ordinals enter the system.
//!
//! 4. **One error taxonomy.** Every violation class has its own
//!    [`ValueObjectError`] variant, and the classes are never conflated.
//!
//! ## Crate Policy
//!
//! - No dependencies on other valobj crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests. The one panicking path is
//!   slice-style indexing on `FirstClassList`, which follows the underlying
//!   sequence's bounds rules; the checked `get` accessor is the fallible
//!   alternative.
//! - All public types implement `Serialize`/`Deserialize`, and
//!   deserialization re-runs construction validation.

pub mod domain;
pub mod error;
pub mod list;
pub mod scalar;

// Re-export primary types for ergonomic imports.
pub use domain::{EnumDomain, EnumValue};
pub use error::ValueObjectError;
pub use list::{ensure_distinct, ensure_not_empty, FirstClassList, ListRule};
pub use scalar::{IntRule, IntValue, TextRule, TextValue};
