//! # Error Types — Value-Object Violation Taxonomy
//!
//! Defines the single error type shared by every value object in the
//! workspace. All errors use `thiserror` for derive-based `Display` and
//! `Error` implementations.
//!
//! ## Design
//!
//! Each variant corresponds to one distinct violation class, and the
//! classes are never conflated:
//!
//! - Construction preconditions (`Invariant`) are separate from closed-set
//!   membership failures (`DomainMembership`).
//! - Malformed text (`Format`) is separate from well-formed text whose
//!   values fall outside valid bounds (`Range`).
//! - A missing comparison argument (`NullArgument`) is its own class and is
//!   never reported as a parse failure.
//!
//! Strict constructors and factories return `Result<_, ValueObjectError>`;
//! try-factories return `Option<_>` and never surface an error value.

use thiserror::Error;

/// Top-level error type for value-object construction and access.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// A subtype-declared construction precondition failed.
    #[error("construction invariant violated: {0}")]
    Invariant(String),

    /// A raw ordinal has no corresponding declared member in a closed domain.
    #[error("no member of {domain} has ordinal {ordinal}")]
    DomainMembership {
        /// Name of the closed domain that rejected the ordinal.
        domain: &'static str,
        /// The undeclared ordinal.
        ordinal: i32,
    },

    /// Text does not match the expected token shape, width, or separator.
    #[error("malformed input {input:?}: {reason}")]
    Format {
        /// The full input text that failed tokenization.
        input: String,
        /// What the tokenizer expected instead.
        reason: String,
    },

    /// Numerically well-formed but outside valid bounds.
    #[error("out of range: {0}")]
    Range(String),

    /// A required comparison argument was absent.
    #[error("comparison argument must be present")]
    NullArgument,

    /// List access beyond bounds.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The length of the list.
        len: usize,
    },
}
