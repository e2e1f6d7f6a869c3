//! # valobj-temporal — Strict-Format Date and Time Value Objects
//!
//! Calendar [`Date`] and clock [`Time`] built on the valobj-core contract:
//! validated at construction, immutable for life, value-based equality and
//! total ordering, canonical zero-padded rendering.
//!
//! Both types share one parsing pipeline: tokenize the text (fixed-width
//! digit runs or separator-delimited fields), parse each field as an
//! integer, then materialize a calendar-valid or clock-valid triple.
//! Token-shape problems are [`ValueObjectError::Format`]; well-formed
//! numbers outside valid bounds are [`ValueObjectError::Range`].
//!
//! Two creation disciplines sit on top of the pipeline:
//!
//! - **Strict factories** (`create_by`, `create_by_with`) return
//!   `Result` and surface the violation.
//! - **Try factories** (`try_create_by`, `try_create_by_with`) return
//!   `Option` and never surface an error value.
//!
//! ## Crate Policy
//!
//! - Calendar and clock validity checks delegate to `chrono`; there is no
//!   hand-rolled leap-year logic here.
//! - The only external read is the local system clock, in
//!   [`Time::as_todays_datetime()`], [`Time::now()`], and
//!   [`Date::today()`]. Everything else is pure.
//! - No `unsafe` code, no `panic!()` or `.unwrap()` outside tests.

pub mod date;
mod parse;
pub mod time;

pub use date::Date;
pub use time::Time;
pub use valobj_core::ValueObjectError;
