//! # textnum
//!
//! textnum is a small set of helpers that convert textual input into numeric
//! values: single-precision floats, double-precision floats, and
//! arbitrary-precision decimals. Each target type comes in two flavors: a
//! "try" function returning a success flag plus a value, and a "parse"
//! function that reports malformed text through a sentinel value instead of
//! an error.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Converts text into the supported numeric types.
///
/// This module contains the six public conversion functions, grouped by
/// target type. All of them delegate the actual lexing to the standard
/// platform parsers and only decide how a failure is reported back to the
/// caller.
///
/// # Responsibilities
/// - Produces an [`Outcome`] for every conversion attempt.
/// - Projects outcomes into the "try" shape (flag plus value) and the
///   "parse" shape (sentinel value, error only for missing input).
/// - Defines the documented sentinel values for each target type.
pub mod convert;
/// Provides the error type for conversions.
///
/// The only condition that ever surfaces as an error is input that is
/// absent entirely, which is treated as a programming mistake on the
/// caller's side rather than bad data.
///
/// # Responsibilities
/// - Defines [`ConvertError`] and the [`ConvertResult`] alias.
/// - Attaches the name of the offending parameter for debugging.
pub mod error;
/// Describes the result of a single conversion attempt.
///
/// Every conversion is first expressed as a tagged [`Outcome`] value, and
/// the public call styles are derived from it. This keeps the failure
/// classification in one place no matter how the caller wants failures
/// reported.
///
/// # Responsibilities
/// - Defines the [`Outcome`] variants for success, malformed text,
///   numeric overflow, and missing input.
/// - Provides the flag-style projection shared by all "try" functions.
pub mod outcome;

pub use convert::{
    decimal::{MALFORMED_DECIMAL, OVERFLOW_DECIMAL, parse_decimal, try_parse_decimal},
    float::{DOUBLE_EPSILON, parse_double, parse_float, try_parse_double, try_parse_float},
};
pub use error::{ConvertError, ConvertResult};
pub use outcome::Outcome;
