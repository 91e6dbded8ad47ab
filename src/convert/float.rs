use std::str::FromStr;

use crate::{
    error::{ConvertError, ConvertResult},
    outcome::Outcome,
};

/// Smallest positive value representable in 64-bit IEEE-754, roughly
/// `4.94e-324`. This is the documented malformed-text sentinel of
/// [`parse_double`]. Note that this is the smallest subnormal, not the
/// smallest normal value (`f64::MIN_POSITIVE`).
pub const DOUBLE_EPSILON: f64 = f64::from_bits(1);

/// Classifies one conversion attempt for any `FromStr` numeric type.
///
/// Absent input maps to `Missing`; everything else is handed to the
/// standard library parser after trimming surrounding whitespace. The float
/// parsers saturate out-of-range values to infinity instead of failing, so
/// no `Overflow` outcome is produced here.
fn outcome_of<T: FromStr>(text: Option<&str>) -> Outcome<T> {
    match text {
        Some(text) => text.trim().parse().map_or(Outcome::Malformed, Outcome::Value),
        None => Outcome::Missing,
    }
}

/// Classifies text as a single-precision conversion outcome.
///
/// # Parameters
/// - `text`: The text to convert, or `None` for absent input.
///
/// # Returns
/// - `Outcome::Value(f32)`: The parsed value for well-formed text.
/// - `Outcome::Malformed`: If the text is not a valid number.
/// - `Outcome::Missing`: If the input is `None`.
///
/// # Example
/// ```
/// use textnum::{Outcome, convert::float::float_outcome};
///
/// assert_eq!(float_outcome(Some("2.5")), Outcome::Value(2.5));
/// assert_eq!(float_outcome(Some("two")), Outcome::Malformed);
/// assert_eq!(float_outcome(None), Outcome::Missing);
/// ```
pub fn float_outcome(text: Option<&str>) -> Outcome<f32> {
    outcome_of(text)
}

/// Classifies text as a double-precision conversion outcome.
///
/// # Parameters
/// - `text`: The text to convert, or `None` for absent input.
///
/// # Returns
/// - `Outcome::Value(f64)`: The parsed value for well-formed text.
/// - `Outcome::Malformed`: If the text is not a valid number.
/// - `Outcome::Missing`: If the input is `None`.
///
/// # Example
/// ```
/// use textnum::{Outcome, convert::float::double_outcome};
///
/// assert_eq!(double_outcome(Some("-0.125e3")), Outcome::Value(-125.0));
/// assert_eq!(double_outcome(Some("")), Outcome::Malformed);
/// ```
pub fn double_outcome(text: Option<&str>) -> Outcome<f64> {
    outcome_of(text)
}

/// Converts text to its single-precision floating-point equivalent,
/// reporting failure through a flag.
///
/// Recognizes the standard numeric grammar including exponents and the
/// special `inf`, `infinity`, and `NaN` tokens in any case.
///
/// # Parameters
/// - `text`: The text to convert, or `None` for absent input.
///
/// # Returns
/// - `(true, value)`: If the conversion succeeded.
/// - `(false, 0.0)`: If the text was malformed or absent. No error is ever
///   raised.
///
/// # Example
/// ```
/// use textnum::try_parse_float;
///
/// assert_eq!(try_parse_float(Some("3.5")), (true, 3.5));
/// assert_eq!(try_parse_float(Some("12a")), (false, 0.0));
/// assert_eq!(try_parse_float(None), (false, 0.0));
/// ```
pub fn try_parse_float(text: Option<&str>) -> (bool, f32) {
    float_outcome(text).flagged()
}

/// Converts text to its single-precision floating-point equivalent,
/// reporting malformed text through a sentinel.
///
/// # Parameters
/// - `text`: The text to convert. Must not be `None`.
///
/// # Returns
/// - `Ok(value)`: The parsed value for well-formed text.
/// - `Ok(f32::NAN)`: If the text was malformed.
/// - `Err(ConvertError::MissingInput)`: If the input is `None`.
///
/// # Example
/// ```
/// use textnum::parse_float;
///
/// assert_eq!(parse_float(Some("3.14")).unwrap(), 3.14_f32);
/// assert!(parse_float(Some("not-a-number-text")).unwrap().is_nan());
/// assert!(parse_float(None).is_err());
/// ```
pub fn parse_float(text: Option<&str>) -> ConvertResult<f32> {
    match float_outcome(text) {
        Outcome::Value(value) => Ok(value),
        Outcome::Malformed | Outcome::Overflow => Ok(f32::NAN),
        Outcome::Missing => Err(ConvertError::MissingInput { param: "text" }),
    }
}

/// Converts text to its double-precision floating-point equivalent,
/// reporting failure through a flag.
///
/// # Parameters
/// - `text`: The text to convert, or `None` for absent input.
///
/// # Returns
/// - `(true, value)`: If the conversion succeeded.
/// - `(false, 0.0)`: If the text was malformed or absent. No error is ever
///   raised.
///
/// # Example
/// ```
/// use textnum::try_parse_double;
///
/// assert_eq!(try_parse_double(Some("1e3")), (true, 1000.0));
/// assert_eq!(try_parse_double(Some("")), (false, 0.0));
/// ```
pub fn try_parse_double(text: Option<&str>) -> (bool, f64) {
    double_outcome(text).flagged()
}

/// Converts text to its double-precision floating-point equivalent,
/// reporting malformed text through a sentinel.
///
/// Compatibility quirk: unlike [`parse_float`], the malformed-text sentinel
/// here is [`DOUBLE_EPSILON`] rather than NaN. Callers migrating between
/// the two widths must account for the different sentinel.
///
/// # Parameters
/// - `text`: The text to convert. Must not be `None`.
///
/// # Returns
/// - `Ok(value)`: The parsed value for well-formed text.
/// - `Ok(DOUBLE_EPSILON)`: If the text was malformed.
/// - `Err(ConvertError::MissingInput)`: If the input is `None`.
///
/// # Example
/// ```
/// use textnum::{DOUBLE_EPSILON, parse_double};
///
/// assert_eq!(parse_double(Some("2.25")).unwrap(), 2.25);
/// assert_eq!(parse_double(Some("garbage")).unwrap(), DOUBLE_EPSILON);
/// assert!(parse_double(None).is_err());
/// ```
pub fn parse_double(text: Option<&str>) -> ConvertResult<f64> {
    match double_outcome(text) {
        Outcome::Value(value) => Ok(value),
        Outcome::Malformed | Outcome::Overflow => Ok(DOUBLE_EPSILON),
        Outcome::Missing => Err(ConvertError::MissingInput { param: "text" }),
    }
}
