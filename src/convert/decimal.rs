use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{
    error::{ConvertError, ConvertResult},
    outcome::Outcome,
};

/// Sentinel returned by [`parse_decimal`] for malformed text.
pub const MALFORMED_DECIMAL: Decimal = dec!(-1.1);
/// Sentinel returned by [`parse_decimal`] for numeric text outside the
/// representable decimal range.
pub const OVERFLOW_DECIMAL: Decimal = dec!(-2.2);

/// Reports whether the text follows the plain decimal grammar: an optional
/// sign, digits, and at most one decimal point. Exponent forms and
/// underscore separators do not belong to the decimal grammar.
///
/// This scan gates the platform parse. The platform parser accepts a wider
/// grammar (scientific notation, underscore digit separators) and rejects
/// malformed and out-of-range input with the same error type, so the gate
/// serves two purposes: text that fails it is malformed, and text that
/// passes it can only fail the platform parse for range reasons.
fn is_plain_number(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);

    let mut seen_digit = false;
    let mut seen_point = false;

    for c in unsigned.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }

    seen_digit
}

/// Classifies text as a decimal conversion outcome.
///
/// # Parameters
/// - `text`: The text to convert, or `None` for absent input.
///
/// # Returns
/// - `Outcome::Value(Decimal)`: The parsed value for well-formed text in
///   range.
/// - `Outcome::Overflow`: If the text is numeric but outside the decimal
///   range.
/// - `Outcome::Malformed`: If the text is not a valid decimal number.
/// - `Outcome::Missing`: If the input is `None`.
///
/// # Example
/// ```
/// use rust_decimal_macros::dec;
/// use textnum::{Outcome, convert::decimal::decimal_outcome};
///
/// assert_eq!(decimal_outcome(Some("10.5")), Outcome::Value(dec!(10.5)));
/// assert_eq!(decimal_outcome(Some("xyz")), Outcome::Malformed);
/// assert_eq!(decimal_outcome(Some("1e10")), Outcome::Malformed);
///
/// let two_hundred_digits = "9".repeat(200);
/// assert_eq!(decimal_outcome(Some(&two_hundred_digits)), Outcome::Overflow);
/// ```
pub fn decimal_outcome(text: Option<&str>) -> Outcome<Decimal> {
    match text {
        Some(text) => {
            let text = text.trim();
            if !is_plain_number(text) {
                return Outcome::Malformed;
            }
            text.parse::<Decimal>().map_or(Outcome::Overflow, Outcome::Value)
        },
        None => Outcome::Missing,
    }
}

/// Converts text to its decimal equivalent, reporting failure through a
/// flag.
///
/// Compatibility quirk: this function swallows every failure mode,
/// including absent input, while its "parse" sibling raises on absent
/// input.
///
/// # Parameters
/// - `text`: The text to convert, or `None` for absent input.
///
/// # Returns
/// - `(true, value)`: If the conversion succeeded.
/// - `(false, 0)`: If the text was malformed, out of range, or absent. No
///   error is ever raised.
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use textnum::try_parse_decimal;
///
/// assert_eq!(try_parse_decimal(Some("12.34")), (true, dec!(12.34)));
/// assert_eq!(try_parse_decimal(Some("hello")), (false, Decimal::ZERO));
/// assert_eq!(try_parse_decimal(None), (false, Decimal::ZERO));
/// ```
pub fn try_parse_decimal(text: Option<&str>) -> (bool, Decimal) {
    decimal_outcome(text).flagged()
}

/// Converts text to its decimal equivalent, reporting failure through one
/// of two sentinel values.
///
/// The two sentinels are ordinary in-range decimals, distinguishable from a
/// genuine result only by their literal values. Callers that may feed
/// untrusted text should prefer [`try_parse_decimal`] or
/// [`decimal_outcome`].
///
/// # Parameters
/// - `text`: The text to convert. Must not be `None`.
///
/// # Returns
/// - `Ok(value)`: The parsed value for well-formed text in range.
/// - `Ok(OVERFLOW_DECIMAL)`: `-2.2`, if the text was numeric but outside
///   the representable range.
/// - `Ok(MALFORMED_DECIMAL)`: `-1.1`, if the text was malformed in any
///   other way.
/// - `Err(ConvertError::MissingInput)`: If the input is `None`.
///
/// # Example
/// ```
/// use rust_decimal_macros::dec;
/// use textnum::{MALFORMED_DECIMAL, OVERFLOW_DECIMAL, parse_decimal};
///
/// assert_eq!(parse_decimal(Some("0.001")).unwrap(), dec!(0.001));
/// assert_eq!(parse_decimal(Some("hello")).unwrap(), MALFORMED_DECIMAL);
///
/// let overflowing = "99999999999999999999999999999999999999";
/// assert_eq!(parse_decimal(Some(overflowing)).unwrap(), OVERFLOW_DECIMAL);
/// ```
pub fn parse_decimal(text: Option<&str>) -> ConvertResult<Decimal> {
    match decimal_outcome(text) {
        Outcome::Value(value) => Ok(value),
        Outcome::Overflow => Ok(OVERFLOW_DECIMAL),
        Outcome::Malformed => Ok(MALFORMED_DECIMAL),
        Outcome::Missing => Err(ConvertError::MissingInput { param: "text" }),
    }
}
