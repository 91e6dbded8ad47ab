use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use textnum::{
    ConvertError, DOUBLE_EPSILON, MALFORMED_DECIMAL, OVERFLOW_DECIMAL, Outcome,
    convert::{decimal::decimal_outcome, float::{double_outcome, float_outcome}},
    parse_decimal, parse_double, parse_float, try_parse_decimal, try_parse_double,
    try_parse_float,
};

fn assert_float_rejected(text: &str) {
    assert_eq!(try_parse_float(Some(text)), (false, 0.0), "input: {text:?}");
    assert!(parse_float(Some(text)).unwrap().is_nan(), "input: {text:?}");
}

fn assert_double_rejected(text: &str) {
    assert_eq!(try_parse_double(Some(text)), (false, 0.0), "input: {text:?}");
    assert_eq!(parse_double(Some(text)).unwrap(), DOUBLE_EPSILON, "input: {text:?}");
}

fn assert_decimal_malformed(text: &str) {
    assert_eq!(try_parse_decimal(Some(text)), (false, Decimal::ZERO), "input: {text:?}");
    assert_eq!(parse_decimal(Some(text)).unwrap(), MALFORMED_DECIMAL, "input: {text:?}");
}

#[test]
fn well_formed_floats_parse_in_both_styles() {
    assert_eq!(try_parse_float(Some("3.14")), (true, 3.14));
    assert_eq!(parse_float(Some("3.14")).unwrap(), 3.14_f32);
    assert_eq!(try_parse_float(Some("-0.5")), (true, -0.5));
    assert_eq!(try_parse_float(Some("2.5e3")), (true, 2500.0));
    assert_eq!(try_parse_float(Some("+7")), (true, 7.0));
    assert_eq!(try_parse_float(Some("0")), (true, 0.0));
}

#[test]
fn well_formed_doubles_parse_in_both_styles() {
    assert_eq!(try_parse_double(Some("2.25")), (true, 2.25));
    assert_eq!(parse_double(Some("2.25")).unwrap(), 2.25);
    assert_eq!(try_parse_double(Some("-1e-3")), (true, -0.001));
    assert_eq!(parse_double(Some("1.7976931348623157e308")).unwrap(), f64::MAX);
}

#[test]
fn malformed_float_text_is_rejected() {
    assert_float_rejected("abc");
    assert_float_rejected("");
    assert_float_rejected("12a");
    assert_float_rejected("1.2.3");
    assert_float_rejected("--5");
}

#[test]
fn malformed_double_text_returns_epsilon_sentinel() {
    assert_double_rejected("not-a-number-text");
    assert_double_rejected("");
    assert_double_rejected("12a");
}

#[test]
fn double_epsilon_sentinel_is_the_smallest_subnormal() {
    assert_eq!(DOUBLE_EPSILON, 4.940_656_458_412_465_4E-324);
    assert_eq!(DOUBLE_EPSILON.to_bits(), 1);
    assert!(DOUBLE_EPSILON > 0.0);
    assert_eq!(parse_double(Some("garbage")).unwrap().to_bits(), 1);
}

#[test]
fn missing_input_raises_from_parse_functions() {
    let expected = ConvertError::MissingInput { param: "text" };

    assert_eq!(parse_float(None).unwrap_err(), expected);
    assert_eq!(parse_double(None).unwrap_err(), expected);
    assert_eq!(parse_decimal(None).unwrap_err(), expected);
}

#[test]
fn missing_input_is_swallowed_by_try_functions() {
    assert_eq!(try_parse_float(None), (false, 0.0));
    assert_eq!(try_parse_double(None), (false, 0.0));
    assert_eq!(try_parse_decimal(None), (false, Decimal::ZERO));
}

#[test]
fn missing_input_error_names_the_parameter() {
    let message = parse_float(None).unwrap_err().to_string();
    assert!(message.contains("'text'"), "message: {message}");
}

#[test]
fn well_formed_decimals_parse_in_both_styles() {
    assert_eq!(try_parse_decimal(Some("12.34")), (true, dec!(12.34)));
    assert_eq!(parse_decimal(Some("12.34")).unwrap(), dec!(12.34));
    assert_eq!(parse_decimal(Some("-0.001")).unwrap(), dec!(-0.001));
    assert_eq!(parse_decimal(Some("1000000")).unwrap(), dec!(1000000));
}

#[test]
fn overflowing_decimal_text_returns_the_overflow_sentinel() {
    let spec_example = "99999999999999999999999999999999999999";
    assert_eq!(parse_decimal(Some(spec_example)).unwrap(), OVERFLOW_DECIMAL);
    assert_eq!(parse_decimal(Some(spec_example)).unwrap(), dec!(-2.2));
    assert_eq!(try_parse_decimal(Some(spec_example)), (false, Decimal::ZERO));

    let two_hundred_digits = "9".repeat(200);
    assert_eq!(parse_decimal(Some(&two_hundred_digits)).unwrap(), OVERFLOW_DECIMAL);
    assert_eq!(try_parse_decimal(Some(&two_hundred_digits)), (false, Decimal::ZERO));

    let negative_overflow = format!("-{two_hundred_digits}");
    assert_eq!(parse_decimal(Some(&negative_overflow)).unwrap(), OVERFLOW_DECIMAL);
}

#[test]
fn malformed_decimal_text_returns_the_malformed_sentinel() {
    assert_decimal_malformed("xyz");
    assert_decimal_malformed("hello");
    assert_decimal_malformed("");
    assert_decimal_malformed("12a");
    // Exponent forms are not part of the decimal grammar, even though the
    // underlying parser would accept them.
    assert_decimal_malformed("1e10");
    assert_decimal_malformed("1E5");
    assert_decimal_malformed("2.5e-3");
    // Same for underscore digit separators.
    assert_decimal_malformed("1_000");
}

#[test]
fn decimal_sentinels_are_distinguishable_literals() {
    assert_eq!(MALFORMED_DECIMAL, dec!(-1.1));
    assert_eq!(OVERFLOW_DECIMAL, dec!(-2.2));
    assert_ne!(MALFORMED_DECIMAL, OVERFLOW_DECIMAL);
}

#[test]
fn finite_floats_round_trip_through_to_string() {
    for value in [0.0_f32, 1.0, -1.0, 3.14, 1.5e-8, f32::MAX, f32::MIN] {
        let text = value.to_string();
        assert_eq!(try_parse_float(Some(&text)), (true, value), "input: {text:?}");
    }

    for value in [0.25_f64, -17.0, 2.5e100, f64::MAX] {
        let text = value.to_string();
        assert_eq!(try_parse_double(Some(&text)), (true, value), "input: {text:?}");
    }
}

#[test]
fn special_float_tokens_are_recognized() {
    assert_eq!(try_parse_float(Some("inf")), (true, f32::INFINITY));
    assert_eq!(try_parse_double(Some("-Infinity")), (true, f64::NEG_INFINITY));

    let (ok, value) = try_parse_float(Some("NaN"));
    assert!(ok);
    assert!(value.is_nan());
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    assert_eq!(try_parse_float(Some(" 3.14 ")), (true, 3.14));
    assert_eq!(try_parse_double(Some("\t-1.5\n")), (true, -1.5));
    assert_eq!(parse_decimal(Some("  10.5  ")).unwrap(), dec!(10.5));
}

#[test]
fn outcomes_classify_every_failure_mode() {
    assert_eq!(float_outcome(Some("1.5")), Outcome::Value(1.5));
    assert_eq!(float_outcome(Some("one")), Outcome::Malformed);
    assert_eq!(float_outcome(None), Outcome::Missing);

    assert_eq!(double_outcome(Some("1e2")), Outcome::Value(100.0));
    assert_eq!(double_outcome(Some("")), Outcome::Malformed);

    assert_eq!(decimal_outcome(Some("4.5")), Outcome::Value(dec!(4.5)));
    assert_eq!(decimal_outcome(Some("4x5")), Outcome::Malformed);
    assert_eq!(decimal_outcome(Some(&"1".repeat(60))), Outcome::Overflow);
    assert_eq!(decimal_outcome(None), Outcome::Missing);
}
