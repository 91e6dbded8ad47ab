/// Decimal conversions.
///
/// Converts text into `rust_decimal::Decimal` values. Besides the shared
/// success and malformed cases, decimals can genuinely overflow their
/// representable range, and the "parse" flavor distinguishes that case with
/// its own sentinel value.
pub mod decimal;
/// Floating-point conversions.
///
/// Converts text into `f32` and `f64` values. Both widths share the same
/// grammar and the same delegation to the standard library parser; they
/// differ only in their documented failure sentinels.
pub mod float;
