//! Float to text conversion with a fixed number of significant digits
//!
//! Uses fixed-capacity heapless strings so formatting never allocates while
//! the cursor is moving.

use core::fmt::Write;

use heapless::String;

use crate::config::{DisplayMode, MAX_SIGNIFICANT_DIGITS};

use super::UNDEFINED_TEXT;

/// Byte capacity of a formatted float (`-0.0001234567890123` or
/// `-1.2345678901234E-308` both fit).
pub const FLOAT_BUFFER_SIZE: usize = 32;

/// Smallest decimal exponent still written without scientific notation
pub const MIN_DECIMAL_EXPONENT: i32 = -4;

pub type FloatText = String<FLOAT_BUFFER_SIZE>;

/// Format `value` with `significant_digits` significant digits.
///
/// - NaN is written as `undef`, infinities as `inf` / `-inf`
/// - both zeros are written as `0`
/// - trailing fractional zeros are dropped (`2.500` becomes `2.5`)
/// - scientific notation is `<mantissa>E<exponent>` (`1.5E-7`)
///
/// In [`DisplayMode::Decimal`] the plain form is used while the rounded
/// exponent lies in `MIN_DECIMAL_EXPONENT..significant_digits`.
pub fn format_float(value: f64, significant_digits: u8, mode: DisplayMode) -> FloatText {
    let mut text = FloatText::new();

    if value.is_nan() {
        let _ = text.push_str(UNDEFINED_TEXT);
        return text;
    }
    if value.is_infinite() {
        let _ = text.push_str(if value < 0.0 { "-inf" } else { "inf" });
        return text;
    }
    if value == 0.0 {
        let _ = text.push('0');
        return text;
    }

    let digits = significant_digits.clamp(1, MAX_SIGNIFICANT_DIGITS) as usize;

    // Rounding to the requested digits can bump the exponent (9.99 -> 1.0e1),
    // so the exponent is read back from the rounded scientific form.
    let mut scientific = FloatText::new();
    let _ = write!(scientific, "{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    let decimal = mode == DisplayMode::Decimal
        && exponent >= MIN_DECIMAL_EXPONENT
        && exponent < digits as i32;

    if decimal {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        let _ = write!(text, "{:.*}", decimals, value);
        trim_fraction(&mut text);
    } else {
        let _ = text.push_str(mantissa);
        trim_fraction(&mut text);
        let _ = write!(text, "E{}", exponent);
    }
    text
}

/// Drop trailing zeros after a decimal point, then the point itself.
fn trim_fraction<const N: usize>(text: &mut String<N>) {
    if !text.contains('.') {
        return;
    }
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decimal(value: f64, digits: u8) -> FloatText {
        format_float(value, digits, DisplayMode::Decimal)
    }

    #[test]
    fn test_integers_have_no_fraction() {
        assert_eq!(decimal(4.0, 7).as_str(), "4");
        assert_eq!(decimal(-12.0, 7).as_str(), "-12");
        assert_eq!(decimal(1234567.0, 7).as_str(), "1234567");
    }

    #[test]
    fn test_fractions_are_trimmed() {
        assert_eq!(decimal(2.5, 7).as_str(), "2.5");
        assert_eq!(decimal(0.1 + 0.2, 7).as_str(), "0.3");
        assert_eq!(decimal(1.0 / 3.0, 7).as_str(), "0.3333333");
        assert_eq!(decimal(0.00012, 7).as_str(), "0.00012");
    }

    #[test]
    fn test_rounding_carries_into_exponent() {
        assert_eq!(decimal(9.99996, 5).as_str(), "10");
        assert_eq!(decimal(99999.6, 5).as_str(), "1E5");
    }

    #[test]
    fn test_switches_to_scientific_out_of_range() {
        assert_eq!(decimal(12345678.0, 7).as_str(), "1.234568E7");
        assert_eq!(decimal(0.00001234, 7).as_str(), "1.234E-5");
        assert_eq!(decimal(-2.0e-300, 3).as_str(), "-2E-300");
    }

    #[test]
    fn test_scientific_mode() {
        let text = format_float(1500.0, 7, DisplayMode::Scientific);
        assert_eq!(text.as_str(), "1.5E3");
        let text = format_float(0.25, 3, DisplayMode::Scientific);
        assert_eq!(text.as_str(), "2.5E-1");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(decimal(f64::NAN, 7).as_str(), UNDEFINED_TEXT);
        assert_eq!(decimal(f64::INFINITY, 7).as_str(), "inf");
        assert_eq!(decimal(f64::NEG_INFINITY, 7).as_str(), "-inf");
        assert_eq!(decimal(-0.0, 7).as_str(), "0");
    }

    #[test]
    fn test_digit_count_is_clamped() {
        assert_eq!(decimal(3.14159, 0).as_str(), "3");
        let widest = decimal(-1.0 / 3.0 * 1.0e-300, u8::MAX);
        assert!(widest.len() <= FLOAT_BUFFER_SIZE);
        assert!(widest.starts_with("-3.333333333333"));
    }
}
