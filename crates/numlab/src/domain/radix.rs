//! Positional fraction parsing
//!
//! This module interprets digit strings as the fractional part of a
//! number in bases 2 through 16.

use crate::constants::{MAX_BASE, MIN_BASE};
use crate::error::NumericError;

/// Value of a single digit character, case-insensitive
///
/// Accepts '0'-'9' and 'a'-'f'/'A'-'F'; the mapped value must be below
/// `base`. Any other character is rejected the same way as an
/// out-of-base digit.
fn digit_value(c: char, base: u32) -> Result<u32, NumericError> {
    let value = c
        .to_digit(MAX_BASE)
        .ok_or(NumericError::DigitOutOfRange { digit: c, base })?;

    if value >= base {
        return Err(NumericError::DigitOutOfRange { digit: c, base });
    }

    Ok(value)
}

/// Interpret `digits` as the fractional part of a number in `base`
///
/// Computes sum(digit_i * base^-(i+1)), the value of "0.digits" read in
/// the given base. An absent or empty digit string yields 0.0.
///
/// # Errors
/// - `BaseOutOfRange` if `base` is outside [2, 16]
/// - `DigitOutOfRange` if any character maps to a value >= `base`
pub fn fraction_from_digits(base: u32, digits: Option<&str>) -> Result<f64, NumericError> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(NumericError::BaseOutOfRange { base });
    }

    let Some(digits) = digits else {
        return Ok(0.0);
    };

    let mut fraction = 0.0;
    let mut divisor = 1.0 / base as f64;

    for c in digits.chars() {
        let value = digit_value(c, base)?;
        fraction += value as f64 * divisor;
        divisor /= base as f64;
    }

    Ok(fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_half_in_base16() {
        assert_eq!(fraction_from_digits(16, Some("8")), Ok(0.5));
    }

    #[test]
    fn test_fraction_half_in_base2() {
        assert_eq!(fraction_from_digits(2, Some("1")), Ok(0.5));
    }

    #[test]
    fn test_fraction_decimal_digits() {
        // Base 10 divisors are inexact in binary floating point
        let value = fraction_from_digits(10, Some("25")).unwrap();
        assert!((value - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_fraction_case_insensitive() {
        let lower = fraction_from_digits(16, Some("ab")).unwrap();
        let upper = fraction_from_digits(16, Some("AB")).unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower, 10.0 / 16.0 + 11.0 / 256.0);
    }

    #[test]
    fn test_fraction_empty_or_absent_is_zero() {
        assert_eq!(fraction_from_digits(8, Some("")), Ok(0.0));
        assert_eq!(fraction_from_digits(8, None), Ok(0.0));
    }

    #[test]
    fn test_fraction_base_out_of_range() {
        assert_eq!(
            fraction_from_digits(17, Some("8")),
            Err(NumericError::BaseOutOfRange { base: 17 })
        );
        assert_eq!(
            fraction_from_digits(1, Some("0")),
            Err(NumericError::BaseOutOfRange { base: 1 })
        );
    }

    #[test]
    fn test_fraction_digit_not_below_base() {
        assert_eq!(
            fraction_from_digits(2, Some("2")),
            Err(NumericError::DigitOutOfRange {
                digit: '2',
                base: 2
            })
        );
    }

    #[test]
    fn test_fraction_non_digit_character() {
        assert_eq!(
            fraction_from_digits(16, Some("g")),
            Err(NumericError::DigitOutOfRange {
                digit: 'g',
                base: 16
            })
        );
    }
}
