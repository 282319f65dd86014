use numlab::{NumericError, fraction_from_digits};

#[test]
fn test_fraction_known_halves() {
    assert_eq!(fraction_from_digits(16, Some("8")), Ok(0.5));
    assert_eq!(fraction_from_digits(2, Some("1")), Ok(0.5));
}

#[test]
fn test_fraction_multi_digit_base10() {
    // Base 10 divisors are inexact in binary floating point, so the
    // digit-by-digit sum is compared with a tolerance
    let value = fraction_from_digits(10, Some("125")).unwrap();
    assert!((value - 0.125).abs() < 1e-12);
}

#[test]
fn test_fraction_binary_expansion() {
    // 0.101 in base 2 = 1/2 + 1/8
    assert_eq!(fraction_from_digits(2, Some("101")), Ok(0.625));
}

#[test]
fn test_fraction_hex_letters_both_cases() {
    assert_eq!(
        fraction_from_digits(16, Some("C")),
        fraction_from_digits(16, Some("c"))
    );
    assert_eq!(fraction_from_digits(16, Some("C")), Ok(0.75));
}

#[test]
fn test_fraction_empty_and_absent_digits() {
    // Branch: no digit to accumulate
    assert_eq!(fraction_from_digits(10, Some("")), Ok(0.0));
    assert_eq!(fraction_from_digits(10, None), Ok(0.0));
}

#[test]
fn test_fraction_base_above_range() {
    assert!(matches!(
        fraction_from_digits(17, Some("8")),
        Err(NumericError::BaseOutOfRange { base: 17 })
    ));
}

#[test]
fn test_fraction_base_below_range() {
    assert!(matches!(
        fraction_from_digits(0, Some("0")),
        Err(NumericError::BaseOutOfRange { base: 0 })
    ));
}

#[test]
fn test_fraction_base_checked_before_digits() {
    // An out-of-range base wins even when the digit string is empty
    assert!(matches!(
        fraction_from_digits(17, Some("")),
        Err(NumericError::BaseOutOfRange { base: 17 })
    ));
}

#[test]
fn test_fraction_digit_value_at_least_base() {
    assert!(matches!(
        fraction_from_digits(8, Some("78")),
        Err(NumericError::DigitOutOfRange {
            digit: '8',
            base: 8
        })
    ));
}
