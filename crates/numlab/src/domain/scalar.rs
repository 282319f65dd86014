//! Scalar ordering and integer digit utilities
//!
//! Three-value descending ordering, Euclidean GCD and even-position
//! digit extraction. The ordering routine is a fixed three-comparator
//! network; each comparison is an independent branch exercised by the
//! coverage tests.

use std::mem;

use crate::constants::DECIMAL_RADIX;
use crate::error::NumericError;

/// Smaller of two values; on ties the second operand is returned
pub fn min2<T: PartialOrd>(a: T, b: T) -> T {
    if a < b { a } else { b }
}

/// Reorder three values into descending order
///
/// Fixed comparison network: compare (x, y), then (x, z), then (y, z),
/// swapping whenever the left operand is smaller. Exactly three
/// comparisons are performed regardless of the input permutation.
/// This is a minimal decision structure for three elements, not a
/// general sort.
pub fn sort_descending<T: PartialOrd>(x: &mut T, y: &mut T, z: &mut T) {
    if *x < *y {
        mem::swap(x, y);
    }
    if *x < *z {
        mem::swap(x, z);
    }
    if *y < *z {
        mem::swap(y, z);
    }
}

/// Greatest common divisor via the Euclidean remainder algorithm
///
/// Repeatedly replaces (a, b) with (b, a mod b) until b reaches 0, so
/// the loop runs O(log min(a, b)) iterations.
///
/// # Errors
/// `NonPositiveOperand` if either operand is zero or negative
pub fn gcd(mut a: i64, mut b: i64) -> Result<i64, NumericError> {
    if a <= 0 || b <= 0 {
        return Err(NumericError::NonPositiveOperand { a, b });
    }

    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }

    Ok(a)
}

/// Reverse the decimal digits of a number
fn reverse_digits(mut n: u64) -> u64 {
    let mut reversed = 0;
    while n > 0 {
        reversed = reversed * DECIMAL_RADIX + n % DECIMAL_RADIX;
        n /= DECIMAL_RADIX;
    }
    reversed
}

/// Build a number from the digits at even positions of `n`
///
/// Positions are numbered from 1 starting at the least significant
/// digit. Digits at even positions are collected least-significant
/// first, then the collected sequence is reversed so the result keeps
/// the original left-to-right order among the retained digits:
/// 1234 keeps positions 2 and 4 (digits 3 and 1) and yields 13.
/// The sign of `n` is ignored.
pub fn even_position_digits(n: i64) -> i64 {
    let mut temp = n.unsigned_abs();
    let mut collected = 0u64;
    let mut position = 0u32;

    while temp > 0 {
        let digit = temp % DECIMAL_RADIX;
        temp /= DECIMAL_RADIX;
        position += 1;
        if position % 2 == 0 {
            collected = collected * DECIMAL_RADIX + digit;
        }
    }

    // At most half the digits of an i64 survive, so this always fits.
    reverse_digits(collected) as i64
}
