//! numlab - Small numeric utilities for path/branch coverage exercises
//!
//! This crate provides functionality to:
//! - Reduce and rotate numeric sequences (index-weighted product, cyclic shift)
//! - Interpret digit strings as base-2..16 fractions
//! - Query rectangular grids (row-major maximum, diagonal scans)
//! - Order and decompose small integers (three-value sort, GCD, digit extraction)

pub mod constants;
pub mod domain;
pub mod error;

// Re-export commonly used types
pub use constants::*;
pub use domain::grid::{
    Grid, max_above_secondary_diagonal, max_in_grid, sum_odd_above_main_diagonal,
};
pub use domain::radix::fraction_from_digits;
pub use domain::scalar::{even_position_digits, gcd, min2, sort_descending};
pub use domain::sequence::{cyclic_shift_right, multiply_odd_indexed};
pub use error::{ErrorKind, NumericError};
