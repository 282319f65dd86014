//! Error types for the numeric utility operations
//!
//! This module defines the error taxonomy shared by all fallible
//! operations: null-argument (an expected reference is absent),
//! invalid-argument (a value outside its documented domain) and
//! invalid-state (a defensive no-element-found condition).

use thiserror::Error;

/// Coarse error category
///
/// For callers that dispatch on the taxonomy rather than on
/// individual variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// An expected reference argument was absent
    NullArgument,
    /// A value was outside its documented domain
    InvalidArgument,
    /// A defensive internal consistency check failed
    InvalidState,
}

/// Error type for the numeric utility operations
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NumericError {
    /// An expected reference argument was absent
    #[error("argument '{name}' must not be absent")]
    NullArgument { name: &'static str },

    /// Base outside the accepted [2, 16] range
    #[error("base must be between 2 and 16, got {base}")]
    BaseOutOfRange { base: u32 },

    /// Digit character whose value is not below the base
    #[error("digit '{digit}' is not valid in base {base}")]
    DigitOutOfRange { digit: char, base: u32 },

    /// Grid with zero cells where at least one cell is required
    #[error("grid must contain at least one cell")]
    EmptyGrid,

    /// Non-square grid passed to a square-only operation
    #[error("grid must be square, got {rows}x{cols}")]
    NonSquareGrid { rows: usize, cols: usize },

    /// Row length mismatch during grid construction
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Non-positive operand where strictly positive values are required
    #[error("operands must be strictly positive, got ({a}, {b})")]
    NonPositiveOperand { a: i64, b: i64 },

    /// No cell qualified for a scan that must inspect at least one
    #[error("no qualifying cell found on or above the secondary diagonal")]
    NoQualifyingCell,
}

impl NumericError {
    /// Coarse category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NullArgument { .. } => ErrorKind::NullArgument,
            Self::BaseOutOfRange { .. }
            | Self::DigitOutOfRange { .. }
            | Self::EmptyGrid
            | Self::NonSquareGrid { .. }
            | Self::RaggedRows { .. }
            | Self::NonPositiveOperand { .. } => ErrorKind::InvalidArgument,
            Self::NoQualifyingCell => ErrorKind::InvalidState,
        }
    }
}
