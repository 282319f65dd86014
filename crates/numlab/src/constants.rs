//! Numeric domain constants
//!
//! Note: these bound the documented input domains; each function
//! validates its own arguments against them at call time.

// =============================================================================
// Positional numeral systems
// =============================================================================

/// Smallest accepted base for fraction parsing (binary)
pub const MIN_BASE: u32 = 2;

/// Largest accepted base for fraction parsing (hexadecimal)
pub const MAX_BASE: u32 = 16;

// =============================================================================
// Digit extraction
// =============================================================================

/// Radix used for decimal digit extraction
pub const DECIMAL_RADIX: u64 = 10;
