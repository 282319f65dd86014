//! Domain layer - Pure computational logic
//!
//! This module contains pure functions over sequences, grids and
//! scalars, without I/O dependencies.

pub mod grid;
pub mod radix;
pub mod scalar;
pub mod sequence;
