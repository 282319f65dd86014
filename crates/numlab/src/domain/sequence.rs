//! Sequence reductions and rotations
//!
//! This module provides the index-weighted product and the in-place
//! cyclic right shift over `f64` slices. Absent sequences are modelled
//! as `None` and have defined (non-error) behavior.

/// Multiply the elements at odd indices (1, 3, 5, ...) of a sequence
///
/// Returns 0.0 if the sequence is absent or shorter than 2 elements,
/// since there is no odd index to visit in that case.
pub fn multiply_odd_indexed(seq: Option<&[f64]>) -> f64 {
    let Some(seq) = seq else {
        return 0.0;
    };
    if seq.len() < 2 {
        return 0.0;
    }

    seq.iter().skip(1).step_by(2).product()
}

/// Rotate a sequence right by `shift` positions, in place
///
/// No-op if the sequence is absent or empty. The shift is normalized
/// modulo the sequence length; a normalized shift of 0 leaves the
/// slice untouched. Only the order of elements changes, never the
/// values themselves.
pub fn cyclic_shift_right(seq: Option<&mut [f64]>, shift: usize) {
    let Some(seq) = seq else {
        return;
    };
    if seq.is_empty() {
        return;
    }

    let shift = shift % seq.len();
    if shift == 0 {
        return;
    }

    seq.rotate_right(shift);
}
