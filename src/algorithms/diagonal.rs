//! Diagonal accumulation of the running determinant.
//!
//! ## Purpose
//!
//! This module folds a confirmed non-zero pivot into the running
//! determinant product. The matrix itself is untouched by this step;
//! it is pure bookkeeping on the working state.
//!
//! ## Invariants
//!
//! * Called only after the zero-pivot guard has passed.
//! * The recorded entry carries the determinant before and after the
//!   fold together with a snapshot of the current matrix.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::state::WorkingState;
use crate::trace::entry::{StepDetail, TraceEntry};
use crate::trace::recorder::TraceRecorder;

/// Multiply the running determinant by the pivot `mat[col, col]`.
pub fn accumulate_diagonal<T: Float>(
    state: &mut WorkingState<T>,
    col: usize,
    recorder: &mut TraceRecorder<T>,
) {
    let pivot = state.matrix.get(col, col);
    let det_before = state.determinant();

    state.multiply_pivot(pivot);

    recorder.append(TraceEntry::operation(
        format!(
            "Step {}.2: Diagonal factor a[{},{}] = {:.2}",
            col + 1,
            col + 1,
            col + 1,
            pivot.to_f64().unwrap_or(f64::NAN)
        ),
        StepDetail::DiagonalMultiply {
            row: col,
            pivot,
            det_before,
            det_after: state.determinant(),
        },
        state.matrix.clone(),
    ));
}
