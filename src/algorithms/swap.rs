//! Conditional row exchange with sign tracking.
//!
//! ## Purpose
//!
//! This module moves the selected pivot row onto the diagonal. A swap of
//! two distinct rows negates the determinant, so the working state's
//! sign accumulator is flipped alongside the exchange.
//!
//! ## Design notes
//!
//! * **Silent no-op**: When the pivot is already on the diagonal nothing
//!   happens and nothing is traced.
//! * **Before/after recording**: The pre-swap state is a standalone
//!   `Snapshot` entry; the post-swap state rides on the `Operation`
//!   entry together with the sign flip bookkeeping.
//!
//! ## Invariants
//!
//! * The sign accumulator is flipped exactly once per actual swap.
//! * Trace entries appear in the order: before-snapshot, operation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::state::WorkingState;
use crate::trace::entry::{StepDetail, TraceEntry};
use crate::trace::recorder::TraceRecorder;

/// Move `max_row` onto the diagonal at `col`, flipping the sign.
///
/// Returns `true` when rows were actually exchanged.
pub fn swap_into_place<T: Float>(
    state: &mut WorkingState<T>,
    col: usize,
    max_row: usize,
    recorder: &mut TraceRecorder<T>,
) -> bool {
    debug_assert!(max_row >= col);

    if max_row == col {
        return false;
    }

    recorder.append(TraceEntry::snapshot(
        format!("Before step {}.1: current state", col + 1),
        state.matrix.clone(),
    ));

    let sign_before = state.sign();
    let det_before = state.determinant();

    state.matrix.swap_rows(col, max_row);
    state.flip_sign();

    recorder.append(TraceEntry::operation(
        format!("Step {}.1: Swap R{} <-> R{}", col + 1, col + 1, max_row + 1),
        StepDetail::Swap {
            rows: (col, max_row),
            sign_before,
            sign_after: state.sign(),
            det_before,
            det_after: state.determinant(),
        },
        state.matrix.clone(),
    ));

    true
}
