//! Sub-diagonal elimination in the active column.
//!
//! ## Purpose
//!
//! This module zeroes out every entry below the pivot in the active
//! column by replacing each lower row with `row - factor * pivot_row`.
//! Adding a multiple of one row to another leaves the determinant
//! unchanged; that algebraic property is what makes triangularization a
//! valid way to compute it.
//!
//! ## Design notes
//!
//! * **Ascending order**: Rows are processed from `col + 1` upward, so
//!   the step sequence is deterministic.
//! * **Restricted update**: Only columns `[col, n)` are rewritten;
//!   entries to the left are already zero.
//! * **Optional recording**: Per-row before/after entries can be
//!   suppressed for compact traces. The arithmetic always runs.
//!
//! ## Invariants
//!
//! * Determinant and sign accumulator are untouched by this step.
//! * When recording, entries appear per row as: before-snapshot,
//!   operation (with after-snapshot).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::state::WorkingState;
use crate::trace::entry::{StepDetail, TraceEntry};
use crate::trace::recorder::TraceRecorder;

/// Eliminate every entry below the pivot in column `col`.
pub fn eliminate_below<T: Float>(
    state: &mut WorkingState<T>,
    col: usize,
    record_steps: bool,
    recorder: &mut TraceRecorder<T>,
) {
    let n = state.order();
    let pivot = state.matrix.get(col, col);

    for j in (col + 1)..n {
        let factor = state.matrix.get(j, col) / pivot;

        if record_steps {
            recorder.append(TraceEntry::snapshot(
                format!("Before step {}.{}: current state", col + 1, j + 1),
                state.matrix.clone(),
            ));
        }

        state.matrix.row_axpy(j, col, factor, col);

        if record_steps {
            recorder.append(TraceEntry::operation(
                format!(
                    "Step {}.{}: R{} <- R{} - {:.2} * R{}",
                    col + 1,
                    j + 1,
                    j + 1,
                    j + 1,
                    factor.to_f64().unwrap_or(f64::NAN),
                    col + 1
                ),
                StepDetail::RowCombine {
                    source: col,
                    target: j,
                    factor,
                },
                state.matrix.clone(),
            ));
        }
    }
}
