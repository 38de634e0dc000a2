//! Partial-pivot selection.
//!
//! ## Purpose
//!
//! This module finds the best pivot row for a given column: the row, at
//! or below the diagonal, whose entry in that column has the largest
//! absolute value.
//!
//! ## Design notes
//!
//! * **Pure query**: No side effects and no trace entries; the swapper
//!   decides whether anything actually moves.
//! * **Strict comparison**: A candidate replaces the current best only
//!   on strict inequality, so ties go to the lowest-index row. This
//!   keeps the step sequence deterministic.
//!
//! ## Invariants
//!
//! * The returned row index is always `>= col`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::state::WorkingState;

/// Find the row in `[col, n)` with the largest `|mat[row, col]|`.
pub fn select_pivot<T: Float>(state: &WorkingState<T>, col: usize) -> usize {
    let n = state.order();
    debug_assert!(col < n);

    let mut best = col;
    for k in (col + 1)..n {
        if state.matrix.get(k, col).abs() > state.matrix.get(best, col).abs() {
            best = k;
        }
    }
    best
}
